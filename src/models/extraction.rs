// src/models/extraction.rs
use super::record::{CaseStudy, FeatureFlags, SocialLinks, TeamMember, Testimonial};

/// Everything the field extractors found on one site.
///
/// Same shape as the enrichable part of [`super::BusinessRecord`]; empty
/// strings and collections mean "not found".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedProfile {
    pub description: String,
    pub short_description: String,
    pub specializations: Vec<String>,
    pub team_members: Vec<TeamMember>,
    pub years_experience: Option<u32>,
    pub founded_year: Option<i32>,
    pub awards: Vec<String>,
    pub accreditations: Vec<String>,
    pub case_studies: Vec<CaseStudy>,
    pub testimonials: Vec<Testimonial>,
    pub features: FeatureFlags,
    pub email: Option<String>,
    pub social: SocialLinks,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStatus {
    Success,
    Failed { cause: String },
}

/// Outcome of one fetch-and-extract pass. Consumed by the merge step, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub website: String,
    pub status: ExtractionStatus,
    pub profile: ExtractedProfile,
}

impl ExtractionResult {
    pub fn success(website: impl Into<String>, profile: ExtractedProfile) -> Self {
        Self {
            website: website.into(),
            status: ExtractionStatus::Success,
            profile,
        }
    }

    pub fn failed(website: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            website: website.into(),
            status: ExtractionStatus::Failed { cause: cause.to_string() },
            profile: ExtractedProfile::default(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExtractionStatus::Success
    }

    pub fn failure_cause(&self) -> Option<&str> {
        match &self.status {
            ExtractionStatus::Success => None,
            ExtractionStatus::Failed { cause } => Some(cause),
        }
    }
}
