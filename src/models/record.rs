// src/models/record.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One firm as it moves through the enrichment pipeline.
///
/// Identity fields come from the upstream directory search; everything else
/// is optional and may be filled in by website extraction or left for the
/// synthesizer to work around.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRecord {
    pub firm_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub specializations: Vec<String>,
    pub team_members: Vec<TeamMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    pub awards: Vec<String>,
    pub accreditations: Vec<String>,
    pub case_studies: Vec<CaseStudy>,
    pub testimonials: Vec<Testimonial>,
    #[serde(flatten)]
    pub features: FeatureFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "social_media", skip_serializing_if = "SocialLinks::is_empty")]
    pub social: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    // Upstream-only signals the synthesizer reads but extraction never writes.
    #[serde(rename = "google_rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cases_handled: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_response_time: Option<String>,
}

impl BusinessRecord {
    pub fn new(firm_name: impl Into<String>) -> Self {
        Self {
            firm_name: firm_name.into(),
            ..Self::default()
        }
    }

    /// Best short location label: city, then state code, then state.
    pub fn location_label(&self) -> Option<&str> {
        [&self.city, &self.state_code, &self.state]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

/// Sorts specializations case-insensitively and drops case-insensitive
/// duplicates. The first spelling seen for a name is kept.
pub fn normalize_specializations<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut by_key: BTreeMap<String, String> = BTreeMap::new();
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        by_key
            .entry(trimmed.to_lowercase())
            .or_insert_with(|| trimmed.to_string());
    }
    by_key.into_values().collect()
}

/// Client-service offerings. `None` means unknown; extraction only ever
/// asserts `Some(true)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_win_no_fee: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_consultation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_visits_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telehealth_available: Option<bool>,
    #[serde(rename = "24_7_available", skip_serializing_if = "Option::is_none")]
    pub available_24_7: Option<bool>,
}

impl FeatureFlags {
    pub fn no_win_no_fee(&self) -> bool {
        self.no_win_no_fee == Some(true)
    }

    pub fn free_consultation(&self) -> bool {
        self.free_consultation == Some(true)
    }

    pub fn home_visits(&self) -> bool {
        self.home_visits_available == Some(true)
    }

    pub fn telehealth(&self) -> bool {
        self.telehealth_available == Some(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "full_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
