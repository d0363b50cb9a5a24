// src/extractors/mod.rs
//! Independent heuristic field extractors over a parsed [`Document`].
//!
//! Every extractor is total: a missing signal produces an empty or unknown
//! value, never an error. None of them depends on another's output, so the
//! order in [`extract_profile`] is irrelevant.

pub mod description;
pub mod document;
pub mod people;
pub mod profile;
pub mod signals;

pub use document::{Document, SelectorSpec};

use crate::models::ExtractedProfile;

/// Runs every field extractor against one already-parsed page.
///
/// `about_text` is the cleaned main text of the firm's about page when one
/// was fetched; `current_year` anchors "established YYYY" conversions.
pub fn extract_profile(doc: &Document, about_text: Option<&str>, current_year: i32) -> ExtractedProfile {
    let profile = ExtractedProfile {
        description: description::extract_description(doc, about_text),
        short_description: description::extract_short_description(doc),
        specializations: profile::extract_specializations(doc),
        team_members: people::extract_team_members(doc),
        years_experience: profile::extract_years_experience(doc, current_year),
        founded_year: profile::extract_founded_year(doc, current_year),
        awards: profile::extract_awards(doc),
        accreditations: profile::extract_accreditations(doc),
        case_studies: people::extract_case_studies(doc),
        testimonials: people::extract_testimonials(doc),
        features: signals::extract_features(doc),
        email: signals::extract_email(doc),
        social: signals::extract_social_links(doc),
        meta_title: signals::extract_meta_title(doc),
        meta_description: signals::extract_meta_description(doc),
    };

    tracing::debug!(
        "Extracted: {} specializations, {} team, {} awards, {} accreditations, {} cases, {} testimonials",
        profile.specializations.len(),
        profile.team_members.len(),
        profile.awards.len(),
        profile.accreditations.len(),
        profile.case_studies.len(),
        profile.testimonials.len(),
    );
    profile
}
