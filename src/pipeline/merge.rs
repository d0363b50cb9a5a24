// src/pipeline/merge.rs
//! Folds an [`ExtractionResult`] into a [`BusinessRecord`].
//!
//! Merging is monotone: a populated field never becomes empty, a `true`
//! feature flag never becomes false or unknown, and an existing description
//! is never replaced by a shorter one.

use crate::extractors::signals::is_placeholder_email;
use crate::models::{normalize_specializations, BusinessRecord, ExtractionResult};
use crate::utils::text::char_len;

/// New descriptions shorter than this are not worth replacing anything with.
const MIN_REPLACEMENT_DESCRIPTION_CHARS: usize = 200;

pub fn merge(mut record: BusinessRecord, result: &ExtractionResult) -> BusinessRecord {
    if !result.is_success() {
        tracing::debug!("Extraction for {} failed, record left untouched", record.firm_name);
        return record;
    }
    let found = &result.profile;

    let new_len = char_len(found.description.trim());
    let existing_len = record.description.as_deref().map_or(0, |d| char_len(d.trim()));
    if new_len > MIN_REPLACEMENT_DESCRIPTION_CHARS && new_len >= existing_len {
        record.description = Some(found.description.trim().to_string());
    }

    if !found.short_description.trim().is_empty() {
        record.short_description = Some(found.short_description.trim().to_string());
    }

    let existing = std::mem::take(&mut record.specializations);
    record.specializations =
        normalize_specializations(existing.into_iter().chain(found.specializations.iter().cloned()));

    if !found.team_members.is_empty() {
        record.team_members = found.team_members.clone();
    }

    fill(&mut record.years_experience, found.years_experience);
    fill(&mut record.founded_year, found.founded_year);
    fill_list(&mut record.awards, &found.awards);
    fill_list(&mut record.accreditations, &found.accreditations);
    fill_list(&mut record.case_studies, &found.case_studies);
    fill_list(&mut record.testimonials, &found.testimonials);
    fill_text(&mut record.meta_title, &found.meta_title);
    fill_text(&mut record.meta_description, &found.meta_description);

    let flags = &mut record.features;
    raise(&mut flags.no_win_no_fee, found.features.no_win_no_fee);
    raise(&mut flags.free_consultation, found.features.free_consultation);
    raise(&mut flags.home_visits_available, found.features.home_visits_available);
    raise(&mut flags.telehealth_available, found.features.telehealth_available);
    raise(&mut flags.available_24_7, found.features.available_24_7);

    if let Some(email) = found.email.as_deref().filter(|e| !is_placeholder_email(e)) {
        fill_text(&mut record.email, email);
    }

    let social = &mut record.social;
    fill_text_opt(&mut social.facebook, found.social.facebook.as_deref());
    fill_text_opt(&mut social.linkedin, found.social.linkedin.as_deref());
    fill_text_opt(&mut social.twitter, found.social.twitter.as_deref());
    fill_text_opt(&mut social.instagram, found.social.instagram.as_deref());

    record
}

fn fill<T>(target: &mut Option<T>, value: Option<T>) {
    if target.is_none() {
        *target = value;
    }
}

fn fill_list<T: Clone>(target: &mut Vec<T>, value: &[T]) {
    if target.is_empty() && !value.is_empty() {
        *target = value.to_vec();
    }
}

fn is_blank(target: &Option<String>) -> bool {
    target.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn fill_text(target: &mut Option<String>, value: &str) {
    let value = value.trim();
    if is_blank(target) && !value.is_empty() {
        *target = Some(value.to_string());
    }
}

fn fill_text_opt(target: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value {
        fill_text(target, value);
    }
}

/// Only ever moves a flag towards `true`.
fn raise(target: &mut Option<bool>, value: Option<bool>) {
    if value == Some(true) {
        *target = Some(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedProfile, FeatureFlags, TeamMember};

    fn member(name: &str) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            role: None,
            bio: None,
            photo_url: None,
        }
    }

    fn success(profile: ExtractedProfile) -> ExtractionResult {
        ExtractionResult::success("https://firm.com.au", profile)
    }

    #[test]
    fn failed_result_is_a_no_op() {
        let mut record = BusinessRecord::new("Smith & Co");
        record.features.free_consultation = Some(true);
        let result = ExtractionResult::failed("https://firm.com.au", "HTTP error: 500");
        assert_eq!(merge(record.clone(), &result), record);
    }

    #[test]
    fn description_needs_length_and_never_shrinks() {
        let mut record = BusinessRecord::new("A");
        record.description = Some("Short upstream blurb.".into());

        let short = success(ExtractedProfile { description: "x".repeat(150), ..Default::default() });
        let record = merge(record, &short);
        assert_eq!(record.description.as_deref(), Some("Short upstream blurb."));

        let long = success(ExtractedProfile { description: "y".repeat(600), ..Default::default() });
        let record = merge(record, &long);
        assert_eq!(record.description.as_deref().map(char_len), Some(600));

        let shorter = success(ExtractedProfile { description: "z".repeat(300), ..Default::default() });
        let record = merge(record, &shorter);
        assert!(record.description.as_deref().unwrap().starts_with('y'));
    }

    #[test]
    fn specializations_union_dedup_sorted() {
        let mut record = BusinessRecord::new("A");
        record.specializations = vec!["surgical error".into(), "Misdiagnosis".into()];
        let result = success(ExtractedProfile {
            specializations: vec!["Birth Injury".into(), "Surgical Error".into()],
            ..Default::default()
        });
        let merged = merge(record, &result);
        assert_eq!(merged.specializations, vec!["Birth Injury", "Misdiagnosis", "surgical error"]);
    }

    #[test]
    fn team_replaced_only_by_non_empty_list() {
        let mut record = BusinessRecord::new("A");
        record.team_members = vec![member("Old Partner")];

        let merged = merge(record, &success(ExtractedProfile::default()));
        assert_eq!(merged.team_members, vec![member("Old Partner")]);

        let result = success(ExtractedProfile {
            team_members: vec![member("New One"), member("New Two")],
            ..Default::default()
        });
        let merged = merge(merged, &result);
        assert_eq!(merged.team_members.len(), 2);
        assert_eq!(merged.team_members[0].name, "New One");
    }

    #[test]
    fn fill_only_fields_keep_existing_values() {
        let mut record = BusinessRecord::new("A");
        record.years_experience = Some(30);
        record.awards = vec!["Existing Award".into()];
        record.meta_title = Some("Upstream title".into());

        let result = success(ExtractedProfile {
            years_experience: Some(12),
            founded_year: Some(2001),
            awards: vec!["Scraped Award 2023".into()],
            accreditations: vec!["Admitted in NSW.".into()],
            meta_title: "Scraped title".into(),
            meta_description: "Scraped description".into(),
            ..Default::default()
        });
        let merged = merge(record, &result);
        assert_eq!(merged.years_experience, Some(30));
        assert_eq!(merged.founded_year, Some(2001));
        assert_eq!(merged.awards, vec!["Existing Award"]);
        assert_eq!(merged.accreditations, vec!["Admitted in NSW."]);
        assert_eq!(merged.meta_title.as_deref(), Some("Upstream title"));
        assert_eq!(merged.meta_description.as_deref(), Some("Scraped description"));
    }

    #[test]
    fn feature_flags_only_move_towards_true() {
        let mut record = BusinessRecord::new("A");
        record.features.no_win_no_fee = Some(true);
        record.features.home_visits_available = Some(false);

        let result = success(ExtractedProfile {
            features: FeatureFlags {
                free_consultation: Some(true),
                home_visits_available: Some(true),
                no_win_no_fee: None,
                ..Default::default()
            },
            ..Default::default()
        });
        let merged = merge(record, &result);
        assert_eq!(merged.features.no_win_no_fee, Some(true));
        assert_eq!(merged.features.free_consultation, Some(true));
        assert_eq!(merged.features.home_visits_available, Some(true));
        assert_eq!(merged.features.telehealth_available, None);
    }

    #[test]
    fn email_filled_once_and_never_with_placeholder() {
        let placeholder = success(ExtractedProfile {
            email: Some("noreply@firm.com.au".into()),
            ..Default::default()
        });
        let merged = merge(BusinessRecord::new("A"), &placeholder);
        assert_eq!(merged.email, None);

        let real = success(ExtractedProfile {
            email: Some("intake@firm.com.au".into()),
            ..Default::default()
        });
        let merged = merge(merged, &real);
        assert_eq!(merged.email.as_deref(), Some("intake@firm.com.au"));

        let other = success(ExtractedProfile {
            email: Some("partners@firm.com.au".into()),
            ..Default::default()
        });
        assert_eq!(merge(merged, &other).email.as_deref(), Some("intake@firm.com.au"));
    }

    #[test]
    fn merge_is_monotone_over_empty_results() {
        let mut record = BusinessRecord::new("Full Firm");
        record.description = Some("d".repeat(400));
        record.short_description = Some("Short".into());
        record.specializations = vec!["Birth Injury".into()];
        record.team_members = vec![member("P")];
        record.years_experience = Some(10);
        record.founded_year = Some(2014);
        record.awards = vec!["Award".into()];
        record.email = Some("a@firm.com".into());
        record.social.facebook = Some("https://facebook.com/firm".into());
        record.features = FeatureFlags {
            no_win_no_fee: Some(true),
            free_consultation: Some(true),
            home_visits_available: Some(true),
            telehealth_available: Some(true),
            available_24_7: Some(true),
        };

        let merged = merge(record.clone(), &success(ExtractedProfile::default()));
        assert_eq!(merged, record);
    }
}
