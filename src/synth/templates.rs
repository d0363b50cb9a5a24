// src/synth/templates.rs
use once_cell::sync::Lazy;

use crate::utils::text::{capitalize, title_case};

static MEDICAL_NEGLIGENCE: Lazy<Templates> = Lazy::new(|| Templates::for_category("medical negligence"));

/// Fixed phrasing and thresholds for the description synthesizer.
///
/// Built once per practice category and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates {
    /// Lower-case practice label, e.g. "medical negligence".
    pub category: String,
    /// Title-cased label used in headings, e.g. "Medical Negligence".
    pub category_title: String,

    pub highly_experienced_years: u32,
    pub experienced_years: u32,
    pub top_rated: f32,
    pub well_regarded: f32,
    pub max_adjectives: usize,
    pub default_adjective: &'static str,
    pub default_firm_name: &'static str,
    pub default_cta_firm_name: &'static str,

    pub founded_sentence_tail: &'static str,
    pub years_sentence_tail: String,
    pub specializations_fallback: String,
    pub specializations_follow_up: &'static str,
    pub experience_fallback: String,
    pub features_lead: String,
    pub features_follow_up: &'static str,
    pub features_fallback: String,
    pub cta_opening: String,
    pub cta_review: &'static str,
    pub default_feature_tag: &'static str,

    pub short_description_max: usize,
    pub meta_title_max: usize,
    pub meta_title_firm_max: usize,
    pub meta_description_max: usize,
    pub meta_description_closing: &'static str,
}

impl Templates {
    /// The process-wide medical negligence template set.
    pub fn global() -> &'static Templates {
        &MEDICAL_NEGLIGENCE
    }

    pub fn for_category(category: &str) -> Self {
        let category = category.trim().to_lowercase();
        Self {
            category_title: title_case(&category),

            highly_experienced_years: 20,
            experienced_years: 10,
            top_rated: 4.5,
            well_regarded: 4.0,
            max_adjectives: 2,
            default_adjective: "dedicated",
            default_firm_name: "This law firm",
            default_cta_firm_name: "our firm",

            founded_sentence_tail: "we have been dedicated to representing victims of medical malpractice.",
            years_sentence_tail: format!("we have successfully represented numerous {category} victims."),
            specializations_fallback: format!(
                "We handle all types of {category} and malpractice cases, providing expert legal \
                 representation for victims of medical errors."
            ),
            specializations_follow_up: "We understand the complex medical and legal issues involved in \
                these cases and work diligently to secure the compensation our clients deserve for \
                their injuries and suffering.",
            experience_fallback: format!(
                "Our experienced legal team is dedicated to providing exceptional representation for \
                 {category} victims. We stay current with the latest developments in medical \
                 malpractice law to best serve our clients."
            ),
            features_lead: format!(
                "We understand that pursuing a {category} claim can be daunting, which is why we offer"
            ),
            features_follow_up: "Our compassionate approach means we take the time to understand your \
                situation and guide you through every step of the legal process.",
            features_fallback: format!(
                "We are committed to providing accessible, compassionate legal services to {category} \
                 victims. Our client-focused approach ensures you receive the personal attention and \
                 expert representation your case deserves."
            ),
            cta_opening: format!(
                "If you or a loved one has been a victim of {category}, don't wait to seek legal advice."
            ),
            cta_review: "We'll review your situation, explain your legal options, and help you \
                understand your rights.",
            default_feature_tag: "Expert representation",

            short_description_max: 200,
            meta_title_max: 60,
            meta_title_firm_max: 30,
            meta_description_max: 160,
            meta_description_closing: "Call today.",

            category,
        }
    }

    /// "Medical negligence lawyers", used when a record has no firm name.
    pub fn generic_firm_label(&self) -> String {
        format!("{} lawyers", capitalize(&self.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_templates_are_built_once() {
        let a = Templates::global();
        let b = Templates::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.category, "medical negligence");
        assert_eq!(a.category_title, "Medical Negligence");
    }

    #[test]
    fn category_flows_into_phrasing() {
        let t = Templates::for_category("Dental Negligence");
        assert_eq!(t.category, "dental negligence");
        assert!(t.cta_opening.contains("victim of dental negligence"));
        assert_eq!(t.generic_firm_label(), "Dental negligence lawyers");
    }

    #[test]
    fn continuation_lines_keep_single_spaces() {
        let t = Templates::global();
        assert!(!t.specializations_follow_up.contains("  "));
        assert!(!t.specializations_fallback.contains("  "));
        assert!(!t.cta_review.contains("  "));
    }
}
