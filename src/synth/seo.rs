// src/synth/seo.rs
//! Listing blurb and SEO tags. Each output has a hard character budget.

use super::{non_blank, Synthesizer};
use crate::models::BusinessRecord;
use crate::utils::text::{char_len, title_case, truncate_with_ellipsis};

impl Synthesizer<'_> {
    /// `"{firm} - 15+ years experience | birth injury | in Sydney | Free Consultation."`
    ///
    /// Falls back to a fixed short form when the composed text runs over budget.
    pub fn short_description(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let firm = non_blank(&record.firm_name).unwrap_or(t.default_firm_name);
        let specialization = record
            .specializations
            .first()
            .and_then(|s| non_blank(s))
            .unwrap_or(&t.category);
        let location = record.location_label();

        let mut tags: Vec<&str> = Vec::new();
        if record.features.no_win_no_fee() {
            tags.push("No Win No Fee");
        }
        if record.features.free_consultation() {
            tags.push("Free Consultation");
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(years) = record.years_experience.filter(|y| *y > 0) {
            parts.push(format!("{years}+ years experience"));
        }
        parts.push(specialization.to_lowercase());
        if let Some(location) = location {
            parts.push(format!("in {location}"));
        }
        if !tags.is_empty() {
            parts.push(tags.join(" | "));
        }

        let composed = format!("{firm} - {}.", parts.join(" | "));
        if char_len(&composed) <= t.short_description_max {
            return composed;
        }

        let lead = tags.first().copied().unwrap_or(t.default_feature_tag);
        let fallback = match location {
            Some(location) => format!("{firm} - {} lawyers in {location}. {lead}.", title_case(specialization)),
            None => format!("{firm} - {} lawyers. {lead}.", title_case(specialization)),
        };
        truncate_with_ellipsis(&fallback, t.short_description_max)
    }

    /// `"{firm} - {city} {state_code}"`, or a generic category title when the
    /// firm name is too long to leave room for the location.
    pub fn meta_title(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let city = record.city.as_deref().and_then(non_blank);
        let state_code = record
            .state_code
            .as_deref()
            .and_then(non_blank)
            .or_else(|| record.state.as_deref().and_then(non_blank));

        let title = match non_blank(&record.firm_name) {
            Some(firm) if char_len(firm) <= t.meta_title_firm_max => {
                let location: Vec<&str> = [city, state_code].into_iter().flatten().collect();
                if location.is_empty() {
                    firm.to_string()
                } else {
                    format!("{firm} - {}", location.join(" "))
                }
            }
            _ => match city {
                Some(city) => format!("{} Lawyers {city}", t.category_title),
                None => format!("{} Lawyers", t.category_title),
            },
        };

        truncate_with_ellipsis(&title, t.meta_title_max)
    }

    pub fn meta_description(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let mut parts: Vec<String> = vec![non_blank(&record.firm_name)
            .map(str::to_string)
            .unwrap_or_else(|| t.generic_firm_label())];

        if let Some(city) = record.city.as_deref().and_then(non_blank) {
            parts.push(format!("in {city}"));
        }
        if let Some(years) = record.years_experience.filter(|y| *y > 0) {
            parts.push(format!("{years}+ yrs exp"));
        }
        if let Some(rate) = record.success_rate.filter(|r| *r > 0) {
            parts.push(format!("{rate}% success rate"));
        }

        let mut meta = parts.join(" | ");

        let mut features: Vec<&str> = Vec::new();
        if record.features.no_win_no_fee() {
            features.push("No win no fee");
        }
        if record.features.free_consultation() {
            features.push("Free consultation");
        }
        if !features.is_empty() {
            meta.push_str(". ");
            meta.push_str(&features.join(", "));
        }

        meta.push_str(". ");
        meta.push_str(t.meta_description_closing);

        truncate_with_ellipsis(&meta, t.meta_description_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sydney_firm(name: &str) -> BusinessRecord {
        let mut record = BusinessRecord::new(name);
        record.city = Some("Sydney".into());
        record.state = Some("New South Wales".into());
        record.state_code = Some("NSW".into());
        record
    }

    #[test]
    fn short_description_composes_parts() {
        let synth = Synthesizer::default();
        let mut record = sydney_firm("Smith & Co");
        record.years_experience = Some(15);
        record.specializations = vec!["Birth Injury".into()];
        record.features.no_win_no_fee = Some(true);
        record.features.free_consultation = Some(true);

        assert_eq!(
            synth.short_description(&record),
            "Smith & Co - 15+ years experience | birth injury | in Sydney | No Win No Fee | Free Consultation."
        );
    }

    #[test]
    fn short_description_defaults() {
        let synth = Synthesizer::default();
        assert_eq!(
            synth.short_description(&BusinessRecord::default()),
            "This law firm - medical negligence."
        );

        let mut record = BusinessRecord::new("Firm");
        record.state_code = Some("VIC".into());
        assert_eq!(synth.short_description(&record), "Firm - medical negligence | in VIC.");
    }

    #[test]
    fn short_description_over_budget_uses_fallback() {
        let synth = Synthesizer::default();
        let mut record = sydney_firm(&"Very Long Firm Name ".repeat(9));
        record.specializations = vec!["surgical error".into()];
        record.features.free_consultation = Some(true);

        let short = synth.short_description(&record);
        assert!(char_len(&short) <= 200);
        assert!(short.starts_with("Very Long Firm Name"));

        let mut record = sydney_firm("Firm");
        record.specializations = vec![format!("surgical error {}", "x".repeat(190))];
        let short = synth.short_description(&record);
        assert!(short.starts_with("Firm - Surgical Error Xxx"));
        assert!(short.ends_with("..."));
        assert_eq!(char_len(&short), 200);
    }

    #[test]
    fn meta_title_uses_city_and_state_code() {
        let synth = Synthesizer::default();
        assert_eq!(synth.meta_title(&sydney_firm("Smith & Co")), "Smith & Co - Sydney NSW");

        let mut record = BusinessRecord::new("Smith & Co");
        record.state = Some("Queensland".into());
        assert_eq!(synth.meta_title(&record), "Smith & Co - Queensland");
        assert_eq!(synth.meta_title(&BusinessRecord::new("Smith & Co")), "Smith & Co");
    }

    #[test]
    fn long_firm_name_forces_generic_meta_title() {
        let synth = Synthesizer::default();
        let name = "Abernethy Blackwood Carrington Laws";
        assert_eq!(name.len(), 35);
        assert_eq!(
            synth.meta_title(&sydney_firm(name)),
            "Medical Negligence Lawyers Sydney"
        );
        assert_eq!(synth.meta_title(&BusinessRecord::default()), "Medical Negligence Lawyers");
    }

    #[test]
    fn meta_title_is_capped() {
        let synth = Synthesizer::default();
        let mut record = BusinessRecord::new(&"A".repeat(40));
        record.city = Some("C".repeat(50));
        let title = synth.meta_title(&record);
        assert_eq!(char_len(&title), 60);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn meta_description_facts_and_closing() {
        let synth = Synthesizer::default();
        let mut record = sydney_firm("Smith & Co");
        record.years_experience = Some(15);
        record.success_rate = Some(95);
        record.features.no_win_no_fee = Some(true);
        record.features.free_consultation = Some(true);
        assert_eq!(
            synth.meta_description(&record),
            "Smith & Co | in Sydney | 15+ yrs exp | 95% success rate. No win no fee, Free consultation. Call today."
        );

        assert_eq!(
            synth.meta_description(&BusinessRecord::default()),
            "Medical negligence lawyers. Call today."
        );
    }

    #[test]
    fn meta_description_is_capped() {
        let synth = Synthesizer::default();
        let mut record = sydney_firm(&"Firm ".repeat(40));
        record.features.free_consultation = Some(true);
        let meta = synth.meta_description(&record);
        assert_eq!(char_len(&meta), 160);
        assert!(meta.ends_with("..."));
    }
}
