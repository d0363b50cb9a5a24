// src/synth/description.rs
//! The five-paragraph long description.

use super::templates::Templates;
use super::{non_blank, Synthesizer};
use crate::models::BusinessRecord;

/// Joins list items into prose with an Oxford comma, lower-casing each item.
///
/// `["a"]` → `"a"`, `["a", "b"]` → `"a and b"`, `["a", "b", "c"]` → `"a, b, and c"`.
pub fn oxford_join<S: AsRef<str>>(items: &[S]) -> String {
    let lowered: Vec<String> = items
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    match lowered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

impl Synthesizer<'_> {
    /// Introduction, specializations, credentials, features and call to
    /// action, separated by blank lines.
    pub fn description(&self, record: &BusinessRecord) -> String {
        [
            self.introduction(record),
            self.specializations_paragraph(record),
            self.experience_paragraph(record),
            self.features_paragraph(record),
            self.call_to_action(record),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    fn adjective(&self, record: &BusinessRecord) -> String {
        let t: &Templates = self.templates;
        let mut adjectives: Vec<&str> = Vec::new();

        match record.years_experience {
            Some(years) if years > t.highly_experienced_years => adjectives.push("highly experienced"),
            Some(years) if years > t.experienced_years => adjectives.push("experienced"),
            _ => {}
        }
        match record.rating {
            Some(rating) if rating >= t.top_rated => adjectives.push("top-rated"),
            Some(rating) if rating >= t.well_regarded => adjectives.push("well-regarded"),
            _ => {}
        }
        if !record.awards.is_empty() {
            adjectives.push("award-winning");
        }

        adjectives.truncate(t.max_adjectives);
        if adjectives.is_empty() {
            t.default_adjective.to_string()
        } else {
            adjectives.join(", ")
        }
    }

    pub(crate) fn introduction(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let firm = non_blank(&record.firm_name).unwrap_or(t.default_firm_name);

        let mut intro = format!("{firm} is a {} {} law firm", self.adjective(record), t.category);
        let city = record.city.as_deref().and_then(non_blank);
        let state = record.state.as_deref().and_then(non_blank);
        match (city, state) {
            (Some(city), Some(state)) => intro.push_str(&format!(" serving {city}, {state}")),
            (Some(city), None) => intro.push_str(&format!(" based in {city}")),
            (None, Some(state)) => intro.push_str(&format!(" serving {state}")),
            (None, None) => {}
        }
        intro.push('.');

        let years = record.years_experience.filter(|y| *y > 0);
        match (record.founded_year, years) {
            (Some(founded), _) => {
                intro.push_str(&format!(" Since {founded}, {}", t.founded_sentence_tail));
            }
            (None, Some(years)) => {
                intro.push_str(&format!(" With over {years} years of experience, {}", t.years_sentence_tail));
            }
            (None, None) => {}
        }

        if let Some(rate) = record.success_rate.filter(|r| *r > 0) {
            intro.push_str(&format!(" Our team maintains an impressive {rate}% success rate."));
        }

        intro
    }

    pub(crate) fn specializations_paragraph(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let joined = oxford_join(&record.specializations);
        if joined.is_empty() {
            return t.specializations_fallback.clone();
        }
        format!("Our practice areas include {joined}. {}", t.specializations_follow_up)
    }

    pub(crate) fn experience_paragraph(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let mut clauses: Vec<String> = Vec::new();

        if let Some(cases) = record.total_cases_handled.filter(|c| *c > 0) {
            clauses.push(format!(
                "Our experienced team has successfully handled over {cases} {} cases",
                t.category
            ));
        }

        match record.awards.as_slice() {
            [] => {}
            [award] => clauses.push(format!("We have received {}", award.trim().trim_end_matches('.'))),
            awards => clauses.push(format!(
                "We have received {} professional awards and recognitions",
                awards.len()
            )),
        }

        if !record.accreditations.is_empty() {
            clauses.push(format!(
                "Our lawyers hold specialist accreditations in personal injury and {} law",
                t.category
            ));
        }

        if record.team_members.len() > 1 {
            clauses.push(format!(
                "Our team of {} dedicated legal professionals brings diverse expertise to every case",
                record.team_members.len()
            ));
        }

        if clauses.is_empty() {
            return t.experience_fallback.clone();
        }
        format!("{}.", clauses.join(". "))
    }

    pub(crate) fn features_paragraph(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let flags = &record.features;
        let offered: Vec<&str> = [
            (flags.no_win_no_fee(), "no win, no fee arrangements"),
            (flags.free_consultation(), "free initial consultations"),
            (flags.home_visits(), "home and hospital visits"),
            (flags.telehealth(), "virtual consultations"),
        ]
        .into_iter()
        .filter_map(|(present, phrase)| present.then_some(phrase))
        .collect();

        if offered.is_empty() {
            return t.features_fallback.clone();
        }

        let mut para = format!("{} {}. {}", t.features_lead, oxford_join(&offered), t.features_follow_up);
        if let Some(response) = record.average_response_time.as_deref().and_then(non_blank) {
            para.push_str(&format!(
                " We pride ourselves on our responsiveness, typically responding to inquiries {}.",
                response.to_lowercase()
            ));
        }
        para
    }

    pub(crate) fn call_to_action(&self, record: &BusinessRecord) -> String {
        let t = self.templates;
        let firm = non_blank(&record.firm_name).unwrap_or(t.default_cta_firm_name);

        let contact = if record.features.free_consultation() {
            format!("Contact {firm} today for a free, confidential consultation.")
        } else {
            format!("Contact {firm} today to discuss your case.")
        };
        let closing = match record.city.as_deref().and_then(non_blank) {
            Some(city) => format!(
                "Let our experienced {city} {} lawyers fight for the justice and compensation you deserve.",
                t.category
            ),
            None => format!(
                "Let our experienced {} lawyers fight for the justice and compensation you deserve.",
                t.category
            ),
        };

        format!("{} {contact} {} {closing}", t.cta_opening, t.cta_review)
    }
}
