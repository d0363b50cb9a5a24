// src/extractors/profile.rs
//! Practice-level facts: specializations, years in operation, awards and
//! accreditations.

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{find_within, pattern, text_of, Document, SelectorSpec};
use crate::models::normalize_specializations;
use crate::utils::text::{capitalize, char_len, title_case};

/// Practice-area phrases recognised anywhere on a firm's site.
pub const SPECIALIZATION_VOCABULARY: &[&str] = &[
    "medical negligence",
    "medical malpractice",
    "clinical negligence",
    "surgical error",
    "misdiagnosis",
    "birth injury",
    "medication error",
    "hospital negligence",
    "anesthesia error",
    "emergency room error",
    "nursing home abuse",
    "dental negligence",
    "obstetric negligence",
];

const ACCREDITATION_KEYWORDS: &[&str] = &[
    "accredited specialist",
    "law society",
    "lawyers alliance",
    "plaintiff lawyers",
    "admitted",
    "qualified",
    "certified",
];

const MAX_YEARS_EXPERIENCE: u32 = 150;
const EARLIEST_FOUNDING_YEAR: i32 = 1950;
const MAX_AWARDS: usize = 10;
const MAX_ACCREDITATIONS: usize = 5;
const SENTENCES_PER_KEYWORD: usize = 3;

static PRACTICE_SECTIONS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "section", "ul"])
        .class(pattern(r"practice|specialization|area|service"))
        .limit(5)
});

static AWARD_SECTIONS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "section", "ul"])
        .class(pattern(r"award|recognition|achievement"))
        .limit(3)
});
static AWARD_ITEMS: Lazy<SelectorSpec> =
    Lazy::new(|| SelectorSpec::tags(&["li", "p", "h3", "h4"]).limit(10));

static YEARS_EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(\d+)\+?\s*years\s*(?:of\s*)?experience"));
static FOUNDING_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?:since|established|founded)\s*(\d{4})"));

// One sentence-grabbing pattern per accreditation keyword.
static ACCREDITATION_SENTENCE_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    ACCREDITATION_KEYWORDS
        .iter()
        .map(|kw| (*kw, pattern(&format!(r"[^.]*{}[^.]*\.", regex::escape(kw)))))
        .collect()
});

pub fn extract_specializations(doc: &Document) -> Vec<String> {
    let mut hits: Vec<String> = Vec::new();

    let mut scan = |text: &str| {
        let lowered = text.to_lowercase();
        for keyword in SPECIALIZATION_VOCABULARY {
            if lowered.contains(keyword) {
                hits.push(title_case(keyword));
            }
        }
    };

    for section in doc.find_all(&PRACTICE_SECTIONS) {
        scan(&text_of(section));
    }
    scan(doc.page_text());

    let specializations = normalize_specializations(hits);
    tracing::debug!("Found {} specialization(s)", specializations.len());
    specializations
}

pub fn extract_years_experience(doc: &Document, current_year: i32) -> Option<u32> {
    years_experience_from_text(doc.page_text(), current_year)
}

/// "N years experience" wins outright; otherwise a founding year converts to
/// years of operation.
pub fn years_experience_from_text(text: &str, current_year: i32) -> Option<u32> {
    if let Some(caps) = YEARS_EXPERIENCE_RE.captures(text) {
        return caps[1]
            .parse::<u32>()
            .ok()
            .filter(|years| *years <= MAX_YEARS_EXPERIENCE);
    }

    founded_year_from_text(text, current_year).map(|year| (current_year - year) as u32)
}

pub fn extract_founded_year(doc: &Document, current_year: i32) -> Option<i32> {
    founded_year_from_text(doc.page_text(), current_year)
}

/// First "since/established/founded YYYY" mention, if the year is plausible.
pub fn founded_year_from_text(text: &str, current_year: i32) -> Option<i32> {
    let caps = FOUNDING_RE.captures(text)?;
    caps[1]
        .parse::<i32>()
        .ok()
        .filter(|year| (EARLIEST_FOUNDING_YEAR..=current_year).contains(year))
}

pub fn extract_awards(doc: &Document) -> Vec<String> {
    let mut awards: Vec<String> = Vec::new();

    for section in doc.find_all(&AWARD_SECTIONS) {
        for item in find_within(section, &AWARD_ITEMS) {
            let text = text_of(item);
            let len = char_len(&text);
            if len > 10 && len < 200 && !awards.contains(&text) {
                awards.push(text);
            }
        }
    }

    awards.truncate(MAX_AWARDS);
    awards
}

pub fn extract_accreditations(doc: &Document) -> Vec<String> {
    let text = doc.page_text().to_lowercase();
    let mut accreditations: Vec<String> = Vec::new();

    for (keyword, sentence_re) in ACCREDITATION_SENTENCE_RES.iter() {
        if !text.contains(keyword) {
            continue;
        }
        for sentence in sentence_re.find_iter(&text).take(SENTENCES_PER_KEYWORD) {
            let trimmed = sentence.as_str().trim();
            let len = char_len(trimmed);
            if len > 20 && len < 200 {
                let accreditation = capitalize(trimmed);
                if !accreditations.contains(&accreditation) {
                    accreditations.push(accreditation);
                }
            }
        }
    }

    accreditations.truncate(MAX_ACCREDITATIONS);
    accreditations
}
