// src/extractors/people.rs
//! Card-style content: team members, case studies and testimonials.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{find_within, first_within, pattern, text_of, Document, SelectorSpec};
use crate::models::{CaseStudy, TeamMember, Testimonial};
use crate::utils::text::{char_len, truncate_chars};

const MAX_TEAM_MEMBERS: usize = 10;
const MAX_CASE_STUDIES: usize = 5;
const MAX_TESTIMONIALS: usize = 10;
const BIO_MAX_CHARS: usize = 500;
const SUMMARY_MAX_CHARS: usize = 500;
const TESTIMONIAL_MIN_CHARS: usize = 50;
const TESTIMONIAL_MAX_CHARS: usize = 500;
const MAX_STAR_RATING: usize = 5;

// --- Team ---
static TEAM_SECTIONS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "section"])
        .class(pattern(r"team|staff|lawyer|attorney|partner"))
        .limit(10)
});
static MEMBER_CARDS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "article"])
        .class(pattern(r"member|profile|bio"))
        .limit(10)
});
static NAME_HEADING: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["h2", "h3", "h4", "h5"]));
static ROLE: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::any().class(pattern(r"title|role|position")));
static PARAGRAPH: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["p"]));
static IMAGE: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["img"]));

// --- Case studies ---
static CASE_SECTIONS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "section", "article"])
        .class(pattern(r"case|result|success|outcome"))
        .limit(5)
});
static CASE_TITLE: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["h2", "h3", "h4"]));
static CASE_PARAGRAPHS: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["p"]).limit(3));
static CASE_YEAR_RE: Lazy<Regex> = Lazy::new(|| pattern(r"20[0-9]{2}"));

// --- Testimonials ---
static TESTIMONIAL_SECTIONS: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["div", "section", "blockquote"])
        .class(pattern(r"testimonial|review|feedback|client"))
        .limit(10)
});
static QUOTE: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["blockquote", "p", "div"]));
static AUTHOR: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::any().class(pattern(r"author|client|name")));
static STAR: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::any().class(pattern(r"star|rating")));

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

pub fn extract_team_members(doc: &Document) -> Vec<TeamMember> {
    let mut members = Vec::new();
    let mut seen_cards = HashSet::new();

    'sections: for section in doc.find_all(&TEAM_SECTIONS) {
        for card in find_within(section, &MEMBER_CARDS) {
            // Nested team containers reach the same card twice.
            if !seen_cards.insert(card.id()) {
                continue;
            }

            let Some(name) = first_within(card, &NAME_HEADING).map(text_of).and_then(non_empty) else {
                tracing::trace!("Skipping team card without a name heading");
                continue;
            };

            let photo_url = first_within(card, &IMAGE).and_then(|img| {
                let value = img.value();
                value
                    .attr("src")
                    .or_else(|| value.attr("data-src"))
                    .and_then(|src| doc.resolve(src))
            });

            members.push(TeamMember {
                name,
                role: first_within(card, &ROLE).map(text_of).and_then(non_empty),
                bio: first_within(card, &PARAGRAPH)
                    .map(|p| truncate_chars(&text_of(p), BIO_MAX_CHARS))
                    .and_then(non_empty),
                photo_url,
            });

            if members.len() == MAX_TEAM_MEMBERS {
                break 'sections;
            }
        }
    }

    tracing::debug!("Found {} team member(s)", members.len());
    members
}

pub fn extract_case_studies(doc: &Document) -> Vec<CaseStudy> {
    let mut cases = Vec::new();

    for section in doc.find_all(&CASE_SECTIONS) {
        let Some(title) = first_within(section, &CASE_TITLE).map(text_of).and_then(non_empty) else {
            continue;
        };

        let summary = find_within(section, &CASE_PARAGRAPHS)
            .into_iter()
            .map(text_of)
            .collect::<Vec<_>>()
            .join(" ");
        let Some(summary) = non_empty(truncate_chars(summary.trim(), SUMMARY_MAX_CHARS)) else {
            continue;
        };

        let year = CASE_YEAR_RE
            .find(&text_of(section))
            .and_then(|m| m.as_str().parse::<i32>().ok());

        cases.push(CaseStudy { title, summary, year });
    }

    cases.truncate(MAX_CASE_STUDIES);
    cases
}

pub fn extract_testimonials(doc: &Document) -> Vec<Testimonial> {
    let mut testimonials: Vec<Testimonial> = Vec::new();

    for section in doc.find_all(&TESTIMONIAL_SECTIONS) {
        let quote = find_within(section, &QUOTE)
            .into_iter()
            .map(text_of)
            .find(|text| char_len(text) > TESTIMONIAL_MIN_CHARS);
        let Some(quote) = quote else {
            continue;
        };
        let text = truncate_chars(&quote, TESTIMONIAL_MAX_CHARS);
        if testimonials.iter().any(|t| t.text == text) {
            continue;
        }

        let stars = find_within(section, &STAR).len();
        testimonials.push(Testimonial {
            text,
            client_name: first_within(section, &AUTHOR).map(text_of).and_then(non_empty),
            rating: (stars > 0).then(|| stars.min(MAX_STAR_RATING) as u8),
        });
    }

    testimonials.truncate(MAX_TESTIMONIALS);
    testimonials
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://firm.com.au/team/";

    #[test]
    fn team_cards_extract_all_fields() {
        let html = r#"
            <section class="our-team">
                <div class="team-member">
                    <img src="/img/jane.jpg">
                    <h3>Jane Citizen</h3>
                    <span class="job-title">Principal Lawyer</span>
                    <p>Jane has run medical negligence claims for 20 years.</p>
                </div>
                <div class="member-card"><p>No heading here</p></div>
                <article class="profile"><h4>Sam Lee</h4></article>
            </section>
        "#;
        let doc = Document::parse(html, Some(BASE));
        let team = extract_team_members(&doc);
        assert_eq!(team.len(), 2);
        assert_eq!(team[0].name, "Jane Citizen");
        assert_eq!(team[0].role.as_deref(), Some("Principal Lawyer"));
        assert_eq!(
            team[0].bio.as_deref(),
            Some("Jane has run medical negligence claims for 20 years.")
        );
        assert_eq!(team[0].photo_url.as_deref(), Some("https://firm.com.au/img/jane.jpg"));
        assert_eq!(team[1].name, "Sam Lee");
        assert_eq!(team[1].role, None);
        assert_eq!(team[1].photo_url, None);
    }

    #[test]
    fn nested_team_containers_do_not_duplicate_cards() {
        let html = r#"
            <div class="team"><div class="staff-grid">
                <div class="bio"><h3>A. Person</h3></div>
                <div class="bio"><h3>B. Person</h3></div>
            </div></div>
        "#;
        let doc = Document::parse(html, Some(BASE));
        let names: Vec<_> = extract_team_members(&doc).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["A. Person", "B. Person"]);
    }

    #[test]
    fn team_capped_at_ten() {
        let cards: String = (0..14)
            .map(|i| format!(r#"<div class="member"><h3>Lawyer {i}</h3></div>"#))
            .collect();
        let html = format!(r#"<section class="team">{cards}</section>"#);
        let doc = Document::parse(&html, Some(BASE));
        let team = extract_team_members(&doc);
        assert_eq!(team.len(), 10);
        assert_eq!(team[9].name, "Lawyer 9");
    }

    #[test]
    fn team_cap_applies_across_sections() {
        let section = |start: usize| -> String {
            let cards: String = (start..start + 6)
                .map(|i| format!(r#"<div class="profile"><h4>Partner {i}</h4></div>"#))
                .collect();
            format!(r#"<div class="partners">{cards}</div>"#)
        };
        let html = format!("{}{}", section(0), section(6));
        let doc = Document::parse(&html, Some(BASE));
        let team = extract_team_members(&doc);
        assert_eq!(team.len(), 10);
        assert_eq!(team.last().map(|m| m.name.as_str()), Some("Partner 9"));
    }

    #[test]
    fn case_studies_need_title_and_summary() {
        let html = r#"
            <div class="case-result">
                <h3>$2.1M birth injury settlement</h3>
                <p>Settled in 2021 after mediation.</p>
                <p>Client received lifetime care funding.</p>
            </div>
            <div class="case-result"><h3>Title only</h3></div>
        "#;
        let doc = Document::parse(html, None);
        let cases = extract_case_studies(&doc);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].title, "$2.1M birth injury settlement");
        assert_eq!(
            cases[0].summary,
            "Settled in 2021 after mediation. Client received lifetime care funding."
        );
        assert_eq!(cases[0].year, Some(2021));
    }

    #[test]
    fn testimonials_with_author_and_stars() {
        let html = r#"
            <div class="testimonial">
                <p>The team explained every step and we finally got answers about what happened.</p>
                <span class="author">- Maria K.</span>
                <i class="star"></i><i class="star"></i><i class="star"></i>
            </div>
            <div class="review"><p>Great!</p></div>
        "#;
        let doc = Document::parse(html, None);
        let testimonials = extract_testimonials(&doc);
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].client_name.as_deref(), Some("- Maria K."));
        assert_eq!(testimonials[0].rating, Some(3));
        assert!(testimonials[0].text.starts_with("The team explained"));
    }
}
