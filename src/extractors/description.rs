// src/extractors/description.rs
//! Long and short description extraction, plus the "about" page helpers the
//! orchestrator uses to add a secondary fragment.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::document::{pattern, text_of, AttrRule, Document, SelectorSpec};
use super::signals::meta_content;
use crate::utils::text::{char_len, clean_text, truncate_at_word, truncate_chars};

const DESCRIPTION_MAX_CHARS: usize = 1000;
const ABOUT_PAGE_MAX_CHARS: usize = 1000;
const CANDIDATE_MIN_CHARS: usize = 100;
const CANDIDATE_MAX_CHARS: usize = 2000;
const META_SHORT_MAX_CHARS: usize = 200;

/// Subtrees that never belong to an about page's main content.
const ABOUT_PAGE_CHROME: &[&str] = &["nav", "footer", "aside", "header"];

static ABOUT_CONTAINER_RE: Lazy<Regex> = Lazy::new(|| pattern(r"about|intro|overview"));

/// Description candidates in priority order, three elements per selector.
static DESCRIPTION_SOURCES: Lazy<Vec<SelectorSpec>> = Lazy::new(|| {
    vec![
        SelectorSpec::tags(&["div"]).class(ABOUT_CONTAINER_RE.clone()).limit(3),
        SelectorSpec::tags(&["section"]).class(ABOUT_CONTAINER_RE.clone()).limit(3),
        SelectorSpec::tags(&["div"]).id(ABOUT_CONTAINER_RE.clone()).limit(3),
        SelectorSpec::tags(&["article"]).limit(3),
        SelectorSpec::tags(&["main"]).limit(3),
    ]
});

static ABOUT_LINK_RE: Lazy<Regex> = Lazy::new(|| pattern(r"about|who-we-are|our-firm"));
static ANCHORS: Lazy<SelectorSpec> =
    Lazy::new(|| SelectorSpec::tags(&["a"]).attr(AttrRule::Present("href")));

static META_DESCRIPTION: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["meta"]).attr(AttrRule::Equals("name", "description"))
});
static HERO_HEADING: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["h1", "h2"]).class(pattern(r"hero|tagline|intro|lead"))
});
static LEADING_PARAGRAPHS: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["p"]).limit(5));

static MAIN_CONTENT: Lazy<[SelectorSpec; 3]> = Lazy::new(|| {
    [
        SelectorSpec::tags(&["main"]),
        SelectorSpec::tags(&["article"]),
        SelectorSpec::tags(&["body"]),
    ]
});

/// Builds the long description from the page's about/intro containers.
///
/// `about_text` is the already-cleaned main text of the firm's about page,
/// if the orchestrator found and fetched one; it goes first.
pub fn extract_description(doc: &Document, about_text: Option<&str>) -> String {
    let mut fragments: Vec<String> = Vec::new();

    if let Some(about) = about_text.map(str::trim).filter(|t| !t.is_empty()) {
        fragments.push(about.to_string());
    }

    for spec in DESCRIPTION_SOURCES.iter() {
        for element in doc.find_all(spec) {
            let text = text_of(element);
            let len = char_len(&text);
            if (CANDIDATE_MIN_CHARS..=CANDIDATE_MAX_CHARS).contains(&len) && !fragments.contains(&text) {
                fragments.push(text);
            }
        }
    }

    tracing::debug!("Description built from {} fragment(s)", fragments.len());
    let combined = clean_text(&fragments.join(" "));
    truncate_at_word(&combined, DESCRIPTION_MAX_CHARS)
}

/// Absolute URL of the first on-site link that looks like an "about us" page.
pub fn find_about_link(doc: &Document) -> Option<String> {
    let site = site_host(doc.base_url()?)?;
    doc.find_all(&ANCHORS).into_iter().find_map(|anchor| {
        let href = anchor.value().attr("href")?.trim();
        if href.starts_with('#') {
            return None;
        }
        if !ABOUT_LINK_RE.is_match(href) && !ABOUT_LINK_RE.is_match(&text_of(anchor)) {
            return None;
        }
        let resolved = doc.resolve(href)?;
        let target = Url::parse(&resolved).ok()?;
        (site_host(&target)? == site).then_some(resolved)
    })
}

/// Lower-cased host without a leading `www.`.
fn site_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    Some(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}

/// Main-content text of a fetched about page, cleaned and capped.
pub fn about_page_text(html: &str) -> String {
    let mut doc = Document::parse(html, None);
    doc.remove_all(ABOUT_PAGE_CHROME);

    MAIN_CONTENT
        .iter()
        .find_map(|spec| doc.find_first(spec))
        .map(|content| truncate_chars(&clean_text(&text_of(content)), ABOUT_PAGE_MAX_CHARS))
        .unwrap_or_default()
}

/// One-line summary: meta description, then a hero heading, then an early paragraph.
pub fn extract_short_description(doc: &Document) -> String {
    if let Some(content) = meta_content(doc, &META_DESCRIPTION) {
        return truncate_chars(&content, META_SHORT_MAX_CHARS);
    }

    if let Some(hero) = doc.find_first(&HERO_HEADING) {
        let text = text_of(hero);
        if (50..=200).contains(&char_len(&text)) {
            return text;
        }
    }

    doc.find_all(&LEADING_PARAGRAPHS)
        .into_iter()
        .map(text_of)
        .find(|text| (50..=300).contains(&char_len(text)))
        .unwrap_or_default()
}
