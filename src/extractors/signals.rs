// src/extractors/signals.rs
//! Whole-page signals: service features, contact email, social profiles and
//! the page's own SEO metadata.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::document::{pattern, text_of, AttrRule, Document, SelectorSpec};
use crate::models::{FeatureFlags, SocialLinks};
use crate::utils::text::{collapse_whitespace, truncate_chars};

/// Substrings that mark an address as a placeholder rather than a real inbox.
pub const EMAIL_BLACKLIST: &[&str] = &["example", "test", "noreply"];

const META_TITLE_MAX_CHARS: usize = 200;
const META_DESCRIPTION_MAX_CHARS: usize = 500;

static NO_WIN_NO_FEE_RE: Lazy<Regex> = Lazy::new(|| pattern(r"no\s*win,?\s*no\s*fee"));
static FREE_CONSULTATION_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"free\s*consultation|complimentary\s*consultation"));
static HOME_VISITS_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"home\s*visit|hospital\s*visit|visit\s*you\s*at\s*home"));
static TELEHEALTH_RE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"telehealth|video\s*consultation|virtual\s*consultation|zoom\s*meeting")
});
static AVAILABLE_24_7_RE: Lazy<Regex> = Lazy::new(|| pattern(r"24\s*/?\s*7|24\s*hour"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}"));

static LINKS: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["a"]).attr(AttrRule::Present("href")));
static TITLE: Lazy<SelectorSpec> = Lazy::new(|| SelectorSpec::tags(&["title"]));
static OG_TITLE: Lazy<SelectorSpec> =
    Lazy::new(|| SelectorSpec::tags(&["meta"]).attr(AttrRule::Equals("property", "og:title")));
static META_DESCRIPTION: Lazy<SelectorSpec> =
    Lazy::new(|| SelectorSpec::tags(&["meta"]).attr(AttrRule::Equals("name", "description")));
static OG_DESCRIPTION: Lazy<SelectorSpec> = Lazy::new(|| {
    SelectorSpec::tags(&["meta"]).attr(AttrRule::Equals("property", "og:description"))
});

/// Presence tests over the page text. A miss leaves the flag unknown, never false.
pub fn extract_features(doc: &Document) -> FeatureFlags {
    let text = doc.page_text().to_lowercase();

    FeatureFlags {
        no_win_no_fee: seen(&NO_WIN_NO_FEE_RE, &text),
        free_consultation: seen(&FREE_CONSULTATION_RE, &text),
        home_visits_available: seen(&HOME_VISITS_RE, &text),
        telehealth_available: seen(&TELEHEALTH_RE, &text),
        available_24_7: seen(&AVAILABLE_24_7_RE, &text),
    }
}

fn seen(re: &Regex, text: &str) -> Option<bool> {
    re.is_match(text).then_some(true)
}

pub fn is_placeholder_email(email: &str) -> bool {
    let lowered = email.to_lowercase();
    EMAIL_BLACKLIST.iter().any(|marker| lowered.contains(marker))
}

pub fn extract_email(doc: &Document) -> Option<String> {
    EMAIL_RE
        .find_iter(doc.page_text())
        .map(|m| m.as_str())
        .find(|email| !is_placeholder_email(email))
        .map(str::to_string)
}

/// True when `host` is `domain` or one of its subdomains.
fn host_is(host: &str, domain: &str) -> bool {
    host == domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.'))
}

pub fn extract_social_links(doc: &Document) -> SocialLinks {
    let mut social = SocialLinks::default();

    for anchor in doc.find_all(&LINKS) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        let Some(host) = Url::parse(href).ok().and_then(|u| u.host_str().map(str::to_lowercase)) else {
            continue;
        };

        let slot = if host_is(&host, "facebook.com") {
            &mut social.facebook
        } else if host_is(&host, "linkedin.com") {
            &mut social.linkedin
        } else if host_is(&host, "twitter.com") || host_is(&host, "x.com") {
            &mut social.twitter
        } else if host_is(&host, "instagram.com") {
            &mut social.instagram
        } else {
            continue;
        };
        slot.get_or_insert_with(|| href.to_string());
    }

    social
}

/// `content` of the first matching meta tag, whitespace collapsed.
pub(crate) fn meta_content(doc: &Document, spec: &SelectorSpec) -> Option<String> {
    doc.find_first(spec)
        .and_then(|meta| meta.value().attr("content"))
        .map(collapse_whitespace)
        .filter(|c| !c.is_empty())
}

pub fn extract_meta_title(doc: &Document) -> String {
    let title = doc
        .find_first(&TITLE)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .or_else(|| meta_content(doc, &OG_TITLE))
        .unwrap_or_default();
    truncate_chars(&title, META_TITLE_MAX_CHARS)
}

pub fn extract_meta_description(doc: &Document) -> String {
    let description = meta_content(doc, &META_DESCRIPTION)
        .or_else(|| meta_content(doc, &OG_DESCRIPTION))
        .unwrap_or_default();
    truncate_chars(&description, META_DESCRIPTION_MAX_CHARS)
}
