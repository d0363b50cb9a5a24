// src/extractors/document.rs
//! Thin lenient wrapper around `scraper::Html`.
//!
//! Extractors never write CSS selectors. They describe what they want with a
//! [`SelectorSpec`] (tag names, a class/id pattern, an attribute rule and a
//! match limit) and hand it to [`Document::find_all`] or [`find_within`].

use once_cell::unsync::OnceCell;
use regex::{Regex, RegexBuilder};
use scraper::{node::Node, ElementRef, Html};
use url::Url;

/// Tags whose text never counts as page content.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Builds a case-insensitive pattern. Only called from `Lazy` initializers
/// with literal patterns.
pub fn pattern(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("Failed to compile selector pattern")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOn {
    Class,
    Id,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrRule {
    Present(&'static str),
    /// Attribute value equals the given text, ignoring ASCII case.
    Equals(&'static str, &'static str),
}

/// Declarative description of which elements an extractor considers.
#[derive(Debug, Clone)]
pub struct SelectorSpec {
    tags: &'static [&'static str],
    pattern: Option<(MatchOn, Regex)>,
    attr: Option<AttrRule>,
    limit: Option<usize>,
}

impl SelectorSpec {
    /// Matches any of the given tag names. An empty slice matches every element.
    pub fn tags(tags: &'static [&'static str]) -> Self {
        Self {
            tags,
            pattern: None,
            attr: None,
            limit: None,
        }
    }

    pub fn any() -> Self {
        Self::tags(&[])
    }

    pub fn class(mut self, re: Regex) -> Self {
        self.pattern = Some((MatchOn::Class, re));
        self
    }

    pub fn id(mut self, re: Regex) -> Self {
        self.pattern = Some((MatchOn::Id, re));
        self
    }

    pub fn attr(mut self, rule: AttrRule) -> Self {
        self.attr = Some(rule);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, element: &ElementRef) -> bool {
        let value = element.value();

        if !self.tags.is_empty() && !self.tags.contains(&value.name()) {
            return false;
        }

        if let Some((on, re)) = &self.pattern {
            let hit = |name: &str| value.attr(name).is_some_and(|v| re.is_match(v));
            let matched = match on {
                MatchOn::Class => hit("class"),
                MatchOn::Id => hit("id"),
            };
            if !matched {
                return false;
            }
        }

        match &self.attr {
            None => true,
            Some(AttrRule::Present(name)) => value.attr(name).is_some(),
            Some(AttrRule::Equals(name, expected)) => value
                .attr(name)
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected)),
        }
    }
}

/// All descendants of `scope` (never `scope` itself) matching `spec`, in
/// document order, up to the spec's limit.
pub fn find_within<'a>(scope: ElementRef<'a>, spec: &SelectorSpec) -> Vec<ElementRef<'a>> {
    let matches = scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| spec.matches(el));

    match spec.limit {
        Some(limit) => matches.take(limit).collect(),
        None => matches.collect(),
    }
}

pub fn first_within<'a>(scope: ElementRef<'a>, spec: &SelectorSpec) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| spec.matches(el))
}

/// Text of a subtree with all whitespace runs collapsed to single spaces.
/// Script and style content is skipped.
pub fn text_of(element: ElementRef) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in element.descendants() {
        let Node::Text(text_node) = node.value() else {
            continue;
        };
        let in_non_content = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| NON_CONTENT_TAGS.contains(&parent.value().name()));
        if in_non_content {
            continue;
        }
        parts.extend(text_node.text.split_whitespace());
    }
    parts.join(" ")
}

/// A parsed page plus the URL it was fetched from.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
    page_text: OnceCell<String>,
}

impl Document {
    /// Parses leniently; malformed markup yields whatever tree html5ever recovers.
    pub fn parse(html: &str, base_url: Option<&str>) -> Self {
        let base_url = base_url.and_then(|u| Url::parse(u).ok());
        if !html.is_empty() {
            tracing::trace!("Parsing document ({} bytes) for {:?}", html.len(), base_url.as_ref().map(Url::as_str));
        }
        Self {
            html: Html::parse_document(html),
            base_url,
            page_text: OnceCell::new(),
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn find_all(&self, spec: &SelectorSpec) -> Vec<ElementRef<'_>> {
        find_within(self.root(), spec)
    }

    pub fn find_first(&self, spec: &SelectorSpec) -> Option<ElementRef<'_>> {
        first_within(self.root(), spec)
    }

    /// Whole-page text, computed once per document state.
    pub fn page_text(&self) -> &str {
        self.page_text.get_or_init(|| text_of(self.root()))
    }

    /// Detaches every element with one of the given tag names, with its subtree.
    pub fn remove_all(&mut self, tags: &[&str]) {
        let ids: Vec<_> = self
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .map(|el| el.id())
            .collect();

        for id in ids {
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.detach();
            }
        }
        self.page_text = OnceCell::new();
    }

    /// Resolves a link against the page URL. Only http(s) targets survive.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let resolved = match &self.base_url {
            Some(base) => base.join(href).ok()?,
            None => Url::parse(href).ok()?,
        };
        matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
    }
}
