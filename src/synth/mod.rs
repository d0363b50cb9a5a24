// src/synth/mod.rs
//! Deterministic marketing copy assembled from a merged record.

pub mod description;
pub mod seo;
pub mod templates;

use crate::models::BusinessRecord;
use crate::utils::text::char_len;

pub use description::oxford_join;
pub use templates::Templates;

/// Existing descriptions shorter than this are regenerated.
const MIN_KEPT_DESCRIPTION: usize = 100;

/// Copy generators over one template set. Nothing here fails; every missing
/// field has a default phrasing.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'t> {
    templates: &'t Templates,
}

impl Default for Synthesizer<'static> {
    fn default() -> Self {
        Self::new(Templates::global())
    }
}

impl<'t> Synthesizer<'t> {
    pub fn new(templates: &'t Templates) -> Self {
        Self { templates }
    }

    pub fn synthesize(&self, record: &BusinessRecord) -> SynthesizedCopy {
        SynthesizedCopy {
            description: self.description(record),
            short_description: self.short_description(record),
            meta_title: self.meta_title(record),
            meta_description: self.meta_description(record),
        }
    }

    /// Writes generated copy into the record. A description of reasonable
    /// length is kept; the short description and SEO tags are always replaced.
    pub fn apply(&self, mut record: BusinessRecord) -> BusinessRecord {
        let copy = self.synthesize(&record);

        let keep_description = record
            .description
            .as_deref()
            .is_some_and(|d| char_len(d.trim()) >= MIN_KEPT_DESCRIPTION);
        if !keep_description {
            record.description = Some(copy.description);
        }
        record.short_description = Some(copy.short_description);
        record.meta_title = Some(copy.meta_title);
        record.meta_description = Some(copy.meta_description);
        record
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedCopy {
    pub description: String,
    pub short_description: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// Generates all copy for a record with the process-wide templates.
pub fn synthesize(record: &BusinessRecord) -> SynthesizedCopy {
    Synthesizer::default().synthesize(record)
}

/// [`Synthesizer::apply`] with the process-wide templates.
pub fn apply_copy(record: BusinessRecord) -> BusinessRecord {
    Synthesizer::default().apply(record)
}

pub(crate) fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
