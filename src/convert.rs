//! Markup-to-slide conversion seam.
//!
//! Some decks are authored as one markup file per slide and converted by an external tool.
//! The tool sits behind [`SlideConverter`]; [`build_from_markup`] drives it over a list of
//! sources and keeps going when individual sources fail.

use std::path::{Path, PathBuf};

use crate::deck::DeckHandle;

/// Failure converting one source. Never fatal to the build.
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    /// The source file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Source path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The source was read but does not describe a slide the converter can place.
    #[error("unsupported markup in '{path}': {reason}")]
    Unsupported {
        /// Source path.
        path: PathBuf,
        /// What was wrong.
        reason: String,
    },

    /// Any other converter-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Settings shared by every conversion in a batch.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Scratch directory the converter may write intermediates to.
    pub tmp_dir: PathBuf,
}

/// Turns one markup source into slides appended to a deck.
///
/// Implementations append zero or more slides on success. Slides appended by a failed
/// conversion are discarded by [`build_from_markup`].
pub trait SlideConverter: Sync {
    /// Convert `source` and append the result to `deck`.
    fn convert(
        &self,
        source: &Path,
        deck: &mut DeckHandle,
        options: &ConvertOptions,
    ) -> Result<(), ConversionError>;
}

/// A source that did not make it into the deck.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SkippedSource {
    /// Source path.
    pub source: PathBuf,
    /// Rendered error.
    pub reason: String,
}

/// Outcome of a markup batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MarkupReport {
    /// Sources converted successfully.
    pub converted: usize,
    /// Slides appended by successful conversions.
    pub slides_added: usize,
    /// Failed sources, in input order.
    pub skipped: Vec<SkippedSource>,
}

/// Convert `sources` in order, skipping and logging the ones that fail.
#[tracing::instrument(skip_all, fields(sources = sources.len()))]
pub fn build_from_markup(
    converter: &dyn SlideConverter,
    sources: &[PathBuf],
    options: &ConvertOptions,
    deck: &mut DeckHandle,
) -> MarkupReport {
    let mut report = MarkupReport::default();
    for source in sources {
        let before = deck.slide_count();
        match converter.convert(source, deck, options) {
            Ok(()) => {
                report.converted += 1;
                report.slides_added += deck.slide_count() - before;
                tracing::debug!(source = %source.display(), "converted");
            }
            Err(err) => {
                deck.truncate(before);
                tracing::error!(source = %source.display(), error = %err, "conversion failed; slide skipped");
                report.skipped.push(SkippedSource {
                    source: source.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "../tests/unit/convert.rs"]
mod tests;
