//! Ordered slides plus document metadata, and the container writer.

pub(crate) mod content;
pub(crate) mod pptx;

use std::path::Path;

use crate::{
    config::Theme,
    foundation::error::DeckResult,
    slide::Slide,
};

pub use content::{
    ARCHITECTURE_DIAGRAM, ICON_PX, PROCESS_FLOW_DIAGRAM, SLIDES, SlideAssets, SlideFn, SlideSpec,
    icon_jobs,
};
pub use pptx::write_pptx;

/// Slide canvas size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// 10 x 5.625 in.
    #[default]
    Wide16x9,
    /// 10 x 7.5 in.
    Standard4x3,
}

impl LayoutKind {
    /// `(width, height)` in inches.
    pub fn size_inches(self) -> (f64, f64) {
        match self {
            Self::Wide16x9 => (10.0, 5.625),
            Self::Standard4x3 => (10.0, 7.5),
        }
    }
}

/// A finished presentation. Slide order is presentation order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Deck {
    /// Document title.
    pub title: String,
    /// Document author.
    pub author: String,
    /// Document subject.
    pub subject: String,
    /// Canvas size.
    pub layout: LayoutKind,
    /// Palette and font written into the package theme and every text run.
    pub theme: Theme,
    /// Slides in order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Empty deck with metadata.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        subject: impl Into<String>,
        layout: LayoutKind,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            subject: subject.into(),
            layout,
            theme: Theme::default(),
            slides: Vec::new(),
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append a slide at the end.
    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Element count of each slide, in order.
    pub fn element_counts(&self) -> Vec<usize> {
        self.slides.iter().map(Slide::len).collect()
    }

    /// Placeholders substituted across all slides.
    pub fn placeholders(&self) -> usize {
        self.slides.iter().map(|s| s.placeholders).sum()
    }

    /// Write the deck to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> DeckResult<()> {
        write_pptx(self, path)
    }
}

/// Mutable view of a deck under construction, handed to markup converters.
///
/// Converters may only append; existing slides and metadata stay out of reach.
#[derive(Debug)]
pub struct DeckHandle {
    deck: Deck,
}

impl DeckHandle {
    /// Wrap `deck`.
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// Append a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.deck.push(slide);
    }

    /// Canvas size of the deck.
    pub fn layout(&self) -> LayoutKind {
        self.deck.layout
    }

    /// Theme for new slides.
    pub fn theme(&self) -> &Theme {
        &self.deck.theme
    }

    /// Slides appended so far.
    pub fn slide_count(&self) -> usize {
        self.deck.slide_count()
    }

    /// Drop slides appended after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.deck.slides.truncate(len);
    }

    /// Finished deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
