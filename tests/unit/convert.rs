use super::*;
use crate::{
    config::Theme,
    deck::{Deck, LayoutKind},
    foundation::core::BBox,
    slide::{SlideBuilder, TextStyle},
};

/// Reads the file and puts its first line on a slide; rejects empty files.
struct FirstLine;

impl SlideConverter for FirstLine {
    fn convert(
        &self,
        source: &Path,
        deck: &mut DeckHandle,
        _options: &ConvertOptions,
    ) -> Result<(), ConversionError> {
        let text = std::fs::read_to_string(source).map_err(|e| ConversionError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let Some(line) = text.lines().next() else {
            return Err(ConversionError::Unsupported {
                path: source.to_path_buf(),
                reason: "empty document".to_string(),
            });
        };
        let theme = deck.theme().clone();
        let mut b = SlideBuilder::new(&theme);
        b.text(BBox::new(0.5, 0.5, 9.0, 1.0), line, TextStyle::new(20.0, theme.ink));
        deck.add_slide(b.finish());
        Ok(())
    }
}

#[test]
fn failures_are_skipped_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let good = tmp.path().join("a.html");
    let empty = tmp.path().join("b.html");
    let also_good = tmp.path().join("d.html");
    std::fs::write(&good, "Title A\nbody").unwrap();
    std::fs::write(&empty, "").unwrap();
    std::fs::write(&also_good, "Title D").unwrap();
    let missing = tmp.path().join("c.html");

    let mut deck = DeckHandle::new(
        Deck::new("t", "a", "s", LayoutKind::Wide16x9).with_theme(Theme::default()),
    );
    let options = ConvertOptions {
        tmp_dir: tmp.path().to_path_buf(),
    };
    let report = build_from_markup(
        &FirstLine,
        &[good, empty.clone(), missing.clone(), also_good],
        &options,
        &mut deck,
    );

    assert_eq!(report.converted, 2);
    assert_eq!(report.slides_added, 2);
    let skipped: Vec<_> = report.skipped.iter().map(|s| s.source.clone()).collect();
    assert_eq!(skipped, [empty, missing]);
    assert!(report.skipped[0].reason.contains("empty document"));

    let deck = deck.into_deck();
    assert_eq!(deck.slide_count(), 2);
    let crate::slide::Element::TextBox(t) = &deck.slides[1].elements[0] else {
        panic!("expected text");
    };
    assert_eq!(t.text, "Title D");
}

/// Appends a slide, then reports failure.
struct HalfDone;

impl SlideConverter for HalfDone {
    fn convert(
        &self,
        source: &Path,
        deck: &mut DeckHandle,
        _options: &ConvertOptions,
    ) -> Result<(), ConversionError> {
        deck.add_slide(crate::slide::Slide::default());
        Err(ConversionError::Unsupported {
            path: source.to_path_buf(),
            reason: "gave up after the first slide".to_string(),
        })
    }
}

#[test]
fn failed_conversion_leaves_no_slides_behind() {
    let tmp = tempfile::tempdir().unwrap();
    let mut deck = DeckHandle::new(Deck::new("t", "a", "s", LayoutKind::Wide16x9));
    deck.add_slide(crate::slide::Slide::default());
    let options = ConvertOptions {
        tmp_dir: tmp.path().to_path_buf(),
    };

    let report = build_from_markup(&HalfDone, &[tmp.path().join("x.html")], &options, &mut deck);

    assert_eq!(report.converted, 0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(deck.slide_count(), 1, "only the slide added before the batch remains");
}
