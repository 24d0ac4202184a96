use std::path::Path;

use crate::{
    config::Theme,
    foundation::core::{BBox, Rgb},
    slide::element::{
        Cell, Element, Image, Shape, ShapeKind, ShapeStyle, Slide, Stroke, Table, TextBox,
        TextStyle,
    },
};

/// `(width, height)` in inches of a 16:9 slide, used by [`SlideBuilder::new`].
pub const DEFAULT_CANVAS: (f64, f64) = (10.0, 5.625);
/// Height of the title bar.
pub const HEADER_HEIGHT: f64 = 0.75;
/// Height of the action bar under the title.
pub const ACTION_BAR_HEIGHT: f64 = 0.55;

const PLACEHOLDER_FILL: Rgb = Rgb::new(0xF0, 0xF0, 0xF0);
const PLACEHOLDER_LINE: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
/// Literal shown where a missing picture would have been.
pub const PLACEHOLDER_LABEL: &str = "Image";

/// Accumulates elements for one slide in draw order.
#[derive(Debug)]
pub struct SlideBuilder<'a> {
    theme: &'a Theme,
    canvas: (f64, f64),
    slide: Slide,
}

impl<'a> SlideBuilder<'a> {
    /// Empty 16:9 slide using `theme` for frame helpers.
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_canvas(theme, DEFAULT_CANVAS)
    }

    /// Empty slide on a `(width, height)` canvas in inches.
    ///
    /// Full-bleed helpers span the whole canvas; other elements keep the coordinates they
    /// are given.
    pub fn with_canvas(theme: &'a Theme, canvas: (f64, f64)) -> Self {
        Self {
            theme,
            canvas,
            slide: Slide::default(),
        }
    }

    /// `(width, height)` in inches.
    pub fn canvas(&self) -> (f64, f64) {
        self.canvas
    }

    /// Rectangle covering the whole canvas.
    pub fn background(&mut self, color: Rgb) -> &mut Self {
        let (w, h) = self.canvas;
        self.rect(BBox::new(0.0, 0.0, w, h), ShapeStyle::filled(color))
    }

    /// Theme in use.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Append any element.
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.slide.elements.push(element);
        self
    }

    /// Append a preset shape.
    pub fn shape(&mut self, kind: ShapeKind, bbox: BBox, style: ShapeStyle) -> &mut Self {
        self.push(Element::Shape(Shape { kind, bbox, style }))
    }

    /// Append a rectangle.
    pub fn rect(&mut self, bbox: BBox, style: ShapeStyle) -> &mut Self {
        self.shape(ShapeKind::Rect, bbox, style)
    }

    /// Append a text frame.
    pub fn text(&mut self, bbox: BBox, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.push(Element::TextBox(TextBox {
            bbox,
            text: text.into(),
            style,
        }))
    }

    /// Append a picture unconditionally.
    pub fn image(&mut self, bbox: BBox, path: impl AsRef<Path>) -> &mut Self {
        self.push(Element::Image(Image {
            bbox,
            path: path.as_ref().to_path_buf(),
        }))
    }

    /// Place the picture at `path` if it exists, otherwise a neutral box with an
    /// "Image" label sharing its bounding box.
    ///
    /// Returns `true` when the picture was found.
    pub fn image_or_placeholder(&mut self, bbox: BBox, path: &Path) -> bool {
        if path.is_file() {
            self.image(bbox, path);
            return true;
        }

        tracing::warn!(path = %path.display(), "image missing; substituting placeholder");
        let muted = self.theme.muted;
        self.rect(
            bbox,
            ShapeStyle::filled(PLACEHOLDER_FILL).with_line(PLACEHOLDER_LINE, 1.0),
        );
        self.text(
            bbox,
            PLACEHOLDER_LABEL,
            TextStyle::new(12.0, muted).center().middle(),
        );
        self.slide.placeholders += 1;
        false
    }

    /// Full-width title bar.
    pub fn header(&mut self, title: &str) -> &mut Self {
        let theme = self.theme;
        let (w, _) = self.canvas;
        self.rect(
            BBox::new(0.0, 0.0, w, HEADER_HEIGHT),
            ShapeStyle::filled(theme.navy),
        );
        self.text(
            BBox::new(0.5, 0.2, w - 1.0, 0.45),
            title,
            TextStyle::new(20.0, Rgb::WHITE).bold(),
        )
    }

    /// Secondary bar under the header with one sentence.
    pub fn action_bar(&mut self, sentence: &str) -> &mut Self {
        let theme = self.theme;
        let (w, _) = self.canvas;
        self.rect(
            BBox::new(0.0, HEADER_HEIGHT, w, ACTION_BAR_HEIGHT),
            ShapeStyle::filled(theme.light_gray),
        );
        self.text(
            BBox::new(0.5, HEADER_HEIGHT + 0.1, w - 1.0, 0.35),
            sentence,
            TextStyle::new(11.0, theme.text),
        )
    }

    /// Header plus action bar: the frame shared by every content slide.
    pub fn frame(&mut self, title: &str, sentence: &str) -> &mut Self {
        self.header(title).action_bar(sentence)
    }

    /// Table with a header row in inverse theme colors.
    ///
    /// Header labels become bold white on navy; data rows keep their own overrides.
    pub fn table(
        &mut self,
        bbox: BBox,
        col_ratios: &[f64],
        header: &[&str],
        rows: Vec<Vec<Cell>>,
        size_pt: f64,
    ) -> &mut Self {
        let theme = self.theme;
        let header = header
            .iter()
            .map(|h| Cell::emphasized(*h, theme.navy, Rgb::WHITE))
            .collect();
        self.push(Element::Table(Table {
            bbox,
            col_ratios: col_ratios.to_vec(),
            header,
            rows,
            text: TextStyle::new(size_pt, theme.text).center().middle(),
            border: Stroke {
                color: theme.line,
                width_pt: 0.5,
            },
        }))
    }

    /// Finished slide.
    pub fn finish(self) -> Slide {
        self.slide
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/builder.rs"]
mod tests;
