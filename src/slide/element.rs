use std::path::PathBuf;

use crate::foundation::{
    core::{BBox, Rgb},
    error::{DeckError, DeckResult},
};

/// Preset outline of a drawn shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Rectangle.
    Rect,
    /// Rectangle with rounded corners; `radius` in inches.
    RoundRect {
        /// Corner radius.
        radius: f64,
    },
    /// Ellipse inscribed in the bounding box.
    Oval,
}

/// Border stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Color.
    pub color: Rgb,
    /// Width in points.
    pub width_pt: f64,
}

/// Outer drop shadow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Blur radius in points.
    pub blur_pt: f64,
    /// Offset distance in points.
    pub offset_pt: f64,
    /// Direction in degrees; 90 casts straight down.
    pub angle_deg: f64,
    /// 0 (invisible) to 1 (opaque).
    pub opacity: f64,
}

impl Shadow {
    /// Downward shadow, the only direction the deck uses.
    pub const fn down(blur_pt: f64, offset_pt: f64, opacity: f64) -> Self {
        Self {
            blur_pt,
            offset_pt,
            angle_deg: 90.0,
            opacity,
        }
    }
}

/// Fill, border, and shadow of a shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ShapeStyle {
    /// Solid fill; `None` leaves the shape unfilled.
    pub fill: Option<Rgb>,
    /// Border; `None` draws no outline.
    pub line: Option<Stroke>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
}

impl ShapeStyle {
    /// Solid fill, no border.
    pub fn filled(color: Rgb) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    /// Add a border.
    pub fn with_line(mut self, color: Rgb, width_pt: f64) -> Self {
        self.line = Some(Stroke { color, width_pt });
        self
    }

    /// Add a shadow.
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Vertical text anchor inside the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top edge.
    #[default]
    Top,
    /// Middle.
    Middle,
    /// Bottom edge.
    Bottom,
}

/// Character and paragraph formatting.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size_pt: f64,
    /// Bold weight.
    pub bold: bool,
    /// Text color.
    pub color: Rgb,
    /// Horizontal alignment.
    pub align: Align,
    /// Vertical anchor.
    pub anchor: Anchor,
}

impl TextStyle {
    /// Regular, left-aligned, top-anchored text.
    pub fn new(size_pt: f64, color: Rgb) -> Self {
        Self {
            size_pt,
            bold: false,
            color,
            align: Align::Left,
            anchor: Anchor::Top,
        }
    }

    /// Bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Centered horizontally.
    pub fn center(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    /// Right-aligned.
    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Centered vertically.
    pub fn middle(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self
    }
}

/// Filled or outlined preset shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Shape {
    /// Outline.
    pub kind: ShapeKind,
    /// Position and size.
    pub bbox: BBox,
    /// Appearance.
    pub style: ShapeStyle,
}

/// Text in a frame. Newlines start new paragraphs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBox {
    /// Position and size.
    pub bbox: BBox,
    /// Content.
    pub text: String,
    /// Formatting.
    pub style: TextStyle,
}

/// Bitmap placed from a file that existed when the slide was built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Image {
    /// Position and size.
    pub bbox: BBox,
    /// Source file.
    pub path: PathBuf,
}

/// One table cell with optional formatting overrides.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Cell {
    /// Content.
    pub text: String,
    /// Background override.
    pub fill: Option<Rgb>,
    /// Text color override.
    pub color: Option<Rgb>,
    /// Bold override.
    pub bold: Option<bool>,
}

impl Cell {
    /// Plain cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Cell with a solid background and bold text in `color`.
    pub fn emphasized(text: impl Into<String>, fill: Rgb, color: Rgb) -> Self {
        Self {
            text: text.into(),
            fill: Some(fill),
            color: Some(color),
            bold: Some(true),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

/// Grid of cells: one header row plus data rows.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Table {
    /// Position and size; row height is `bbox.h / row_count()`.
    pub bbox: BBox,
    /// Relative column widths, scaled to `bbox.w`.
    pub col_ratios: Vec<f64>,
    /// Header row, already styled.
    pub header: Vec<Cell>,
    /// Data rows.
    pub rows: Vec<Vec<Cell>>,
    /// Default size, color, and alignment for every cell.
    pub text: TextStyle,
    /// Cell border.
    pub border: Stroke,
}

impl Table {
    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.col_ratios.len()
    }

    /// Rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Absolute column widths in inches.
    pub fn col_widths(&self) -> Vec<f64> {
        let total: f64 = self.col_ratios.iter().sum();
        self.col_ratios
            .iter()
            .map(|r| self.bbox.w * r / total)
            .collect()
    }

    /// Height of every row in inches.
    pub fn row_height(&self) -> f64 {
        self.bbox.h / self.row_count() as f64
    }

    /// Reject tables whose rows and column ratios disagree.
    pub fn validate(&self) -> DeckResult<()> {
        if self.col_ratios.is_empty() || self.col_ratios.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(DeckError::layout(
                "table column ratios must be non-empty and positive",
            ));
        }
        for (i, row) in self.all_rows().enumerate() {
            if row.len() != self.col_count() {
                return Err(DeckError::layout(format!(
                    "table row {i} has {} cells, expected {}",
                    row.len(),
                    self.col_count()
                )));
            }
        }
        Ok(())
    }

    /// Header followed by data rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &[Cell]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// One positioned visual primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Preset shape.
    Shape(Shape),
    /// Text frame.
    TextBox(TextBox),
    /// Picture.
    Image(Image),
    /// Table.
    Table(Table),
}

impl Element {
    /// Bounding box on the slide.
    pub fn bbox(&self) -> BBox {
        match self {
            Self::Shape(s) => s.bbox,
            Self::TextBox(t) => t.bbox,
            Self::Image(i) => i.bbox,
            Self::Table(t) => t.bbox,
        }
    }
}

/// One page: elements in draw order, later on top.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Slide {
    /// Elements.
    pub elements: Vec<Element>,
    /// Missing images replaced by a placeholder while building.
    pub placeholders: usize,
}

impl Slide {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Tables on this slide.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Images on this slide.
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image(i) => Some(i),
            _ => None,
        })
    }
}
