//! Typed slide elements and the builder that places them.

pub(crate) mod builder;
pub(crate) mod element;

pub use builder::{DEFAULT_CANVAS, PLACEHOLDER_LABEL, SlideBuilder};
pub use element::{
    Align, Anchor, Cell, Element, Image, Shadow, Shape, ShapeKind, ShapeStyle, Slide, Stroke,
    Table, TextBox, TextStyle,
};
