//! Procedural diagrams: a node/edge spec, a composer that turns it into a vector document,
//! and the presets used by the deck.

pub(crate) mod compose;
pub mod presets;
pub(crate) mod spec;

pub use compose::{ComposedDiagram, Connector, compose_diagram, render_diagram, write_svg_sidecar};
pub use spec::{
    ColorRole, Decorations, DiagramSpec, DropShadow, Edge, EdgeStyle, Legend, LegendEntry, Node,
    NodeShape, TierCaption,
};

#[cfg(test)]
#[path = "../../tests/unit/diagram/compose.rs"]
mod tests;
