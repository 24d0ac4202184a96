use std::collections::HashSet;

use kurbo::Point;

use crate::{
    config::Theme,
    foundation::{
        core::Rgb,
        error::{DeckError, DeckResult},
    },
    layout::Outline,
};

/// Which theme color a node is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Internal users, the core server.
    Navy,
    /// Approval steps, web clients.
    Green,
    /// External parties.
    Orange,
    /// Mobile clients.
    Blue,
    /// Storage.
    Slate,
    /// Messaging integrations.
    Notify,
}

impl ColorRole {
    /// Base color from `theme`.
    pub fn base(self, theme: &Theme) -> Rgb {
        match self {
            Self::Navy => theme.navy,
            Self::Green => theme.green,
            Self::Orange => theme.orange,
            Self::Blue => theme.blue,
            Self::Slate => theme.slate,
            Self::Notify => theme.notify,
        }
    }

    /// Two-stop gradient, lighter top-left to the base color.
    pub fn gradient(self, theme: &Theme) -> (Rgb, Rgb) {
        let base = self.base(theme);
        (base.mix(Rgb::WHITE, 0.2), base)
    }

    /// Color for text drawn on top of the node fill.
    pub fn text_on(self, theme: &Theme) -> Rgb {
        match self {
            Self::Notify => theme.ink,
            _ => Rgb::WHITE,
        }
    }

    /// Id of the gradient definition inside the document.
    pub fn gradient_id(self) -> &'static str {
        match self {
            Self::Navy => "grad-navy",
            Self::Green => "grad-green",
            Self::Orange => "grad-orange",
            Self::Blue => "grad-blue",
            Self::Slate => "grad-slate",
            Self::Notify => "grad-notify",
        }
    }
}

/// Node glyph.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeShape {
    /// Stage disc.
    Circle {
        /// Radius.
        r: f64,
    },
    /// Rounded box.
    RoundedBox {
        /// Width.
        w: f64,
        /// Height.
        h: f64,
        /// Corner radius.
        rx: f64,
    },
}

impl NodeShape {
    /// Outline used to clip connectors.
    pub fn outline(self) -> Outline {
        match self {
            Self::Circle { r } => Outline::Circle { r },
            Self::RoundedBox { w, h, .. } => Outline::Box { w, h },
        }
    }

    /// Half the glyph height.
    pub fn half_height(self) -> f64 {
        match self {
            Self::Circle { r } => r,
            Self::RoundedBox { h, .. } => h / 2.0,
        }
    }
}

/// One node of a diagram.
///
/// Circles show `caption` large inside, then `label` and `sublabel` underneath. Boxes show
/// `label` inside, `sublabel` in a pill below it, and `caption` as a footnote.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Identifier referenced by edges.
    pub id: String,
    /// Center in canvas units.
    pub center: Point,
    /// Main text.
    pub label: String,
    /// Secondary text.
    pub sublabel: Option<String>,
    /// Short emphasized text.
    pub caption: Option<String>,
    /// Fill color role.
    pub color_role: ColorRole,
    /// Glyph.
    pub shape: NodeShape,
}

/// Connector stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Solid line.
    Solid,
    /// `5,3` dash.
    Dashed,
}

/// Directed connector from one node to another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id (arrowhead end).
    pub to: String,
    /// Stroke.
    pub style: EdgeStyle,
    /// Pill label drawn at the connector midpoint.
    pub label: Option<String>,
}

impl Edge {
    /// Unlabeled solid connector.
    pub fn solid(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            style: EdgeStyle::Solid,
            label: None,
        }
    }

    /// Unlabeled dashed connector.
    pub fn dashed_plain(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            style: EdgeStyle::Dashed,
            ..Self::solid(from, to)
        }
    }

    /// Dashed connector with a pill label.
    pub fn dashed(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            style: EdgeStyle::Dashed,
            label: Some(label.into()),
        }
    }
}

/// Caption drawn above a column of nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TierCaption {
    /// Anchor (text is centered on it).
    pub at: Point,
    /// Text.
    pub text: String,
}

/// Legend row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegendEntry {
    /// Swatch color.
    pub color: Rgb,
    /// Text.
    pub label: String,
}

/// Legend box with swatches laid out left to right.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Legend {
    /// Top-left corner.
    pub origin: Point,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Entries.
    pub entries: Vec<LegendEntry>,
}

/// Soft drop shadow under every node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DropShadow {
    /// Vertical offset.
    pub dy: f64,
    /// Blur standard deviation.
    pub std_dev: f64,
    /// Shadow opacity.
    pub opacity: f64,
}

/// Everything drawn besides nodes and edges.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Decorations {
    /// Node shadow; `None` draws flat nodes.
    pub shadow: Option<DropShadow>,
    /// Column captions.
    pub tier_captions: Vec<TierCaption>,
    /// Draw a notification badge above every solid connector.
    pub connector_badges: bool,
    /// Optional legend.
    pub legend: Option<Legend>,
}

/// A complete diagram: canvas, nodes, edges, decorations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramSpec {
    /// Canvas width in abstract units.
    pub canvas_width: f64,
    /// Canvas height in abstract units.
    pub canvas_height: f64,
    /// Pixels per canvas unit in the rasterized output.
    pub scale: f64,
    /// Nodes, drawn in order after all edges.
    pub nodes: Vec<Node>,
    /// Edges, drawn in order.
    pub edges: Vec<Edge>,
    /// Decorative extras.
    pub decorations: Decorations,
}

impl DiagramSpec {
    /// Reject specs that cannot be drawn.
    pub fn validate(&self) -> DeckResult<()> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0)
            || !(self.canvas_height.is_finite() && self.canvas_height > 0.0)
        {
            return Err(DeckError::config(format!(
                "diagram canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(DeckError::config(format!(
                "diagram scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        if self.nodes.is_empty() {
            return Err(DeckError::config("diagram must have at least one node"));
        }

        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(DeckError::config(format!(
                    "duplicate diagram node id '{}'",
                    node.id
                )));
            }
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !ids.contains(end.as_str()) {
                    return Err(DeckError::config(format!(
                        "edge {} -> {} references unknown node '{end}'",
                        edge.from, edge.to
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Rasterized size in pixels (`canvas * scale`, rounded).
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.canvas_width * self.scale).round() as u32,
            (self.canvas_height * self.scale).round() as u32,
        )
    }

    /// Same diagram rendered at `scale`.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}
