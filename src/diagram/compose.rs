use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use kurbo::Point;
use svg::{Document, node::element as svg_element};

use crate::{
    assets::{
        cache::validate_asset_name,
        icon::{KAKAO_BUBBLE, KAKAO_INK},
        raster::{RasterAsset, rasterize_svg_to_file},
    },
    config::Theme,
    diagram::spec::{DiagramSpec, EdgeStyle, Legend, Node, NodeShape},
    foundation::{core::Rgb, error::DeckResult},
    layout::{arrowhead, column_x, connector_endpoints},
};

const DASH_STROKE: Rgb = Rgb::new(0xB0, 0xBE, 0xC5);
const PILL_FILL: Rgb = Rgb::new(0xF5, 0xF5, 0xF5);
const ARROW_LEN: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.0;
const BADGE_R: f64 = 12.0;

/// One drawn connector, in canvas units.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Point on the source outline.
    pub start: Point,
    /// Point on the target outline; the arrow tip.
    pub end: Point,
    /// Arrowhead triangle.
    pub arrow: [Point; 3],
}

/// A diagram as a vector document plus what was drawn into it.
#[derive(Clone, Debug)]
pub struct ComposedDiagram {
    /// Standalone SVG document.
    pub document: Document,
    /// Number of node glyphs drawn.
    pub node_glyphs: usize,
    /// Connectors drawn, in edge order.
    pub connectors: Vec<Connector>,
}

impl ComposedDiagram {
    /// Serialized vector document.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}

/// Lay out and draw `spec` with colors from `theme`.
///
/// Edges are drawn before nodes so node shadows sit above connector ends.
pub fn compose_diagram(spec: &DiagramSpec, theme: &Theme) -> DeckResult<ComposedDiagram> {
    spec.validate()?;

    let font = format!("{}, Arial, sans-serif", theme.font_face);
    let mut doc = Document::new()
        .set("width", spec.canvas_width)
        .set("height", spec.canvas_height)
        .set(
            "viewBox",
            (0.0, 0.0, spec.canvas_width, spec.canvas_height),
        )
        .set("font-family", font)
        .add(definitions(spec, theme))
        .add(
            svg_element::Rectangle::new()
                .set("width", spec.canvas_width)
                .set("height", spec.canvas_height)
                .set("fill", Rgb::WHITE.css()),
        );

    for cap in &spec.decorations.tier_captions {
        doc = doc.add(
            text(&cap.text, cap.at, 11.0, theme.muted)
                .set("text-anchor", "middle")
                .set("font-weight", 500)
                .set("letter-spacing", 1),
        );
    }

    let mut connectors = Vec::with_capacity(spec.edges.len());
    for edge in &spec.edges {
        // Both ends exist: validate() checked every id.
        let (Some(from), Some(to)) = (spec.node(&edge.from), spec.node(&edge.to)) else {
            continue;
        };
        let (start, end) = connector_endpoints(
            (from.center, from.shape.outline()),
            (to.center, to.shape.outline()),
        )?;
        let arrow = arrowhead(start, end, ARROW_LEN, ARROW_HALF_WIDTH);
        let stroke = match edge.style {
            EdgeStyle::Solid => theme.line,
            EdgeStyle::Dashed => DASH_STROKE,
        };

        // Stop the stroke at the arrow base so the tip stays sharp.
        let base = arrow[0].midpoint(arrow[2]);
        let mut line = svg_element::Line::new()
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", base.x)
            .set("y2", base.y)
            .set("stroke", stroke.css())
            .set("stroke-width", 2);
        if edge.style == EdgeStyle::Dashed {
            line = line.set("stroke-dasharray", "5,3");
        }

        let mut group = svg_element::Group::new()
            .set("class", "connector")
            .add(line)
            .add(
                svg_element::Polygon::new()
                    .set("points", points_attr(&arrow))
                    .set("fill", stroke.css()),
            );

        let mid = start.midpoint(end);
        if let Some(label) = &edge.label {
            group = group.add(pill(label, mid, theme));
        } else if edge.style == EdgeStyle::Solid && spec.decorations.connector_badges {
            group = group.add(notify_badge(Point::new(mid.x, mid.y - 20.0), theme));
        }

        doc = doc.add(group);
        connectors.push(Connector {
            from: edge.from.clone(),
            to: edge.to.clone(),
            start,
            end,
            arrow,
        });
    }

    for node in &spec.nodes {
        doc = doc.add(node_group(node, spec, theme));
    }

    if let Some(legend) = &spec.decorations.legend {
        doc = doc.add(legend_group(legend, theme));
    }

    Ok(ComposedDiagram {
        document: doc,
        node_glyphs: spec.nodes.len(),
        connectors,
    })
}

/// Compose `spec` and rasterize it to `dir/<name>.png` at `canvas * scale` pixels.
#[tracing::instrument(skip(spec, theme), fields(nodes = spec.nodes.len(), scale = spec.scale))]
pub fn render_diagram(
    spec: &DiagramSpec,
    theme: &Theme,
    dir: &Path,
    name: &str,
) -> DeckResult<RasterAsset> {
    let file = format!("{name}.png");
    validate_asset_name(&file)?;
    let composed = compose_diagram(spec, theme)?;
    let (w, h) = spec.pixel_size();
    let asset = rasterize_svg_to_file(&composed.to_svg_string(), w, h, &dir.join(file))?;
    tracing::debug!(
        path = %asset.path.display(),
        connectors = composed.connectors.len(),
        "diagram written"
    );
    Ok(asset)
}

/// Persist the vector document as `dir/<name>.svg`.
pub fn write_svg_sidecar(
    spec: &DiagramSpec,
    theme: &Theme,
    dir: &Path,
    name: &str,
) -> DeckResult<PathBuf> {
    let file = format!("{name}.svg");
    validate_asset_name(&file)?;
    let composed = compose_diagram(spec, theme)?;
    std::fs::create_dir_all(dir).with_context(|| format!("create diagram dir '{}'", dir.display()))?;
    let path = dir.join(file);
    std::fs::write(&path, composed.to_svg_string())
        .with_context(|| format!("write svg sidecar '{}'", path.display()))?;
    Ok(path)
}

fn definitions(spec: &DiagramSpec, theme: &Theme) -> svg_element::Definitions {
    let mut defs = svg_element::Definitions::new();

    if let Some(shadow) = spec.decorations.shadow {
        defs = defs.add(
            svg_element::Filter::new()
                .set("id", "shadow")
                .set("x", "-30%")
                .set("y", "-30%")
                .set("width", "160%")
                .set("height", "160%")
                .add(
                    svg_element::FilterEffectDropShadow::new()
                        .set("dx", 0)
                        .set("dy", shadow.dy)
                        .set("stdDeviation", shadow.std_dev)
                        .set("flood-color", "#000000")
                        .set("flood-opacity", shadow.opacity),
                ),
        );
    }

    let roles: BTreeSet<_> = spec.nodes.iter().map(|n| n.color_role).collect();
    for role in roles {
        let (light, dark) = role.gradient(theme);
        defs = defs.add(
            svg_element::LinearGradient::new()
                .set("id", role.gradient_id())
                .set("x1", "0%")
                .set("y1", "0%")
                .set("x2", "100%")
                .set("y2", "100%")
                .add(
                    svg_element::Stop::new()
                        .set("offset", "0%")
                        .set("stop-color", light.css()),
                )
                .add(
                    svg_element::Stop::new()
                        .set("offset", "100%")
                        .set("stop-color", dark.css()),
                ),
        );
    }

    defs
}

fn node_group(node: &Node, spec: &DiagramSpec, theme: &Theme) -> svg_element::Group {
    let c = node.center;
    let fill = format!("url(#{})", node.color_role.gradient_id());
    let on = node.color_role.text_on(theme);
    let base = node.color_role.base(theme);
    let mut group = svg_element::Group::new()
        .set("class", "node")
        .set("data-id", node.id.as_str());

    match node.shape {
        NodeShape::Circle { r } => {
            let mut glyph = svg_element::Circle::new()
                .set("cx", c.x)
                .set("cy", c.y)
                .set("r", r)
                .set("fill", fill);
            if spec.decorations.shadow.is_some() {
                glyph = glyph.set("filter", "url(#shadow)");
            }
            group = group.add(glyph);

            if let Some(caption) = &node.caption {
                group = group.add(
                    text(caption, Point::new(c.x, c.y + 8.0), 22.0, on)
                        .set("text-anchor", "middle")
                        .set("font-weight", 700),
                );
            }
            group = group.add(
                text(&node.label, Point::new(c.x, c.y + r + 20.0), 12.0, base)
                    .set("text-anchor", "middle")
                    .set("font-weight", 600),
            );
            if let Some(sub) = &node.sublabel {
                group = group.add(
                    text(sub, Point::new(c.x, c.y + r + 36.0), 9.0, theme.muted)
                        .set("text-anchor", "middle"),
                );
            }
        }
        NodeShape::RoundedBox { w, h, rx } => {
            let mut glyph = svg_element::Rectangle::new()
                .set("x", c.x - w / 2.0)
                .set("y", c.y - h / 2.0)
                .set("width", w)
                .set("height", h)
                .set("rx", rx)
                .set("fill", fill);
            if spec.decorations.shadow.is_some() {
                glyph = glyph.set("filter", "url(#shadow)");
            }
            group = group.add(glyph);

            let label_y = if node.sublabel.is_some() { c.y - 4.0 } else { c.y + 5.0 };
            group = group.add(
                text(&node.label, Point::new(c.x, label_y), 13.0, on)
                    .set("text-anchor", "middle")
                    .set("font-weight", 600),
            );
            if let Some(sub) = &node.sublabel {
                let pill_w = 24.0 + 7.0 * sub.chars().count() as f64;
                group = group
                    .add(
                        svg_element::Rectangle::new()
                            .set("x", c.x - pill_w / 2.0)
                            .set("y", c.y + 8.0)
                            .set("width", pill_w)
                            .set("height", 20)
                            .set("rx", 10)
                            .set("fill", Rgb::WHITE.css())
                            .set("fill-opacity", 0.9),
                    )
                    .add(
                        text(sub, Point::new(c.x, c.y + 22.0), 10.0, base)
                            .set("text-anchor", "middle")
                            .set("font-weight", 500),
                    );
            }
            if let Some(caption) = &node.caption {
                group = group.add(
                    text(caption, Point::new(c.x, c.y + h / 2.0 - 14.0), 10.0, on)
                        .set("text-anchor", "middle")
                        .set("fill-opacity", 0.7),
                );
            }
        }
    }

    group
}

fn pill(label: &str, at: Point, theme: &Theme) -> svg_element::Group {
    let w = 16.0 + 6.0 * label.chars().count() as f64;
    svg_element::Group::new()
        .set("class", "edge-label")
        .add(
            svg_element::Rectangle::new()
                .set("x", at.x - w / 2.0)
                .set("y", at.y - 9.0)
                .set("width", w)
                .set("height", 18)
                .set("rx", 9)
                .set("fill", PILL_FILL.css()),
        )
        .add(
            text(label, Point::new(at.x, at.y + 4.0), 9.0, theme.gray).set("text-anchor", "middle"),
        )
}

fn notify_badge(at: Point, theme: &Theme) -> svg_element::Group {
    // Bubble path is authored on a 64-unit grid centered near (32, 34).
    let transform = format!(
        "translate({:.2} {:.2}) scale(0.3) translate(-32 -34)",
        at.x, at.y
    );
    svg_element::Group::new()
        .set("class", "badge")
        .add(
            svg_element::Circle::new()
                .set("cx", at.x)
                .set("cy", at.y)
                .set("r", BADGE_R)
                .set("fill", theme.notify.css()),
        )
        .add(
            svg_element::Path::new()
                .set("d", KAKAO_BUBBLE)
                .set("fill", KAKAO_INK.css())
                .set("transform", transform),
        )
}

fn legend_group(legend: &Legend, theme: &Theme) -> svg_element::Group {
    let mut group = svg_element::Group::new().set("class", "legend").add(
        svg_element::Rectangle::new()
            .set("x", legend.origin.x)
            .set("y", legend.origin.y)
            .set("width", legend.width)
            .set("height", legend.height)
            .set("rx", 8)
            .set("fill", theme.light_gray.css()),
    );

    let slots = legend.entries.len().max(1) as f64;
    let pitch = (legend.width - 40.0) / slots;
    let mid_y = legend.origin.y + legend.height / 2.0;
    for (i, entry) in legend.entries.iter().enumerate() {
        let x = column_x(legend.origin.x + 30.0, i, pitch);
        group = group
            .add(
                svg_element::Circle::new()
                    .set("cx", x)
                    .set("cy", mid_y)
                    .set("r", 9)
                    .set("fill", entry.color.css()),
            )
            .add(text(&entry.label, Point::new(x + 18.0, mid_y + 4.0), 11.0, theme.gray));
    }
    group
}

fn text(content: &str, at: Point, size: f64, fill: Rgb) -> svg_element::Text {
    svg_element::Text::new(content)
        .set("x", at.x)
        .set("y", at.y)
        .set("font-size", size)
        .set("fill", fill.css())
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
