use kurbo::Point;

use super::*;
use crate::config::Theme;

fn chain(ids: &[&str]) -> DiagramSpec {
    let centers = crate::layout::linear_centers(50.0, 100.0, 60.0, ids.len());
    DiagramSpec {
        canvas_width: 100.0 * ids.len() as f64,
        canvas_height: 120.0,
        scale: 1.0,
        nodes: ids
            .iter()
            .zip(centers)
            .map(|(id, center)| Node {
                id: id.to_string(),
                center,
                label: id.to_string(),
                sublabel: None,
                caption: None,
                color_role: ColorRole::Navy,
                shape: NodeShape::Circle { r: 30.0 },
            })
            .collect(),
        edges: ids.windows(2).map(|w| Edge::solid(w[0], w[1])).collect(),
        decorations: Decorations::default(),
    }
}

#[test]
fn empty_spec_is_config_error() {
    let mut spec = chain(&["a"]);
    spec.nodes.clear();
    spec.edges.clear();
    let err = compose_diagram(&spec, &Theme::default()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn unknown_edge_target_is_config_error() {
    let mut spec = chain(&["a", "b"]);
    spec.edges.push(Edge::solid("b", "zz"));
    let err = compose_diagram(&spec, &Theme::default()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("unknown node 'zz'"));
}

#[test]
fn duplicate_node_id_is_config_error() {
    let mut spec = chain(&["a", "b"]);
    spec.nodes[1].id = "a".to_string();
    spec.edges.clear();
    assert!(spec.validate().unwrap_err().is_config());
}

#[test]
fn bad_scale_is_config_error() {
    let spec = chain(&["a", "b"]).with_scale(0.0);
    assert!(spec.validate().unwrap_err().is_config());
}

#[test]
fn process_flow_has_six_glyphs_and_five_arrows() {
    let theme = Theme::default();
    let spec = presets::process_flow(&theme);
    let ids: Vec<_> = spec.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["10", "20", "30", "40", "50", "60"]);

    let composed = compose_diagram(&spec, &theme).unwrap();
    assert_eq!(composed.node_glyphs, 6);
    assert_eq!(composed.connectors.len(), 5);

    let svg = composed.to_svg_string();
    assert_eq!(svg.matches("class=\"node\"").count(), 6);
    assert_eq!(svg.matches("class=\"connector\"").count(), 5);
    assert_eq!(svg.matches("class=\"badge\"").count(), 5);
    assert!(svg.contains("feDropShadow"));
    assert!(svg.contains("class=\"legend\""));
}

#[test]
fn connectors_end_on_node_outlines() {
    let theme = Theme::default();
    let spec = presets::process_flow(&theme);
    let composed = compose_diagram(&spec, &theme).unwrap();
    for c in &composed.connectors {
        let from = spec.node(&c.from).unwrap().center;
        let to = spec.node(&c.to).unwrap().center;
        assert!(((c.start - from).hypot() - 40.0).abs() < 1e-9);
        assert!(((c.end - to).hypot() - 40.0).abs() < 1e-9);
        assert_eq!(c.arrow[1], c.end);
    }
    assert_eq!(composed.connectors[0].start, Point::new(140.0, 120.0));
}

#[test]
fn architecture_uses_dashed_labeled_links() {
    let spec = presets::architecture();
    spec.validate().unwrap();
    assert_eq!(spec.decorations.tier_captions.len(), 3);
    assert!(spec.edges.iter().all(|e| e.style == EdgeStyle::Dashed));

    let svg = compose_diagram(&spec, &Theme::default())
        .unwrap()
        .to_svg_string();
    assert!(svg.contains("stroke-dasharray=\"5,3\""));
    assert_eq!(svg.matches("class=\"edge-label\"").count(), 3);
    assert!(svg.contains("REST API"));
    assert!(svg.contains("grad-slate"));
}

#[test]
fn plain_dashed_edge_has_no_label() {
    let edge = Edge::dashed_plain("web", "server");
    assert_eq!(edge.style, EdgeStyle::Dashed);
    assert_eq!(edge.label, None);

    let spec = presets::architecture();
    let web = spec.edges.iter().find(|e| e.from == "web").unwrap();
    assert_eq!(web, &edge);
}

#[test]
fn render_writes_canvas_sized_png_and_sidecar() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = Theme::default();
    let spec = presets::process_flow(&theme);

    let asset = render_diagram(&spec, &theme, tmp.path(), "process_flow").unwrap();
    assert_eq!((asset.width, asset.height), (900, 300));
    let img = image::open(&asset.path).unwrap();
    assert_eq!((img.width(), img.height()), (900, 300));

    let half = render_diagram(&spec.clone().with_scale(0.5), &theme, tmp.path(), "small").unwrap();
    assert_eq!((half.width, half.height), (450, 150));

    let svg = write_svg_sidecar(&spec, &theme, tmp.path(), "process_flow").unwrap();
    let text = std::fs::read_to_string(svg).unwrap();
    assert!(text.starts_with("<svg"));
}

#[test]
fn compose_is_deterministic() {
    let theme = Theme::default();
    let a = compose_diagram(&presets::architecture(), &theme).unwrap();
    let b = compose_diagram(&presets::architecture(), &theme).unwrap();
    assert_eq!(a.to_svg_string(), b.to_svg_string());
}
