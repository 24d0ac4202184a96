//! The two diagrams shipped with the deck.
//!
//! Both are built from the same primitives; only the layout functions and decorations differ.

use kurbo::Point;

use crate::{
    config::Theme,
    diagram::spec::{
        ColorRole, Decorations, DiagramSpec, DropShadow, Edge, Legend, LegendEntry, Node,
        NodeShape, TierCaption,
    },
    layout::{column_x, linear_centers, stacked_y},
};

const TIER_BASE: f64 = 120.0;
const TIER_PITCH: f64 = 280.0;
const STACK_PITCH: f64 = 130.0;

const FLOW_BASE: f64 = 100.0;
const FLOW_PITCH: f64 = 130.0;
const FLOW_BASELINE: f64 = 120.0;
const FLOW_RADIUS: f64 = 40.0;

struct TierBox {
    id: &'static str,
    label: &'static str,
    sublabel: Option<&'static str>,
    caption: Option<&'static str>,
    role: ColorRole,
    size: (f64, f64, f64),
}

/// Clients, server, and data stores in three columns joined by dashed, labeled links.
pub fn architecture() -> DiagramSpec {
    let tiers: [(&str, f64, Vec<TierBox>); 3] = [
        (
            "CLIENT",
            205.0,
            vec![
                TierBox {
                    id: "mobile",
                    label: "Mobile App",
                    sublabel: Some("Flutter"),
                    caption: None,
                    role: ColorRole::Blue,
                    size: (160.0, 120.0, 16.0),
                },
                TierBox {
                    id: "web",
                    label: "Web Admin",
                    sublabel: Some("React"),
                    caption: None,
                    role: ColorRole::Green,
                    size: (160.0, 120.0, 16.0),
                },
            ],
        ),
        (
            "SERVER",
            200.0,
            vec![TierBox {
                id: "server",
                label: "Backend Server",
                sublabel: Some("Spring Boot"),
                caption: Some("REST API / Jeus 8.x"),
                role: ColorRole::Navy,
                size: (220.0, 210.0, 20.0),
            }],
        ),
        (
            "DATA",
            195.0,
            vec![
                TierBox {
                    id: "db",
                    label: "Tibero 6.x",
                    sublabel: None,
                    caption: None,
                    role: ColorRole::Slate,
                    size: (160.0, 100.0, 12.0),
                },
                TierBox {
                    id: "kakao",
                    label: "카카오톡 API",
                    sublabel: None,
                    caption: None,
                    role: ColorRole::Notify,
                    size: (160.0, 100.0, 12.0),
                },
            ],
        ),
    ];

    let mut nodes = Vec::new();
    let mut tier_captions = Vec::new();
    for (tier, (caption, mid, boxes)) in tiers.into_iter().enumerate() {
        let x = column_x(TIER_BASE, tier, TIER_PITCH);
        tier_captions.push(TierCaption {
            at: Point::new(x, 35.0),
            text: caption.to_string(),
        });
        let count = boxes.len();
        for (i, b) in boxes.into_iter().enumerate() {
            let (w, h, rx) = b.size;
            nodes.push(Node {
                id: b.id.to_string(),
                center: Point::new(x, stacked_y(mid, i, count, STACK_PITCH)),
                label: b.label.to_string(),
                sublabel: b.sublabel.map(str::to_string),
                caption: b.caption.map(str::to_string),
                color_role: b.role,
                shape: NodeShape::RoundedBox { w, h, rx },
            });
        }
    }

    DiagramSpec {
        canvas_width: 800.0,
        canvas_height: 400.0,
        scale: 1.0,
        nodes,
        edges: vec![
            Edge::dashed("mobile", "server", "REST API"),
            Edge::dashed_plain("web", "server"),
            Edge::dashed("server", "db", "JPA"),
            Edge::dashed("server", "kakao", "알림톡 API"),
        ],
        decorations: Decorations {
            shadow: Some(DropShadow {
                dy: 4.0,
                std_dev: 8.0,
                opacity: 0.15,
            }),
            tier_captions,
            connector_badges: false,
            legend: None,
        },
    }
}

struct Stage {
    code: &'static str,
    name: &'static str,
    actor: &'static str,
    role: ColorRole,
}

const STAGES: [Stage; 6] = [
    Stage {
        code: "10",
        name: "수리요청",
        actor: "신고자(내부)",
        role: ColorRole::Navy,
    },
    Stage {
        code: "20",
        name: "승인",
        actor: "승인권자(내부)",
        role: ColorRole::Green,
    },
    Stage {
        code: "30",
        name: "고장접수",
        actor: "정비업체(외부)",
        role: ColorRole::Orange,
    },
    Stage {
        code: "40",
        name: "수리시작",
        actor: "정비업체(외부)",
        role: ColorRole::Orange,
    },
    Stage {
        code: "50",
        name: "수리완료",
        actor: "정비업체(외부)",
        role: ColorRole::Orange,
    },
    Stage {
        code: "60",
        name: "종료",
        actor: "신고자(내부)",
        role: ColorRole::Navy,
    },
];

/// Six maintenance stages in a row, each hop announced by a notification badge.
pub fn process_flow(theme: &Theme) -> DiagramSpec {
    let centers = linear_centers(FLOW_BASE, FLOW_PITCH, FLOW_BASELINE, STAGES.len());
    let nodes: Vec<Node> = STAGES
        .iter()
        .zip(centers)
        .map(|(stage, center)| Node {
            id: stage.code.to_string(),
            center,
            label: stage.name.to_string(),
            sublabel: Some(stage.actor.to_string()),
            caption: Some(stage.code.to_string()),
            color_role: stage.role,
            shape: NodeShape::Circle { r: FLOW_RADIUS },
        })
        .collect();
    let edges = nodes
        .windows(2)
        .map(|pair| Edge::solid(pair[0].id.as_str(), pair[1].id.as_str()))
        .collect();

    DiagramSpec {
        canvas_width: 900.0,
        canvas_height: 300.0,
        scale: 1.0,
        nodes,
        edges,
        decorations: Decorations {
            shadow: Some(DropShadow {
                dy: 4.0,
                std_dev: 6.0,
                opacity: 0.2,
            }),
            tier_captions: Vec::new(),
            connector_badges: true,
            legend: Some(Legend {
                origin: Point::new(280.0, 240.0),
                width: 340.0,
                height: 40.0,
                entries: vec![
                    LegendEntry {
                        color: theme.navy,
                        label: "내부 사용자".to_string(),
                    },
                    LegendEntry {
                        color: theme.orange,
                        label: "외부 정비업체".to_string(),
                    },
                    LegendEntry {
                        color: theme.notify,
                        label: "알림".to_string(),
                    },
                ],
            }),
        },
    }
}
