use proptest::prelude::*;

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn column_x_matches_card_rows() {
    assert!(close(column_x(0.6, 0, 2.35), 0.6));
    assert!(close(column_x(0.6, 3, 2.35), 7.65));
}

#[test]
fn linear_centers_share_baseline() {
    let pts = linear_centers(100.0, 130.0, 120.0, 6);
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[5], Point::new(750.0, 120.0));
    assert!(pts.iter().all(|p| p.y == 120.0));
}

#[test]
fn stacked_y_is_centered() {
    assert!(close(stacked_y(205.0, 0, 2, 130.0), 140.0));
    assert!(close(stacked_y(205.0, 1, 2, 130.0), 270.0));
    assert!(close(stacked_y(200.0, 0, 1, 130.0), 200.0));
}

#[test]
fn grid_cell_wraps_rows() {
    let c = grid_cell(3, 2, (0.5, 1.5), (4.0, 1.6), (0.5, 0.3));
    assert!(close(c.x, 5.0));
    assert!(close(c.y, 3.4));
    assert!(close(c.w, 4.0));
    let first = grid_cell(0, 0, (1.0, 1.0), (1.0, 1.0), (0.0, 0.0));
    assert_eq!(first, BBox::new(1.0, 1.0, 1.0, 1.0));
}

#[test]
fn circle_connectors_stop_at_radius() {
    let (s, e) = connector_endpoints(
        (Point::new(100.0, 120.0), Outline::Circle { r: 40.0 }),
        (Point::new(230.0, 120.0), Outline::Circle { r: 40.0 }),
    )
    .unwrap();
    assert_eq!(s, Point::new(140.0, 120.0));
    assert_eq!(e, Point::new(190.0, 120.0));
}

#[test]
fn box_connectors_stop_at_edges() {
    let (s, e) = connector_endpoints(
        (Point::new(120.0, 140.0), Outline::Box { w: 160.0, h: 120.0 }),
        (Point::new(400.0, 140.0), Outline::Box { w: 220.0, h: 210.0 }),
    )
    .unwrap();
    assert!(close(s.x, 200.0));
    assert!(close(e.x, 290.0));
}

#[test]
fn overlapping_nodes_are_layout_errors() {
    let err = connector_endpoints(
        (Point::new(0.0, 0.0), Outline::Circle { r: 40.0 }),
        (Point::new(50.0, 0.0), Outline::Circle { r: 40.0 }),
    )
    .unwrap_err();
    assert!(err.to_string().contains("layout error"));
    assert!(boundary_point(Point::ZERO, Outline::Circle { r: 1.0 }, Point::ZERO).is_none());
}

#[test]
fn arrowhead_points_along_connector() {
    let [a, tip, b] = arrowhead(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 10.0, 4.0);
    assert_eq!(tip, Point::new(10.0, 0.0));
    assert_eq!(a, Point::new(0.0, 4.0));
    assert_eq!(b, Point::new(0.0, -4.0));
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn chain_has_one_connector_fewer_than_nodes(
        count in 1usize..12,
        r in 5.0f64..40.0,
        gap in 1.0f64..60.0,
    ) {
        let pitch = 2.0 * r + gap;
        let centers = linear_centers(50.0, pitch, 100.0, count);
        let outline = Outline::Circle { r };
        let connectors: Vec<_> = centers
            .windows(2)
            .map(|w| connector_endpoints((w[0], outline), (w[1], outline)).unwrap())
            .collect();
        prop_assert_eq!(connectors.len(), count - 1);
        for ((s, e), w) in connectors.iter().zip(centers.windows(2)) {
            prop_assert!(((*s - w[0]).hypot() - r).abs() < 1e-6);
            prop_assert!(((*e - w[1]).hypot() - r).abs() < 1e-6);
            prop_assert!(*s != w[0] && *e != w[1]);
        }
    }

    #[test]
    fn box_boundary_lies_on_an_edge(
        c in point_strategy(),
        t in point_strategy(),
        w in 1.0f64..300.0,
        h in 1.0f64..300.0,
    ) {
        prop_assume!((t - c).hypot() > 1e-3);
        let p = boundary_point(c, Outline::Box { w, h }, t).unwrap();
        let dx = (p.x - c.x).abs();
        let dy = (p.y - c.y).abs();
        prop_assert!(dx <= w / 2.0 + 1e-6 && dy <= h / 2.0 + 1e-6);
        prop_assert!((dx - w / 2.0).abs() < 1e-6 || (dy - h / 2.0).abs() < 1e-6);
    }

    #[test]
    fn grid_cells_never_overlap(i in 0usize..40, j in 0usize..40, cols in 1usize..6) {
        prop_assume!(i != j);
        let a = grid_cell(i, cols, (0.0, 0.0), (2.0, 1.0), (0.25, 0.25));
        let b = grid_cell(j, cols, (0.0, 0.0), (2.0, 1.0), (0.25, 0.25));
        let disjoint = a.right() <= b.x || b.right() <= a.x || a.bottom() <= b.y || b.bottom() <= a.y;
        prop_assert!(disjoint);
    }
}
