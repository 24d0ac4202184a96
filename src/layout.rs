//! Pure placement functions.
//!
//! Every position in a diagram or on a slide is derived from an index, a count, and spacing
//! constants. Nothing here touches IO or global state, so the same inputs always produce the
//! same coordinates.

use kurbo::{Point, Vec2};

use crate::foundation::{
    core::BBox,
    error::{DeckError, DeckResult},
};

/// Outline used to clip connectors at a node's edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outline {
    /// Circle of radius `r` around the center.
    Circle {
        /// Radius.
        r: f64,
    },
    /// Axis-aligned box of `w x h` centered on the node.
    Box {
        /// Width.
        w: f64,
        /// Height.
        h: f64,
    },
}

/// `base + index * pitch`.
pub fn column_x(base: f64, index: usize, pitch: f64) -> f64 {
    base + index as f64 * pitch
}

/// `count` centers on a horizontal line at `baseline`, `pitch` apart, starting at `base`.
pub fn linear_centers(base: f64, pitch: f64, baseline: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(column_x(base, i, pitch), baseline))
        .collect()
}

/// Vertical positions for `count` items stacked `pitch` apart, centered on `mid`.
pub fn stacked_y(mid: f64, index: usize, count: usize, pitch: f64) -> f64 {
    let span = count.saturating_sub(1) as f64 * pitch;
    mid - span / 2.0 + index as f64 * pitch
}

/// Cell `index` of a row-major grid with `columns` columns.
///
/// `origin` is the top-left corner of cell 0; cells are `cell.0 x cell.1` with `gap` between
/// them on both axes.
pub fn grid_cell(
    index: usize,
    columns: usize,
    origin: (f64, f64),
    cell: (f64, f64),
    gap: (f64, f64),
) -> BBox {
    let columns = columns.max(1);
    let (row, col) = (index / columns, index % columns);
    BBox::new(
        column_x(origin.0, col, cell.0 + gap.0),
        column_x(origin.1, row, cell.1 + gap.1),
        cell.0,
        cell.1,
    )
}

/// Where a ray from `center` toward `toward` leaves `outline`.
///
/// Returns `None` when the two points coincide.
pub fn boundary_point(center: Point, outline: Outline, toward: Point) -> Option<Point> {
    let d = toward - center;
    let len = d.hypot();
    if len <= f64::EPSILON {
        return None;
    }
    let unit = d / len;
    let t = match outline {
        Outline::Circle { r } => r,
        Outline::Box { w, h } => {
            let tx = if unit.x.abs() > f64::EPSILON {
                (w / 2.0) / unit.x.abs()
            } else {
                f64::INFINITY
            };
            let ty = if unit.y.abs() > f64::EPSILON {
                (h / 2.0) / unit.y.abs()
            } else {
                f64::INFINITY
            };
            tx.min(ty)
        }
    };
    Some(center + unit * t)
}

/// Endpoints of a straight connector between two nodes, clipped to both outlines.
pub fn connector_endpoints(
    from: (Point, Outline),
    to: (Point, Outline),
) -> DeckResult<(Point, Point)> {
    let start = boundary_point(from.0, from.1, to.0);
    let end = boundary_point(to.0, to.1, from.0);
    match (start, end) {
        (Some(s), Some(e)) if (e - s).dot(to.0 - from.0) > 0.0 => Ok((s, e)),
        _ => Err(DeckError::layout(format!(
            "nodes at ({:.1}, {:.1}) and ({:.1}, {:.1}) overlap; no room for a connector",
            from.0.x, from.0.y, to.0.x, to.0.y
        ))),
    }
}

/// Filled triangle with its point at `tip`, aimed along `from -> tip`.
pub fn arrowhead(from: Point, tip: Point, length: f64, half_width: f64) -> [Point; 3] {
    let d = tip - from;
    let len = d.hypot();
    let unit = if len > f64::EPSILON {
        d / len
    } else {
        Vec2::new(1.0, 0.0)
    };
    let normal = Vec2::new(-unit.y, unit.x);
    let back = tip - unit * length;
    [back + normal * half_width, tip, back - normal * half_width]
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
