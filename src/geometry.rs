//! Geometry predicates used by the circular range search.
//!
//! Both predicates are boundary-inclusive, and the rectangle test never
//! rejects a rectangle that actually touches the circle; the search's
//! pruning is only correct because of that.

/// Returns whether the circle and the axis-aligned rectangle share any
/// area or boundary.
///
/// The circle center is clamped onto the rectangle and the squared
/// distance to the clamped point is compared against the squared radius,
/// so tangent contact counts as an intersection. The rectangle is given
/// by its upper-left corner `(x1, y1)` and lower-right corner
/// `(x2, y2)`.
pub fn circle_intersects_rectangle(
    cx: f64,
    cy: f64,
    cr: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let closest_x = cx.max(x1).min(x2);
    let closest_y = cy.max(y1).min(y2);
    let dx = closest_x - cx;
    let dy = closest_y - cy;
    dx * dx + dy * dy <= cr * cr
}

/// Returns whether the point lies within or on the circle.
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= cr * cr
}
