use super::Point2;

/// Positioning grid step used when the editor places or drags geometry (10 cm).
pub const SNAP_SIZE: f64 = 0.1;

/// Snaps a coordinate to the nearest multiple of [`SNAP_SIZE`].
#[must_use]
pub fn snap(v: f64) -> f64 {
    (v / SNAP_SIZE).round() * SNAP_SIZE
}

/// Snaps both coordinates of a point.
#[must_use]
pub fn snap_point(p: &Point2) -> Point2 {
    Point2::new(snap(p.x), snap(p.y))
}
