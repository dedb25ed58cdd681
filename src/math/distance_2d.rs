use super::{Point2, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns the parameter `t` of the orthogonal projection of `p` onto the
/// infinite line through `a` and `b`, with `t = 0` at `a` and `t = 1` at `b`.
///
/// Returns `None` for a degenerate segment.
#[must_use]
pub fn project_param(p: &Point2, a: &Point2, b: &Point2) -> Option<f64> {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return None;
    }
    Some((p - a).dot(&d) / len_sq)
}

/// Returns the point at parameter `t` along `a → b` (not clamped).
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Returns the closest point to `p` on segment `a → b` and its parameter,
/// clamped to `[0, 1]`.
#[must_use]
pub fn closest_on_segment(p: &Point2, a: &Point2, b: &Point2) -> (Point2, f64) {
    match project_param(p, a, b) {
        Some(t) => {
            let t = t.clamp(0.0, 1.0);
            (lerp(a, b, t), t)
        }
        None => (*a, 0.0),
    }
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let (closest, _) = closest_on_segment(p, a, b);
    distance(p, &closest)
}
