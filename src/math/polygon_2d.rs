use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise, in a y-up frame.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of the polygon's vertices.
///
/// This is not the area centroid; room labels are placed at the vertex mean.
#[must_use]
pub fn vertex_centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2::new(sx / n, sy / n))
}

/// Rounds a length to centimeter precision.
#[must_use]
pub fn round_cm(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Rounds both coordinates of a point to centimeter precision.
#[must_use]
pub fn round_point_cm(p: &Point2) -> Point2 {
    Point2::new(round_cm(p.x), round_cm(p.y))
}
