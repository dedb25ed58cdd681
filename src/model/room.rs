use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A room detected as a bounded face of the wall graph.
///
/// Rooms are derived data: they are recomputed wholesale by every detection
/// pass and carry no identity between passes. All values are rounded to
/// centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Boundary, counter-clockwise in a y-up frame.
    pub polygon: Vec<Point2>,
    /// Mean of the boundary vertices.
    pub centroid: Point2,
    /// Area in square meters.
    pub area: f64,
}

impl Room {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }
}
