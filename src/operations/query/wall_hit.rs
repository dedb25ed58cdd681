use crate::math::distance_2d::{closest_on_segment, distance};
use crate::math::Point2;
use crate::model::{FloorPlan, WallId};

/// Default pick radius for walls, in meters.
pub const WALL_HIT_THRESHOLD: f64 = 0.6;

/// Result of a wall hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub wall: WallId,
    /// Parameter of the closest point on the wall, in `[0, 1]`.
    pub t: f64,
    /// Distance from the query point to the wall centerline.
    pub distance: f64,
}

/// Finds the wall under a point.
pub struct WallHitTest {
    point: Point2,
    threshold: f64,
}

impl WallHitTest {
    /// Creates a new `WallHitTest` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            threshold: WALL_HIT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the query.
    ///
    /// Returns the first wall, in plan order, whose centerline passes closer
    /// than the threshold. Degenerate walls are never hit.
    #[must_use]
    pub fn execute(&self, plan: &FloorPlan) -> Option<WallHit> {
        plan.walls()
            .filter(|(_, w)| !w.is_degenerate())
            .find_map(|(id, w)| {
                let (closest, t) = closest_on_segment(&self.point, &w.start, &w.end);
                let d = distance(&self.point, &closest);
                (d < self.threshold).then_some(WallHit {
                    wall: id,
                    t,
                    distance: d,
                })
            })
    }
}
