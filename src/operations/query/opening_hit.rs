use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::model::{FloorPlan, OpeningId};

/// Default pick radius for openings, in meters.
pub const OPENING_HIT_THRESHOLD: f64 = 1.0;

/// Result of an opening hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningHit {
    pub opening: OpeningId,
    /// World position of the opening's center.
    pub anchor: Point2,
    pub distance: f64,
}

/// Finds the opening nearest to a point.
pub struct OpeningHitTest {
    point: Point2,
    threshold: f64,
}

impl OpeningHitTest {
    /// Creates a new `OpeningHitTest` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            threshold: OPENING_HIT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the query.
    ///
    /// Openings are compared by the world position of their center; the
    /// nearest one closer than the threshold wins. Openings whose host wall
    /// is missing are skipped.
    #[must_use]
    pub fn execute(&self, plan: &FloorPlan) -> Option<OpeningHit> {
        let mut best: Option<OpeningHit> = None;
        for (id, opening) in plan.openings() {
            let Ok(wall) = plan.wall(opening.wall) else {
                continue;
            };
            let anchor = wall.point_at(opening.position);
            let d = distance(&self.point, &anchor);
            let limit = best.map_or(self.threshold, |b| b.distance);
            if d < limit {
                best = Some(OpeningHit {
                    opening: id,
                    anchor,
                    distance: d,
                });
            }
        }
        best
    }
}
