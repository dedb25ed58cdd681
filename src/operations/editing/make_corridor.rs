use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::distance_2d::distance;
use crate::math::snap::snap_point;
use crate::math::TOLERANCE;
use crate::model::{FloorPlan, Wall, WallId};

/// Replaces a wall by a corridor: two parallel walls offset by half the
/// corridor width on either side, closed by two end caps.
pub struct MakeCorridor {
    wall: WallId,
    width: f64,
}

impl MakeCorridor {
    /// Creates a new `MakeCorridor` operation.
    #[must_use]
    pub fn new(wall: WallId, width: f64) -> Self {
        Self { wall, width }
    }

    /// Executes the operation.
    ///
    /// Returns the new walls as `[left, right, start cap, end cap]`, where
    /// left is the side of the original wall's left normal. All endpoints are
    /// snapped to the positioning grid and every new wall takes the original
    /// height. The original wall and its openings are removed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a non-positive width,
    /// `ModelError::EntityNotFound` for an unknown wall, or
    /// `GeometryError::Degenerate` if the wall has no direction or snapping
    /// collapses one of the new walls. The plan is unchanged on error.
    pub fn execute(&self, plan: &mut FloorPlan) -> Result<[WallId; 4]> {
        if self.width.is_nan() || self.width <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "corridor width must be positive, got {}",
                self.width
            ))
            .into());
        }

        let original = plan.wall(self.wall)?;
        let normal = original
            .left_normal()
            .ok_or_else(|| GeometryError::Degenerate("corridor along a zero-length wall".into()))?;
        let offset = normal * (self.width / 2.0);

        let left_start = snap_point(&(original.start + offset));
        let left_end = snap_point(&(original.end + offset));
        let right_start = snap_point(&(original.start - offset));
        let right_end = snap_point(&(original.end - offset));

        let height = original.height;
        let walls = [
            (left_start, left_end),
            (right_start, right_end),
            (left_start, right_start),
            (left_end, right_end),
        ]
        .map(|(start, end)| Wall::from_points(start, end).with_height(height));

        if let Some(w) = walls.iter().find(|w| distance(&w.start, &w.end) < TOLERANCE) {
            return Err(GeometryError::Degenerate(format!(
                "corridor wall collapses at ({}, {})",
                w.start.x, w.start.y
            ))
            .into());
        }

        plan.remove_wall(self.wall)?;
        let ids = walls.map(|w| plan.insert_wall_unchecked(w));
        debug!(width = self.width, "replaced wall by corridor");
        Ok(ids)
    }
}
