use crate::error::{GeometryError, Result};
use crate::math::distance_2d::distance;
use crate::math::snap::snap_point;
use crate::math::{Vector2, TOLERANCE};
use crate::model::{FloorPlan, WallId};

/// Translates a wall and re-snaps both endpoints to the positioning grid.
pub struct MoveWall {
    wall: WallId,
    displacement: Vector2,
}

impl MoveWall {
    /// Creates a new `MoveWall` operation.
    #[must_use]
    pub fn new(wall: WallId, displacement: Vector2) -> Self {
        Self { wall, displacement }
    }

    /// Executes the move, modifying the wall in place. Hosted openings keep
    /// their parametric positions and follow the wall.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if the wall is not in the plan,
    /// or `GeometryError::Degenerate` if snapping would collapse it. The
    /// wall is left unchanged on error.
    pub fn execute(&self, plan: &mut FloorPlan) -> Result<()> {
        let wall = plan.wall_mut(self.wall)?;
        let start = snap_point(&(wall.start + self.displacement));
        let end = snap_point(&(wall.end + self.displacement));
        if distance(&start, &end) < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "moved wall collapses to ({}, {})",
                start.x, start.y
            ))
            .into());
        }
        wall.start = start;
        wall.end = end;
        Ok(())
    }
}
