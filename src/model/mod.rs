pub mod opening;
pub mod presets;
pub mod room;
pub mod wall;

pub use opening::{DoorStyle, Opening, OpeningId, OpeningKind, WindowStyle};
pub use room::Room;
pub use wall::{Wall, WallId, WallStyle};

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::{GeometryError, ModelError, Result};
use crate::math::distance_2d::distance;
use crate::math::{Point2, TOLERANCE};
use crate::operations::rooms::DetectRooms;
use crate::operations::segmentation::{SegmentWall, WallSpan};

/// Arena that owns the walls and openings of one floor.
///
/// Openings refer to their host wall by [`WallId`]; removing a wall removes
/// its openings. Rooms are not stored here: they are derived on demand with
/// [`FloorPlan::detect_rooms`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    walls: SlotMap<WallId, Wall>,
    openings: SlotMap<OpeningId, Opening>,
}

impl FloorPlan {
    /// Creates a new, empty floor plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if both endpoints coincide.
    pub fn add_wall(&mut self, wall: Wall) -> Result<WallId> {
        if distance(&wall.start, &wall.end) < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "wall endpoints coincide at ({}, {})",
                wall.start.x, wall.start.y
            ))
            .into());
        }
        Ok(self.walls.insert(wall))
    }

    /// Returns a reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall".into()).into())
    }

    /// Returns a mutable reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut Wall> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall".into()).into())
    }

    /// Removes a wall together with every opening hosted by it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn remove_wall(&mut self, id: WallId) -> Result<Wall> {
        let wall = self
            .walls
            .remove(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall".into()))?;
        self.openings.retain(|_, o| o.wall != id);
        Ok(wall)
    }

    /// Iterates over all walls in insertion-slot order.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall)> {
        self.walls.iter()
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Copies the current walls into an immutable snapshot for detection.
    #[must_use]
    pub fn walls_snapshot(&self) -> Vec<Wall> {
        self.walls.values().cloned().collect()
    }

    // --- Opening operations ---

    /// Inserts an opening and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DanglingOpening` if the host wall is not in the
    /// plan, or `GeometryError::ParameterOutOfRange` if the position is not
    /// within `[0, 1]`, the width is negative or either dimension is not
    /// finite.
    pub fn add_opening(&mut self, opening: Opening) -> Result<OpeningId> {
        if !self.walls.contains_key(opening.wall) {
            return Err(ModelError::DanglingOpening.into());
        }
        check_range("position", opening.position, 0.0, 1.0)?;
        check_range("width", opening.width, 0.0, f64::MAX)?;
        // Non-positive heights are allowed and fall back to the kind's default.
        check_range("height", opening.height, f64::MIN, f64::MAX)?;
        Ok(self.openings.insert(opening))
    }

    /// Returns a reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn opening(&self, id: OpeningId) -> Result<&Opening> {
        self.openings
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()).into())
    }

    /// Returns a mutable reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn opening_mut(&mut self, id: OpeningId) -> Result<&mut Opening> {
        self.openings
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()).into())
    }

    /// Removes an opening. The host wall is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn remove_opening(&mut self, id: OpeningId) -> Result<Opening> {
        self.openings
            .remove(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()).into())
    }

    /// Iterates over all openings.
    pub fn openings(&self) -> impl Iterator<Item = (OpeningId, &Opening)> {
        self.openings.iter()
    }

    /// Iterates over the openings hosted by `wall`.
    pub fn openings_on(&self, wall: WallId) -> impl Iterator<Item = (OpeningId, &Opening)> {
        self.openings.iter().filter(move |(_, o)| o.wall == wall)
    }

    #[must_use]
    pub fn opening_count(&self) -> usize {
        self.openings.len()
    }

    /// World position of the opening's center on its host wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening or its host wall is missing.
    pub fn opening_anchor(&self, id: OpeningId) -> Result<Point2> {
        let opening = self.opening(id)?;
        let wall = self.wall(opening.wall)?;
        Ok(wall.point_at(opening.position))
    }

    // --- Derived geometry ---

    /// Runs room detection over a snapshot of the current walls.
    #[must_use]
    pub fn detect_rooms(&self) -> Vec<Room> {
        DetectRooms::new(&self.walls_snapshot()).execute()
    }

    /// Splits a wall into the solid spans left around its openings.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found in the plan.
    pub fn segment_wall(&self, id: WallId) -> Result<Vec<WallSpan>> {
        let wall = self.wall(id)?;
        if wall.is_degenerate() {
            return Ok(Vec::new());
        }
        let spans = SegmentWall::new(
            wall.length(),
            wall.effective_height(),
            self.openings_on(id).map(|(_, o)| o),
        )
        .execute();
        Ok(spans)
    }

    pub(crate) fn insert_wall_unchecked(&mut self, wall: Wall) -> WallId {
        self.walls.insert(wall)
    }

    pub(crate) fn insert_opening_unchecked(&mut self, opening: Opening) -> OpeningId {
        self.openings.insert(opening)
    }
}

fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(GeometryError::ParameterOutOfRange {
        parameter,
        value,
        min,
        max,
    }
    .into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::operations::segmentation::SpanKind;
    use approx::assert_abs_diff_eq;

    fn plan_with_wall() -> (FloorPlan, WallId) {
        let mut plan = FloorPlan::new();
        let id = plan.add_wall(Wall::new(0.0, 0.0, 4.0, 0.0)).unwrap();
        (plan, id)
    }

    #[test]
    fn add_and_get_wall() {
        let (plan, id) = plan_with_wall();
        assert_eq!(plan.wall_count(), 1);
        assert_abs_diff_eq!(plan.wall(id).unwrap().length(), 4.0);
    }

    #[test]
    fn coincident_endpoints_rejected() {
        let mut plan = FloorPlan::new();
        let err = plan.add_wall(Wall::new(1.0, 1.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, PlanError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn opening_requires_host_wall() {
        let (mut plan, id) = plan_with_wall();
        plan.remove_wall(id).unwrap();
        let err = plan.add_opening(Opening::door(id, 0.5)).unwrap_err();
        assert!(matches!(err, PlanError::Model(ModelError::DanglingOpening)));
    }

    #[test]
    fn opening_position_must_be_parametric() {
        let (mut plan, id) = plan_with_wall();
        for position in [-0.1, 1.5, f64::NAN] {
            let err = plan.add_opening(Opening::door(id, position)).unwrap_err();
            assert!(matches!(
                err,
                PlanError::Geometry(GeometryError::ParameterOutOfRange { .. })
            ));
        }
        assert!(plan.add_opening(Opening::door(id, 1.0)).is_ok());
        assert_eq!(plan.opening_count(), 1);
    }

    #[test]
    fn opening_dimensions_must_be_finite() {
        let (mut plan, id) = plan_with_wall();
        let bad = [
            Opening::door(id, 0.5).with_width(-0.9),
            Opening::door(id, 0.5).with_width(f64::NAN),
            Opening::window(id, 0.5).with_width(f64::INFINITY),
            Opening::window(id, 0.5).with_height(f64::NAN),
        ];
        for opening in bad {
            let err = plan.add_opening(opening).unwrap_err();
            assert!(matches!(
                err,
                PlanError::Geometry(GeometryError::ParameterOutOfRange { .. })
            ));
        }
        assert_eq!(plan.opening_count(), 0);

        // Zero height falls back to the default; zero width is a no-op cut.
        plan.add_opening(Opening::door(id, 0.5).with_height(0.0)).unwrap();
        plan.add_opening(Opening::window(id, 0.5).with_width(0.0)).unwrap();
        assert_eq!(plan.opening_count(), 2);
    }

    #[test]
    fn removing_wall_cascades_to_openings() {
        let (mut plan, id) = plan_with_wall();
        let other = plan.add_wall(Wall::new(0.0, 0.0, 0.0, 3.0)).unwrap();
        plan.add_opening(Opening::door(id, 0.3)).unwrap();
        plan.add_opening(Opening::window(id, 0.7)).unwrap();
        let kept = plan.add_opening(Opening::window(other, 0.5)).unwrap();

        plan.remove_wall(id).unwrap();

        assert_eq!(plan.opening_count(), 1);
        assert!(plan.opening(kept).is_ok());
        assert!(plan.wall(id).is_err());
    }

    #[test]
    fn removing_opening_keeps_wall() {
        let (mut plan, id) = plan_with_wall();
        let door = plan.add_opening(Opening::door(id, 0.5)).unwrap();
        plan.remove_opening(door).unwrap();
        assert!(plan.wall(id).is_ok());
        assert!(plan.remove_opening(door).is_err());
    }

    #[test]
    fn openings_on_filters_by_host() {
        let (mut plan, id) = plan_with_wall();
        let other = plan.add_wall(Wall::new(0.0, 0.0, 0.0, 3.0)).unwrap();
        plan.add_opening(Opening::door(id, 0.3)).unwrap();
        plan.add_opening(Opening::window(other, 0.5)).unwrap();
        assert_eq!(plan.openings_on(id).count(), 1);
        assert_eq!(plan.openings_on(other).count(), 1);
    }

    #[test]
    fn opening_anchor_on_wall() {
        let (mut plan, id) = plan_with_wall();
        let door = plan.add_opening(Opening::door(id, 0.25)).unwrap();
        let p = plan.opening_anchor(door).unwrap();
        assert_abs_diff_eq!(p.x, 1.0);
        assert_abs_diff_eq!(p.y, 0.0);
    }

    #[test]
    fn segment_wall_uses_hosted_openings() {
        let (mut plan, id) = plan_with_wall();
        plan.add_opening(Opening::door(id, 0.5)).unwrap();
        let spans = plan.segment_wall(id).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].kind, SpanKind::Above);
    }

    #[test]
    fn detect_rooms_on_plan() {
        let mut plan = FloorPlan::new();
        for w in [
            Wall::new(0.0, 0.0, 5.0, 0.0),
            Wall::new(5.0, 0.0, 5.0, 4.0),
            Wall::new(5.0, 4.0, 0.0, 4.0),
            Wall::new(0.0, 4.0, 0.0, 0.0),
        ] {
            plan.add_wall(w).unwrap();
        }
        let rooms = plan.detect_rooms();
        assert_eq!(rooms.len(), 1);
        assert_abs_diff_eq!(rooms[0].area, 20.0);
    }

    #[test]
    fn json_round_trip() {
        let (mut plan, id) = plan_with_wall();
        plan.add_opening(Opening::window(id, 0.5)).unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        let restored: FloorPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.wall_count(), 1);
        assert_eq!(restored.wall(id).unwrap(), plan.wall(id).unwrap());
        assert_eq!(restored.openings_on(id).count(), 1);
    }
}
