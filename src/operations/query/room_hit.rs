use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::model::Room;

/// Default pick radius for room labels and polygon handles, in meters.
pub const ROOM_HIT_THRESHOLD: f64 = 0.8;

/// A polygon vertex picked on one of the rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomVertexHit {
    /// Index into the room list the query ran on.
    pub room: usize,
    /// Index into that room's polygon.
    pub vertex: usize,
    pub distance: f64,
}

/// Finds the room polygon vertex nearest to a point.
pub struct RoomVertexHitTest {
    point: Point2,
    threshold: f64,
}

impl RoomVertexHitTest {
    /// Creates a new `RoomVertexHitTest` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            threshold: ROOM_HIT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the query. Rooms with fewer than three vertices are skipped.
    #[must_use]
    pub fn execute(&self, rooms: &[Room]) -> Option<RoomVertexHit> {
        let mut best: Option<RoomVertexHit> = None;
        for (room, r) in rooms.iter().enumerate() {
            if r.vertex_count() < 3 {
                continue;
            }
            for (vertex, p) in r.polygon.iter().enumerate() {
                let d = distance(&self.point, p);
                if d < best.map_or(self.threshold, |b| b.distance) {
                    best = Some(RoomVertexHit {
                        room,
                        vertex,
                        distance: d,
                    });
                }
            }
        }
        best
    }
}

/// Finds the room whose label (centroid) is under a point.
pub struct RoomLabelHitTest {
    point: Point2,
    threshold: f64,
}

impl RoomLabelHitTest {
    /// Creates a new `RoomLabelHitTest` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            threshold: ROOM_HIT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the query, returning the index of the first room whose
    /// centroid is closer than the threshold.
    #[must_use]
    pub fn execute(&self, rooms: &[Room]) -> Option<usize> {
        rooms
            .iter()
            .position(|r| distance(&self.point, &r.centroid) < self.threshold)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn room(x0: f64, y0: f64, size: f64) -> Room {
        Room {
            polygon: vec![
                Point2::new(x0, y0),
                Point2::new(x0 + size, y0),
                Point2::new(x0 + size, y0 + size),
                Point2::new(x0, y0 + size),
            ],
            centroid: Point2::new(x0 + size / 2.0, y0 + size / 2.0),
            area: size * size,
        }
    }

    #[test]
    fn vertex_hit_picks_nearest_across_rooms() {
        let rooms = vec![room(0.0, 0.0, 4.0), room(4.0, 0.0, 4.0)];
        // (4, 0) is shared; the first room's copy is found first and the
        // second is not strictly closer.
        let hit = RoomVertexHitTest::new(Point2::new(4.1, 0.1)).execute(&rooms).unwrap();
        assert_eq!((hit.room, hit.vertex), (0, 1));

        let hit = RoomVertexHitTest::new(Point2::new(7.9, 3.9)).execute(&rooms).unwrap();
        assert_eq!((hit.room, hit.vertex), (1, 2));
    }

    #[test]
    fn vertex_hit_misses_far_points() {
        let rooms = vec![room(0.0, 0.0, 4.0)];
        assert!(RoomVertexHitTest::new(Point2::new(2.0, 2.0)).execute(&rooms).is_none());
    }

    #[test]
    fn label_hit_uses_centroid() {
        let rooms = vec![room(0.0, 0.0, 4.0), room(4.0, 0.0, 4.0)];
        assert_eq!(RoomLabelHitTest::new(Point2::new(6.3, 2.2)).execute(&rooms), Some(1));
        assert_eq!(RoomLabelHitTest::new(Point2::new(4.0, 2.0)).execute(&rooms), None);
        assert_eq!(
            RoomLabelHitTest::new(Point2::new(4.0, 2.0))
                .with_threshold(2.5)
                .execute(&rooms),
            Some(0)
        );
    }
}
