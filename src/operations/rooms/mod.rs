//! Room detection: T-junction splitting, planar graph construction and
//! face enumeration over a snapshot of walls.

pub mod faces;
pub mod graph;
pub mod junction;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::math::bounds_2d::Bounds2;
use crate::math::polygon_2d::{round_cm, round_point_cm, signed_area_2d, vertex_centroid};
use crate::math::Point2;
use crate::model::{Room, Wall};

use self::faces::{enumerate_faces, FaceWalk};
use self::graph::PlanarGraph;
use self::junction::{split_at_t_junctions, SplitTolerances};

/// Thresholds for room detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Fewer walls than this yield no rooms.
    pub min_walls: usize,
    /// Faces smaller than this (m²) are noise.
    pub min_room_area: f64,
    /// Faces larger than this fraction of the wall set's bounding-box area
    /// are taken to be the building exterior.
    pub exterior_area_ratio: f64,
    pub split: SplitTolerances,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_walls: 3,
            min_room_area: 0.5,
            exterior_area_ratio: 0.8,
            split: SplitTolerances::default(),
        }
    }
}

/// Detects the enclosed rooms of a set of walls.
pub struct DetectRooms<'a> {
    walls: &'a [Wall],
    config: DetectionConfig,
}

impl<'a> DetectRooms<'a> {
    /// Creates a new `DetectRooms` operation with default thresholds.
    #[must_use]
    pub fn new(walls: &'a [Wall]) -> Self {
        Self {
            walls,
            config: DetectionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DetectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the detection.
    ///
    /// Never fails: malformed faces are dropped and an under-specified wall
    /// set yields an empty list. Calling it twice on the same walls gives the
    /// same rooms in the same order.
    #[must_use]
    pub fn execute(&self) -> Vec<Room> {
        let usable = self.walls.iter().filter(|w| !w.is_degenerate()).count();
        if usable < self.config.min_walls {
            debug!(walls = usable, "too few walls for room detection");
            return Vec::new();
        }

        let segments = split_at_t_junctions(self.walls, &self.config.split);
        let graph = PlanarGraph::build(&segments);
        trace!(
            segments = segments.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built wall graph"
        );

        let mut candidates: Vec<(Vec<Point2>, f64)> = Vec::new();
        for walk in enumerate_faces(&graph) {
            let ids = match walk {
                FaceWalk::Closed(ids) => ids,
                FaceWalk::Malformed(reason) => {
                    debug!(?reason, "dropping malformed face");
                    continue;
                }
            };
            if ids.len() < 3 {
                continue;
            }
            let polygon: Vec<Point2> = ids.iter().filter_map(|&i| graph.vertex(i).copied()).collect();
            let area = signed_area_2d(&polygon);
            if area < self.config.min_room_area {
                continue;
            }
            candidates.push((polygon, area));
        }

        // A lone candidate is the only enclosed space, however much of the
        // bounding box it fills.
        if candidates.len() > 1 {
            let limit = self.bounding_area() * self.config.exterior_area_ratio;
            candidates.retain(|(_, area)| *area <= limit);
        }

        let rooms: Vec<Room> = candidates
            .into_iter()
            .filter_map(|(polygon, area)| {
                let centroid = vertex_centroid(&polygon)?;
                Some(Room {
                    polygon: polygon.iter().map(round_point_cm).collect(),
                    centroid: round_point_cm(&centroid),
                    area: round_cm(area),
                })
            })
            .collect();

        debug!(rooms = rooms.len(), walls = self.walls.len(), "room detection finished");
        rooms
    }

    fn bounding_area(&self) -> f64 {
        let points = self
            .walls
            .iter()
            .filter(|w| !w.is_degenerate())
            .flat_map(|w| [&w.start, &w.end]);
        Bounds2::from_points(points)
            .map_or(0.0, |b| b.area())
    }
}

/// Detects rooms with the default thresholds.
#[must_use]
pub fn detect_rooms(walls: &[Wall]) -> Vec<Room> {
    DetectRooms::new(walls).execute()
}
