use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::math::distance_2d::{distance, lerp, project_param};
use crate::math::{Point2, MIN_WALL_LENGTH};
use crate::model::Wall;

use super::graph::VertexKey;

/// A straight piece of a wall after T-junction splitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

/// Tolerances used when splitting walls at T-junctions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitTolerances {
    /// Maximum perpendicular distance (m) between an endpoint and a wall for
    /// the endpoint to count as lying on it.
    pub on_wall_distance: f64,
    /// Parametric margin at each wall end; hits closer to a wall end than
    /// this are corners, not T-junctions.
    pub end_margin: f64,
    /// Hits whose parameters differ by less than this are merged.
    pub merge_param: f64,
    /// Sub-segments of this length (m) or shorter are dropped.
    pub min_segment_length: f64,
}

impl Default for SplitTolerances {
    fn default() -> Self {
        Self {
            on_wall_distance: 0.05,
            end_margin: 0.01,
            merge_param: 0.01,
            min_segment_length: 0.05,
        }
    }
}

/// Splits walls wherever another wall's endpoint lands on their interior.
///
/// The output contains no segment whose interior passes through an endpoint
/// of any input wall. Degenerate walls are skipped; collinear overlapping
/// walls are passed through and left for the graph builder to deduplicate.
#[must_use]
pub fn split_at_t_junctions(walls: &[Wall], tol: &SplitTolerances) -> Vec<Segment> {
    // Step 1: Collect unique endpoints.
    let mut seen: FxHashSet<VertexKey> = FxHashSet::default();
    let mut endpoints: Vec<Point2> = Vec::new();
    for w in walls {
        for p in [w.start, w.end] {
            if seen.insert(VertexKey::quantize(&p)) {
                endpoints.push(p);
            }
        }
    }

    // Step 2: Split each wall at the endpoints lying on its interior.
    let mut result: Vec<Segment> = Vec::with_capacity(walls.len());
    for w in walls {
        if (w.end - w.start).norm_squared() < MIN_WALL_LENGTH * MIN_WALL_LENGTH {
            continue;
        }

        let mut splits: Vec<(f64, Point2)> = endpoints
            .iter()
            .filter_map(|p| interior_param(p, w, tol).map(|t| (t, *p)))
            .collect();

        if splits.is_empty() {
            result.push(Segment {
                start: w.start,
                end: w.end,
            });
            continue;
        }

        splits.sort_by(|a, b| a.0.total_cmp(&b.0));
        splits.dedup_by(|next, kept| (next.0 - kept.0).abs() <= tol.merge_param);

        let mut prev = w.start;
        for &(_, p) in &splits {
            if distance(&prev, &p) > tol.min_segment_length {
                result.push(Segment { start: prev, end: p });
            }
            prev = p;
        }
        if distance(&prev, &w.end) > tol.min_segment_length {
            result.push(Segment {
                start: prev,
                end: w.end,
            });
        }
    }

    result
}

/// Returns the projection parameter of `p` on `wall` when `p` lies on the
/// wall's interior within tolerance.
fn interior_param(p: &Point2, wall: &Wall, tol: &SplitTolerances) -> Option<f64> {
    let t = project_param(p, &wall.start, &wall.end)?;
    if t < tol.end_margin || t > 1.0 - tol.end_margin {
        return None;
    }
    let foot = lerp(&wall.start, &wall.end, t);
    (distance(p, &foot) < tol.on_wall_distance).then_some(t)
}
