//! Normalisation of machine-generated plans (for example the output of an
//! image-to-plan model) before they enter a [`FloorPlan`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::math::distance_2d::distance;
use crate::math::snap::snap;
use crate::math::TOLERANCE;
use crate::model::opening::{clamp_generated_position, DEFAULT_DOOR_WIDTH, DEFAULT_WINDOW_WIDTH};
use crate::model::{FloorPlan, Opening, Wall, WallId};

/// A raw wall as produced by a sketch importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedWall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub label: Option<String>,
}

/// A raw door or window that refers to its wall by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedOpening {
    pub wall_index: i64,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
}

/// A whole imported sketch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedSketch {
    pub walls: Vec<ImportedWall>,
    #[serde(default)]
    pub doors: Vec<ImportedOpening>,
    #[serde(default)]
    pub windows: Vec<ImportedOpening>,
}

/// Adds an imported sketch to a floor plan.
pub struct ImportPlan {
    sketch: ImportedSketch,
}

impl ImportPlan {
    /// Creates a new `ImportPlan` operation.
    #[must_use]
    pub fn new(sketch: ImportedSketch) -> Self {
        Self { sketch }
    }

    /// Executes the import.
    ///
    /// Wall endpoints are snapped to the positioning grid; walls that collapse
    /// when snapped are skipped. Doors and windows referring to a missing or
    /// skipped wall are skipped too. Missing positions become the wall
    /// midpoint and every position is kept away from the wall ends; missing
    /// or non-positive widths get the kind's default.
    ///
    /// Returns the ids of the created walls in input order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the sketch has no usable
    /// walls. The plan is unchanged on error.
    pub fn execute(&self, plan: &mut FloorPlan) -> Result<Vec<WallId>> {
        if self.sketch.walls.is_empty() {
            return Err(OperationError::InvalidInput("sketch has no walls".into()).into());
        }

        let walls: Vec<Option<Wall>> = self.sketch.walls.iter().map(snapped_wall).collect();
        if walls.iter().all(Option::is_none) {
            return Err(OperationError::InvalidInput("every sketch wall is degenerate".into()).into());
        }

        let ids: Vec<Option<WallId>> = walls
            .into_iter()
            .map(|w| w.map(|w| plan.insert_wall_unchecked(w)))
            .collect();

        let mut openings = 0_usize;
        let imported = self
            .sketch
            .doors
            .iter()
            .map(|o| (o, true))
            .chain(self.sketch.windows.iter().map(|o| (o, false)));
        for (raw, is_door) in imported {
            let Some(wall) = host(&ids, raw.wall_index) else {
                debug!(wall_index = raw.wall_index, "skipping opening without a host wall");
                continue;
            };
            let position = clamp_generated_position(raw.position.unwrap_or(0.0));
            let opening = if is_door {
                Opening::door(wall, position).with_width(width_or(raw.width, DEFAULT_DOOR_WIDTH))
            } else {
                Opening::window(wall, position).with_width(width_or(raw.width, DEFAULT_WINDOW_WIDTH))
            };
            plan.insert_opening_unchecked(opening);
            openings += 1;
        }

        let created: Vec<WallId> = ids.into_iter().flatten().collect();
        debug!(walls = created.len(), openings, "imported sketch");
        Ok(created)
    }
}

fn snapped_wall(raw: &ImportedWall) -> Option<Wall> {
    let mut wall = Wall::new(snap(raw.x1), snap(raw.y1), snap(raw.x2), snap(raw.y2));
    let length = distance(&wall.start, &wall.end);
    if length.is_nan() || length < TOLERANCE {
        warn!(x1 = raw.x1, y1 = raw.y1, x2 = raw.x2, y2 = raw.y2, "skipping degenerate sketch wall");
        return None;
    }
    if let Some(label) = &raw.label {
        wall = wall.with_label(label.clone());
    }
    Some(wall)
}

fn host(ids: &[Option<WallId>], index: i64) -> Option<WallId> {
    let index = usize::try_from(index).ok()?;
    ids.get(index).copied().flatten()
}

fn width_or(width: Option<f64>, default: f64) -> f64 {
    match width {
        Some(w) if w > 0.0 => w,
        _ => default,
    }
}
