use serde::{Deserialize, Serialize};

use crate::math::distance_2d::{distance, lerp};
use crate::math::{Point2, Vector2, MIN_WALL_LENGTH};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the floor plan.
    pub struct WallId;
}

/// Default wall thickness in meters.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.15;

/// Default wall height in meters.
pub const DEFAULT_WALL_HEIGHT: f64 = 2.8;

/// Height used for barrier walls whose stored height is unset.
pub const BARRIER_HEIGHT: f64 = 1.0;

/// Thickness used for barrier walls whose stored thickness is unset.
pub const BARRIER_THICKNESS: f64 = 0.08;

/// Construction style of a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallStyle {
    #[default]
    Standard,
    /// Low railing or balustrade.
    Barrier,
    LoadBearing,
}

/// A straight wall from `start` to `end`, in plan meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub height: f64,
    #[serde(default)]
    pub style: WallStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Wall {
    /// Creates a standard wall with default thickness and height.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_points(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Creates a standard wall between two points.
    #[must_use]
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            thickness: DEFAULT_WALL_THICKNESS,
            height: DEFAULT_WALL_HEIGHT,
            style: WallStyle::Standard,
            label: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: WallStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Length of the wall's centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    /// Returns `true` for walls too short to take part in geometry passes.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < MIN_WALL_LENGTH
    }

    /// Unit direction from `start` to `end`, or `None` for a degenerate wall.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        if self.is_degenerate() {
            return None;
        }
        Some((self.end - self.start) / self.length())
    }

    /// Left-pointing unit normal of the centerline.
    #[must_use]
    pub fn left_normal(&self) -> Option<Vector2> {
        self.direction().map(|d| Vector2::new(-d.y, d.x))
    }

    /// Point at parametric position `t` along the wall (`0` = start, `1` = end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        lerp(&self.start, &self.end, t)
    }

    /// Height used for geometry: non-positive stored heights fall back to the
    /// style's default.
    #[must_use]
    pub fn effective_height(&self) -> f64 {
        if self.height > 0.0 {
            self.height
        } else if self.style == WallStyle::Barrier {
            BARRIER_HEIGHT
        } else {
            DEFAULT_WALL_HEIGHT
        }
    }

    /// Thickness used for geometry, with the same fallback rule as
    /// [`Wall::effective_height`].
    #[must_use]
    pub fn effective_thickness(&self) -> f64 {
        if self.thickness > 0.0 {
            self.thickness
        } else if self.style == WallStyle::Barrier {
            BARRIER_THICKNESS
        } else {
            DEFAULT_WALL_THICKNESS
        }
    }
}
