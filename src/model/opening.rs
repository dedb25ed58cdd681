use serde::{Deserialize, Serialize};

use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a door or window in the floor plan.
    pub struct OpeningId;
}

pub const DEFAULT_DOOR_WIDTH: f64 = 0.9;
pub const DEFAULT_DOOR_HEIGHT: f64 = 2.1;
pub const DEFAULT_WINDOW_WIDTH: f64 = 1.2;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 1.2;
pub const DEFAULT_SILL_HEIGHT: f64 = 0.9;

/// Range that machine-generated opening positions are clamped to, so that
/// openings never land on a wall corner.
pub const GENERATED_POSITION_RANGE: (f64, f64) = (0.05, 0.95);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    #[default]
    Standard,
    Sliding,
    French,
    SlidingGlass,
    Arcade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowStyle {
    #[default]
    Standard,
    /// Full-height glazed bay.
    Bay,
}

/// Door- or window-specific attributes of an opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OpeningKind {
    Door {
        #[serde(default)]
        style: DoorStyle,
        /// Hinge on the other side.
        #[serde(default)]
        flip: bool,
        #[serde(default)]
        swing_out: bool,
    },
    Window {
        /// Gap between the floor and the bottom of the opening.
        sill_height: f64,
        #[serde(default)]
        style: WindowStyle,
    },
}

/// A door or window cut into a wall.
///
/// `position` is the parametric location of the opening's center along its
/// host wall. Openings that overlap each other or run past the wall ends are
/// valid; they get clamped when the wall is segmented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub wall: WallId,
    pub kind: OpeningKind,
    pub position: f64,
    pub width: f64,
    pub height: f64,
}

impl Opening {
    /// Creates a standard door with default dimensions.
    #[must_use]
    pub fn door(wall: WallId, position: f64) -> Self {
        Self {
            wall,
            kind: OpeningKind::Door {
                style: DoorStyle::Standard,
                flip: false,
                swing_out: false,
            },
            position,
            width: DEFAULT_DOOR_WIDTH,
            height: DEFAULT_DOOR_HEIGHT,
        }
    }

    /// Creates a standard window with default dimensions and sill.
    #[must_use]
    pub fn window(wall: WallId, position: f64) -> Self {
        Self {
            wall,
            kind: OpeningKind::Window {
                sill_height: DEFAULT_SILL_HEIGHT,
                style: WindowStyle::Standard,
            },
            position,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the sill height. Doors have no sill, so this is a no-op for them.
    #[must_use]
    pub fn with_sill_height(mut self, sill: f64) -> Self {
        if let OpeningKind::Window { sill_height, .. } = &mut self.kind {
            *sill_height = sill;
        }
        self
    }

    #[must_use]
    pub fn is_door(&self) -> bool {
        matches!(self.kind, OpeningKind::Door { .. })
    }

    #[must_use]
    pub fn is_window(&self) -> bool {
        matches!(self.kind, OpeningKind::Window { .. })
    }

    /// Sill height, `0` for doors.
    #[must_use]
    pub fn sill_height(&self) -> f64 {
        match self.kind {
            OpeningKind::Door { .. } => 0.0,
            OpeningKind::Window { sill_height, .. } => sill_height,
        }
    }

    /// Opening height; a non-positive stored height falls back to the kind's
    /// default.
    #[must_use]
    pub fn effective_height(&self) -> f64 {
        if self.height > 0.0 {
            return self.height;
        }
        match self.kind {
            OpeningKind::Door { .. } => DEFAULT_DOOR_HEIGHT,
            OpeningKind::Window { .. } => DEFAULT_WINDOW_HEIGHT,
        }
    }

    /// Height of the top edge of the opening above the floor.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.sill_height() + self.effective_height()
    }

    /// Extent of the opening along a wall of the given length, as
    /// `(start, end)` clamped to `[0, length]`. Negative widths count as zero.
    #[must_use]
    pub fn projected_range(&self, wall_length: f64) -> (f64, f64) {
        let center = self.position * wall_length;
        let half = self.width.max(0.0) / 2.0;
        let start = (center - half).clamp(0.0, wall_length.max(0.0));
        let end = (center + half).clamp(0.0, wall_length.max(0.0));
        (start, end)
    }
}

/// Normalises a machine-generated parametric position: a missing (zero or
/// NaN) value becomes the wall midpoint, then the value is clamped to
/// [`GENERATED_POSITION_RANGE`].
#[must_use]
pub fn clamp_generated_position(position: f64) -> f64 {
    let (lo, hi) = GENERATED_POSITION_RANGE;
    let position = if position == 0.0 || position.is_nan() {
        0.5
    } else {
        position
    };
    position.clamp(lo, hi)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn door_defaults() {
        let d = Opening::door(WallId::default(), 0.5);
        assert!(d.is_door());
        assert_abs_diff_eq!(d.width, DEFAULT_DOOR_WIDTH);
        assert_abs_diff_eq!(d.top(), DEFAULT_DOOR_HEIGHT);
        assert_abs_diff_eq!(d.sill_height(), 0.0);
    }

    #[test]
    fn window_top_includes_sill() {
        let w = Opening::window(WallId::default(), 0.5);
        assert!(w.is_window());
        assert_abs_diff_eq!(w.top(), DEFAULT_SILL_HEIGHT + DEFAULT_WINDOW_HEIGHT);

        let w = w.with_sill_height(0.3).with_height(2.0);
        assert_abs_diff_eq!(w.top(), 2.3, epsilon = 1e-12);
    }

    #[test]
    fn sill_ignored_for_doors() {
        let d = Opening::door(WallId::default(), 0.5).with_sill_height(1.0);
        assert_abs_diff_eq!(d.sill_height(), 0.0);
    }

    #[test]
    fn zero_height_falls_back_to_default() {
        let d = Opening::door(WallId::default(), 0.5).with_height(0.0);
        assert_abs_diff_eq!(d.effective_height(), DEFAULT_DOOR_HEIGHT);
    }

    #[test]
    fn projection_clamps_to_wall() {
        let d = Opening::door(WallId::default(), 0.05).with_width(1.0);
        let (s, e) = d.projected_range(4.0);
        assert_abs_diff_eq!(s, 0.0);
        assert_abs_diff_eq!(e, 0.7);

        let d = Opening::door(WallId::default(), 1.2).with_width(1.0);
        let (s, e) = d.projected_range(4.0);
        assert_abs_diff_eq!(s, 4.0);
        assert_abs_diff_eq!(e, 4.0);

        let d = Opening::door(WallId::default(), 0.5).with_width(-1.0);
        let (s, e) = d.projected_range(4.0);
        assert_abs_diff_eq!(s, 2.0);
        assert_abs_diff_eq!(e, 2.0);
    }

    #[test]
    fn generated_positions_are_clamped() {
        assert_abs_diff_eq!(clamp_generated_position(0.0), 0.5);
        assert_abs_diff_eq!(clamp_generated_position(f64::NAN), 0.5);
        assert_abs_diff_eq!(clamp_generated_position(0.01), 0.05);
        assert_abs_diff_eq!(clamp_generated_position(1.3), 0.95);
        assert_abs_diff_eq!(clamp_generated_position(0.3), 0.3);
    }

    #[test]
    fn kind_is_tagged_in_json() {
        let w = Opening::window(WallId::default(), 0.25);
        let value = serde_json::to_value(&w).unwrap();
        assert_eq!(value["kind"]["type"], "window");
        assert_eq!(value["kind"]["sill_height"], 0.9);
    }
}
