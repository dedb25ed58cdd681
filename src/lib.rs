//! Planar floor-plan geometry engine.
//!
//! Turns an unordered set of wall segments into enclosed rooms and cuts
//! doors and windows out of walls. Detection and segmentation are pure
//! functions over caller-provided snapshots; [`model::FloorPlan`] is the
//! arena the editing layer mutates between passes.

pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{PlanError, Result};
pub use model::{FloorPlan, Opening, OpeningId, OpeningKind, Room, Wall, WallId, WallStyle};
pub use operations::editing::{MakeCorridor, MoveWall};
pub use operations::import::{ImportPlan, ImportedSketch};
pub use operations::query::{OpeningHitTest, RoomLabelHitTest, RoomVertexHitTest, WallHitTest};
pub use operations::rooms::{detect_rooms, DetectRooms, DetectionConfig};
pub use operations::segmentation::{SegmentWall, SpanKind, WallSpan};
