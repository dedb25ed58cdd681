mod opening_hit;
mod room_hit;
mod wall_hit;

pub use opening_hit::{OpeningHit, OpeningHitTest};
pub use room_hit::{RoomLabelHitTest, RoomVertexHit, RoomVertexHitTest};
pub use wall_hit::{WallHit, WallHitTest};
