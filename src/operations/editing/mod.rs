mod make_corridor;
mod move_wall;

pub use make_corridor::MakeCorridor;
pub use move_wall::MoveWall;
