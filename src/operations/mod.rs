pub mod editing;
pub mod import;
pub mod query;
pub mod rooms;
pub mod segmentation;
