pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::RaycastError;
pub use geometry::Ray2;
pub use info::TileSpace;
