pub mod grid2d;
pub mod tile;
pub mod traits;

pub use grid2d::Grid2d;
pub use tile::Tile;
pub use traits::{Solid, TileGrid};
