pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod raycast;
pub mod types;

pub use grid::{Grid2d, Solid, Tile, TileGrid};
pub use loaders::tilemap::{TileMap, load_tile_map, parse_tile_map};
pub use raycast::{RayHit2D, cast, cast_angle, raycast_dda};
pub use types::{Ray2, RaycastError, TileSpace};
