use glam::{UVec2, Vec2};

pub mod dda;

pub use dda::{cast, cast_angle, raycast_dda};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit2D {
    /// Point where the ray enters the solid tile (tile space).
    pub point: Vec2,
    /// Grid cell that contains the first hit.
    pub cell: UVec2,
    /// Distance from the ray start to `point`.
    pub distance: f32,
}

impl RayHit2D {
    /// Extract hit distance, or return `default` if miss.
    pub fn distance_or(hit: Option<Self>, default: f32) -> f32 {
        hit.map(|h| h.distance).unwrap_or(default)
    }
}
