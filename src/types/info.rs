//! Tile-space metadata.

use glam::Vec2;

/// Maps between world units (pixels, meters, ...) and tile space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileSpace {
    /// Size of one tile in world units.
    pub tile_size: Vec2,
    /// World position of the corner of tile (0, 0).
    pub origin: Vec2,
}

impl Default for TileSpace {
    fn default() -> Self {
        Self {
            tile_size: Vec2::ONE,
            origin: Vec2::ZERO,
        }
    }
}

impl TileSpace {
    pub fn new(tile_size: Vec2, origin: Vec2) -> Self {
        Self { tile_size, origin }
    }

    #[inline]
    pub fn to_tile(&self, world: Vec2) -> Vec2 {
        (world - self.origin) / self.tile_size
    }

    #[inline]
    pub fn to_world(&self, tile: Vec2) -> Vec2 {
        self.origin + tile * self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_to_tile_to_world() {
        let space = TileSpace::new(Vec2::new(32.0, 16.0), Vec2::new(-8.0, 4.0));
        let world = Vec2::new(60.0, 40.0);
        let tile = space.to_tile(world);
        assert_eq!(tile, Vec2::new(2.125, 2.25));
        assert_eq!(space.to_world(tile), world);
    }

    #[test]
    fn default_is_identity() {
        let space = TileSpace::default();
        let p = Vec2::new(1.125, 7.5);
        assert_eq!(space.to_tile(p), p);
        assert_eq!(space.to_world(p), p);
    }
}
