use glam::IVec2;

use crate::types::OCCUPIED;

/// The one capability the traversal needs from a tile.
pub trait Solid {
    fn is_solid(&self) -> bool;
}

impl Solid for bool {
    #[inline]
    fn is_solid(&self) -> bool {
        *self
    }
}

/// Occupancy probability in percent, with `OCCUPIED` and above blocking.
impl Solid for i8 {
    #[inline]
    fn is_solid(&self) -> bool {
        *self >= OCCUPIED
    }
}

impl<T: Solid + ?Sized> Solid for &T {
    #[inline]
    fn is_solid(&self) -> bool {
        (**self).is_solid()
    }
}

/// Read-only view of a rectangular grid of tiles.
pub trait TileGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Solidity of the tile at `cell`. Cells outside the grid are never solid.
    fn is_solid(&self, cell: IVec2) -> bool;

    #[inline]
    fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width()
            && (cell.y as u32) < self.height()
    }
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn is_solid(&self, cell: IVec2) -> bool {
        (**self).is_solid(cell)
    }
}
