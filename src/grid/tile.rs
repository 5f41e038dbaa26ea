use crate::grid::Solid;

/// Minimal tile type for maps that only distinguish walls from open floor.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
}

impl Tile {
    pub fn from_solid(solid: bool) -> Self {
        if solid { Self::Solid } else { Self::Empty }
    }

    /// Flip between solid and empty.
    pub fn toggle(&mut self) {
        *self = Self::from_solid(!self.is_solid());
    }
}

impl Solid for Tile {
    #[inline]
    fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}
