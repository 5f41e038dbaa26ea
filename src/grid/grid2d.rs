use glam::{IVec2, UVec2};

use crate::grid::{Solid, TileGrid};
use crate::types::RaycastError;

/// Dense row-major tile storage. Row 0 is the first row of `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(width: u32, height: u32, data: Vec<T>) -> Result<Self, RaycastError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(RaycastError::InvalidDimensions(format!(
                "data length {} does not match map size {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn filled(width: u32, height: u32, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        }
    }

    /// Build a grid from equally sized rows, row 0 first.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, RaycastError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut width = None;
        let mut height = 0u32;
        for (row, tiles) in rows.into_iter().enumerate() {
            let before = data.len();
            data.extend(tiles);
            let len = data.len() - before;
            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(RaycastError::RaggedRows { row, len, expected });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        let width = u32::try_from(width).map_err(|_| {
            RaycastError::InvalidDimensions(format!("row width {width} is too large"))
        })?;
        // A grid of empty rows has no tiles at all.
        let height = if width == 0 { 0 } else { height };
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, pos: &UVec2) -> Option<&T> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        let idx = self.index(pos);
        Some(&self.data[idx])
    }

    pub fn get_mut(&mut self, pos: &UVec2) -> Option<&mut T> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        let idx = self.index(pos);
        Some(&mut self.data[idx])
    }

    pub fn set(&mut self, pos: &UVec2, value: T) -> Result<(), RaycastError> {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(RaycastError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for map {}x{}",
                pos.x, pos.y, self.width, self.height
            ))),
        }
    }

    fn index(&self, pos: &UVec2) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }
}

impl<T: Solid> TileGrid for Grid2d<T> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn is_solid(&self, cell: IVec2) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.data[self.index(&cell.as_uvec2())].is_solid()
    }
}
