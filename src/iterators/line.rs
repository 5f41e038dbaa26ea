use std::iter::FusedIterator;

use glam::{IVec2, Vec2};

use crate::types::Ray2;
use crate::types::geometry::step_scale;

/// Walks the tile cells crossed by a ray (Amanatides & Woo).
///
/// Every item is the cell entered at a boundary crossing together with the
/// distance along the ray at which the crossing happens. The starting cell is
/// not yielded. The walk knows nothing about grid bounds and ends once the
/// next crossing lies beyond the ray's `max_distance`.
#[derive(Debug, Clone)]
pub struct LineIterator {
    max_distance: f32,
    /// Grid walking direction along each axis, -1 or +1.
    step: IVec2,
    /// Distance along the ray to the next boundary on each axis.
    ray_length: Vec2,
    /// Distance along the ray to cross one whole cell on each axis.
    step_scale: Vec2,
    /// Current cell being processed.
    cell: IVec2,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStep {
    pub cell: IVec2,
    pub distance: f32,
}

impl LineIterator {
    pub fn new(ray: &Ray2) -> Self {
        let start = ray.start;
        let step_scale = step_scale(ray.direction);
        let (step_x, length_x) = axis_params(start.x, ray.direction.x, step_scale.x);
        let (step_y, length_y) = axis_params(start.y, ray.direction.y, step_scale.y);

        Self {
            max_distance: ray.max_distance,
            step: IVec2::new(step_x, step_y),
            ray_length: Vec2::new(length_x, length_y),
            step_scale,
            // floor rather than truncation keeps negative coordinates in the
            // cell the boundary math above assumes.
            cell: start.floor().as_ivec2(),
        }
    }

    /// The cell the walk is currently in.
    pub fn cell(&self) -> IVec2 {
        self.cell
    }
}

impl Iterator for LineIterator {
    type Item = LineStep;

    fn next(&mut self) -> Option<Self::Item> {
        // X wins ties.
        let axis = if self.ray_length.x <= self.ray_length.y {
            0
        } else {
            1
        };
        let distance = self.ray_length[axis];

        // Also stops on NaN.
        if !(distance <= self.max_distance) {
            return None;
        }

        // Leaving the i32 cell range ends the walk.
        let next = self.cell[axis].checked_add(self.step[axis])?;
        self.ray_length[axis] += self.step_scale[axis];
        self.cell[axis] = next;

        Some(LineStep {
            cell: self.cell,
            distance,
        })
    }
}

impl FusedIterator for LineIterator {}

/// Step sign and distance to the first boundary for one axis.
fn axis_params(start: f32, dir: f32, step_scale: f32) -> (i32, f32) {
    // An axis the ray does not move along never has a nearest boundary. Large
    // integer starts round the boundary fraction to 0, and 0 * inf is NaN.
    if dir == 0.0 || step_scale.is_infinite() {
        return (1, f32::INFINITY);
    }
    if dir < 0.0 {
        (-1, (start - start.floor()) * step_scale)
    } else {
        (1, (start.floor() + 1.0 - start) * step_scale)
    }
}
