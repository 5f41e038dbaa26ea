//! Vector primitives shared by the traversal and its callers.
//!
//! All positions are in tile space: the integer part of a coordinate selects
//! the tile and the fractional part is the offset inside it.

use glam::Vec2;

use crate::types::RaycastError;

/// Tile coordinates are `i32`; `2^31` is the first value past `i32::MAX`.
const CELL_LIMIT: f32 = 2_147_483_648.0;

/// A ray reduced to its traversal form: a start point, a unit direction and
/// the distance the ray may travel before it is exhausted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2 {
    pub start: Vec2,
    /// Unit length.
    pub direction: Vec2,
    pub max_distance: f32,
}

impl Ray2 {
    /// Ray from `start` toward `end`, travelling exactly as far as `end`.
    ///
    /// Both points must lie in tiles addressable with `i32` coordinates.
    pub fn between(start: Vec2, end: Vec2) -> Result<Self, RaycastError> {
        let direction = ray_direction(start, end)?;
        for point in [start, end] {
            if !in_cell_range(point) {
                return Err(RaycastError::OutOfRange(point));
            }
        }
        let max_distance = distance(start, end);
        if !max_distance.is_finite() {
            return Err(RaycastError::InvalidDistance(max_distance));
        }
        Ok(Self {
            start,
            direction,
            max_distance,
        })
    }

    /// Ray leaving `start` at `angle` radians, travelling at most `max_distance`.
    pub fn from_angle(start: Vec2, angle: f32, max_distance: f32) -> Result<Self, RaycastError> {
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(RaycastError::InvalidDistance(max_distance));
        }
        if !angle.is_finite() {
            return Err(RaycastError::NonFinite);
        }
        Self::between(start, end_from_angle(start, angle, max_distance))
    }

    /// Point reached after travelling `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.direction * t
    }

    /// Point at which the ray runs out of distance.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.point_at(self.max_distance)
    }
}

/// Unit vector pointing from `start` to `end`.
pub fn ray_direction(start: Vec2, end: Vec2) -> Result<Vec2, RaycastError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(RaycastError::NonFinite);
    }
    let delta = end - start;
    if delta.length_squared() == 0.0 {
        return Err(RaycastError::DegenerateRay);
    }
    let direction = delta.normalize();
    // Very small deltas can underflow during normalization.
    if !direction.is_finite() {
        return Err(RaycastError::DegenerateRay);
    }
    Ok(direction)
}

fn in_cell_range(point: Vec2) -> bool {
    let cell = point.floor();
    cell.cmpge(Vec2::splat(-CELL_LIMIT)).all() && cell.cmplt(Vec2::splat(CELL_LIMIT)).all()
}

/// End point of a ray described by an angle and a travel distance.
#[inline]
pub fn end_from_angle(start: Vec2, angle: f32, max_distance: f32) -> Vec2 {
    start + Vec2::from_angle(angle) * max_distance
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Distance travelled along the ray for one full unit of travel along each
/// axis on its own.
///
/// An axis the ray does not move along gets an infinite scale, so it never
/// becomes the nearest boundary.
pub fn step_scale(direction: Vec2) -> Vec2 {
    let ratio_x = direction.y / direction.x;
    let ratio_y = direction.x / direction.y;
    Vec2::new(
        (1.0 + ratio_x * ratio_x).sqrt(),
        (1.0 + ratio_y * ratio_y).sqrt(),
    )
}
