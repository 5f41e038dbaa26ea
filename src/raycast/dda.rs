use glam::Vec2;
use log::trace;

use crate::grid::TileGrid;
use crate::iterators::LineIterator;
use crate::raycast::RayHit2D;
use crate::types::{Ray2, RaycastError};

/// Fast voxel traversal (Amanatides & Woo) that returns the first solid tile hit.
///
/// Cells outside the grid are walked through as if empty, so a ray starting
/// outside can still enter the grid and hit something. The tile containing
/// the ray start is never tested.
pub fn raycast_dda<G: TileGrid + ?Sized>(grid: &G, ray: &Ray2) -> Option<RayHit2D> {
    let mut steps = 0usize;
    for step in LineIterator::new(ray) {
        steps += 1;
        if grid.is_solid(step.cell) {
            let point = ray.point_at(step.distance);
            trace!(
                "hit {:?} at {:?} after {} steps (distance {})",
                step.cell, point, steps, step.distance
            );
            return Some(RayHit2D {
                point,
                cell: step.cell.as_uvec2(),
                distance: step.distance,
            });
        }
    }

    trace!(
        "miss after {} steps (max distance {})",
        steps, ray.max_distance
    );
    None
}

/// Cast from `start` toward `end`, both in tile space.
///
/// Returns the first point where the ray enters a solid tile, or `None` if
/// the ray reaches `end` first. Fails if `start == end`.
pub fn cast<G: TileGrid + ?Sized>(
    start: Vec2,
    end: Vec2,
    grid: &G,
) -> Result<Option<Vec2>, RaycastError> {
    let ray = Ray2::between(start, end)?;
    Ok(raycast_dda(grid, &ray).map(|hit| hit.point))
}

/// Cast from `start` at `angle` radians for at most `max_distance` tiles.
pub fn cast_angle<G: TileGrid + ?Sized>(
    start: Vec2,
    angle: f32,
    max_distance: f32,
    grid: &G,
) -> Result<Option<Vec2>, RaycastError> {
    let ray = Ray2::from_angle(start, angle, max_distance)?;
    Ok(raycast_dda(grid, &ray).map(|hit| hit.point))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::UVec2;

    use super::*;
    use crate::grid::{Grid2d, Tile};
    use crate::types::{FREE, OCCUPIED};

    fn test_grid(solid: &[UVec2]) -> Grid2d<Tile> {
        let mut grid = Grid2d::filled(5, 5, Tile::Empty);
        for cell in solid {
            grid.set(cell, Tile::Solid).expect("cell in bounds");
        }
        grid
    }

    #[test]
    fn hit_positive() {
        let goal = UVec2::new(4, 1);
        let grid = test_grid(&[goal]);
        let ray = Ray2::between(Vec2::ZERO, Vec2::new(20.0, 5.0)).unwrap();

        let hit = raycast_dda(&grid, &ray).expect("hit expected");
        assert_eq!(hit.cell, goal);
        assert_relative_eq!(hit.distance, 4.1231055, epsilon = 1e-4);
        assert_relative_eq!(hit.point.x, 4.0, epsilon = 1e-4);
        assert_relative_eq!(hit.point.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn miss() {
        let grid = test_grid(&[]);
        let ray = Ray2::between(Vec2::ZERO, Vec2::new(30.0, 5.0)).unwrap();
        assert!(raycast_dda(&grid, &ray).is_none());
    }

    #[test]
    fn hit_negative_x() {
        let goal = UVec2::new(0, 1);
        let grid = test_grid(&[goal]);
        let end = Vec2::new(4.0, 0.0) + Vec2::new(-3.9, 1.0).normalize() * 30.0;
        let ray = Ray2::between(Vec2::new(4.0, 0.0), end).unwrap();

        let hit = raycast_dda(&grid, &ray).expect("hit expected");
        assert_eq!(hit.cell, goal);
        assert_relative_eq!(hit.distance, 4.026176, epsilon = 1e-3);
    }

    #[test]
    fn start_tile_is_skipped() {
        let grid = test_grid(&[UVec2::new(0, 0), UVec2::new(2, 0)]);
        let hit = cast(Vec2::new(0.5, 0.5), Vec2::new(4.5, 0.5), &grid)
            .unwrap()
            .expect("hit expected");
        assert_eq!(hit, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn hit_past_end_is_ignored() {
        let grid = test_grid(&[UVec2::new(1, 0)]);
        let hit = cast(Vec2::new(0.5, 0.5), Vec2::new(0.9, 0.5), &grid).unwrap();
        assert_eq!(hit, None);

        // A crossing exactly at the end still counts.
        let hit = cast(Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.5), &grid).unwrap();
        assert_eq!(hit, Some(Vec2::new(1.0, 0.5)));
    }

    #[test]
    fn degenerate_ray_fails() {
        let grid = test_grid(&[]);
        let p = Vec2::new(1.5, 1.5);
        assert!(matches!(
            cast(p, p, &grid),
            Err(RaycastError::DegenerateRay)
        ));
        assert!(matches!(
            cast_angle(p, 1.0, 0.0, &grid),
            Err(RaycastError::DegenerateRay)
        ));
    }

    #[test]
    fn empty_grid_never_hits() {
        let grid = Grid2d::<Tile>::filled(0, 0, Tile::Solid);
        let hit = cast(Vec2::new(-1.0, -1.0), Vec2::new(5.0, 4.0), &grid).unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn occupancy_values_are_tiles() {
        let mut grid = Grid2d::filled(4, 4, FREE);
        grid.set(&UVec2::new(1, 3), OCCUPIED).unwrap();
        grid.set(&UVec2::new(1, 2), 60).unwrap();
        let hit = cast_angle(Vec2::new(1.5, 0.5), std::f32::consts::FRAC_PI_2, 10.0, &grid)
            .unwrap()
            .expect("hit expected");
        assert_relative_eq!(hit.x, 1.5, epsilon = 1e-5);
        assert_relative_eq!(hit.y, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn distance_or() {
        let grid = test_grid(&[UVec2::new(3, 3)]);
        let ray = Ray2::between(Vec2::new(0.5, 3.5), Vec2::new(4.5, 3.5)).unwrap();
        assert_eq!(RayHit2D::distance_or(raycast_dda(&grid, &ray), 99.0), 2.5);
        let ray = Ray2::between(Vec2::new(0.5, 0.5), Vec2::new(4.5, 0.5)).unwrap();
        assert_eq!(RayHit2D::distance_or(raycast_dda(&grid, &ray), 99.0), 99.0);
    }
}
