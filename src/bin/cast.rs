use std::error::Error;
use std::time::Instant;

use glam::Vec2;
use log::debug;

use tile_raycast::{Ray2, load_tile_map, raycast_dda};

const USAGE: &str = "usage: cast <map.yaml> <x0> <y0> <x1> <y1>";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let coords = args[1..]
        .iter()
        .map(|arg| arg.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;

    let map = load_tile_map(&args[0])?;

    // Coordinates are given in the map's world units.
    let start = map.space.to_tile(Vec2::new(coords[0], coords[1]));
    let end = map.space.to_tile(Vec2::new(coords[2], coords[3]));
    let ray = Ray2::between(start, end)?;

    let started = Instant::now();
    let hit = raycast_dda(&map.grid, &ray);
    debug!("cast took {:?}", started.elapsed());

    match hit {
        Some(hit) => {
            let world = map.space.to_world(hit.point);
            println!(
                "hit {} {} (tile {} {}, distance {})",
                world.x, world.y, hit.cell.x, hit.cell.y, hit.distance
            );
        }
        None => println!("miss"),
    }

    Ok(())
}
