use std::path::Path;

use glam::Vec2;
use log::debug;
use serde::Deserialize;

use crate::grid::{Grid2d, Tile};
use crate::types::{DEFAULT_SOLID_MARKER, RaycastError, TileSpace};

#[derive(Debug, Deserialize)]
struct TileMapMetadata {
    rows: Vec<String>,
    #[serde(default = "default_solid", deserialize_with = "deserialize_marker")]
    solid: char,
    #[serde(default = "default_tile_size")]
    tile_size: [f32; 2],
    #[serde(default)]
    origin: [f32; 2],
}

fn default_solid() -> char {
    DEFAULT_SOLID_MARKER
}

fn default_tile_size() -> [f32; 2] {
    [1.0, 1.0]
}

fn deserialize_marker<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), None) => Ok(marker),
        _ => Err(serde::de::Error::custom(
            "solid marker must be exactly one character",
        )),
    }
}

/// A tile grid together with the tile-space mapping it was authored in.
#[derive(Debug, Clone)]
pub struct TileMap {
    pub grid: Grid2d<Tile>,
    pub space: TileSpace,
}

pub fn load_tile_map(yaml_path: impl AsRef<Path>) -> Result<TileMap, RaycastError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let map = parse_tile_map(&yaml_str)?;
    debug!(
        "loaded {}x{} tile map from {}",
        map.grid.width(),
        map.grid.height(),
        yaml_path.display()
    );
    Ok(map)
}

/// Parse a YAML tile map. Row 0 is the first entry of `rows`.
pub fn parse_tile_map(yaml_str: &str) -> Result<TileMap, RaycastError> {
    let metadata: TileMapMetadata = serde_yaml::from_str(yaml_str)?;

    if metadata.tile_size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return Err(RaycastError::InvalidMap(
            "tile_size must be positive".to_string(),
        ));
    }
    if metadata.origin.iter().any(|o| !o.is_finite()) {
        return Err(RaycastError::InvalidMap(
            "origin must be finite".to_string(),
        ));
    }

    let solid = metadata.solid;
    let grid = Grid2d::from_rows(
        metadata
            .rows
            .iter()
            .map(|row| row.chars().map(move |c| Tile::from_solid(c == solid))),
    )?;

    let space = TileSpace::new(
        Vec2::from_array(metadata.tile_size),
        Vec2::from_array(metadata.origin),
    );

    Ok(TileMap { grid, space })
}
