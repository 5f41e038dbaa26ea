use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaycastError {
    #[error("degenerate ray: start and end are the same point")]
    DegenerateRay,
    #[error("ray coordinates must be finite")]
    NonFinite,
    #[error("point {0} is outside the addressable tile range")]
    OutOfRange(glam::Vec2),
    #[error("invalid max distance: {0}")]
    InvalidDistance(f32),
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid map: {0}")]
    InvalidMap(String),
}
