use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("Orbit map is empty, no root body exists")]
    EmptyMap,

    #[error("Body not found in orbit map: {0}")]
    BodyNotFound(String),

    #[error("Body orbits nothing, transfers are undefined for it: {0}")]
    NotInOrbit(String),

    #[error("No transfer route from {from} to {to}, map is disconnected")]
    Unreachable {
        from: String,
        to: String,
    },

    #[error("Cycle detected in orbit relations starting at: {0}")]
    CycleDetected(String),

    #[error("Map file not found: {0}")]
    MapNotFound(PathBuf),

    #[error("Failed to read map file: {0}")]
    ReadError(#[from] std::io::Error),
}

pub type OrbitResult<T> = Result<T, OrbitError>;
