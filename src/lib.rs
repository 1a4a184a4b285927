//! Orbit map analyzer.
//!
//! Parses `PARENT)CHILD` relationship lines into an arena-backed tree of
//! orbiting bodies and answers the classic questions about it: the total
//! orbit count checksum, the shortest transfer route between two bodies'
//! orbit targets, and structural queries (root, leaves, depth) used by
//! display layers.
//!
//! The map is built once per input and treated as immutable; when the input
//! changes, rebuild and drop the old arena.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod transfer;
pub mod util;

pub use arena::{BodyData, OrbitArena, OrbitNode};
pub use builder::MapBuilder;
pub use display::ToTermTree;
pub use errors::{OrbitError, OrbitResult};
pub use transfer::shortest_transfers;

/// Build an orbit map from newline-separated `PARENT)CHILD` text.
pub fn build_from_str(input: &str) -> OrbitResult<OrbitArena> {
    MapBuilder::new().build_from_str(input)
}

/// Total orbit count checksum for `input`, the sum of every body's depth.
pub fn total_orbit_count(input: &str) -> OrbitResult<usize> {
    Ok(build_from_str(input)?.total_orbits())
}
