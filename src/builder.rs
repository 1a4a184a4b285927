use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::arena::OrbitArena;
use crate::errors::{OrbitError, OrbitResult};

/// Parses `PARENT)CHILD` relationship lines into an [`OrbitArena`].
///
/// Parsing is lenient: lines without the `)` separator or with an empty
/// token on either side are skipped, not reported. Everything else is an
/// undirected fact about the map and ends up in the arena.
pub struct MapBuilder;

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MapBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build_from_file(&self, map_path: &Path) -> OrbitResult<OrbitArena> {
        if !map_path.exists() {
            return Err(OrbitError::MapNotFound(map_path.to_path_buf()));
        }
        let input = fs::read_to_string(map_path)?;
        self.build_from_str(&input)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn build_from_str(&self, input: &str) -> OrbitResult<OrbitArena> {
        let mut arena = OrbitArena::new();

        for line in input.trim().lines() {
            let mut tokens = line.split(')');
            match (tokens.next(), tokens.next()) {
                (Some(parent), Some(child)) if !parent.is_empty() && !child.is_empty() => {
                    let parent_idx = arena.get_or_insert(parent);
                    let child_idx = arena.get_or_insert(child);
                    arena.link(parent_idx, child_idx);
                }
                _ => {
                    debug!("skipping malformed line: {:?}", line);
                }
            }
        }

        self.assign_depths(&mut arena)?;
        Ok(arena)
    }

    /// Second pass: each body's depth is the length of its ancestor chain,
    /// found by repeated parent traversal. A chain longer than the body
    /// count can only mean the input linked bodies into a cycle.
    #[instrument(level = "debug", skip_all)]
    fn assign_depths(&self, arena: &mut OrbitArena) -> OrbitResult<()> {
        let body_count = arena.len();
        let indices: Vec<_> = arena.iter_all().collect();

        for idx in indices {
            let mut depth = 0;
            let mut current = arena.get_node(idx).and_then(|n| n.parent);
            while let Some(ancestor) = current {
                depth += 1;
                if depth > body_count {
                    let id = arena
                        .get_node(idx)
                        .map(|n| n.data.id.clone())
                        .unwrap_or_default();
                    return Err(OrbitError::CycleDetected(id));
                }
                current = arena.get_node(ancestor).and_then(|n| n.parent);
            }
            if let Some(node) = arena.get_node_mut(idx) {
                node.depth = depth;
            }
        }
        Ok(())
    }
}
