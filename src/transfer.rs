use std::collections::{HashMap, VecDeque};

use generational_arena::Index;
use tracing::instrument;

use crate::arena::OrbitArena;
use crate::errors::{OrbitError, OrbitResult};

/// Shortest sequence of orbital transfers between the bodies `from_id` and
/// `to_id` are orbiting.
///
/// The tree is treated as undirected: each body's neighbors are its children
/// plus its parent. Breadth-first search from `from_id`'s parent guarantees
/// minimality; on an intact tree there is exactly one route anyway.
///
/// The returned hops end at `to_id`'s orbit target and exclude `from_id`'s,
/// so the length is the transfer count.
#[instrument(level = "debug", skip(arena))]
pub fn shortest_transfers(
    arena: &OrbitArena,
    from_id: &str,
    to_id: &str,
) -> OrbitResult<Vec<Index>> {
    let start = orbit_target(arena, from_id)?;
    let goal = orbit_target(arena, to_id)?;

    let mut frontier = VecDeque::new();
    frontier.push_back(start);
    let mut came_from: HashMap<Index, Index> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        for next in neighbors(arena, current) {
            if next != start && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                frontier.push_back(next);
            }
        }
    }

    // Walk the came-from chain backward from the goal, then flip it
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        current = *came_from.get(&current).ok_or_else(|| OrbitError::Unreachable {
            from: from_id.to_string(),
            to: to_id.to_string(),
        })?;
    }
    path.reverse();
    Ok(path)
}

fn orbit_target(arena: &OrbitArena, id: &str) -> OrbitResult<Index> {
    let idx = arena
        .find(id)
        .ok_or_else(|| OrbitError::BodyNotFound(id.to_string()))?;
    arena
        .get_node(idx)
        .and_then(|n| n.parent)
        .ok_or_else(|| OrbitError::NotInOrbit(id.to_string()))
}

fn neighbors(arena: &OrbitArena, idx: Index) -> Vec<Index> {
    let mut neighbors = Vec::new();
    if let Some(node) = arena.get_node(idx) {
        neighbors.extend(node.children.iter().copied());
        if let Some(parent) = node.parent {
            neighbors.push(parent);
        }
    }
    neighbors
}
