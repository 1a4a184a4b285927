use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{OrbitError, OrbitResult};

/// Data payload for one orbiting body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyData {
    /// Unique identifier token, case-sensitive
    pub id: String,
}

impl fmt::Display for BodyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Tree node in the arena-based orbit hierarchy.
#[derive(Debug)]
pub struct OrbitNode {
    /// Body data for this node
    pub data: BodyData,
    /// Index of the directly orbited body, None for the root
    pub parent: Option<Index>,
    /// Indices of bodies orbiting this one, in input order
    pub children: Vec<Index>,
    /// Number of ancestors, 0 for the root
    pub depth: usize,
}

/// Arena-based tree structure holding the full orbit map.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The parent link is a non-owning index back-reference, so parent and child
/// containers never form an ownership cycle.
#[derive(Debug)]
pub struct OrbitArena {
    /// Arena storage for all bodies
    arena: Arena<OrbitNode>,
    /// Registry mapping body id to its arena index
    index_by_id: HashMap<String, Index>,
    /// Body indices in creation order (first reference in the input)
    creation_order: Vec<Index>,
}

impl Default for OrbitArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            index_by_id: HashMap::new(),
            creation_order: Vec::new(),
        }
    }

    /// Resolves an id to its node, creating the node on first reference.
    #[instrument(level = "trace", skip(self))]
    pub fn get_or_insert(&mut self, id: &str) -> Index {
        if let Some(&idx) = self.index_by_id.get(id) {
            return idx;
        }
        let node = OrbitNode {
            data: BodyData { id: id.to_string() },
            parent: None,
            children: Vec::new(),
            depth: 0,
        };
        let idx = self.arena.insert(node);
        self.index_by_id.insert(id.to_string(), idx);
        self.creation_order.push(idx);
        idx
    }

    /// Records `child` as directly orbiting `parent`.
    ///
    /// A child that already had a parent is unlinked from it first, so a
    /// duplicate child line follows last-write-wins and the parent/children
    /// links stay mutually consistent.
    #[instrument(level = "trace", skip(self))]
    pub fn link(&mut self, parent: Index, child: Index) {
        if let Some(old_parent) = self.arena.get(child).and_then(|n| n.parent) {
            if let Some(old) = self.arena.get_mut(old_parent) {
                old.children.retain(|&c| c != child);
            }
        }
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn find(&self, id: &str) -> Option<Index> {
        self.index_by_id.get(id).copied()
    }

    pub fn get_node(&self, idx: Index) -> Option<&OrbitNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OrbitNode> {
        self.arena.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The unique body with no parent.
    ///
    /// Errors on an empty map instead of guessing a root. On a forest
    /// produced by malformed input the first parentless body in creation
    /// order wins, which keeps the result deterministic across rebuilds.
    #[instrument(level = "debug", skip(self))]
    pub fn root(&self) -> OrbitResult<Index> {
        self.creation_order
            .iter()
            .copied()
            .find(|&idx| {
                self.arena
                    .get(idx)
                    .map(|n| n.parent.is_none())
                    .unwrap_or(false)
            })
            .ok_or(OrbitError::EmptyMap)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> OrbitIterator {
        OrbitIterator::new(self)
    }

    /// All body indices in creation order, including bodies that are not
    /// reachable from the root when malformed input left a forest.
    pub fn iter_all(&self) -> impl Iterator<Item = Index> + '_ {
        self.creation_order.iter().copied()
    }

    /// Collects all leaf bodies (bodies nothing orbits).
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<Index> {
        self.creation_order
            .iter()
            .copied()
            .filter(|&idx| {
                self.arena
                    .get(idx)
                    .map(|n| n.children.is_empty())
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Maximum ancestor-chain length over all leaves, 0 for an empty map.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.leaves()
            .into_iter()
            .filter_map(|idx| self.arena.get(idx).map(|n| n.depth))
            .max()
            .unwrap_or(0)
    }

    /// Total orbit count: every body's direct orbit plus all indirect ones,
    /// i.e. the sum of depths over the whole map.
    #[instrument(level = "debug", skip(self))]
    pub fn total_orbits(&self) -> usize {
        self.arena.iter().map(|(_, node)| node.depth).sum()
    }
}

/// Preorder iterator, children visited left-to-right in input order.
pub struct OrbitIterator<'a> {
    arena: &'a OrbitArena,
    stack: Vec<Index>,
}

impl<'a> OrbitIterator<'a> {
    fn new(arena: &'a OrbitArena) -> Self {
        let mut stack = Vec::new();
        if let Ok(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for OrbitIterator<'a> {
    type Item = (Index, &'a OrbitNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
