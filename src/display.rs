use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::OrbitArena;
use crate::errors::OrbitResult;

pub trait ToTermTree {
    fn to_tree_string(&self) -> OrbitResult<Tree<String>>;
}

impl ToTermTree for OrbitArena {
    /// Renders the map as a termtree from the root, the terminal counterpart
    /// of an orbit diagram.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> OrbitResult<Tree<String>> {
        let root_idx = self.root()?;
        let root_id = self
            .get_node(root_idx)
            .map(|n| n.data.id.clone())
            .unwrap_or_default();
        let mut tree = Tree::new(root_id);

        fn build_tree(arena: &OrbitArena, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.data.id.clone());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        build_tree(self, root_idx, &mut tree);
        Ok(tree)
    }
}
