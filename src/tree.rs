//! Arena-backed search tree.
//!
//! Nodes are stored in a flat `Vec` owned by the tree and refer to their
//! parent by index, so the upward link never owns anything and never forms
//! a cycle.

use crate::path::SolutionPath;
use crate::puzzle::Puzzle;

/// Index of a node inside a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One explored configuration.
struct SearchNode<P> {
    puzzle: P,
    /// Successors computed when the node was created, taken once on expansion.
    pending: Vec<P>,
    parent: Option<NodeId>,
}

/// The tree of configurations built up during a single search.
pub struct SearchTree<P> {
    nodes: Vec<SearchNode<P>>,
}

impl<P: Puzzle> SearchTree<P> {
    /// Creates a tree holding only the root configuration.
    pub fn new(root: P) -> (Self, NodeId) {
        let mut tree = Self { nodes: Vec::new() };
        let id = tree.push(root, None);
        (tree, id)
    }

    /// Adds `puzzle` as a child of `parent`.
    ///
    /// The new node's own extensions are computed eagerly.
    pub fn attach(&mut self, parent: NodeId, puzzle: P) -> NodeId {
        self.push(puzzle, Some(parent))
    }

    fn push(&mut self, puzzle: P, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let pending = puzzle.extensions();
        self.nodes.push(SearchNode {
            puzzle,
            pending,
            parent,
        });
        id
    }
}

impl<P> SearchTree<P> {
    pub fn puzzle(&self, id: NodeId) -> &P {
        &self.nodes[id.0].puzzle
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Removes and returns the pre-computed successors of a node.
    ///
    /// A second call on the same node returns an empty list.
    pub fn take_extensions(&mut self, id: NodeId) -> Vec<P> {
        std::mem::take(&mut self.nodes[id.0].pending)
    }

    /// Number of nodes created so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Collapses the tree into the single chain from the root to `solved`.
    ///
    /// Every node off that chain is dropped. Consuming the tree means a
    /// collapsed tree can never be mistaken for one that still holds all
    /// explored branches.
    pub fn into_path(self, solved: NodeId) -> SolutionPath<P> {
        let mut chain = vec![solved];
        let mut current = solved;
        while let Some(parent) = self.nodes[current.0].parent {
            chain.push(parent);
            current = parent;
        }
        // children are always created after their parent, so ids increase
        // from root to leaf
        chain.reverse();

        let mut wanted = chain.into_iter().peekable();
        let states = self
            .nodes
            .into_iter()
            .enumerate()
            .filter_map(|(index, node)| {
                if wanted.peek() == Some(&NodeId(index)) {
                    wanted.next();
                    Some(node.puzzle)
                } else {
                    None
                }
            })
            .collect();

        SolutionPath::from_states(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down to zero, one step at a time.
    #[derive(Clone, Debug, PartialEq)]
    struct Countdown(u32);

    impl Puzzle for Countdown {
        type Key = u32;

        fn extensions(&self) -> Vec<Self> {
            match self.0 {
                0 => Vec::new(),
                n => vec![Countdown(n - 1), Countdown(n + 1)],
            }
        }

        fn is_solved(&self) -> bool {
            self.0 == 0
        }

        fn canonical_key(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_new_node_precomputes_extensions() {
        let (mut tree, root) = SearchTree::new(Countdown(3));
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.parent(root), None);
        assert_eq!(
            tree.take_extensions(root),
            vec![Countdown(2), Countdown(4)]
        );
        assert!(tree.take_extensions(root).is_empty());
    }

    #[test]
    fn test_attach_links_parent() {
        let (mut tree, root) = SearchTree::new(Countdown(2));
        let first = tree.attach(root, Countdown(1));
        let second = tree.attach(root, Countdown(3));
        let grandchild = tree.attach(first, Countdown(0));

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.parent(first), Some(root));
        assert_eq!(tree.parent(second), Some(root));
        assert_eq!(tree.parent(grandchild), Some(first));
        assert_eq!(tree.puzzle(grandchild), &Countdown(0));
    }

    #[test]
    fn test_into_path_keeps_only_the_solution_chain() {
        let (mut tree, root) = SearchTree::new(Countdown(2));
        let down = tree.attach(root, Countdown(1));
        let up = tree.attach(root, Countdown(3));
        tree.attach(up, Countdown(4));
        let solved = tree.attach(down, Countdown(0));

        let path = tree.into_path(solved);
        assert_eq!(
            path.states(),
            &[Countdown(2), Countdown(1), Countdown(0)]
        );
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn test_into_path_of_root_is_single_state() {
        let (tree, root) = SearchTree::new(Countdown(0));
        let path = tree.into_path(root);
        assert_eq!(path.states(), &[Countdown(0)]);
        assert_eq!(path.moves(), 0);
    }
}
