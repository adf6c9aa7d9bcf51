//! Search-tree nodes stored in an index-addressed arena.

/// Index of a [`Node`] inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of the search tree.
///
/// Nodes are immutable once pushed into a [`SearchTree`]. The `parent` link
/// points into the already-built part of the tree and is only used to walk
/// back to the root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<S, A> {
    /// The grid state this node reached.
    pub state: S,
    /// Accumulated cost from the root.
    pub cost: f64,
    /// The action that produced this node. `None` for the root.
    pub action: Option<A>,
    /// Index of the producing node. `None` for the root.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub parent: Option<NodeId>,
}

impl<S, A> Node<S, A> {
    /// Creates a root node with zero cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            cost: 0.0,
            action: None,
            parent: None,
        }
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only arena of search nodes.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: Clone, A: Clone> SearchTree<S, A> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its index.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `node.parent` does not refer to an
    /// existing node.
    pub fn push(&mut self, node: Node<S, A>) -> NodeId {
        debug_assert!(
            node.parent.is_none_or(|p| p.0 < self.nodes.len()),
            "parent must already be in the tree"
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node at `id`.
    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes generated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the root→`id` chain by following parent links.
    pub fn path_to(&self, id: NodeId) -> Vec<Node<S, A>> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get(current);
            path.push(node.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
