use compact_str::CompactString;

/// Index into the arena `Vec<TreeNode>`. Uses u32 to keep nodes small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the hierarchy, stored in a flat arena.
/// Uses sibling-list representation: each node has `first_child` and `next_sibling`.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Display label
    pub name: CompactString,
    /// Color group (leaves only)
    pub category: Option<CompactString>,
    /// For leaves: intrinsic value. For groups: aggregated sum of descendants.
    pub value: f64,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// First child node index (None for leaves)
    pub first_child: Option<NodeId>,
    /// Last child, kept so appends preserve input order in O(1)
    pub last_child: Option<NodeId>,
    /// Next sibling node index (None if last child)
    pub next_sibling: Option<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

impl TreeNode {
    pub fn new(name: &str, category: Option<&str>, value: f64) -> Self {
        Self {
            name: CompactString::new(name),
            category: category.map(CompactString::new),
            value,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

/// The hierarchy stored as a flat arena of nodes.
#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes in contiguous memory. Children always have higher indices than parents.
    pub nodes: Vec<TreeNode>,
    /// Root node index
    pub root: NodeId,
}

impl Tree {
    /// Create a tree holding only a root node.
    pub fn new(root: TreeNode) -> Self {
        Tree {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Append a child under the given parent, after its existing children.
    /// Returns the new node's ID.
    pub fn add_child(&mut self, parent: NodeId, mut node: TreeNode) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth + 1;
        node.next_sibling = None;

        match self.nodes[parent.index()].last_child {
            Some(last) => self.nodes[last.index()].next_sibling = Some(new_id),
            None => self.nodes[parent.index()].first_child = Some(new_id),
        }
        self.nodes[parent.index()].last_child = Some(new_id);

        self.nodes.push(node);
        new_id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).is_leaf()
    }

    /// Iterate over children of a node, in input order.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            current: self.nodes[parent.index()].first_child,
        }
    }

    /// Pre-order walk starting at `start`.
    pub fn descendants(&self, start: NodeId) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![start],
        }
    }

    /// All leaves in pre-order (input order).
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(self.root).filter(|&id| self.is_leaf(id))
    }
}

/// Iterator over the children of a node.
pub struct ChildIter<'a> {
    tree: &'a Tree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.nodes[id.index()].next_sibling;
        Some(id)
    }
}

/// Depth-first pre-order iterator.
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let first = self.stack.len();
        self.stack.extend(self.tree.children(id));
        // Reverse the freshly pushed siblings so the first child pops first.
        self.stack[first..].reverse();
        Some(id)
    }
}
