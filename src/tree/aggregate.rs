use super::arena::Tree;

/// Compute aggregated values for all group nodes (bottom-up).
/// After this, each group's `value` equals the sum of its descendant leaf values.
pub fn aggregate_values(tree: &mut Tree) {
    // Children always have higher indices than their parents in the arena
    // (guaranteed by add_child), so a reverse sweep visits children first.
    let len = tree.nodes.len();
    for i in (0..len).rev() {
        let node = &tree.nodes[i];
        if node.is_leaf() {
            continue;
        }

        // Sum direct children in input order
        let mut total = 0.0;
        let mut child = node.first_child;
        while let Some(child_id) = child {
            total += tree.nodes[child_id.index()].value;
            child = tree.nodes[child_id.index()].next_sibling;
        }
        tree.nodes[i].value = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::arena::TreeNode;

    #[test]
    fn groups_sum_their_descendants() {
        let mut tree = Tree::new(TreeNode::new("root", None, 0.0));
        let a = tree.add_child(tree.root, TreeNode::new("A", None, 0.0));
        let inner = tree.add_child(a, TreeNode::new("A.inner", None, 0.0));
        tree.add_child(inner, TreeNode::new("x", Some("A"), 1.5));
        tree.add_child(a, TreeNode::new("y", Some("A"), 2.5));
        let b = tree.add_child(tree.root, TreeNode::new("B", None, 0.0));
        tree.add_child(b, TreeNode::new("z", Some("B"), 0.0));

        aggregate_values(&mut tree);

        assert_eq!(tree.get(inner).value, 1.5);
        assert_eq!(tree.get(a).value, 4.0);
        assert_eq!(tree.get(b).value, 0.0);
        assert_eq!(tree.get(tree.root).value, 4.0);
    }
}
