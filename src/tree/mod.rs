pub mod aggregate;
pub mod arena;
pub mod categories;

use thiserror::Error;

use self::arena::{NodeId, Tree, TreeNode};
use crate::dataset::RawNode;

pub use categories::{categories, top_level_categories};

/// Deepest hierarchy accepted by `build_tree`.
pub const MAX_DEPTH: u16 = 64;

/// Malformed hierarchy input. Raised before any layout happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("leaf '{name}' has no value")]
    MissingValue { name: String },

    #[error("leaf '{name}' has a non-numeric or non-finite value {raw:?}")]
    InvalidValue { name: String, raw: String },

    #[error("leaf '{name}' has negative value {value}")]
    NegativeValue { name: String, value: f64 },

    #[error("leaf '{name}' has no category")]
    MissingCategory { name: String },

    #[error("group '{name}' carries its own value; group values are derived from children")]
    InternalValue { name: String },

    #[error("categories '{first}' and '{second}' differ only by case")]
    AmbiguousCategory { first: String, second: String },

    #[error("hierarchy is deeper than {max} levels")]
    TooDeep { max: u16 },

    #[error("values under '{name}' add up to more than an f64 can hold")]
    ValueOverflow { name: String },
}

/// Validate a parsed document and build the arena tree with aggregated values.
/// Fails on the first malformed node; no partial tree is returned.
pub fn build_tree(raw: &RawNode) -> Result<Tree, TreeError> {
    let mut tree = Tree::new(make_node(raw)?);

    // Explicit stack instead of recursion; children are pushed reversed so
    // they are appended to their parent in input order.
    let mut stack: Vec<(&RawNode, NodeId)> = raw.children.iter().rev().map(|c| (c, tree.root)).collect();
    while let Some((node, parent)) = stack.pop() {
        if tree.get(parent).depth >= MAX_DEPTH {
            return Err(TreeError::TooDeep { max: MAX_DEPTH });
        }
        let id = tree.add_child(parent, make_node(node)?);
        stack.extend(node.children.iter().rev().map(|c| (c, id)));
    }

    categories::check_case_collisions(&categories::categories(&tree))?;
    aggregate::aggregate_values(&mut tree);

    // Finite leaves can still sum to infinity, which would break proportional sizing.
    let root = tree.get(tree.root);
    if !root.value.is_finite() {
        return Err(TreeError::ValueOverflow {
            name: root.name.to_string(),
        });
    }

    tracing::info!(
        "Tree built: {} nodes, {} leaves, {} top-level groups, total value {}",
        tree.len(),
        tree.leaves().count(),
        tree.children(tree.root).count(),
        tree.get(tree.root).value
    );

    Ok(tree)
}

fn make_node(raw: &RawNode) -> Result<TreeNode, TreeError> {
    if !raw.children.is_empty() {
        if raw.value.is_some() {
            return Err(TreeError::InternalValue {
                name: raw.name.clone(),
            });
        }
        // Group values are filled in by aggregate_values.
        return Ok(TreeNode::new(&raw.name, raw.category.as_deref(), 0.0));
    }

    let raw_value = raw.value.as_ref().ok_or_else(|| TreeError::MissingValue {
        name: raw.name.clone(),
    })?;
    let value = raw_value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TreeError::InvalidValue {
            name: raw.name.clone(),
            raw: raw_value.raw(),
        })?;
    if value < 0.0 {
        return Err(TreeError::NegativeValue {
            name: raw.name.clone(),
            value,
        });
    }
    let category = raw.category.as_deref().ok_or_else(|| TreeError::MissingCategory {
        name: raw.name.clone(),
    })?;

    Ok(TreeNode::new(&raw.name, Some(category), value))
}
