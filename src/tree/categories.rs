use std::collections::HashMap;

use compact_str::CompactString;

use super::arena::Tree;
use super::TreeError;

/// Distinct names of the first-level groups, in input order.
/// These drive the legend.
pub fn top_level_categories(tree: &Tree) -> Vec<CompactString> {
    let mut out: Vec<CompactString> = Vec::new();
    for id in tree.children(tree.root) {
        let name = &tree.get(id).name;
        if !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}

/// Palette domain: the top-level names followed by every leaf category
/// not seen yet, in pre-order.
pub fn categories(tree: &Tree) -> Vec<CompactString> {
    let mut out = top_level_categories(tree);
    for id in tree.leaves() {
        if let Some(category) = &tree.get(id).category {
            if !out.contains(category) {
                out.push(category.clone());
            }
        }
    }
    out
}

/// Reject two distinct names that only differ by case ("Drama" / "drama").
pub(crate) fn check_case_collisions(names: &[CompactString]) -> Result<(), TreeError> {
    let mut seen: HashMap<CompactString, &CompactString> = HashMap::with_capacity(names.len());
    for name in names {
        let key = name.to_lowercase();
        match seen.get(&key) {
            Some(&first) if first != name => {
                return Err(TreeError::AmbiguousCategory {
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(key, name);
            }
        }
    }
    Ok(())
}
