use crate::cleanup::domain::DependencyTreeEntry;
use std::collections::BTreeSet;

/// RequiredSetCalculator collects every package some other package depends on
///
/// Pure logic over the dependency tree, no I/O.
pub struct RequiredSetCalculator;

impl RequiredSetCalculator {
    /// Returns the distinct dependency names found anywhere in the tree
    pub fn compute(tree: &[DependencyTreeEntry]) -> BTreeSet<String> {
        tree.iter()
            .flat_map(|entry| entry.dependencies().iter().cloned())
            .collect()
    }
}
