use std::collections::HashSet;

use crate::path::NodePath;

/// The set of structural paths currently collapsed.
///
/// Owned by the host (one per open document); the materializer only reads it.
/// Empty at document load.
#[derive(Clone, Debug, Default)]
pub struct CollapseSet {
    paths: HashSet<NodePath>,
}

impl CollapseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the collapsed state of `path` and returns the new state
    /// (`true` = now collapsed). Toggling twice restores the set.
    pub fn toggle(&mut self, path: NodePath) -> bool {
        if self.paths.remove(&path) {
            false
        } else {
            self.paths.insert(path);
            true
        }
    }

    pub fn insert(&mut self, path: NodePath) {
        self.paths.insert(path);
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.paths.contains(path)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

impl FromIterator<NodePath> for CollapseSet {
    fn from_iter<I: IntoIterator<Item = NodePath>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
