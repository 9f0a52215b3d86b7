//! Registry of live partial trees.
//!
//! The original program kept components on a circular singly-linked list
//! with a rear pointer; a `VecDeque` preserves the observable contract
//! with less machinery: O(1) append at the rear, O(1) removal at the
//! front, O(n) removal by root, and lazy front-to-rear iteration that
//! never removes elements.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph::VertexId;
use crate::partial_tree::PartialTree;

/// Error raised by [`TreeRegistry`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `remove_front` was called on an empty registry; caller misuse.
    #[error("remove_front called on an empty registry")]
    Empty,
    /// No live component is rooted at the requested vertex. Under the
    /// merge loop's invariants this indicates an internal defect, never
    /// bad user input.
    #[error("no live component is rooted at vertex {root}")]
    NoSuchComponent {
        /// Root the lookup was asked to match.
        root: VertexId,
    },
}

/// FIFO collection of the partial trees still being merged.
///
/// # Examples
/// ```
/// use bosk_core::{PartialTree, TreeRegistry, VertexId};
///
/// let mut registry = TreeRegistry::new();
/// registry.append(PartialTree::new(VertexId::new(0)));
/// registry.append(PartialTree::new(VertexId::new(1)));
///
/// let front = registry.remove_front().expect("two trees appended");
/// assert_eq!(front.root(), VertexId::new(0));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeRegistry {
    trees: VecDeque<PartialTree>,
}

impl TreeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trees: VecDeque::new(),
        }
    }

    /// Number of live components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the registry holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Appends a component at the rear.
    pub fn append(&mut self, tree: PartialTree) {
        self.trees.push_back(tree);
    }

    /// Removes and returns the front component.
    ///
    /// # Errors
    /// Returns [`RegistryError::Empty`] when the registry holds nothing.
    pub fn remove_front(&mut self) -> Result<PartialTree, RegistryError> {
        self.trees.pop_front().ok_or(RegistryError::Empty)
    }

    /// Removes and returns the component whose stored root equals `root`.
    ///
    /// Callers resolve root pointers before calling; the registry compares
    /// against the stored roots as-is. The relative order of the remaining
    /// components is preserved.
    ///
    /// # Errors
    /// Returns [`RegistryError::NoSuchComponent`] when no component is
    /// rooted at `root`.
    pub fn remove_tree_containing(
        &mut self,
        root: VertexId,
    ) -> Result<PartialTree, RegistryError> {
        let position = self
            .trees
            .iter()
            .position(|tree| tree.root() == root)
            .ok_or(RegistryError::NoSuchComponent { root })?;
        self.trees
            .remove(position)
            .ok_or(RegistryError::NoSuchComponent { root })
    }

    /// Iterates the live components front to rear without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &PartialTree> {
        self.trees.iter()
    }
}
