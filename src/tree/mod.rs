//! # Multiway tree
//!
//! A tree in which each node owns a payload and any number of children, kept in
//! insertion order. Trees grow by grafting whole subtrees onto the root with
//! [Tree::add_subtree]; the subtree is moved in, so a node can never be shared
//! between two parents.
//!
//! Trees can be traversed in two ways:
//!
//! * *visited* with a [Visitor] (or any `FnMut(&T)` closure) via [Tree::preorder],
//!   [Tree::postorder] and [Tree::inorder]
//! * *iterated* with the iterators in [iterators], which drive the visits
//!
//! **Note:** [Tree::inorder] is a generalization to arbitrary arity where the root's
//! payload is emitted after each child's subtree. See [InorderIterator].

pub mod iterators;
pub mod visitor;

use crate::errors::{Result, StructureError};
use tracing::debug;
use tracing_attributes::instrument;

pub use iterators::{InorderIterator, PostorderIterator, PreorderIterator};
pub use visitor::Visitor;

/// A node that exclusively owns its payload and its children.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Node { data, children: vec![] }
    }

    /// The payload
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The child nodes in the order they were added
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted at this node (including itself).
    pub fn size(&self) -> usize {
        PreorderIterator::new(Some(self)).count()
    }
}

impl<T> Drop for Node<T> {
    // The default drop glue recurses once per level. Flattening the descendants
    // into a single vector first keeps dropping deep trees off the call stack.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// A tree with an arbitrary number of children per node. May be empty.
#[derive(Debug)]
pub struct Tree<T> {
    root: Option<Node<T>>,
}

impl<T> Tree<T> {
    /// Constructs an empty tree.
    pub fn new() -> Self {
        Tree { root: None }
    }

    /// Constructs a tree with a single node and no children.
    pub fn with_root(data: T) -> Self {
        Tree {
            root: Some(Node::new(data)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Adds `subtree` as the last child of the root. Adding an empty subtree changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [StructureError::InvalidOperation] if this tree is empty, as there is no
    /// root to attach to. The subtree is dropped in that case.
    #[instrument(level = "trace", skip_all)]
    pub fn add_subtree(&mut self, subtree: Tree<T>) -> Result<()> {
        let Some(root) = self.root.as_mut() else {
            debug!("Attempted to add a subtree to an empty tree");
            return Err(StructureError::InvalidOperation(
                "cannot add a subtree to a tree without root",
            ));
        };
        if let Some(node) = subtree.root {
            root.children.push(node);
        }
        Ok(())
    }

    /// Number of nodes in the tree, 0 if empty.
    #[instrument(level = "trace", skip_all)]
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, Node::size)
    }

    pub fn iter_preorder(&self) -> PreorderIterator<'_, T> {
        PreorderIterator::new(self.root.as_ref())
    }

    pub fn iter_postorder(&self) -> PostorderIterator<'_, T> {
        PostorderIterator::new(self.root.as_ref())
    }

    pub fn iter_inorder(&self) -> InorderIterator<'_, T> {
        InorderIterator::new(self.root.as_ref())
    }

    /// Visits each node before its children. Children are visited in insertion order.
    #[instrument(level = "trace", skip_all)]
    pub fn preorder<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        self.iter_preorder().for_each(|data| visitor.visit(data));
    }

    /// Visits all children of a node before the node itself.
    #[instrument(level = "trace", skip_all)]
    pub fn postorder<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        self.iter_postorder().for_each(|data| visitor.visit(data));
    }

    /// Visits each child's subtree in preorder, each followed by the root.
    /// See [InorderIterator] for the exact order.
    #[instrument(level = "trace", skip_all)]
    pub fn inorder<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        self.iter_inorder().for_each(|data| visitor.visit(data));
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}
