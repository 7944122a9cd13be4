/*! Depth-first iterators over a [Tree](super::Tree).
 *
 * All iterators keep an explicit stack of child iterators instead of recursing,
 * so the depth of a tree is bounded by the heap and not by the call stack.
 */

use super::Node;
use std::slice;

/// Yields each payload before the payloads of its children (children in insertion order).
pub struct PreorderIterator<'a, T> {
    stack: Vec<slice::Iter<'a, Node<T>>>,
    root: Option<&'a Node<T>>,
}

impl<'a, T> PreorderIterator<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        PreorderIterator { stack: vec![], root }
    }
}

impl<'a, T> Iterator for PreorderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children.iter());
            return Some(&root.data);
        }
        loop {
            match self.stack.last_mut()?.next() {
                Some(child) => {
                    self.stack.push(child.children.iter());
                    return Some(&child.data);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Yields the payloads of all children before the payload of their parent.
pub struct PostorderIterator<'a, T> {
    stack: Vec<(&'a Node<T>, slice::Iter<'a, Node<T>>)>,
}

impl<'a, T> PostorderIterator<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let stack = root.map(|node| (node, node.children.iter())).into_iter().collect();
        PostorderIterator { stack }
    }
}

impl<'a, T> Iterator for PostorderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut()?.1.next() {
                Some(child) => self.stack.push((child, child.children.iter())),
                None => return self.stack.pop().map(|(node, _)| &node.data),
            }
        }
    }
}

/// In-order traversal generalized to an arbitrary number of children.
///
/// For each child of the root, the child's subtree is yielded in *preorder*, followed by
/// the root's payload. The root therefore appears once per child (and not at all if it
/// is a leaf). Only the root interleaves, the subtrees below it are plain preorder.
pub struct InorderIterator<'a, T> {
    root: Option<&'a Node<T>>,
    children: slice::Iter<'a, Node<T>>,
    current: Option<PreorderIterator<'a, T>>,
}

impl<'a, T> InorderIterator<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let children: &'a [Node<T>] = match root {
            Some(node) => &node.children,
            None => Default::default(),
        };
        InorderIterator {
            root,
            children: children.iter(),
            current: None,
        }
    }
}

impl<'a, T> Iterator for InorderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(data) = current.next() {
                    return Some(data);
                }
                // subtree exhausted, emit the parent once for this child
                self.current = None;
                return self.root.map(|node| &node.data);
            }
            let child = self.children.next()?;
            self.current = Some(PreorderIterator::new(Some(child)));
        }
    }
}
