use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::NodeRef;
use crate::raw::{Node, PATH_CAPACITY};

type Stack<'a> = SmallVec<[&'a Node; PATH_CAPACITY]>;

/// An in-order iterator over the nodes of an `EditTree`.
///
/// This `struct` is created by the [`nodes`] method on [`EditTree`]. See its documentation for
/// more.
///
/// # Examples
///
/// ```
/// use edit_tree::EditTree;
///
/// let tree = EditTree::from("abc");
/// let ranks: Vec<usize> = tree.nodes().map(|node| node.rank()).collect();
/// assert_eq!(ranks, [0, 1, 0]);
/// ```
///
/// [`nodes`]: super::EditTree::nodes
/// [`EditTree`]: super::EditTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Default)]
pub struct Nodes<'a> {
    // Nodes whose left subtree has been entered but which have not been yielded yet.
    stack: Stack<'a>,
    remaining: usize,
}

impl<'a> Nodes<'a> {
    /// Positions a new iterator on the element at `pos`. Empty when `pos >= len`.
    pub(crate) fn starting_at(root: Option<&'a Node>, len: usize, mut pos: usize) -> Self {
        if pos >= len {
            return Self::default();
        }
        let remaining = len - pos;
        let mut stack = Stack::new();
        let mut current = root;
        while let Some(node) = current {
            if pos < node.rank() {
                stack.push(node);
                current = node.left();
            } else if pos == node.rank() {
                stack.push(node);
                break;
            } else {
                pos -= node.rank() + 1;
                current = node.right();
            }
        }
        Self { stack, remaining }
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(NodeRef::new(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Nodes<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Nodes<'_> {}

impl fmt::Debug for Nodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes").field("remaining", &self.remaining).finish()
    }
}

/// An in-order iterator over the characters of an `EditTree`.
///
/// This `struct` is created by the [`chars`] method on [`EditTree`]. See its documentation for
/// more.
///
/// [`chars`]: super::EditTree::chars
/// [`EditTree`]: super::EditTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Default)]
pub struct Chars<'a> {
    inner: Nodes<'a>,
}

impl<'a> Chars<'a> {
    pub(crate) const fn new(inner: Nodes<'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.inner.next().map(NodeRef::element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chars<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Chars<'_> {}

impl fmt::Debug for Chars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chars").field("remaining", &self.inner.remaining).finish()
    }
}

/// A pre-order iterator over the nodes of an `EditTree`: each node, then its left subtree, then
/// its right subtree.
///
/// This `struct` is created by the [`pre_order`] method on [`EditTree`]. See its documentation
/// for more.
///
/// # Examples
///
/// ```
/// use edit_tree::EditTree;
///
/// let tree = EditTree::from("abc");
/// let order: String = tree.pre_order().map(|node| node.element()).collect();
/// assert_eq!(order, "bac");
/// ```
///
/// [`pre_order`]: super::EditTree::pre_order
/// [`EditTree`]: super::EditTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Default)]
pub struct PreOrder<'a> {
    // Subtree roots still to visit, the next one on top.
    stack: Stack<'a>,
    remaining: usize,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut stack = Stack::new();
        stack.extend(root);
        Self { stack, remaining: len }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(NodeRef::new(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PreOrder<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for PreOrder<'_> {}

impl fmt::Debug for PreOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder").field("remaining", &self.remaining).finish()
    }
}
