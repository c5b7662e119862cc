use core::mem;

use log::debug;

use super::join::{self, Subtree};
use super::node::{self, Link, Node};
use super::remove;

/// The core AVL tree backing `EditTree`.
///
/// Positions passed in are assumed to be valid; the public wrapper checks them before calling
/// anything that mutates.
pub(crate) struct RawEditTree {
    /// Root of the tree, if the tree is non-empty.
    root: Link,
    /// Total number of elements in the tree.
    len: usize,
    /// Rotations performed since this tree was created. A double rotation counts as two.
    rotations: usize,
}

impl RawEditTree {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: 0,
        }
    }

    /// Creates a perfectly balanced tree holding `elements` in order. O(n), no rotations.
    pub(crate) fn from_elements(elements: &[char]) -> Self {
        let (root, _) = Node::build(elements);
        Self {
            root,
            len: elements.len(),
            rotations: 0,
        }
    }

    /// Returns the number of elements in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of rotations performed since the tree was created.
    pub(crate) const fn rotations(&self) -> usize {
        self.rotations
    }

    /// Returns the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Height derived from balance codes. `-1` for an empty tree.
    pub(crate) fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Height computed from the actual structure. `-1` for an empty tree.
    pub(crate) fn debug_height(&self) -> isize {
        node::debug_height(self.root())
    }

    /// Returns the node at `pos`, or `None` if `pos` is out of range.
    pub(crate) fn get(&self, pos: usize) -> Option<&Node> {
        if pos >= self.len {
            return None;
        }
        self.root().map(|root| root.get(pos))
    }

    /// Clears all elements from the tree. The rotation count is kept.
    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts `element` at `pos`, where `pos <= len`.
    pub(crate) fn insert(&mut self, pos: usize, element: char) {
        debug_assert!(pos <= self.len, "`RawEditTree::insert()` - `pos` > `len`!");
        Node::insert(&mut self.root, pos, element, &mut self.rotations);
        self.len += 1;
    }

    /// Removes and returns the element at `pos`, where `pos < len`.
    pub(crate) fn remove(&mut self, pos: usize) -> char {
        debug_assert!(pos < self.len, "`RawEditTree::remove()` - `pos` >= `len`!");
        let (element, _) = remove::remove(&mut self.root, pos, &mut self.rotations);
        self.len -= 1;
        element
    }

    /// Moves every element at or after `pos` into a new tree and returns it.
    ///
    /// Rotations performed while rejoining fragments are counted against `self`; the returned
    /// tree starts with a count of zero.
    pub(crate) fn split_off(&mut self, pos: usize) -> Self {
        debug_assert!(pos <= self.len, "`RawEditTree::split_off()` - `pos` > `len`!");
        let whole = self.take_subtree();
        let before = self.rotations;
        let (left, right) = join::split(whole, pos, &mut self.rotations);

        self.root = left.root;
        self.len = left.len;
        debug!(
            "split at {pos}: {} + {} elements, {} rotations",
            self.len,
            right.len,
            self.rotations - before
        );

        Self {
            root: right.root,
            len: right.len,
            rotations: 0,
        }
    }

    /// Appends every element of `other` to `self`, leaving `other` empty.
    ///
    /// The first node of `other` is unlinked and reused as the connector of the join.
    pub(crate) fn concatenate(&mut self, other: &mut Self) {
        if other.len == 0 {
            return;
        }
        if self.len == 0 {
            mem::swap(&mut self.root, &mut other.root);
            self.len = mem::take(&mut other.len);
            return;
        }

        let before = self.rotations;
        let mut right = other.take_subtree();
        let (connector, shrank) = remove::remove_first(&mut right.root, &mut self.rotations);
        right.len -= 1;
        right.height -= isize::from(shrank);

        let left = self.take_subtree();
        let joined = join::join(left, connector, right, &mut self.rotations);
        self.root = joined.root;
        self.len = joined.len;
        debug!("concatenated into {} elements, {} rotations", self.len, self.rotations - before);
    }

    /// Removes `len` elements starting at `start` and returns them as a new tree, where
    /// `start + len <= self.len`.
    pub(crate) fn remove_range(&mut self, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= self.len, "`RawEditTree::remove_range()` - range ends past `len`!");
        if len == 0 {
            return Self::new();
        }

        let mut middle = self.split_off(start);
        if len < middle.len {
            let mut tail = middle.split_off(len);
            self.concatenate(&mut tail);
            self.rotations += mem::take(&mut middle.rotations);
        }
        debug!("removed range {start}..{}", start + len);
        middle
    }

    /// Detaches the whole tree as a join fragment, leaving `self` empty.
    fn take_subtree(&mut self) -> Subtree {
        let len = mem::take(&mut self.len);
        Subtree::new(self.root.take(), len)
    }
}

impl Clone for RawEditTree {
    /// Copies every node. The copy is a new tree, so its rotation count starts at zero.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            rotations: 0,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::String;

    fn text(tree: &RawEditTree) -> String {
        (0..tree.len()).map(|pos| tree.get(pos).unwrap().element()).collect()
    }

    fn from_str(s: &str) -> RawEditTree {
        let elements: alloc::vec::Vec<char> = s.chars().collect();
        RawEditTree::from_elements(&elements)
    }

    #[test]
    fn split_off_end_leaves_empty_tail() {
        let mut tree = from_str("abc");
        let tail = tree.split_off(3);
        assert_eq!(text(&tree), "abc");
        assert_eq!(tail.len(), 0);
        assert!(tail.root().is_none());
    }

    #[test]
    fn concatenate_into_empty_moves_root() {
        let mut empty = RawEditTree::new();
        let mut other = from_str("xyz");
        empty.concatenate(&mut other);
        assert_eq!(text(&empty), "xyz");
        assert_eq!(other.len(), 0);
        assert!(other.root().is_none());
    }

    #[test]
    fn remove_range_to_end_skips_second_split() {
        let mut tree = from_str("abcdef");
        let removed = tree.remove_range(2, 4);
        assert_eq!(text(&tree), "ab");
        assert_eq!(text(&removed), "cdef");
    }

    #[test]
    fn remove_range_middle_credits_rotations_to_receiver() {
        let mut tree = RawEditTree::new();
        for (pos, element) in "abcdefghijklmnop".chars().enumerate() {
            tree.insert(pos, element);
        }
        let removed = tree.remove_range(3, 5);
        assert_eq!(text(&tree), "abcijklmnop");
        assert_eq!(text(&removed), "defgh");
        assert_eq!(removed.rotations(), 0);
    }

    #[test]
    fn clone_resets_rotation_count() {
        let mut tree = RawEditTree::new();
        for (pos, element) in "abc".chars().enumerate() {
            tree.insert(pos, element);
        }
        assert_eq!(tree.rotations(), 1);
        let copy = tree.clone();
        assert_eq!(copy.rotations(), 0);
        assert_eq!(text(&copy), "abc");
        assert!(!core::ptr::eq(copy.root().unwrap(), tree.root().unwrap()));
    }
}
