use alloc::boxed::Box;

use crate::Balance;

/// An owned, possibly absent subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A node of the rank-augmented AVL tree.
///
/// Parents own their children outright. There is no parent pointer: the upward rebalancing walk
/// is the unwinding of the descent that reached the changed node, and read-only parent access is
/// served by a cursor that remembers its path from the root.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(super) element: char,
    // Number of nodes in this node's own left subtree.
    pub(super) rank: usize,
    pub(super) balance: Balance,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    /// Creates a detached leaf.
    pub(crate) const fn new(element: char) -> Self {
        Self {
            element,
            rank: 0,
            balance: Balance::Same,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn element(&self) -> char {
        self.element
    }

    #[inline]
    pub(crate) const fn element_ref(&self) -> &char {
        &self.element
    }

    #[inline]
    pub(crate) const fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    pub(crate) const fn balance(&self) -> Balance {
        self.balance
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns the node at in-order position `pos` within this subtree.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not smaller than the size of the subtree.
    pub(crate) fn get(&self, mut pos: usize) -> &Node {
        let mut current = self;
        loop {
            match pos.cmp(&current.rank) {
                core::cmp::Ordering::Less => {
                    current = current.left().expect("`Node::get()` - position is outside the subtree!");
                }
                core::cmp::Ordering::Equal => return current,
                core::cmp::Ordering::Greater => {
                    pos -= current.rank + 1;
                    current = current.right().expect("`Node::get()` - position is outside the subtree!");
                }
            }
        }
    }

    /// Returns the heights of this node's left and right subtrees given its own height.
    pub(crate) fn child_heights(&self, height: isize) -> (isize, isize) {
        match self.balance {
            Balance::Left => (height - 1, height - 2),
            Balance::Same => (height - 1, height - 1),
            Balance::Right => (height - 2, height - 1),
        }
    }

    /// Inserts `element` so that it lands at in-order position `pos` of the subtree in `link`.
    ///
    /// Ranks are bumped on the way down; on the way back up each ancestor applies one step of
    /// the growth walk. Returns `true` if the subtree in `link` is now one level taller.
    pub(crate) fn insert(link: &mut Link, pos: usize, element: char, rotations: &mut usize) -> bool {
        match link {
            None => {
                *link = Some(Box::new(Node::new(element)));
                true
            }
            Some(node) => {
                if pos <= node.rank {
                    node.rank += 1;
                    Node::insert(&mut node.left, pos, element, rotations) && super::rebalance::left_grew(node, rotations)
                } else {
                    let pos = pos - node.rank - 1;
                    Node::insert(&mut node.right, pos, element, rotations)
                        && super::rebalance::right_grew(node, rotations)
                }
            }
        }
    }

    /// Builds a perfectly balanced subtree holding `elements` in order, without rotations.
    ///
    /// Returns the subtree and its height.
    pub(crate) fn build(elements: &[char]) -> (Link, isize) {
        if elements.is_empty() {
            return (None, -1);
        }
        let mid = elements.len() / 2;
        let (left, left_height) = Node::build(&elements[..mid]);
        let (right, right_height) = Node::build(&elements[mid + 1..]);
        let node = Node {
            element: elements[mid],
            rank: mid,
            balance: Balance::from_heights(left_height, right_height),
            left,
            right,
        };
        (Some(Box::new(node)), left_height.max(right_height) + 1)
    }
}

/// Returns the height of a subtree by following the taller side indicated by the balance codes.
///
/// This is O(height) and only correct because every subtree is AVL balanced. The empty subtree
/// has height `-1`.
pub(crate) fn height(mut node: Option<&Node>) -> isize {
    let mut height = -1;
    while let Some(current) = node {
        height += 1;
        node = match current.balance {
            Balance::Left => current.left(),
            Balance::Same | Balance::Right => current.right(),
        };
    }
    height
}

/// Returns the true height of a subtree, ignoring balance codes. O(size).
pub(crate) fn debug_height(node: Option<&Node>) -> isize {
    node.map_or(-1, |node| 1 + debug_height(node.left()).max(debug_height(node.right())))
}

/// Returns the number of nodes in a subtree by walking its right spine. O(height).
pub(crate) fn len(mut node: Option<&Node>) -> usize {
    let mut len = 0;
    while let Some(current) = node {
        len += current.rank + 1;
        node = current.right();
    }
    len
}
