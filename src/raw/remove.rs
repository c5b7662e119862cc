//! Positional deletion.
//!
//! Nodes with two children keep their identity: the in-order successor is unlinked from the
//! right subtree and its element moves into the target node.

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::mem;

use super::node::{Link, Node};
use super::rebalance;

/// Removes the node at in-order position `pos` of the subtree in `link`.
///
/// Returns the removed element and whether the subtree in `link` is now one level shorter.
///
/// # Panics
///
/// Panics if `pos` is outside the subtree.
pub(crate) fn remove(link: &mut Link, pos: usize, rotations: &mut usize) -> (char, bool) {
    let node = link.as_mut().expect("`remove()` - position is outside the subtree!");
    match pos.cmp(&node.rank) {
        Ordering::Less => {
            node.rank -= 1;
            let (element, shrank) = remove(&mut node.left, pos, rotations);
            (element, shrank && rebalance::left_shrank(node, rotations))
        }
        Ordering::Greater => {
            let pos = pos - node.rank - 1;
            let (element, shrank) = remove(&mut node.right, pos, rotations);
            (element, shrank && rebalance::right_shrank(node, rotations))
        }
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let (successor, shrank) = remove_first(&mut node.right, rotations);
            let element = mem::replace(&mut node.element, successor.element);
            (element, shrank && rebalance::right_shrank(node, rotations))
        }
        Ordering::Equal => {
            let mut target = link.take().expect("`remove()` - target vanished!");
            *link = target.left.take().or_else(|| target.right.take());
            (target.element, true)
        }
    }
}

/// Unlinks the leftmost node of the subtree in `link` and returns it as a detached leaf.
///
/// Also returns whether the subtree in `link` is now one level shorter.
///
/// # Panics
///
/// Panics if the subtree is empty.
pub(crate) fn remove_first(link: &mut Link, rotations: &mut usize) -> (Box<Node>, bool) {
    let node = link.as_mut().expect("`remove_first()` - subtree is empty!");
    if node.left.is_some() {
        node.rank -= 1;
        let (first, shrank) = remove_first(&mut node.left, rotations);
        return (first, shrank && rebalance::left_shrank(node, rotations));
    }

    let mut first = link.take().expect("`remove_first()` - subtree is empty!");
    *link = first.right.take();
    debug_assert_eq!(first.rank, 0, "leftmost node must have an empty left subtree");
    first.balance = crate::Balance::Same;
    (first, true)
}
