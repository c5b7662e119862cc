//! Rotations and the per-ancestor steps of the upward rebalancing walk.
//!
//! Every step takes the slot holding a subtree root, so a rotation can replace the root in
//! place. Growth steps return whether the subtree is now taller; shrink steps return whether it
//! is now shorter. A `false` ends the walk.

use alloc::boxed::Box;
use core::mem;

use log::trace;

use super::node::Node;
use crate::Balance;

/// The left subtree of `slot` became one level taller.
pub(crate) fn left_grew(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    match slot.balance {
        Balance::Right => {
            slot.balance = Balance::Same;
            false
        }
        Balance::Same => {
            slot.balance = Balance::Left;
            true
        }
        Balance::Left => !fix_left_heavy(slot, rotations),
    }
}

/// The right subtree of `slot` became one level taller.
pub(crate) fn right_grew(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    match slot.balance {
        Balance::Left => {
            slot.balance = Balance::Same;
            false
        }
        Balance::Same => {
            slot.balance = Balance::Right;
            true
        }
        Balance::Right => !fix_right_heavy(slot, rotations),
    }
}

/// The left subtree of `slot` became one level shorter.
pub(crate) fn left_shrank(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    match slot.balance {
        Balance::Left => {
            slot.balance = Balance::Same;
            true
        }
        Balance::Same => {
            slot.balance = Balance::Right;
            false
        }
        Balance::Right => fix_right_heavy(slot, rotations),
    }
}

/// The right subtree of `slot` became one level shorter.
pub(crate) fn right_shrank(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    match slot.balance {
        Balance::Right => {
            slot.balance = Balance::Same;
            true
        }
        Balance::Same => {
            slot.balance = Balance::Left;
            false
        }
        Balance::Left => fix_left_heavy(slot, rotations),
    }
}

/// Restores balance at a `Left` node whose left subtree is now two levels taller.
///
/// Returns `true` if the rotation lowered the subtree by one level. It does not when the left
/// child is itself `Same`, which only happens while deleting.
fn fix_left_heavy(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    let child_balance = slot.left.as_ref().expect("`fix_left_heavy()` - heavy side has no child!").balance;
    if child_balance == Balance::Right {
        rotate_left_right(slot, rotations);
        return true;
    }

    rotate_right(slot, rotations);
    let lowered = child_balance == Balance::Left;
    let (root, parent) = if lowered { (Balance::Same, Balance::Same) } else { (Balance::Right, Balance::Left) };
    slot.balance = root;
    slot.right.as_mut().expect("`fix_left_heavy()` - rotation lost the old root!").balance = parent;
    lowered
}

/// Mirror of [`fix_left_heavy`].
fn fix_right_heavy(slot: &mut Box<Node>, rotations: &mut usize) -> bool {
    let child_balance = slot.right.as_ref().expect("`fix_right_heavy()` - heavy side has no child!").balance;
    if child_balance == Balance::Left {
        rotate_right_left(slot, rotations);
        return true;
    }

    rotate_left(slot, rotations);
    let lowered = child_balance == Balance::Right;
    let (root, parent) = if lowered { (Balance::Same, Balance::Same) } else { (Balance::Left, Balance::Right) };
    slot.balance = root;
    slot.left.as_mut().expect("`fix_right_heavy()` - rotation lost the old root!").balance = parent;
    lowered
}

/// Single left rotation: the right child becomes the subtree root. Balance codes are left to
/// the caller.
fn rotate_left(slot: &mut Box<Node>, rotations: &mut usize) {
    let mut child = slot.right.take().expect("`rotate_left()` - no right child!");
    slot.right = child.left.take();
    child.rank += slot.rank + 1;
    let parent = mem::replace(slot, child);
    slot.left = Some(parent);
    *rotations += 1;
    trace!("single left rotation, new subtree root {:?}", slot.element);
}

/// Single right rotation: the left child becomes the subtree root. Balance codes are left to
/// the caller.
fn rotate_right(slot: &mut Box<Node>, rotations: &mut usize) {
    let mut child = slot.left.take().expect("`rotate_right()` - no left child!");
    slot.left = child.right.take();
    slot.rank -= child.rank + 1;
    let parent = mem::replace(slot, child);
    slot.right = Some(parent);
    *rotations += 1;
    trace!("single right rotation, new subtree root {:?}", slot.element);
}

/// Double rotation for a right-heavy node whose right child leans left.
///
/// The grandchild is lifted over both nodes in one relink. Counts as two rotations.
fn rotate_right_left(slot: &mut Box<Node>, rotations: &mut usize) {
    let mut child = slot.right.take().expect("`rotate_right_left()` - no right child!");
    let mut grandchild = child.left.take().expect("`rotate_right_left()` - no inner grandchild!");

    slot.right = grandchild.left.take();
    child.left = grandchild.right.take();
    child.rank -= grandchild.rank + 1;
    grandchild.rank += slot.rank + 1;

    let (outer, inner) = match grandchild.balance {
        Balance::Left => (Balance::Same, Balance::Right),
        Balance::Same => (Balance::Same, Balance::Same),
        Balance::Right => (Balance::Left, Balance::Same),
    };
    slot.balance = outer;
    child.balance = inner;
    grandchild.balance = Balance::Same;

    grandchild.right = Some(child);
    let parent = mem::replace(slot, grandchild);
    slot.left = Some(parent);
    *rotations += 2;
    trace!("right-left rotation, new subtree root {:?}", slot.element);
}

/// Double rotation for a left-heavy node whose left child leans right.
fn rotate_left_right(slot: &mut Box<Node>, rotations: &mut usize) {
    let mut child = slot.left.take().expect("`rotate_left_right()` - no left child!");
    let mut grandchild = child.right.take().expect("`rotate_left_right()` - no inner grandchild!");

    child.right = grandchild.left.take();
    slot.left = grandchild.right.take();
    slot.rank -= child.rank + 1 + grandchild.rank + 1;
    grandchild.rank += child.rank + 1;

    let (inner, outer) = match grandchild.balance {
        Balance::Left => (Balance::Same, Balance::Right),
        Balance::Same => (Balance::Same, Balance::Same),
        Balance::Right => (Balance::Left, Balance::Same),
    };
    child.balance = inner;
    slot.balance = outer;
    grandchild.balance = Balance::Same;

    grandchild.left = Some(child);
    let parent = mem::replace(slot, grandchild);
    slot.right = Some(parent);
    *rotations += 2;
    trace!("left-right rotation, new subtree root {:?}", slot.element);
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::node::{debug_height, len};

    fn leaf(element: char) -> Option<Box<Node>> {
        Some(Box::new(Node::new(element)))
    }

    fn branch(element: char, balance: Balance, left: Option<Box<Node>>, right: Option<Box<Node>>) -> Box<Node> {
        let mut node = Node::new(element);
        node.rank = len(left.as_deref());
        node.balance = balance;
        node.left = left;
        node.right = right;
        Box::new(node)
    }

    #[test]
    fn single_left_rotation_repairs_rank() {
        // a \ b \ c
        let mut slot = branch('a', Balance::Right, None, Some(branch('b', Balance::Right, None, leaf('c'))));
        let mut rotations = 0;

        assert!(fix_right_heavy(&mut slot, &mut rotations));
        assert_eq!(rotations, 1);
        assert_eq!((slot.element, slot.rank, slot.balance), ('b', 1, Balance::Same));
        let left = slot.left.as_deref().unwrap();
        assert_eq!((left.element, left.rank, left.balance), ('a', 0, Balance::Same));
        assert_eq!(debug_height(Some(&*slot)), 1);
    }

    #[test]
    fn single_right_rotation_repairs_rank() {
        let mut slot = branch('c', Balance::Left, Some(branch('b', Balance::Left, leaf('a'), None)), None);
        let mut rotations = 0;

        assert!(fix_left_heavy(&mut slot, &mut rotations));
        assert_eq!(rotations, 1);
        assert_eq!((slot.element, slot.rank, slot.balance), ('b', 1, Balance::Same));
        let right = slot.right.as_deref().unwrap();
        assert_eq!((right.element, right.rank, right.balance), ('c', 0, Balance::Same));
    }

    #[test]
    fn double_rotations_count_two() {
        let mut slot = branch('a', Balance::Right, None, Some(branch('c', Balance::Left, leaf('b'), None)));
        let mut rotations = 0;
        assert!(fix_right_heavy(&mut slot, &mut rotations));
        assert_eq!(rotations, 2);
        assert_eq!((slot.element, slot.rank, slot.balance), ('b', 1, Balance::Same));
        assert_eq!(slot.right.as_deref().unwrap().rank, 0);

        let mut slot = branch('c', Balance::Left, Some(branch('a', Balance::Right, None, leaf('b'))), None);
        assert!(fix_left_heavy(&mut slot, &mut rotations));
        assert_eq!(rotations, 4);
        assert_eq!((slot.element, slot.rank, slot.balance), ('b', 1, Balance::Same));
        assert_eq!(slot.right.as_deref().unwrap().rank, 0);
    }

    #[test]
    fn rotation_over_balanced_child_keeps_height() {
        // Right child `c` is balanced: the single rotation leaves both nodes leaning.
        let mut slot = branch(
            'a',
            Balance::Right,
            None,
            Some(branch('c', Balance::Same, leaf('b'), leaf('d'))),
        );
        let mut rotations = 0;

        assert!(!fix_right_heavy(&mut slot, &mut rotations));
        assert_eq!((slot.element, slot.rank, slot.balance), ('c', 2, Balance::Left));
        let left = slot.left.as_deref().unwrap();
        assert_eq!((left.element, left.rank, left.balance), ('a', 0, Balance::Right));
        assert_eq!(debug_height(Some(&*slot)), 2);
    }

    #[test]
    fn growth_stops_at_leaning_parent() {
        let mut slot = branch('b', Balance::Left, leaf('a'), None);
        let mut rotations = 0;
        assert!(!right_grew(&mut slot, &mut rotations));
        assert_eq!(slot.balance, Balance::Same);

        assert!(left_grew(&mut slot, &mut rotations));
        assert_eq!(slot.balance, Balance::Left);
        assert_eq!(rotations, 0);
    }

    #[test]
    fn shrink_propagates_from_leaning_parent() {
        let mut slot = branch('b', Balance::Left, leaf('a'), None);
        let mut rotations = 0;
        assert!(left_shrank(&mut slot, &mut rotations));
        assert_eq!(slot.balance, Balance::Same);

        assert!(!right_shrank(&mut slot, &mut rotations));
        assert_eq!(slot.balance, Balance::Left);
    }
}
