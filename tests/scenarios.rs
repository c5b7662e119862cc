//! Fixed edit sequences with known shapes, heights and rotation counts.

use edit_tree::{EditTree, Error};
use pretty_assertions::assert_eq;

/// Builds a tree by inserting each `(element, position)` in turn. `None` appends.
fn build(steps: &[(char, Option<usize>)]) -> EditTree {
    let mut tree = EditTree::new();
    for &(element, pos) in steps {
        match pos {
            Some(pos) => tree.insert(pos, element).unwrap(),
            None => tree.push(element),
        }
    }
    tree
}

fn appended(text: &str) -> EditTree {
    let mut tree = EditTree::new();
    tree.extend(text.chars());
    tree
}

/// The seven-node tree `d, b, f, a, c, e, g` built top-down without any rotation.
fn complete_seven() -> EditTree {
    build(&[
        ('d', None),
        ('b', Some(0)),
        ('f', None),
        ('a', Some(0)),
        ('c', Some(2)),
        ('e', Some(4)),
        ('g', None),
    ])
}

/// A 23-node tree of height 5 that leans in several places.
fn lecture_tree() -> EditTree {
    build(&[
        ('I', Some(0)),
        ('C', Some(0)),
        ('W', Some(2)),
        ('A', Some(0)),
        ('G', Some(2)),
        ('M', Some(4)),
        ('Y', Some(6)),
        ('B', Some(1)),
        ('F', Some(3)),
        ('H', Some(5)),
        ('L', Some(7)),
        ('R', Some(9)),
        ('X', Some(11)),
        ('a', Some(13)),
        ('D', Some(3)),
        ('K', Some(8)),
        ('O', Some(11)),
        ('T', Some(13)),
        ('Z', Some(17)),
        ('N', Some(11)),
        ('P', Some(13)),
        ('S', Some(15)),
        ('U', Some(17)),
    ])
}

// ─── Empty and tiny trees ────────────────────────────────────────────────────

#[test]
fn empty_tree() {
    let tree = EditTree::new();
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.debug_height(), -1);
    assert_eq!(tree.to_string(), "");
    assert_eq!(tree.to_debug_string(), "[]");
    assert_eq!(tree.get(0), Err(Error::OutOfRange { position: 0, len: 0 }));
    assert!(tree.root().is_none());
}

#[test]
fn three_inserts_without_rotation() {
    let tree = build(&[('b', None), ('a', Some(0)), ('c', None)]);
    assert_eq!(tree.to_string(), "abc");
    assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.rotation_count(), 0);
}

#[test]
fn three_appends_rotate_once() {
    let tree = appended("abc");
    assert_eq!(tree.to_string(), "abc");
    assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");
    assert_eq!(tree.rotation_count(), 1);
}

#[test]
fn get_past_end() {
    let tree = appended("abc");
    assert_eq!(tree.get(2), Ok('c'));
    assert_eq!(tree.get(3), Err(Error::OutOfRange { position: 3, len: 3 }));
    assert_eq!(tree.get(usize::MAX), Err(Error::OutOfRange { position: usize::MAX, len: 3 }));
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[test]
fn complete_tree_without_rotation() {
    let tree = complete_seven();
    assert_eq!(tree.to_debug_string(), "[d3=, b1=, a0=, c0=, f1=, e0=, g0=]");
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.rotation_count(), 0);
}

#[test]
fn delete_leaves_down_to_empty() {
    let mut tree = complete_seven();

    assert_eq!(tree.remove(0), Ok('a'));
    assert_eq!(tree.to_string(), "bcdefg");
    assert_eq!(tree.to_debug_string(), r"[d2=, b0\, c0=, f1=, e0=, g0=]");
    assert_eq!(tree.height(), 2);

    let steps = [
        (1, 'c', r"[d1\, b0=, f1=, e0=, g0=]"),
        (2, 'e', r"[d1\, b0=, f0\, g0=]"),
        (3, 'g', "[d1=, b0=, f0=]"),
        (0, 'b', r"[d0\, f0=]"),
        (1, 'f', "[d0=]"),
        (0, 'd', "[]"),
    ];
    for (pos, removed, expected) in steps {
        assert_eq!(tree.remove(pos), Ok(removed));
        assert_eq!(tree.to_debug_string(), expected);
        assert_eq!(tree.height(), tree.debug_height());
    }
    assert_eq!(tree.rotation_count(), 0);
}

#[test]
fn delete_with_rotations() {
    let mut tree = build(&[('o', None), ('u', None), ('i', Some(0)), ('e', Some(0))]);

    assert_eq!(tree.remove(3), Ok('u'));
    assert_eq!(tree.to_debug_string(), "[i1=, e0=, o0=]");
    assert_eq!(tree.rotation_count(), 1);

    // Each step inserts one character and removes another.
    let steps: [(char, Option<usize>, usize, &str, usize); 7] = [
        ('g', Some(1), 3, "[g1=, e0=, i0=]", 3),
        ('o', None, 0, "[i1=, g0=, o0=]", 4),
        ('k', Some(2), 0, "[k1=, i0=, o0=]", 6),
        ('e', Some(0), 2, "[i1=, e0=, o0=]", 7),
        ('g', Some(1), 2, "[g1=, e0=, o0=]", 9),
        ('u', None, 1, "[o1=, e0=, u0=]", 9),
        ('m', Some(2), 1, "[m1=, e0=, u0=]", 9),
    ];
    for (element, insert_at, remove_at, expected, rotations) in steps {
        match insert_at {
            Some(pos) => tree.insert(pos, element).unwrap(),
            None => tree.push(element),
        }
        tree.remove(remove_at).unwrap();
        assert_eq!(tree.to_debug_string(), expected, "inserting {element:?}");
        assert_eq!(tree.rotation_count(), rotations, "inserting {element:?}");
    }
}

#[test]
fn delete_from_lecture_tree() {
    let mut tree = lecture_tree();
    assert_eq!(tree.rotation_count(), 0);
    assert_eq!(
        tree.to_debug_string(),
        r"[I7\, C2\, A0\, B0=, G2/, F1/, D0=, H0=, W10/, M2\, L1/, K0=, R3=, O1=, N0=, P0=, T1=, S0=, U0=, Y1\, X0=, a1/, Z0=]"
    );
    assert_eq!(tree.height(), 5);

    // Removing a leaf rebalances all the way up to the root.
    assert_eq!(tree.remove(6), Ok('H'));
    assert_eq!(tree.rotation_count(), 3);
    assert_eq!(
        tree.to_debug_string(),
        r"[M9=, I6/, C2=, A0\, B0=, F1=, D0=, G0=, L1/, K0=, W7=, R3=, O1=, N0=, P0=, T1=, S0=, U0=, Y1\, X0=, a1/, Z0=]"
    );

    assert_eq!(tree.remove(7), Ok('K'));
    assert_eq!(tree.rotation_count(), 4);
    assert_eq!(
        tree.to_debug_string(),
        r"[M8=, C2\, A0\, B0=, I3/, F1=, D0=, G0=, L0=, W7=, R3=, O1=, N0=, P0=, T1=, S0=, U0=, Y1\, X0=, a1/, Z0=]"
    );
    assert_eq!(tree.height(), tree.debug_height());
}

// ─── Split and concatenate ───────────────────────────────────────────────────

#[test]
fn split_then_concatenate_without_rotations() {
    let mut tree = appended("abcdefghijkl");
    assert_eq!(tree.to_debug_string(), r"[h7=, d3=, b1=, a0=, c0=, f1=, e0=, g0=, j1\, i0=, k0\, l0=]");
    assert_eq!(tree.rotation_count(), 8);

    let mut tail = tree.split_off(6).unwrap();
    assert_eq!(tree.to_string(), "abcdef");
    assert_eq!(tree.to_debug_string(), "[d3=, b1=, a0=, c0=, f1/, e0=]");
    assert_eq!(tail.to_string(), "ghijkl");
    assert_eq!(tail.to_debug_string(), r"[j3=, h1=, g0=, i0=, k0\, l0=]");
    assert_eq!(tree.rotation_count(), 8);
    assert_eq!(tail.rotation_count(), 0);

    tree.concatenate(&mut tail);
    assert_eq!(tree.to_string(), "abcdefghijkl");
    assert_eq!(tree.to_debug_string(), r"[g6=, d3=, b1=, a0=, c0=, f1/, e0=, j2=, h0\, i0=, k0\, l0=]");
    assert_eq!(tree.rotation_count(), 8);
    assert!(tail.is_empty());
    assert_eq!(tail.to_debug_string(), "[]");
}

#[test]
fn concatenate_empty_sides() {
    let mut tree = appended("abc");
    let mut empty = EditTree::new();
    tree.concatenate(&mut empty);
    assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");

    empty.concatenate(&mut tree);
    assert_eq!(empty.to_debug_string(), "[b1=, a0=, c0=]");
    assert!(tree.is_empty());
}

#[test]
fn remove_range_from_middle() {
    let mut tree = appended("abcdefghijkl");
    let cut = tree.remove_range(3, 4).unwrap();
    assert_eq!(cut.to_string(), "defg");
    assert_eq!(tree.to_string(), "abchijkl");
    assert_eq!(tree.height(), tree.debug_height());

    assert_eq!(
        tree.remove_range(5, 4).unwrap_err(),
        Error::OutOfRange { position: 9, len: 8 }
    );
    assert_eq!(tree.to_string(), "abchijkl");
}

// ─── Copying ─────────────────────────────────────────────────────────────────

#[test]
fn clone_is_structurally_identical() {
    let tree = lecture_tree();
    let copy = tree.clone();
    assert_eq!(copy.to_debug_string(), tree.to_debug_string());
    assert_eq!(copy.rotation_count(), 0);
    assert_eq!(copy.height(), tree.height());
}
