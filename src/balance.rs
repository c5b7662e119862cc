use core::fmt;

/// Which subtree of a node, if any, is one level taller than the other.
///
/// The balance invariant guarantees the difference is never more than one level, so
/// three codes describe every node.
///
/// # Examples
///
/// ```
/// use edit_tree::{Balance, EditTree};
///
/// let mut tree = EditTree::new();
/// tree.push('a');
/// tree.push('b');
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.balance(), Balance::Right);
/// assert_eq!(root.balance().symbol(), '\\');
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Balance {
    /// The left subtree is one level taller.
    Left,
    /// Both subtrees have the same height.
    #[default]
    Same,
    /// The right subtree is one level taller.
    Right,
}

impl Balance {
    /// Returns the single-character symbol used by [`EditTree::to_debug_string`]:
    /// `/` for [`Left`](Balance::Left), `=` for [`Same`](Balance::Same) and `\` for
    /// [`Right`](Balance::Right).
    ///
    /// [`EditTree::to_debug_string`]: crate::EditTree::to_debug_string
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Balance::Left => '/',
            Balance::Same => '=',
            Balance::Right => '\\',
        }
    }

    /// Returns the balance code of a node whose subtrees have the given heights.
    ///
    /// Heights use `-1` for an absent subtree.
    pub(crate) fn from_heights(left: isize, right: isize) -> Self {
        debug_assert!((left - right).abs() <= 1, "subtree heights {left} and {right} are not AVL balanced");
        match left.cmp(&right) {
            core::cmp::Ordering::Greater => Balance::Left,
            core::cmp::Ordering::Equal => Balance::Same,
            core::cmp::Ordering::Less => Balance::Right,
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
