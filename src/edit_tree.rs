//! The [`EditTree`] sequence type and its read-only views.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::ops::Index;

use crate::error::{Error, Result};
use crate::raw::{Node, RawEditTree};

mod cursor;
mod iter;

pub use cursor::{Cursor, NodeRef};
pub use iter::{Chars, Nodes, PreOrder};

/// A sequence of `char`s stored in a rank-augmented [AVL tree].
///
/// Every node records the size of its own left subtree (its *rank*), which is all that is needed
/// to find the node at a given position while descending. Reads and single-character edits are
/// O(log n). Whole trees can be cut apart with [`split_off`](EditTree::split_off) and glued
/// together with [`concatenate`](EditTree::concatenate) in O(log n) as well, which makes the tree
/// a good fit for the buffer behind a text editor.
///
/// The tree counts the rotations it performs while rebalancing. A single rotation counts as one
/// and a double rotation as two; see [`rotation_count`](EditTree::rotation_count).
///
/// # Examples
///
/// ```
/// use edit_tree::EditTree;
///
/// let mut tree = EditTree::new();
/// tree.push('b');
/// tree.insert(0, 'a').unwrap();
/// tree.push('c');
///
/// assert_eq!(tree.to_string(), "abc");
/// assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.rotation_count(), 0);
/// ```
///
/// Appending in order makes the tree lean until a rotation fixes it:
///
/// ```
/// use edit_tree::EditTree;
///
/// let mut tree = EditTree::new();
/// tree.extend("abc".chars());
/// assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");
/// assert_eq!(tree.rotation_count(), 1);
/// ```
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
pub struct EditTree {
    pub(crate) raw: RawEditTree,
}

impl EditTree {
    /// Makes a new, empty `EditTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawEditTree::new() }
    }

    /// Returns the number of characters in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single node.
    ///
    /// Follows the balance codes down one path, so it is only as trustworthy as they are. See
    /// [`debug_height`](EditTree::debug_height) for an independent measurement.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn height(&self) -> isize {
        self.raw.height()
    }

    /// Returns the height of the tree by visiting every node.
    ///
    /// Always equal to [`height`](EditTree::height) on a correctly balanced tree.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn debug_height(&self) -> isize {
        self.raw.debug_height()
    }

    /// Returns the total number of rotations performed by this tree so far. A double rotation
    /// counts as two.
    ///
    /// Rotations performed while splitting are counted against the tree that was split, and
    /// rotations performed while concatenating against the tree that received the characters.
    #[must_use]
    pub const fn rotation_count(&self) -> usize {
        self.raw.rotations()
    }

    /// Returns the character at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::{EditTree, Error};
    ///
    /// let tree = EditTree::from("abc");
    /// assert_eq!(tree.get(1), Ok('b'));
    /// assert_eq!(tree.get(3), Err(Error::OutOfRange { position: 3, len: 3 }));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get(&self, pos: usize) -> Result<char> {
        self.raw.get(pos).map(Node::element).ok_or_else(|| self.out_of_range(pos))
    }

    /// Inserts `element` so that it ends up at position `pos`, shifting everything after it one
    /// place to the right. `pos == self.len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos > self.len()`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("ac");
    /// tree.insert(1, 'b').unwrap();
    /// tree.insert(3, 'd').unwrap();
    /// assert_eq!(tree.to_string(), "abcd");
    /// assert!(tree.insert(5, 'x').is_err());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, pos: usize, element: char) -> Result<()> {
        if pos > self.len() {
            return Err(self.out_of_range(pos));
        }
        self.raw.insert(pos, element);
        Ok(())
    }

    /// Appends `element` to the end of the tree.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push(&mut self, element: char) {
        self.raw.insert(self.len(), element);
    }

    /// Removes and returns the character at `pos`.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= self.len()`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("abcdefg");
    /// assert_eq!(tree.remove(0), Ok('a'));
    /// assert_eq!(tree.to_string(), "bcdefg");
    /// assert_eq!(tree.to_debug_string(), r"[d2=, b0\, c0=, f1=, e0=, g0=]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, pos: usize) -> Result<char> {
        if pos >= self.len() {
            return Err(self.out_of_range(pos));
        }
        Ok(self.raw.remove(pos))
    }

    /// Removes the `len` characters starting at `start` and returns them as a new tree.
    ///
    /// Implemented as two splits and a concatenate. A zero-length range returns an empty tree and
    /// leaves `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `start + len > self.len()`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("hello, world");
    /// let cut = tree.remove_range(5, 7).unwrap();
    /// assert_eq!(tree.to_string(), "hello");
    /// assert_eq!(cut.to_string(), ", world");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_range(&mut self, start: usize, len: usize) -> Result<Self> {
        self.check_range(start, len)?;
        Ok(Self {
            raw: self.raw.remove_range(start, len),
        })
    }

    /// Moves every character from `other` onto the end of `self`, leaving `other` empty.
    ///
    /// `other`'s rotation count is not changed; rotations performed by the join are counted
    /// against `self`.
    ///
    /// A tree cannot be concatenated with itself:
    ///
    /// ```compile_fail
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("ab");
    /// tree.concatenate(&mut tree);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut a = EditTree::from("abc");
    /// let mut b = EditTree::from("defgh");
    /// a.concatenate(&mut b);
    /// assert_eq!(a.to_string(), "abcdefgh");
    /// assert!(b.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn concatenate(&mut self, other: &mut Self) {
        self.raw.concatenate(&mut other.raw);
    }

    /// Splits the tree in two at `pos`. `self` keeps positions `[0, pos)` and the returned tree
    /// holds `[pos, len)`.
    ///
    /// The returned tree starts with a rotation count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= self.len()`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut a = EditTree::from("abcdef");
    /// let b = a.split_off(2).unwrap();
    /// assert_eq!(a.to_string(), "ab");
    /// assert_eq!(b.to_string(), "cdef");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn split_off(&mut self, pos: usize) -> Result<Self> {
        if pos >= self.len() {
            return Err(self.out_of_range(pos));
        }
        Ok(Self {
            raw: self.raw.split_off(pos),
        })
    }

    /// Removes every character. The rotation count is kept.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the `len` characters starting at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos + len > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("the quick fox");
    /// assert_eq!(tree.substring(4, 5).unwrap(), "quick");
    /// assert_eq!(tree.substring(13, 0).unwrap(), "");
    /// assert!(tree.substring(10, 4).is_err());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n + len)
    pub fn substring(&self, pos: usize, len: usize) -> Result<String> {
        self.check_range(pos, len)?;
        Ok(self.chars_from(pos).take(len).collect())
    }

    /// Returns the position of the first occurrence of `needle`, if any.
    ///
    /// An empty `needle` is found at position `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("abcabc");
    /// assert_eq!(tree.find("ca"), Some(2));
    /// assert_eq!(tree.find("cc"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n * m) for a needle of `m` characters.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.find_from(needle, 0)
    }

    /// Returns the position of the first occurrence of `needle` starting at or after `pos`.
    ///
    /// An empty `needle` is found at `pos`. Returns `None` if `pos > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("abcabc");
    /// assert_eq!(tree.find_from("bc", 2), Some(4));
    /// assert_eq!(tree.find_from("", 6), Some(6));
    /// assert_eq!(tree.find_from("", 7), None);
    /// ```
    #[must_use]
    pub fn find_from(&self, needle: &str, pos: usize) -> Option<usize> {
        if pos > self.len() {
            return None;
        }
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() {
            return Some(pos);
        }
        let haystack: Vec<char> = self.chars_from(pos).collect();
        haystack
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
            .map(|offset| pos + offset)
    }

    /// Renders the tree in pre-order as `element rank balance` triples, e.g. `[b1=, a0=, c0=]`.
    ///
    /// Balance is shown as `/` when the left subtree is taller, `=` when both are equal and `\`
    /// when the right subtree is taller.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("ab");
    /// assert_eq!(tree.to_debug_string(), "[b1/, a0=]");
    /// tree.clear();
    /// assert_eq!(tree.to_debug_string(), "[]");
    /// ```
    #[must_use]
    pub fn to_debug_string(&self) -> String {
        let mut out = String::from("[");
        for (i, node) in self.pre_order().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{}{}{}", node.element(), node.rank(), node.balance().symbol());
        }
        out.push(']');
        out
    }

    /// Returns a cursor on the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<Cursor<'_>> {
        self.raw.root().map(Cursor::root)
    }

    /// Gets an iterator over the characters of the tree, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("xyz");
    /// let upper: String = tree.chars().map(|c| c.to_ascii_uppercase()).collect();
    /// assert_eq!(upper, "XYZ");
    /// ```
    pub fn chars(&self) -> Chars<'_> {
        Chars::new(self.nodes())
    }

    /// Gets an in-order iterator over the nodes of the tree.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::starting_at(self.raw.root(), self.len(), 0)
    }

    /// Gets a pre-order iterator over the nodes of the tree.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.raw.root(), self.len())
    }

    fn chars_from(&self, pos: usize) -> Chars<'_> {
        Chars::new(Nodes::starting_at(self.raw.root(), self.len(), pos))
    }

    fn check_range(&self, start: usize, len: usize) -> Result<()> {
        match start.checked_add(len) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(self.out_of_range(start.saturating_add(len))),
        }
    }

    const fn out_of_range(&self, position: usize) -> Error {
        Error::OutOfRange {
            position,
            len: self.len(),
        }
    }
}

impl Clone for EditTree {
    /// Copies every node into a new tree of identical shape. The copy's rotation count starts at
    /// zero.
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl Default for EditTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash for EditTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for c in self {
            c.hash(state);
        }
    }
}

impl PartialEq for EditTree {
    /// Two trees are equal when they hold the same characters, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl Eq for EditTree {}

impl PartialOrd for EditTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EditTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl fmt::Display for EditTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl fmt::Debug for EditTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chars()).finish()
    }
}

impl Index<usize> for EditTree {
    type Output = char;

    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    fn index(&self, pos: usize) -> &char {
        match self.raw.get(pos) {
            Some(node) => node.element_ref(),
            None => panic!("{}", self.out_of_range(pos)),
        }
    }
}

impl From<char> for EditTree {
    fn from(element: char) -> Self {
        Self {
            raw: RawEditTree::from_elements(&[element]),
        }
    }
}

impl From<&str> for EditTree {
    /// Builds a perfectly balanced tree without performing any rotations.
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<const N: usize> From<[char; N]> for EditTree {
    fn from(elements: [char; N]) -> Self {
        Self {
            raw: RawEditTree::from_elements(&elements),
        }
    }
}

impl FromIterator<char> for EditTree {
    /// Builds a perfectly balanced tree without performing any rotations.
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let elements: Vec<char> = iter.into_iter().collect();
        Self {
            raw: RawEditTree::from_elements(&elements),
        }
    }
}

impl Extend<char> for EditTree {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for c in iter {
            self.push(c);
        }
    }
}

impl<'a> Extend<&'a char> for EditTree {
    fn extend<T: IntoIterator<Item = &'a char>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a> IntoIterator for &'a EditTree {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Chars<'a> {
        self.chars()
    }
}
