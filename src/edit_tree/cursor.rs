use core::fmt;
use core::ptr;

use smallvec::SmallVec;

use crate::Balance;
use crate::raw::{Node, PATH_CAPACITY, node};

/// A read-only view of a single node of an [`EditTree`](super::EditTree).
///
/// Yielded by [`Nodes`](super::Nodes) and [`PreOrder`](super::PreOrder), and reachable from a
/// [`Cursor`]. A `NodeRef` knows its children but not its parent; use a [`Cursor`] to walk
/// upward.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) const fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// Returns the character stored in this node.
    #[must_use]
    pub const fn element(self) -> char {
        self.node.element()
    }

    /// Returns the number of nodes in this node's left subtree.
    #[must_use]
    pub const fn rank(self) -> usize {
        self.node.rank()
    }

    /// Returns which of this node's subtrees is taller.
    #[must_use]
    pub const fn balance(self) -> Balance {
        self.node.balance()
    }

    /// Returns `true` if this node has a left child.
    #[must_use]
    pub fn has_left(self) -> bool {
        self.node.left().is_some()
    }

    /// Returns `true` if this node has a right child.
    #[must_use]
    pub fn has_right(self) -> bool {
        self.node.right().is_some()
    }

    /// Returns the left child, if any.
    #[must_use]
    pub fn left(self) -> Option<NodeRef<'a>> {
        self.node.left().map(NodeRef::new)
    }

    /// Returns the right child, if any.
    #[must_use]
    pub fn right(self) -> Option<NodeRef<'a>> {
        self.node.right().map(NodeRef::new)
    }

    /// Returns the number of nodes in the subtree rooted here.
    #[must_use]
    pub fn len(self) -> usize {
        node::len(Some(self.node))
    }

    /// Returns the height of the subtree rooted here, derived from balance codes.
    ///
    /// A leaf has height `0`.
    #[must_use]
    pub fn height(self) -> isize {
        node::height(Some(self.node))
    }

    /// Returns the height of the subtree rooted here by visiting every node.
    ///
    /// Agrees with [`height`](NodeRef::height) whenever the tree is balanced; O(n).
    #[must_use]
    pub fn debug_height(self) -> isize {
        node::debug_height(Some(self.node))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.element(), self.rank(), self.balance().symbol())
    }
}

/// A read-only position in an [`EditTree`](super::EditTree) that remembers how it got there.
///
/// Nodes do not store parent links, so a cursor keeps the path from the root to its node.
/// Moving down pushes onto that path and [`parent`](Cursor::parent) pops from it.
///
/// # Examples
///
/// ```
/// use edit_tree::{Balance, EditTree};
///
/// let tree = EditTree::from("abc");
/// let root = tree.root().unwrap();
/// assert_eq!(root.element(), 'b');
/// assert_eq!(root.rank(), 1);
/// assert_eq!(root.balance(), Balance::Same);
///
/// let left = root.left().unwrap();
/// assert_eq!(left.element(), 'a');
/// assert!(left.is_left_child());
/// assert_eq!(left.parent().unwrap().element(), 'b');
/// assert!(!root.has_parent());
/// ```
#[derive(Clone)]
pub struct Cursor<'a> {
    node: &'a Node,
    ancestors: SmallVec<[&'a Node; PATH_CAPACITY]>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn root(node: &'a Node) -> Self {
        Self {
            node,
            ancestors: SmallVec::new(),
        }
    }

    fn child(&self, child: Option<&'a Node>) -> Option<Self> {
        let child = child?;
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.node);
        Some(Self {
            node: child,
            ancestors,
        })
    }

    /// Returns a [`NodeRef`] to the node under this cursor.
    #[must_use]
    pub const fn node(&self) -> NodeRef<'a> {
        NodeRef::new(self.node)
    }

    /// Returns the character stored in this node.
    #[must_use]
    pub const fn element(&self) -> char {
        self.node.element()
    }

    /// Returns the number of nodes in this node's left subtree.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.node.rank()
    }

    /// Returns which of this node's subtrees is taller.
    #[must_use]
    pub const fn balance(&self) -> Balance {
        self.node.balance()
    }

    /// Returns `true` if this node has a left child.
    #[must_use]
    pub fn has_left(&self) -> bool {
        self.node.left().is_some()
    }

    /// Returns `true` if this node has a right child.
    #[must_use]
    pub fn has_right(&self) -> bool {
        self.node.right().is_some()
    }

    /// Moves to the left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.child(self.node.left())
    }

    /// Moves to the right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.child(self.node.right())
    }

    /// Returns `true` unless this is the root.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        !self.ancestors.is_empty()
    }

    /// Moves to the parent, or returns `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let mut ancestors = self.ancestors.clone();
        let node = ancestors.pop()?;
        Some(Self { node, ancestors })
    }

    /// Returns `true` if this node is its parent's left child.
    #[must_use]
    pub fn is_left_child(&self) -> bool {
        self.ancestors
            .last()
            .and_then(|parent| parent.left())
            .is_some_and(|left| ptr::eq(left, self.node))
    }

    /// Returns `true` if this node is its parent's right child.
    #[must_use]
    pub fn is_right_child(&self) -> bool {
        self.ancestors
            .last()
            .and_then(|parent| parent.right())
            .is_some_and(|right| ptr::eq(right, self.node))
    }

    /// Returns the number of ancestors between this node and the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Returns the number of nodes in the subtree rooted here.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().len()
    }

    /// Returns the height of the subtree rooted here, derived from balance codes.
    #[must_use]
    pub fn height(&self) -> isize {
        self.node().height()
    }

    /// Returns the height of the subtree rooted here by visiting every node. O(n).
    #[must_use]
    pub fn debug_height(&self) -> isize {
        self.node().debug_height()
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node())
            .field("depth", &self.depth())
            .finish()
    }
}
