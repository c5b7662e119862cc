mod join;
pub(crate) mod node;
mod raw_edit_tree;
mod rebalance;
mod remove;

pub(crate) use node::Node;
pub(crate) use raw_edit_tree::RawEditTree;

/// Inline capacity of root-to-leaf path stacks. Trees up to roughly a million elements never
/// spill to the heap; deeper paths still work.
pub(crate) const PATH_CAPACITY: usize = 32;
