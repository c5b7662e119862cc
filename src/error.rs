/// Errors returned by [`EditTree`](crate::EditTree) operations.
///
/// Every operation validates its arguments before mutating anything, so a returned
/// error always means the tree is unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// A position (or the end of a range) lies outside the valid bound for the operation.
    #[error("position {position} is out of range for a tree of length {len}")]
    OutOfRange {
        /// The offending position. For ranges this is the exclusive end.
        position: usize,
        /// The length of the tree at the time of the call.
        len: usize,
    },
}

/// A `Result` alias with [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;
