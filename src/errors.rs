use thiserror::Error;

/// Errors that can occur when operating on the list relative to a [`Position`].
///
/// [`Position`]: crate::Position
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The position names no node of this list: it was erased, comes from
    /// another list, or the list was cleared since it was taken.
    #[error("position does not refer to a node of this list")]
    InvalidPosition,

    #[error("cannot operate relative to the end position")]
    EndPosition,

    #[error("no element follows the given position")]
    NothingAfter,
}
