use alloc::collections::TryReserveError;

/// Errors returned by the fallible list operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The position is past-the-end, stale, or was handed out by another list.
    #[error("position does not refer to the sentinel or a live element of this list")]
    InvalidPosition,
    /// There is no element after the given position.
    #[error("no element follows the given position")]
    NothingToErase,
    /// Storage for a new node could not be allocated.
    #[error("failed to allocate list node storage")]
    AllocFailed(#[from] TryReserveError),
}
