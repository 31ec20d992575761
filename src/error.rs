use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Recoverable failures of list operations.
///
/// None of these leave the list modified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("unable to allocate list storage")]
    AllocationFailure,
    #[error("operation requires a non-empty list")]
    EmptyList,
    #[error("handle refers to a node that has been removed")]
    StaleHandle,
    #[error("handle was issued by another list")]
    ForeignHandle,
}
