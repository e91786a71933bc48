use thiserror::Error;

/// Errors produced by registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The operation needs at least one student.
    #[error("no students registered")]
    Empty,
}
