use std::result;

use thiserror::Error as ThisError;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Failures reported by stack operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("stack underflow: pop or top on an empty stack")]
    Underflow,
}
