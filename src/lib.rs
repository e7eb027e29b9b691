//! A generic LIFO stack chained through an arena of index-linked nodes.

mod arena;
mod error;
mod stack;

pub use error::{Error, Result};
pub use stack::Stack;
