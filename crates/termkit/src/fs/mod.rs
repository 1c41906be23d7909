//! Virtual filesystem
//!
//! An owned tree of [`Node`]s addressed by normalized absolute paths.
//! [`path`] turns user-supplied strings into [`VPath`]s; [`memory`] holds the
//! tree and its mutation rules.

pub mod memory;
pub mod path;

pub use memory::{MemoryStore, Node, NodeInfo, NodeKind};
pub use path::{resolve, VPath};
