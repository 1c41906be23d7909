//! Error types for Termkit
//!
//! Every failure here is terminal only for the single command invocation that
//! produced it. The dispatcher renders errors through the output sink and the
//! surrounding REPL loop or script keeps going; nothing unwinds past the
//! dispatch boundary.

use crate::limits::LimitExceeded;
use thiserror::Error;

/// Result type alias using Termkit's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Termkit error types.
///
/// Display strings are shell-style fragments so the dispatcher can render
/// them as `<command>: <error>`, e.g. `cat: /notes: No such file or directory`.
#[derive(Error, Debug)]
pub enum Error {
    /// Path does not resolve to any node.
    #[error("{0}: No such file or directory")]
    NoSuchEntry(String),

    /// Operation required a directory but found a file.
    #[error("{0}: Not a directory")]
    NotADirectory(String),

    /// Operation required a file but found a directory.
    #[error("{0}: Is a directory")]
    NotAFile(String),

    /// Creation targeted an occupied path where overwrite is not intended.
    #[error("cannot create '{0}': File exists")]
    AlreadyExists(String),

    /// Package script has no `command:` directive.
    #[error("no 'command:' directive found in package script")]
    MissingCommandDirective,

    /// Package script has no `run:` block, or the block has no executable lines.
    #[error("no 'run:' block found or block is empty")]
    EmptyRunBlock,

    /// A line inside the `run:` block could not be classified.
    #[error("syntax error in package script: {0}")]
    ScriptSyntaxError(String),

    /// Dispatcher could not resolve a command name.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    /// Remote package retrieval failed (reported by the host's fetcher).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Resource limit exceeded.
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(#[from] LimitExceeded),
}
