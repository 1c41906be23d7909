//! Resource limits for sandboxed execution
//!
//! Compiled package scripts can invoke other commands, including other
//! scripts, so `Invoke` chains nest without any bound in the language itself.
//! The limits here cap that nesting so a script that invokes itself fails
//! with a diagnostic instead of overflowing the stack.

use thiserror::Error;

/// Resource limits for command execution.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting depth for command invocations.
    ///
    /// Depth 0 is the REPL line itself; each `Invoke` instruction inside a
    /// package script adds one level. Default: 64.
    pub max_invoke_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_invoke_depth: 64,
        }
    }
}

impl Limits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum invocation nesting depth.
    pub fn max_invoke_depth(mut self, depth: usize) -> Self {
        self.max_invoke_depth = depth;
        self
    }
}

/// A resource limit was exceeded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitExceeded {
    /// Command invocations nested deeper than the configured maximum.
    #[error("maximum invocation depth ({0}) exceeded")]
    InvokeDepth(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(Limits::default().max_invoke_depth, 64);
    }

    #[test]
    fn test_builder_style() {
        let limits = Limits::new().max_invoke_depth(8);
        assert_eq!(limits.max_invoke_depth, 8);
    }
}
