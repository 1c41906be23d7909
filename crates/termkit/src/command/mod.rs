//! Commands, the registry, and dispatch
//!
//! This module provides the [`Command`] trait for implementing named
//! commands and the [`Registry`] mapping names to handlers. Handlers are
//! added at runtime too: the package compiler registers compiled scripts
//! through the same `register` call the builtins use.
//!
//! # Custom commands
//!
//! ```rust
//! use termkit::{async_trait, Command, Context, Output, Shell};
//! use std::sync::Arc;
//!
//! struct Shout;
//!
//! #[async_trait]
//! impl Command for Shout {
//!     async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> termkit::Result<()> {
//!         out.print(ctx.args.join(" ").to_uppercase());
//!         Ok(())
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Print arguments in upper case"
//!     }
//! }
//!
//! let shell = Shell::builder().command("shout", Arc::new(Shout)).build();
//! ```

pub mod dispatch;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::builtins;
use crate::error::Result;
use crate::output::Output;
use crate::session::SessionState;

/// Execution context bound to one command invocation.
pub struct Context<'a> {
    /// Arguments after the command name. `mycmd a b` yields `["a", "b"]`.
    pub args: &'a [String],
    /// The owning session: filesystem, cwd, registry, env, history.
    pub state: &'a mut SessionState,
    /// Invocation nesting depth; incremented per script `Invoke`.
    pub depth: usize,
}

/// Trait for implementing named commands.
///
/// Return `Ok(())` for success. Returning an error does not abort the
/// session: the dispatcher renders it as `<name>: <error>` on the output
/// sink and maps the invocation to a failure outcome.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()>;

    /// One-line description shown by `help`.
    fn description(&self) -> &str {
        "No description"
    }
}

/// Mutable name-to-command table.
///
/// Registering an existing name overwrites it: last write wins, no
/// versioning. Names are kept sorted so `help` output is stable.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Arc<dyn Command>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the builtin command set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::install(&mut registry);
        registry
    }

    /// Register a command, overwriting any previous entry of the same name.
    pub fn register(&mut self, name: impl Into<String>, command: Arc<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    /// Resolve a name to its handler.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Command>)> {
        self.commands.iter().map(|(name, cmd)| (name.as_str(), cmd))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
