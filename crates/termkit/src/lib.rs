//! Termkit - Embeddable virtual terminal with an in-memory filesystem
//!
//! A self-contained shell session: hierarchical virtual filesystem, a
//! registry of async commands, and a package system that compiles `.pkg`
//! scripts into new commands at runtime. Nothing touches the host
//! filesystem, network, or process table; I/O beyond the output buffer
//! happens only through capabilities the host wires in.
//!
//! # Example
//!
//! ```rust
//! use termkit::Shell;
//!
//! # tokio_test::block_on(async {
//! let mut shell = Shell::new();
//! let result = shell.exec("echo hello").await;
//! assert_eq!(result.stdout(), "hello\n");
//! assert!(result.is_success());
//! # });
//! ```

mod builtins;
mod command;
mod error;
mod fetch;
mod fs;
mod input;
mod limits;
mod logging;
mod output;
mod package;
mod session;

pub use command::{Command, Context, Registry};
pub use error::{Error, Result};
pub use fetch::{PackageFetcher, StaticFetcher};
pub use fs::{resolve, MemoryStore, Node, NodeInfo, NodeKind, VPath};
pub use input::{InputSource, NoInput, QueuedInput};
pub use limits::{LimitExceeded, Limits};
pub use output::{ExecResult, Line, Outcome, Output, Severity};
pub use package::{compile, CompiledScript, Instruction, ScriptCommand};

// Implementors of [`Command`] need the same macro the trait is defined with.
pub use async_trait::async_trait;

use std::collections::BTreeMap;
use std::sync::Arc;

use command::dispatch::dispatch;
use session::SessionState;

/// Main entry point for Termkit.
///
/// One `Shell` is one session: its filesystem, working directory, command
/// registry, environment, and history live for as long as the value does.
pub struct Shell {
    state: SessionState,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Create a shell with default settings: empty filesystem, builtin
    /// commands, no interactive input, no package source.
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
        }
    }

    /// Create a new ShellBuilder for customized configuration.
    pub fn builder() -> ShellBuilder {
        ShellBuilder::default()
    }

    /// Execute one input line and return its buffered output.
    ///
    /// Never fails: command errors are rendered into the result's error
    /// lines and reflected in its outcome.
    pub async fn exec(&mut self, line: &str) -> ExecResult {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.state.history.push(trimmed.to_string());
        }
        let mut out = Output::new();
        let outcome = dispatch(trimmed, &mut out, &mut self.state, 0).await;
        if self.state.reset_requested {
            self.state.reset();
        }
        out.into_result(outcome)
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        self.state.cwd.as_str()
    }

    /// The session's filesystem, for hosts that pre-seed or inspect files.
    pub fn store(&self) -> &MemoryStore {
        &self.state.store
    }

    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.state.store
    }

    /// Input lines executed so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.state.history
    }
}

/// Builder for customized Shell configuration.
#[derive(Default)]
pub struct ShellBuilder {
    input: Option<Arc<dyn InputSource>>,
    fetcher: Option<Arc<dyn PackageFetcher>>,
    env: BTreeMap<String, String>,
    limits: Option<Limits>,
    commands: Vec<(String, Arc<dyn Command>)>,
}

impl ShellBuilder {
    /// Set the interactive input source consulted by `userinput` steps.
    pub fn input(mut self, input: Arc<dyn InputSource>) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the package source consulted by `pkg install`.
    pub fn fetcher(mut self, fetcher: Arc<dyn PackageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set resource limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Register a custom command alongside the builtins. Reusing a builtin
    /// name replaces the builtin.
    pub fn command(mut self, name: impl Into<String>, command: Arc<dyn Command>) -> Self {
        self.commands.push((name.into(), command));
        self
    }

    /// Build the Shell instance.
    pub fn build(self) -> Shell {
        let input = self.input.unwrap_or_else(|| Arc::new(NoInput));
        let mut env = SessionState::default_env();
        env.extend(self.env);

        let mut state =
            SessionState::new(input, self.fetcher, env, self.limits.unwrap_or_default());
        for (name, command) in self.commands {
            state.registry.register(name, command);
        }
        Shell { state }
    }
}
