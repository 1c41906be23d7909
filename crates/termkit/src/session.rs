//! Session state
//!
//! One shell session owns everything mutable: the filesystem tree, the
//! working directory, the command registry, environment, and history. There
//! are no process-wide singletons; commands receive this state explicitly
//! through their [`Context`](crate::command::Context).

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::command::Registry;
use crate::fetch::PackageFetcher;
use crate::fs::{MemoryStore, VPath};
use crate::input::{InputSource, NoInput};
use crate::limits::Limits;

/// Mutable state of one shell session.
pub struct SessionState {
    pub store: MemoryStore,
    pub cwd: VPath,
    pub registry: Registry,
    pub env: BTreeMap<String, String>,
    pub history: Vec<String>,
    pub input: Arc<dyn InputSource>,
    pub fetcher: Option<Arc<dyn PackageFetcher>>,
    pub limits: Limits,
    /// Set by the `exit` builtin; the shell facade restarts the session
    /// instead of terminating the process.
    pub reset_requested: bool,
}

impl SessionState {
    pub fn new(
        input: Arc<dyn InputSource>,
        fetcher: Option<Arc<dyn PackageFetcher>>,
        env: BTreeMap<String, String>,
        limits: Limits,
    ) -> Self {
        Self {
            store: MemoryStore::new(),
            cwd: VPath::root(),
            registry: Registry::with_builtins(),
            env,
            history: Vec::new(),
            input,
            fetcher,
            limits,
            reset_requested: false,
        }
    }

    /// Default environment of a fresh session.
    pub fn default_env() -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        env.insert("USER".to_string(), "user".to_string());
        env.insert("SHELL".to_string(), "/bin/tsh".to_string());
        env
    }

    /// Restart the session: fresh store, registry, cwd, and history.
    ///
    /// Environment, input source, fetcher, and limits survive - they belong
    /// to the host, not to the session's mutable state.
    pub fn reset(&mut self) {
        self.store = MemoryStore::new();
        self.cwd = VPath::root();
        self.registry = Registry::with_builtins();
        self.history.clear();
        self.reset_requested = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            Arc::new(NoInput),
            None,
            Self::default_env(),
            Limits::default(),
        )
    }
}
