//! Interactive input sources
//!
//! The `userinput` instruction in package scripts is the single suspension
//! point in the interpreter: execution parks on [`InputSource::read_line`]
//! and the host resumes the future once a line of text (or a refusal) is
//! available. Hosts plug in their own source via
//! [`ShellBuilder::input`](crate::ShellBuilder::input).

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Provider of interactive user input.
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Ask the user for one line of text, shown the given prompt.
    ///
    /// Returns `None` when the user declines; scripts treat that as the
    /// empty string.
    async fn read_line(&self, prompt: &str) -> Option<String>;
}

/// Input source that always declines.
///
/// The default for embedded shells with no interactive host.
pub struct NoInput;

#[async_trait]
impl InputSource for NoInput {
    async fn read_line(&self, _prompt: &str) -> Option<String> {
        None
    }
}

/// Input source fed from a pre-loaded queue of responses.
///
/// Used by tests and by hosts that script interactions up front.
#[derive(Default)]
pub struct QueuedInput {
    responses: Mutex<VecDeque<String>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `userinput` prompt.
    pub fn push(&self, response: impl Into<String>) {
        self.responses.lock().unwrap().push_back(response.into());
    }
}

#[async_trait]
impl InputSource for QueuedInput {
    async fn read_line(&self, _prompt: &str) -> Option<String> {
        self.responses.lock().unwrap().pop_front()
    }
}
