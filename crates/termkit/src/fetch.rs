//! Remote package retrieval
//!
//! Network access is a host capability, not something this crate implements:
//! `pkg install` asks an opaque [`PackageFetcher`] for the bytes of a named
//! package file and never learns where they came from. Hosts configure one
//! via [`ShellBuilder::fetcher`](crate::ShellBuilder::fetcher); without it,
//! `pkg install` reports that no package source is configured.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Fetch package file contents by name.
#[async_trait]
pub trait PackageFetcher: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String>;
}

/// Fetcher backed by a fixed in-memory map.
///
/// Useful for tests and for hosts that bundle packages with the binary.
#[derive(Default)]
pub struct StaticFetcher {
    files: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named package file.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }
}

#[async_trait]
impl PackageFetcher for StaticFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Fetch(format!("package '{name}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fetcher_hit_and_miss() {
        let fetcher = StaticFetcher::new().with("greet.pkg", "command: greet");
        assert_eq!(fetcher.fetch("greet.pkg").await.unwrap(), "command: greet");
        assert!(fetcher.fetch("missing.pkg").await.is_err());
    }
}
