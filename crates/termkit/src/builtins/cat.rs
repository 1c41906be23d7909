//! cat builtin command

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::fs::resolve;
use crate::output::Output;

/// The cat builtin - print file contents.
pub struct Cat;

#[async_trait]
impl Command for Cat {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: cat <file>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        let content = ctx.state.store.read(&path)?;
        for line in content.lines() {
            out.print(line);
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Show file contents"
    }
}

#[cfg(test)]
mod tests {
    use crate::command::dispatch::dispatch;
    use crate::fs::VPath;
    use crate::output::{Outcome, Output};
    use crate::session::SessionState;

    #[tokio::test]
    async fn test_cat_multiline() {
        let mut state = SessionState::default();
        state
            .store
            .write(&VPath::new("/poem.txt"), "line one\nline two")
            .unwrap();
        let mut out = Output::new();
        dispatch("cat poem.txt", &mut out, &mut state, 0).await;
        let texts: Vec<&str> = out.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["line one", "line two"]);
    }

    #[tokio::test]
    async fn test_cat_directory_fails() {
        let mut state = SessionState::default();
        state.store.mkdir(&VPath::new("/d")).unwrap();
        let mut out = Output::new();
        let outcome = dispatch("cat /d", &mut out, &mut state, 0).await;
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out.lines()[0].text, "cat: /d: Is a directory");
    }
}
