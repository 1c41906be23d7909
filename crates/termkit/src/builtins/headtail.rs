//! head and tail builtins

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::fs::resolve;
use crate::output::Output;

const LINE_COUNT: usize = 10;

/// The head builtin - first lines of a file.
pub struct Head;

#[async_trait]
impl Command for Head {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: head <file>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        let content = ctx.state.store.read(&path)?;
        for line in content.lines().take(LINE_COUNT) {
            out.print(line);
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Show first few lines of file"
    }
}

/// The tail builtin - last lines of a file.
pub struct Tail;

#[async_trait]
impl Command for Tail {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: tail <file>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        let content = ctx.state.store.read(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(LINE_COUNT);
        for line in &lines[start..] {
            out.print(*line);
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Show last few lines of file"
    }
}

#[cfg(test)]
mod tests {
    use crate::command::dispatch::dispatch;
    use crate::fs::VPath;
    use crate::output::Output;
    use crate::session::SessionState;

    fn numbered(n: usize) -> String {
        (1..=n).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n")
    }

    #[tokio::test]
    async fn test_head_caps_at_ten() {
        let mut state = SessionState::default();
        state.store.write(&VPath::new("/f"), numbered(15)).unwrap();
        let mut out = Output::new();
        dispatch("head /f", &mut out, &mut state, 0).await;
        assert_eq!(out.lines().len(), 10);
        assert_eq!(out.lines()[0].text, "l1");
        assert_eq!(out.lines()[9].text, "l10");
    }

    #[tokio::test]
    async fn test_tail_takes_last_ten() {
        let mut state = SessionState::default();
        state.store.write(&VPath::new("/f"), numbered(15)).unwrap();
        let mut out = Output::new();
        dispatch("tail /f", &mut out, &mut state, 0).await;
        assert_eq!(out.lines().len(), 10);
        assert_eq!(out.lines()[0].text, "l6");
        assert_eq!(out.lines()[9].text, "l15");
    }

    #[tokio::test]
    async fn test_short_file_prints_everything() {
        let mut state = SessionState::default();
        state.store.write(&VPath::new("/f"), "only").unwrap();
        for cmd in ["head /f", "tail /f"] {
            let mut out = Output::new();
            dispatch(cmd, &mut out, &mut state, 0).await;
            assert_eq!(out.lines().len(), 1);
            assert_eq!(out.lines()[0].text, "only");
        }
    }
}
