//! echo builtin command

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::output::Output;

/// The echo builtin - print arguments joined with spaces.
pub struct Echo;

#[async_trait]
impl Command for Echo {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        out.print(ctx.args.join(" "));
        Ok(())
    }

    fn description(&self) -> &str {
        "Print text to terminal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    #[tokio::test]
    async fn test_echo_joins_args() {
        let mut state = SessionState::default();
        let args = vec!["hello".to_string(), "world".to_string()];
        let mut out = Output::new();
        Echo.execute(
            Context {
                args: &args,
                state: &mut state,
                depth: 0,
            },
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(out.lines()[0].text, "hello world");
    }

    #[tokio::test]
    async fn test_echo_no_args_prints_empty_line() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        Echo.execute(
            Context {
                args: &[],
                state: &mut state,
                depth: 0,
            },
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(out.lines()[0].text, "");
    }
}
