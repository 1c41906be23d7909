//! help builtin command

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::output::Output;

/// The help builtin - list every registered command with its description.
pub struct Help;

#[async_trait]
impl Command for Help {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        out.print("Available commands:");
        for (name, command) in ctx.state.registry.iter() {
            out.print(format!("  {name:<12} - {}", command.description()));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Show this help message"
    }
}

#[cfg(test)]
mod tests {
    use crate::command::dispatch::dispatch;
    use crate::output::Output;
    use crate::session::SessionState;

    #[tokio::test]
    async fn test_help_lists_builtins_sorted() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        dispatch("help", &mut out, &mut state, 0).await;
        assert_eq!(out.lines()[0].text, "Available commands:");
        let names: Vec<String> = out.lines()[1..]
            .iter()
            .map(|l| l.text.trim_start().split_whitespace().next().unwrap().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.iter().any(|n| n == "help"));
        assert!(out.lines()[1..]
            .iter()
            .any(|l| l.text.contains("Print text to terminal")));
    }
}
