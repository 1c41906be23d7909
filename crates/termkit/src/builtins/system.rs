//! Session builtins (date, whoami, env, history, exit)

use async_trait::async_trait;
use chrono::Utc;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::output::Output;

/// The date builtin - current date and time.
pub struct Date;

#[async_trait]
impl Command for Date {
    async fn execute(&self, _ctx: Context<'_>, out: &mut Output) -> Result<()> {
        out.print(Utc::now().to_rfc2822());
        Ok(())
    }

    fn description(&self) -> &str {
        "Show current date and time"
    }
}

/// The whoami builtin - current user name from the session environment.
pub struct Whoami;

#[async_trait]
impl Command for Whoami {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let user = ctx.state.env.get("USER").map(String::as_str).unwrap_or("user");
        out.print(user);
        Ok(())
    }

    fn description(&self) -> &str {
        "Print current user"
    }
}

/// The env builtin - session environment variables, sorted.
pub struct Env;

#[async_trait]
impl Command for Env {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        for (key, value) in &ctx.state.env {
            out.print(format!("{key}={value}"));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "List environment variables"
    }
}

/// The history builtin - previously submitted lines, numbered.
pub struct History;

#[async_trait]
impl Command for History {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        if ctx.state.history.is_empty() {
            out.print("No history found.");
            return Ok(());
        }
        let lines: Vec<String> = ctx
            .state
            .history
            .iter()
            .enumerate()
            .map(|(idx, line)| format!("{}: {line}", idx + 1))
            .collect();
        for line in lines {
            out.print(line);
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Show command history"
    }
}

/// The exit builtin - request a session restart.
///
/// The shell facade notices the flag and rebuilds the session in place; the
/// process itself keeps running.
pub struct Exit;

#[async_trait]
impl Command for Exit {
    async fn execute(&self, ctx: Context<'_>, _out: &mut Output) -> Result<()> {
        ctx.state.reset_requested = true;
        Ok(())
    }

    fn description(&self) -> &str {
        "Restart the shell session"
    }
}

#[cfg(test)]
mod tests {
    use crate::command::dispatch::dispatch;
    use crate::output::Output;
    use crate::session::SessionState;

    #[tokio::test]
    async fn test_whoami_reads_env() {
        let mut state = SessionState::default();
        state.env.insert("USER".to_string(), "ada".to_string());
        let mut out = Output::new();
        dispatch("whoami", &mut out, &mut state, 0).await;
        assert_eq!(out.lines()[0].text, "ada");
    }

    #[tokio::test]
    async fn test_env_sorted_pairs() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        dispatch("env", &mut out, &mut state, 0).await;
        let texts: Vec<&str> = out.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["SHELL=/bin/tsh", "USER=user"]);
    }

    #[tokio::test]
    async fn test_history_numbered() {
        let mut state = SessionState::default();
        state.history.push("echo one".to_string());
        state.history.push("pwd".to_string());
        let mut out = Output::new();
        dispatch("history", &mut out, &mut state, 0).await;
        assert_eq!(out.lines()[0].text, "1: echo one");
        assert_eq!(out.lines()[1].text, "2: pwd");
    }

    #[tokio::test]
    async fn test_exit_sets_reset_flag() {
        let mut state = SessionState::default();
        dispatch("exit", &mut Output::new(), &mut state, 0).await;
        assert!(state.reset_requested);
    }
}
