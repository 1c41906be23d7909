//! Navigation builtins (cd, pwd)

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::{Error, Result};
use crate::fs::{resolve, Node};
use crate::output::Output;

/// The cd builtin - change the session's working directory.
pub struct Cd;

#[async_trait]
impl Command for Cd {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let target = ctx.args.first().map(String::as_str).unwrap_or("/");
        let path = resolve(target, &ctx.state.cwd);
        match ctx.state.store.lookup(&path) {
            None => return Err(Error::NoSuchEntry(path.as_str().to_string())),
            Some(Node::File { .. }) => return Err(Error::NotADirectory(path.as_str().to_string())),
            Some(Node::Directory { .. }) => {}
        }
        ctx.state.cwd = path;
        out.print(format!("Now in {}", ctx.state.cwd));
        Ok(())
    }

    fn description(&self) -> &str {
        "Change directory"
    }
}

/// The pwd builtin - print the working directory.
pub struct Pwd;

#[async_trait]
impl Command for Pwd {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        out.print(ctx.state.cwd.as_str());
        Ok(())
    }

    fn description(&self) -> &str {
        "Print working directory"
    }
}

#[cfg(test)]
mod tests {
    use crate::command::dispatch::dispatch;
    use crate::output::{Outcome, Output};
    use crate::session::SessionState;

    #[tokio::test]
    async fn test_cd_then_pwd() {
        let mut state = SessionState::default();
        state.store.mkdir(&crate::fs::VPath::new("/projects")).unwrap();

        let mut out = Output::new();
        let outcome = dispatch("cd projects", &mut out, &mut state, 0).await;
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out.lines()[0].text, "Now in /projects");
        assert_eq!(state.cwd.as_str(), "/projects");

        let mut out = Output::new();
        dispatch("pwd", &mut out, &mut state, 0).await;
        assert_eq!(out.lines()[0].text, "/projects");
    }

    #[tokio::test]
    async fn test_cd_missing_directory() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        let outcome = dispatch("cd /nowhere", &mut out, &mut state, 0).await;
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out.lines()[0].text, "cd: /nowhere: No such file or directory");
        assert_eq!(state.cwd.as_str(), "/");
    }

    #[tokio::test]
    async fn test_cd_into_file() {
        let mut state = SessionState::default();
        state
            .store
            .write(&crate::fs::VPath::new("/notes.txt"), "x")
            .unwrap();
        let mut out = Output::new();
        let outcome = dispatch("cd notes.txt", &mut out, &mut state, 0).await;
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out.lines()[0].text, "cd: /notes.txt: Not a directory");
    }

    #[tokio::test]
    async fn test_cd_without_args_goes_to_root() {
        let mut state = SessionState::default();
        state.store.mkdir(&crate::fs::VPath::new("/home")).unwrap();
        dispatch("cd /home", &mut Output::new(), &mut state, 0).await;
        dispatch("cd", &mut Output::new(), &mut state, 0).await;
        assert_eq!(state.cwd.as_str(), "/");
    }
}
