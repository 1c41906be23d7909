//! ls builtin command

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::fs::resolve;
use crate::output::Output;

/// The ls builtin - list directory contents.
pub struct Ls;

#[async_trait]
impl Command for Ls {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let target = ctx.args.first().map(String::as_str).unwrap_or(".");
        let path = resolve(target, &ctx.state.cwd);
        let names = ctx.state.store.list(&path)?;
        out.print(names.join("  "));
        Ok(())
    }

    fn description(&self) -> &str {
        "List directory contents"
    }
}
