//! stat builtin command

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::fs::resolve;
use crate::output::Output;

/// The stat builtin - node introspection.
pub struct Stat;

#[async_trait]
impl Command for Stat {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: stat <path>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        let info = ctx.state.store.stat(&path)?;
        out.print(format!("Path: {}", info.path));
        out.print(format!("Type: {}", info.kind));
        out.print(format!("Size: {}", info.size));
        Ok(())
    }

    fn description(&self) -> &str {
        "Show file info"
    }
}
