//! Path manipulation builtins (basename, dirname)
//!
//! These operate on the raw argument text, not on resolved paths - the
//! argument does not need to exist in the store.

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::output::Output;

/// The basename builtin - final component of a path string.
pub struct Basename;

#[async_trait]
impl Command for Basename {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(arg) = ctx.args.first() else {
            out.error("basename: missing operand");
            return Ok(());
        };
        out.print(arg.rsplit('/').next().unwrap_or(""));
        Ok(())
    }

    fn description(&self) -> &str {
        "Show filename from path"
    }
}

/// The dirname builtin - everything up to the final component.
pub struct Dirname;

#[async_trait]
impl Command for Dirname {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(arg) = ctx.args.first() else {
            out.error("dirname: missing operand");
            return Ok(());
        };
        let dir = match arg.rfind('/') {
            Some(0) | None => "/",
            Some(idx) => &arg[..idx],
        };
        out.print(dir);
        Ok(())
    }

    fn description(&self) -> &str {
        "Show directory name from path"
    }
}
