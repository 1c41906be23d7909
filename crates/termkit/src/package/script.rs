//! Compiled package scripts
//!
//! A package script compiles into a data-driven instruction list; nothing is
//! ever re-parsed or re-evaluated as source text at run time. The compiled
//! form backs a [`Command`] registered under the script's declared name.

use async_trait::async_trait;
use std::sync::Arc;

use crate::command::{Command, Context};
use crate::error::Result;
use crate::output::Output;
use crate::package::interp::{self, Scope};

/// One compiled step of a package script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `set <var> = <expr>` - bind a substituted expression.
    Assign { var: String, expr: String },
    /// `set <var> = userinput "<prompt>"` - bind a line of interactive input.
    AssignFromInput { var: String, prompt: String },
    /// `print <expr>` - emit a substituted expression.
    Print(String),
    /// Any other line - substitute and dispatch as a command line.
    Invoke(String),
}

/// A package script compiled to its name, description, and instruction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledScript {
    pub name: String,
    pub description: String,
    pub instructions: Vec<Instruction>,
}

/// Registry handler replaying a compiled script.
pub struct ScriptCommand {
    script: Arc<CompiledScript>,
}

impl ScriptCommand {
    pub fn new(script: CompiledScript) -> Self {
        Self {
            script: Arc::new(script),
        }
    }

    pub fn script(&self) -> &CompiledScript {
        &self.script
    }
}

#[async_trait]
impl Command for ScriptCommand {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        // Fresh scope per invocation; `args` pre-bound to the argument list.
        let mut scope = Scope::new();
        scope.bind("args", ctx.args.join(" "));
        interp::run(&self.script.instructions, &mut scope, out, ctx.state, ctx.depth).await
    }

    fn description(&self) -> &str {
        if self.script.description.is_empty() {
            "No description"
        } else {
            &self.script.description
        }
    }
}
