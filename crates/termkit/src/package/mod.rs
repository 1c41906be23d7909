//! Package-script compiler
//!
//! Package scripts are line-oriented documents that declare a command name,
//! an optional description, and a `run:` block of instructions:
//!
//! ```text
//! command: greet
//! description: Greets whoever answers
//! run:
//!   set name = userinput "Name?"
//!   print "Hello, {name}!"
//! ```
//!
//! [`compile`] parses one document into a [`CompiledScript`] in a single
//! left-to-right pass. Run-block lines are classified here, at compile time,
//! into [`Instruction`]s; nothing is deferred to run time except `{var}`
//! substitution.

pub mod interp;
pub mod script;

pub use script::{CompiledScript, Instruction, ScriptCommand};

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static SET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^set (\S+) = (.+)$").unwrap());
static USERINPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^userinput\s+"(.+)"$"#).unwrap());

/// Compile package-script text.
///
/// Directive keywords are case-insensitive and recognized anywhere in the
/// document, including after `run:`; the last `command:` occurrence wins.
/// Blank lines and `#` comments inside the run block are skipped. Fails with
/// [`Error::MissingCommandDirective`] when no `command:` line names the
/// result, and [`Error::EmptyRunBlock`] when the run block is absent or has
/// no executable lines.
pub fn compile(text: &str) -> Result<CompiledScript> {
    let mut name: Option<String> = None;
    let mut description = String::new();
    let mut instructions = Vec::new();
    let mut in_run = false;

    for raw in text.lines() {
        let line = raw.trim();
        let lower = line.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("command:") {
            let value = line[line.len() - rest.len()..].trim();
            if !value.is_empty() {
                name = Some(value.to_string());
            }
        } else if let Some(rest) = lower.strip_prefix("description:") {
            description = line[line.len() - rest.len()..].trim().to_string();
        } else if lower == "run:" {
            in_run = true;
        } else if in_run {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            instructions.push(classify(line)?);
        }
    }

    let name = name.ok_or(Error::MissingCommandDirective)?;
    if instructions.is_empty() {
        return Err(Error::EmptyRunBlock);
    }

    Ok(CompiledScript {
        name,
        description,
        instructions,
    })
}

/// Classify one captured run-block line.
fn classify(line: &str) -> Result<Instruction> {
    if line.starts_with("set ") {
        let caps = SET_LINE
            .captures(line)
            .ok_or_else(|| Error::ScriptSyntaxError(line.to_string()))?;
        let var = caps[1].to_string();
        let expr = caps[2].to_string();
        if let Some(input) = USERINPUT.captures(&expr) {
            return Ok(Instruction::AssignFromInput {
                var,
                prompt: input[1].to_string(),
            });
        }
        return Ok(Instruction::Assign { var, expr });
    }
    if let Some(rest) = line.strip_prefix("print ") {
        return Ok(Instruction::Print(rest.trim().to_string()));
    }
    Ok(Instruction::Invoke(line.to_string()))
}
