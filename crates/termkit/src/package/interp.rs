//! Script interpreter
//!
//! Executes a compiled instruction list strictly in order against a fresh
//! variable scope. The language is straight-line only: no branches, no
//! loops, no halt statement - execution always terminates after the last
//! instruction. `userinput` is the sole suspension point.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::command::dispatch::dispatch;
use crate::error::Result;
use crate::output::Output;
use crate::package::script::Instruction;
use crate::session::SessionState;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Variable bindings private to one script invocation.
#[derive(Debug, Default)]
pub struct Scope {
    vars: HashMap<String, String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Replace every `{name}` occurrence with its binding.
///
/// Unbound references are not an error; the placeholder stays in the text
/// literally.
pub fn substitute(expr: &str, scope: &Scope) -> String {
    PLACEHOLDER
        .replace_all(expr, |caps: &regex::Captures<'_>| {
            match scope.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Strip one surrounding matching quote pair from the whole value.
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Execute `instructions` in order.
///
/// A failing `Invoke` reports through the sink and execution continues with
/// the next instruction - commands print their own errors.
pub async fn run(
    instructions: &[Instruction],
    scope: &mut Scope,
    out: &mut Output,
    state: &mut SessionState,
    depth: usize,
) -> Result<()> {
    for instruction in instructions {
        match instruction {
            Instruction::Assign { var, expr } => {
                let value = strip_quotes(&substitute(expr, scope)).to_string();
                scope.bind(var.clone(), value);
            }
            Instruction::AssignFromInput { var, prompt } => {
                let prompt = substitute(prompt, scope);
                // Suspension point: parked here until the host answers.
                let value = state.input.read_line(&prompt).await.unwrap_or_default();
                scope.bind(var.clone(), value);
            }
            Instruction::Print(expr) => {
                let text = strip_quotes(&substitute(expr, scope)).to_string();
                out.print(text);
            }
            Instruction::Invoke(line) => {
                let line = substitute(line, scope);
                let _ = dispatch(&line, out, state, depth + 1).await;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_bound_and_unbound() {
        let mut scope = Scope::new();
        scope.bind("name", "Ada");
        assert_eq!(substitute("Hello, {name}!", &scope), "Hello, Ada!");
        assert_eq!(substitute("{nope} stays", &scope), "{nope} stays");
        assert_eq!(substitute("{name}{name}", &scope), "AdaAda");
    }

    #[test]
    fn test_strip_quotes_matching_pairs_only() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes("\"hello'"), "\"hello'");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes(""), "");
    }

    #[tokio::test]
    async fn test_run_assign_then_print() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        let mut scope = Scope::new();
        let instructions = vec![
            Instruction::Assign {
                var: "who".to_string(),
                expr: "\"world\"".to_string(),
            },
            Instruction::Print("Hello, {who}!".to_string()),
        ];
        run(&instructions, &mut scope, &mut out, &mut state, 0)
            .await
            .unwrap();
        assert_eq!(out.lines()[0].text, "Hello, world!");
    }

    #[tokio::test]
    async fn test_failed_invoke_does_not_stop_script() {
        let mut state = SessionState::default();
        let mut out = Output::new();
        let mut scope = Scope::new();
        let instructions = vec![
            Instruction::Invoke("definitely-not-a-command".to_string()),
            Instruction::Print("still here".to_string()),
        ];
        run(&instructions, &mut scope, &mut out, &mut state, 0)
            .await
            .unwrap();
        let texts: Vec<&str> = out.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["command not found: definitely-not-a-command", "still here"]
        );
    }

    #[tokio::test]
    async fn test_declined_input_binds_empty() {
        let mut state = SessionState::default(); // NoInput declines
        let mut out = Output::new();
        let mut scope = Scope::new();
        let instructions = vec![
            Instruction::AssignFromInput {
                var: "name".to_string(),
                prompt: "Name?".to_string(),
            },
            Instruction::Print("[{name}]".to_string()),
        ];
        run(&instructions, &mut scope, &mut out, &mut state, 0)
            .await
            .unwrap();
        assert_eq!(out.lines()[0].text, "[]");
    }
}
