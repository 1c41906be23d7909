//! Termkit CLI - interactive front end for the virtual shell
//!
//! Usage:
//!   termkit -c 'echo hello'        # Execute a single line
//!   termkit session.tks            # Execute a file of shell lines
//!   termkit                        # Interactive REPL

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use termkit::{async_trait, InputSource, Severity, Shell};

/// Termkit - virtual shell with an in-memory filesystem
#[derive(Parser, Debug)]
#[command(name = "termkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execute the given line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// File of shell lines to execute, one per line
    #[arg()]
    script: Option<PathBuf>,
}

/// Input source that asks on the controlling terminal.
///
/// `userinput` steps in package scripts park on this; the blocking stdin
/// read runs off the async runtime's worker threads.
struct StdinInput;

#[async_trait]
impl InputSource for StdinInput {
    async fn read_line(&self, prompt: &str) -> Option<String> {
        let prompt = prompt.to_string();
        let joined = tokio::task::spawn_blocking(move || {
            print!("{prompt} ");
            io::stdout().flush().ok()?;
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            }
        })
        .await;
        joined.ok().flatten()
    }
}

/// Render one result line: errors to stderr in red, successes in green.
fn render(severity: Severity, text: &str) {
    match severity {
        Severity::Info => println!("{text}"),
        Severity::Success => println!("\x1b[32m{text}\x1b[0m"),
        Severity::Error => eprintln!("\x1b[31m{text}\x1b[0m"),
    }
}

async fn run_line(shell: &mut Shell, line: &str) -> bool {
    let result = shell.exec(line).await;
    for out in &result.lines {
        render(out.severity, &out.text);
    }
    result.is_success()
}

#[cfg(feature = "interactive")]
async fn repl(mut shell: Shell) -> Result<()> {
    let mut editor = rustyline::DefaultEditor::new().context("Failed to initialize terminal")?;
    println!("termkit {} - type 'help' for commands", env!("CARGO_PKG_VERSION"));
    loop {
        let prompt = format!("user@termkit:{}$ ", shell.cwd());
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);
                match trimmed {
                    // Screen control belongs to the host, not the session.
                    "clear" => print!("\x1b[2J\x1b[H"),
                    "quit" => break,
                    _ => {
                        run_line(&mut shell, trimmed).await;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => continue,
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }
    Ok(())
}

#[cfg(not(feature = "interactive"))]
async fn repl(mut shell: Shell) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed == "quit" {
            return Ok(());
        }
        run_line(&mut shell, trimmed).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut shell = Shell::builder().input(Arc::new(StdinInput)).build();

    // Execute a single line if provided
    if let Some(cmd) = args.command {
        let ok = run_line(&mut shell, &cmd).await;
        std::process::exit(if ok { 0 } else { 1 });
    }

    // Execute a script file if provided
    if let Some(script_path) = args.script {
        let script = std::fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
        let mut ok = true;
        for line in script.lines() {
            ok &= run_line(&mut shell, line).await;
        }
        std::process::exit(if ok { 0 } else { 1 });
    }

    repl(shell).await
}
