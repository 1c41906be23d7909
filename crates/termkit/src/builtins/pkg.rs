//! pkg builtin - the package manager
//!
//! `pkg make` compiles a `.pkg` script from the filesystem into a new
//! registered command; `pkg install` pulls one through the host's fetcher
//! capability. Installed package files live under `/packages`.

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::{Error, Result};
use crate::fs::{resolve, VPath};
use crate::logging::log_debug;
use crate::output::Output;
use crate::package::{self, ScriptCommand};
use std::sync::Arc;

const PACKAGES_DIR: &str = "/packages";

const USAGE: &[&str] = &[
    "Usage:",
    "  pkg make <file.pkg>      - Compile .pkg script to a command",
    "  pkg install <name>       - Install a package via the host fetcher",
    "  pkg list                 - List installed packages",
    "  pkg remove <name>        - Delete an installed package",
    "  pkg help                 - Show this help message",
];

/// The pkg builtin.
pub struct Pkg;

#[async_trait]
impl Command for Pkg {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        match ctx.args.first().map(String::as_str) {
            Some("make") => make(ctx, out),
            Some("install") => install(ctx, out).await,
            Some("list") => list(ctx, out),
            Some("remove") => remove(ctx, out),
            None | Some("help") => {
                usage(out);
                Ok(())
            }
            Some(other) => {
                out.error(format!("pkg: unknown subcommand: {other}"));
                usage(out);
                Ok(())
            }
        }
    }

    fn description(&self) -> &str {
        "Package manager"
    }
}

fn usage(out: &mut Output) {
    for line in USAGE {
        out.print(*line);
    }
}

fn make(ctx: Context<'_>, out: &mut Output) -> Result<()> {
    let Some(filename) = ctx.args.get(1) else {
        out.error("Usage: pkg make <file.pkg>");
        return Ok(());
    };
    if !filename.ends_with(".pkg") {
        out.error("Usage: pkg make <file.pkg>");
        return Ok(());
    }
    let path = resolve(filename, &ctx.state.cwd);
    let text = ctx.state.store.read(&path)?.to_string();
    let script = package::compile(&text)?;
    let name = script.name.clone();

    // Keep a copy of the source under /packages so `pkg list` sees it.
    let installed = VPath::new(PACKAGES_DIR).child(&format!("{name}.pkg"));
    ctx.state.store.write(&installed, text)?;

    log_debug!(command = name.as_str(), "registering compiled package");
    ctx.state.registry.register(&name, Arc::new(ScriptCommand::new(script)));
    out.success(format!("Command '{name}' installed successfully!"));
    Ok(())
}

async fn install(ctx: Context<'_>, out: &mut Output) -> Result<()> {
    let Some(filename) = ctx.args.get(1) else {
        out.error("Usage: pkg install <name>");
        return Ok(());
    };
    let Some(fetcher) = ctx.state.fetcher.clone() else {
        return Err(Error::Fetch("no package source configured".to_string()));
    };
    let text = fetcher.fetch(filename).await?;

    let installed = VPath::new(PACKAGES_DIR).child(filename);
    ctx.state.store.write(&installed, text.clone())?;

    // Payloads that parse as package scripts become commands right away;
    // anything else stays a plain file under /packages.
    match package::compile(&text) {
        Ok(script) => {
            let name = script.name.clone();
            ctx.state
                .registry
                .register(&name, Arc::new(ScriptCommand::new(script)));
            out.success(format!("Installed {filename} (command '{name}')"));
        }
        Err(_) => out.success(format!("Installed {filename}")),
    }
    Ok(())
}

fn list(ctx: Context<'_>, out: &mut Output) -> Result<()> {
    match ctx.state.store.list(&VPath::new(PACKAGES_DIR)) {
        Ok(names) if !names.is_empty() => {
            out.print("Installed packages:");
            for name in names {
                out.print(name);
            }
        }
        _ => out.print("No packages installed."),
    }
    Ok(())
}

fn remove(ctx: Context<'_>, out: &mut Output) -> Result<()> {
    let Some(filename) = ctx.args.get(1) else {
        out.error("Usage: pkg remove <name>");
        return Ok(());
    };
    let path = VPath::new(PACKAGES_DIR).child(filename);
    if !ctx.state.store.exists(&path) {
        out.error(format!("{filename} not found."));
        return Ok(());
    }
    ctx.state.store.remove(&path);
    out.print(format!("Removed {filename}"));
    Ok(())
}
