//! File operation builtins (touch, mkdir, rm, mv, cp)

use async_trait::async_trait;

use crate::command::{Command, Context};
use crate::error::{Error, Result};
use crate::fs::{resolve, Node};
use crate::output::Output;

/// The touch builtin - create an empty file or refresh its timestamp.
pub struct Touch;

#[async_trait]
impl Command for Touch {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: touch <file>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        match ctx.state.store.lookup(&path) {
            Some(Node::Directory { .. }) => {
                return Err(Error::NotAFile(path.as_str().to_string()));
            }
            Some(Node::File { content, .. }) => {
                let content = content.clone();
                ctx.state.store.write(&path, content)?;
                out.print(format!("Updated '{path}'"));
            }
            None => {
                ctx.state.store.write(&path, "")?;
                out.print(format!("Created '{path}'"));
            }
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Create empty file or update timestamp"
    }
}

/// The mkdir builtin - create a directory.
pub struct Mkdir;

#[async_trait]
impl Command for Mkdir {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: mkdir <dir>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        // Stricter than the store: any existing node blocks creation here.
        if ctx.state.store.exists(&path) {
            return Err(Error::AlreadyExists(path.as_str().to_string()));
        }
        ctx.state.store.mkdir(&path)?;
        out.print(format!("Directory '{path}' created"));
        Ok(())
    }

    fn description(&self) -> &str {
        "Create directory"
    }
}

/// The rm builtin - remove a file or directory subtree.
pub struct Rm;

#[async_trait]
impl Command for Rm {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let Some(target) = ctx.args.first() else {
            out.error("Usage: rm <path>");
            return Ok(());
        };
        let path = resolve(target, &ctx.state.cwd);
        if !ctx.state.store.exists(&path) {
            return Err(Error::NoSuchEntry(path.as_str().to_string()));
        }
        ctx.state.store.remove(&path);
        out.print(format!("Removed '{path}'"));
        Ok(())
    }

    fn description(&self) -> &str {
        "Remove file or directory"
    }
}

/// The mv builtin - move or rename a node (file or whole subtree).
pub struct Mv;

#[async_trait]
impl Command for Mv {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let [src_raw, dest_raw] = ctx.args else {
            out.error("Usage: mv <src> <dest>");
            return Ok(());
        };
        let src = resolve(src_raw, &ctx.state.cwd);
        let dest = resolve(dest_raw, &ctx.state.cwd);
        // Moving a directory into its own subtree would drop the whole tree
        // when the source is removed.
        if dest.as_str().starts_with(&format!("{}/", src)) {
            out.error(format!("mv: cannot move '{src}' into itself"));
            return Ok(());
        }
        let Some(node) = ctx.state.store.lookup(&src).cloned() else {
            return Err(Error::NoSuchEntry(src.as_str().to_string()));
        };
        ctx.state.store.attach(&dest, node)?;
        if dest != src {
            ctx.state.store.remove(&src);
        }
        out.print(format!("Moved '{src}' to '{dest}'"));
        Ok(())
    }

    fn description(&self) -> &str {
        "Move or rename a file"
    }
}

/// The cp builtin - copy a file.
pub struct Cp;

#[async_trait]
impl Command for Cp {
    async fn execute(&self, ctx: Context<'_>, out: &mut Output) -> Result<()> {
        let [src_raw, dest_raw] = ctx.args else {
            out.error("Usage: cp <src> <dest>");
            return Ok(());
        };
        let src = resolve(src_raw, &ctx.state.cwd);
        let dest = resolve(dest_raw, &ctx.state.cwd);
        let content = match ctx.state.store.lookup(&src) {
            Some(Node::File { content, .. }) => content.clone(),
            Some(Node::Directory { .. }) => {
                out.error("cp: directories not supported");
                return Ok(());
            }
            None => return Err(Error::NoSuchEntry(src.as_str().to_string())),
        };
        ctx.state.store.write(&dest, content)?;
        out.print(format!("Copied '{src}' to '{dest}'"));
        Ok(())
    }

    fn description(&self) -> &str {
        "Copy a file"
    }
}
