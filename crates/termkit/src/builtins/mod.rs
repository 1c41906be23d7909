//! Built-in shell commands
//!
//! The default command set of a session, mirroring a small POSIX-flavored
//! surface over the virtual filesystem plus the `pkg` package manager. Each
//! builtin is a [`Command`](crate::command::Command) registered by name;
//! hosts can add their own or overwrite these via
//! [`ShellBuilder::command`](crate::ShellBuilder::command).

mod cat;
mod echo;
mod fileops;
mod headtail;
mod help;
mod inspect;
mod ls;
mod navigation;
mod path;
mod pkg;
mod system;

pub use cat::Cat;
pub use echo::Echo;
pub use fileops::{Cp, Mkdir, Mv, Rm, Touch};
pub use headtail::{Head, Tail};
pub use help::Help;
pub use inspect::Stat;
pub use ls::Ls;
pub use navigation::{Cd, Pwd};
pub use path::{Basename, Dirname};
pub use pkg::Pkg;
pub use system::{Date, Env, Exit, History, Whoami};

use std::sync::Arc;

use crate::command::Registry;

/// Register the builtin command set.
pub fn install(registry: &mut Registry) {
    registry.register("help", Arc::new(Help));
    registry.register("echo", Arc::new(Echo));
    registry.register("cd", Arc::new(Cd));
    registry.register("pwd", Arc::new(Pwd));
    registry.register("ls", Arc::new(Ls));
    registry.register("cat", Arc::new(Cat));
    registry.register("touch", Arc::new(Touch));
    registry.register("mkdir", Arc::new(Mkdir));
    registry.register("rm", Arc::new(Rm));
    registry.register("mv", Arc::new(Mv));
    registry.register("cp", Arc::new(Cp));
    registry.register("stat", Arc::new(Stat));
    registry.register("head", Arc::new(Head));
    registry.register("tail", Arc::new(Tail));
    registry.register("basename", Arc::new(Basename));
    registry.register("dirname", Arc::new(Dirname));
    registry.register("date", Arc::new(Date));
    registry.register("whoami", Arc::new(Whoami));
    registry.register("env", Arc::new(Env));
    registry.register("history", Arc::new(History));
    registry.register("exit", Arc::new(Exit));
    registry.register("pkg", Arc::new(Pkg));
}
