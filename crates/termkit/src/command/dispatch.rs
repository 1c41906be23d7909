//! Command dispatch
//!
//! Splits a raw input line into a name and arguments, resolves the handler,
//! and invokes it. The dispatcher is stateless per call and always returns a
//! definite [`Outcome`]; handler errors are rendered on the sink here and go
//! no further up.

use crate::command::Context;
use crate::error::Error;
use crate::limits::LimitExceeded;
use crate::logging::log_debug;
use crate::output::{Outcome, Output};
use crate::session::SessionState;

/// Dispatch one raw input line.
///
/// Tokenization is whitespace splitting, no quoting. An empty line is a
/// successful no-op. An unknown name emits a diagnostic and fails without
/// being fatal to the caller. `depth` guards nested `Invoke` chains from
/// compiled scripts; callers at the REPL boundary pass 0.
pub async fn dispatch(
    line: &str,
    out: &mut Output,
    state: &mut SessionState,
    depth: usize,
) -> Outcome {
    if depth > state.limits.max_invoke_depth {
        let err = Error::from(LimitExceeded::InvokeDepth(state.limits.max_invoke_depth));
        out.error(err.to_string());
        return Outcome::Failure;
    }

    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Outcome::Success;
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let Some(handler) = state.registry.get(name) else {
        out.error(Error::UnknownCommand(name.to_string()).to_string());
        return Outcome::Failure;
    };

    log_debug!(command = name, depth, "dispatching");

    let ctx = Context {
        args: &args,
        state,
        depth,
    };
    match handler.execute(ctx, out).await {
        Ok(()) => Outcome::Success,
        Err(err) => {
            out.error(format!("{name}: {err}"));
            Outcome::Failure
        }
    }
}
