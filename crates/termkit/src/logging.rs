//! Logging shims
//!
//! Structured logging is behind the `logging` feature so embedders without a
//! tracing subscriber pay nothing. The macros forward to `tracing` when the
//! feature is on and expand to nothing otherwise.

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

pub(crate) use log_debug;
