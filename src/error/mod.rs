//! Error types for edux.
//!
//! Navigation keeps a small typed taxonomy ([`NavError`]) because callers
//! match on it. Everything else (terminal, storage, runtime) propagates
//! through `color_eyre::Result` with `wrap_err` context.

mod navigation;

pub use navigation::{NavError, TransitionBlock};

/// Result alias for navigation operations.
pub type NavResult<T> = Result<T, NavError>;
