//! REPL, CLI, and presentation for VerseScope.
//!
//! This crate provides:
//! - [`Repl`] - Interactive menu-driven explorer over a built index
//! - [`RuntimeConfig`] - Labels, limits, and output pacing
//! - [`logging`] - Tracing subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod format;
pub mod logging;
pub mod pacing;
pub mod repl;

pub use command::Command;
pub use config::{PacingConfig, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use pacing::Pacer;
pub use repl::Repl;
