//! CLR compiler driver.
//!
//! Wires the compiler crates to the command line:
//! - `symbols` lists the symbols built from assembly descriptions
//! - `render` renders a serialized code tree
//! - `check` validates a module's inputs and resolves its symbols
//!
//! Input problems become diagnostics; I/O failures and bad usage become
//! `DriverError`s.

pub mod commands;
mod config;
mod diagnostic;
mod error;
mod logging;

pub use config::{CompilerConfig, DEFAULT_IMPORTS, SOURCE_EXTENSION};
pub use diagnostic::{Diagnostic, DiagnosticCollector, ErrorCode, Severity};
pub use error::DriverError;
pub use logging::init_tracing;
