//! Command Line Interface (CLI) layer for csvxl.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): validate paths, merge config and
//! flags, and hand off to `csvxl::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
