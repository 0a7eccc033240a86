#![forbid(unsafe_code)]

//! `glyphrun-inspect`: a diagnostic view of glyphrun's pipeline.
//!
//! Reads bytes from a file or stdin, decodes them, and prints per-codepoint
//! properties or the runs each segmenter produces, as text or JSON.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;

pub use cli::run_from_env;
pub use error::{InspectError, Result};
