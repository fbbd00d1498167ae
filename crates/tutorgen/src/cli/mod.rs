//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tutorgen binary.

mod commands;
mod explain;

pub use commands::{Cli, Commands, ExplainArgs};
pub use explain::{build_tutor, handle_explain_command, render_lesson, write_images};
