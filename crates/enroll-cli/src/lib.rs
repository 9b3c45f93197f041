//! CLI library components for the enrollment admin.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod repl;
pub mod settings;
