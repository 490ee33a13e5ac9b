//! Command-line interface for TurtleShop.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, LoginArgs, ProductsArgs, StatusArgs};
pub use commands::{build_shop, Command, CommandDispatcher, CommandResult};
