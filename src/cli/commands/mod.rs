//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration, builds a [`Shop`](crate::shop::Shop) over the HTTP API and
//! the session file, and routes CLI subcommands to their implementations.
//! Commands receive the shop already built, so tests hand them one backed by
//! [`MockShopApi`](crate::api::MockShopApi) and in-memory storage.

pub mod browse;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod login;
pub mod logout;
pub mod products;
pub mod status;

pub use dispatcher::{build_shop, Command, CommandDispatcher, CommandResult};

/// Exit code for a guarded command run without a session.
pub const EXIT_NOT_LOGGED_IN: i32 = 2;
