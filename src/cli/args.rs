//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::ProductId;

/// TurtleShop - a terminal storefront for the DummyJSON catalog.
#[derive(Debug, Parser)]
#[command(name = "turtleshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.turtleshop/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the shop API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory holding the saved session
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the shop interactively (default if no command specified)
    Browse,

    /// Log in and save the session
    Login(LoginArgs),

    /// Log out and erase the saved session
    Logout,

    /// Show the saved session
    Status(StatusArgs),

    /// List the product catalog (requires login)
    Products(ProductsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `login` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LoginArgs {
    /// Account username (prompted if omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Account password (prompted if omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Token lifetime in minutes
    #[arg(long, value_name = "MINUTES")]
    pub expires_in: Option<u32>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `products` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProductsArgs {
    /// Mark a product as favorite before listing (repeatable; duplicates count once)
    #[arg(long = "favorite", value_name = "ID")]
    pub favorites: Vec<ProductId>,

    /// List only favorite products
    #[arg(long)]
    pub favorites_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_browse() {
        let cli = Cli::parse_from(["turtleshop"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from([
            "turtleshop",
            "status",
            "--api-url",
            "http://localhost:3000",
            "--data-dir",
            "/tmp/shop",
            "--json",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shop")));
        match cli.command {
            Some(Commands::Status(args)) => assert!(args.json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn login_args_parse() {
        let cli = Cli::parse_from([
            "turtleshop",
            "login",
            "-u",
            "emilys",
            "--password",
            "emilyspass",
            "--expires-in",
            "30",
        ]);
        match cli.command {
            Some(Commands::Login(args)) => {
                assert_eq!(args.username.as_deref(), Some("emilys"));
                assert_eq!(args.password.as_deref(), Some("emilyspass"));
                assert_eq!(args.expires_in, Some(30));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn products_favorite_is_repeatable() {
        let cli = Cli::parse_from([
            "turtleshop",
            "products",
            "--favorite",
            "3",
            "--favorite",
            "7",
            "--favorites-only",
        ]);
        match cli.command {
            Some(Commands::Products(args)) => {
                assert_eq!(args.favorites, vec![3, 7]);
                assert!(args.favorites_only);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn products_rejects_non_numeric_id() {
        let result = Cli::try_parse_from(["turtleshop", "products", "--favorite", "abc"]);
        assert!(result.is_err());
    }
}
