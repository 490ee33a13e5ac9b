//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::api::HttpShopApi;
use crate::cli::args::{Cli, Commands};
use crate::config::ShopConfig;
use crate::effects::Effects;
use crate::error::Result;
use crate::session::SessionStore;
use crate::shop::Shop;
use crate::storage::FileStorage;
use crate::ui::UserInterface;

use super::browse::BrowseCommand;
use super::completions::CompletionsCommand;
use super::login::LoginCommand;
use super::logout::LogoutCommand;
use super::products::ProductsCommand;
use super::status::StatusCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Build a shop talking to the configured API and persisting to the data dir.
pub fn build_shop(config: &ShopConfig) -> Result<Shop> {
    let api = HttpShopApi::new(config.api_url.clone(), config.timeout())?;
    let data_dir = config.data_dir();
    tracing::debug!(
        "Using API {} and data dir {}",
        api.base_url(),
        data_dir.display()
    );

    let session = SessionStore::new(FileStorage::new(data_dir));
    let effects =
        Effects::new(api, session).with_authenticated_catalog(config.authenticated_catalog);
    Ok(Shop::new(effects))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ShopConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the resolved configuration.
    pub fn new(config: ShopConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            Some(Commands::Login(args)) => {
                let shop = build_shop(&self.config)?;
                LoginCommand::new(shop, args.clone())
                    .with_default_expiry(self.config.session_minutes)
                    .execute(ui)
            }
            Some(Commands::Logout) => LogoutCommand::new(build_shop(&self.config)?).execute(ui),
            Some(Commands::Status(args)) => {
                StatusCommand::new(build_shop(&self.config)?, args.clone()).execute(ui)
            }
            Some(Commands::Products(args)) => {
                ProductsCommand::new(build_shop(&self.config)?, args.clone()).execute(ui)
            }
            Some(Commands::Browse) | None => BrowseCommand::new(build_shop(&self.config)?)
                .with_session_minutes(self.config.session_minutes)
                .execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn build_shop_starts_logged_out() {
        let temp = TempDir::new().unwrap();
        let config = ShopConfig {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let mut shop = build_shop(&config).unwrap();
        shop.check_auth_status();

        assert!(!shop.is_authenticated());
    }

    #[test]
    fn dispatcher_keeps_config() {
        let config = ShopConfig {
            api_url: "http://localhost:3000".into(),
            ..Default::default()
        };
        let dispatcher = CommandDispatcher::new(config);
        assert_eq!(dispatcher.config().api_url, "http://localhost:3000");
    }
}
