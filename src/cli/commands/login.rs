//! Login command implementation.
//!
//! The `turtleshop login` command authenticates against the API and saves the
//! session, so later commands start logged in.

use crate::auth::{Credentials, User};
use crate::cli::args::LoginArgs;
use crate::error::Result;
use crate::shop::Shop;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::describe_user;

/// Ask for whatever part of the credentials was not given up front.
pub(crate) fn prompt_credentials(
    ui: &mut dyn UserInterface,
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String)> {
    let username = match username {
        Some(username) => username,
        None => ui
            .prompt(&Prompt::new("username", "Username", PromptType::Input))?
            .as_string(),
    };
    let password = match password {
        Some(password) => password,
        None => ui
            .prompt(&Prompt::new("password", "Password", PromptType::Password))?
            .as_string(),
    };
    Ok((username.trim().to_string(), password))
}

/// Run a login behind a spinner; failures are shown as a notification.
pub(crate) fn login_with_feedback(
    shop: &mut Shop,
    ui: &mut dyn UserInterface,
    credentials: Credentials,
) -> Option<User> {
    let mut spinner = ui.start_spinner(&format!("Logging in as {}...", credentials.username));

    match shop.login(credentials) {
        Ok(user) => {
            spinner.finish_success(&format!("Logged in as {}", user.display_name()));
            Some(user)
        }
        Err(message) => {
            spinner.finish_error("Login failed");
            ui.error(&message);
            None
        }
    }
}

/// The login command implementation.
pub struct LoginCommand {
    shop: Shop,
    args: LoginArgs,
    default_expiry: Option<u32>,
}

impl LoginCommand {
    pub fn new(shop: Shop, args: LoginArgs) -> Self {
        Self {
            shop,
            args,
            default_expiry: None,
        }
    }

    /// Token lifetime to request when `--expires-in` is not given.
    pub fn with_default_expiry(mut self, minutes: Option<u32>) -> Self {
        self.default_expiry = minutes;
        self
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }
}

impl Command for LoginCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (username, password) =
            prompt_credentials(ui, self.args.username.clone(), self.args.password.clone())?;

        if username.is_empty() || password.is_empty() {
            ui.error("Username and password are required");
            return Ok(CommandResult::failure(1));
        }

        let expiry = self.args.expires_in.or(self.default_expiry);
        let credentials = Credentials::new(username, password).with_expiry(expiry);

        match login_with_feedback(&mut self.shop, ui, credentials) {
            Some(user) => {
                if ui.output_mode().shows_details() {
                    ui.message(&describe_user(&user));
                }
                ui.show_hint("Run `turtleshop products` to browse the catalog");
                Ok(CommandResult::success())
            }
            None => Ok(CommandResult::failure(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockShopApi;
    use crate::effects::Effects;
    use crate::session::{SessionStore, SESSION_KEY};
    use crate::storage::MemoryStorage;
    use crate::ui::{MockUI, OutputMode};

    fn emily() -> User {
        User {
            id: 1,
            username: "emilys".into(),
            email: "emily.johnson@x.dummyjson.com".into(),
            first_name: "Emily".into(),
            last_name: "Johnson".into(),
            access_token: "access".into(),
            ..Default::default()
        }
    }

    fn shop_with(storage: &MemoryStorage, api: &MockShopApi) -> Shop {
        Shop::new(Effects::new(
            api.clone(),
            SessionStore::new(storage.clone()),
        ))
    }

    fn api() -> MockShopApi {
        MockShopApi::new().with_account("emilys", "emilyspass", emily())
    }

    #[test]
    fn login_with_flags_persists_session() {
        let storage = MemoryStorage::new();
        let args = LoginArgs {
            username: Some("emilys".into()),
            password: Some("emilyspass".into()),
            expires_in: None,
        };
        let mut cmd = LoginCommand::new(shop_with(&storage, &api()), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(cmd.shop().is_authenticated());
        assert!(storage.contains(SESSION_KEY));
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_hint("turtleshop products"));
    }

    #[test]
    fn login_prompts_for_missing_values() {
        let storage = MemoryStorage::new();
        let mut cmd = LoginCommand::new(shop_with(&storage, &api()), LoginArgs::default());
        let mut ui = MockUI::new();
        ui.set_prompt_response("username", " emilys ");
        ui.set_prompt_response("password", "emilyspass");

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), &["username", "password"]);
    }

    #[test]
    fn invalid_credentials_show_error_and_fail() {
        let storage = MemoryStorage::new();
        let args = LoginArgs {
            username: Some("emilys".into()),
            password: Some("wrong".into()),
            expires_in: None,
        };
        let mut cmd = LoginCommand::new(shop_with(&storage, &api()), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("Invalid credentials"));
        assert!(!cmd.shop().is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn empty_password_is_rejected_without_request() {
        let api = api();
        let mut cmd = LoginCommand::new(
            shop_with(&MemoryStorage::new(), &api),
            LoginArgs {
                username: Some("emilys".into()),
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("required"));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn verbose_login_describes_user() {
        let args = LoginArgs {
            username: Some("emilys".into()),
            password: Some("emilyspass".into()),
            expires_in: Some(30),
        };
        let mut cmd = LoginCommand::new(shop_with(&MemoryStorage::new(), &api()), args)
            .with_default_expiry(Some(60));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("emily.johnson@x.dummyjson.com"));
    }
}
