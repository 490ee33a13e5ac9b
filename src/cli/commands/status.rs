//! Status command implementation.
//!
//! The `turtleshop status` command restores the saved session and reports it.

use serde::Serialize;

use crate::auth::User;
use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::shop::Shop;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::describe_user;

/// JSON shape of `status --json`.
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    authenticated: bool,
    user: Option<UserSummary<'a>>,
}

/// The user record without its tokens.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserSummary<'a> {
    id: u64,
    username: &'a str,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    has_token: bool,
}

impl<'a> From<&'a User> for UserSummary<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id,
            username: &user.username,
            email: &user.email,
            first_name: &user.first_name,
            last_name: &user.last_name,
            has_token: user.token().is_some(),
        }
    }
}

/// The status command implementation.
pub struct StatusCommand {
    shop: Shop,
    args: StatusArgs,
}

impl StatusCommand {
    pub fn new(shop: Shop, args: StatusArgs) -> Self {
        Self { shop, args }
    }
}

impl Command for StatusCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.shop.check_auth_status();

        if self.args.json {
            let report = StatusReport {
                authenticated: self.shop.is_authenticated(),
                user: self.shop.user().map(UserSummary::from),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(CommandResult::success());
        }

        match self.shop.user() {
            Some(user) => {
                ui.success(&format!("Logged in as {}", describe_user(user)));
                if ui.output_mode().shows_details() && user.token().is_some() {
                    ui.message("Session token: present");
                }
            }
            None => {
                ui.message("Not logged in");
                ui.show_hint("Run `turtleshop login` to start a session");
            }
        }

        Ok(CommandResult::success())
    }
}
