//! Logout command implementation.

use crate::error::Result;
use crate::shop::Shop;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The logout command implementation.
pub struct LogoutCommand {
    shop: Shop,
}

impl LogoutCommand {
    pub fn new(shop: Shop) -> Self {
        Self { shop }
    }
}

impl Command for LogoutCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.shop.check_auth_status();
        let user = self.shop.user().map(|u| u.display_name());

        // Also erases a record that failed to restore.
        self.shop.logout();

        match user {
            Some(name) => ui.success(&format!("Logged out {}", name)),
            None => ui.message("Not logged in"),
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockShopApi;
    use crate::effects::Effects;
    use crate::session::{SessionStore, SESSION_KEY};
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn command(storage: &MemoryStorage) -> LogoutCommand {
        LogoutCommand::new(Shop::new(Effects::new(
            MockShopApi::new(),
            SessionStore::new(storage.clone()),
        )))
    }

    #[test]
    fn logout_erases_saved_session() {
        let storage = MemoryStorage::new().with_item(
            SESSION_KEY,
            r#"{"id":1,"username":"emilys","firstName":"Emily","lastName":"Johnson"}"#,
        );
        let mut ui = MockUI::new();

        let result = command(&storage).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Logged out Emily Johnson"));
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn logout_without_session_succeeds() {
        let storage = MemoryStorage::new();
        let mut ui = MockUI::new();

        let result = command(&storage).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Not logged in"));
    }
}
