//! Auth effects.

use crate::auth::Credentials;
use crate::session::SessionRestore;
use crate::store::auth::AuthAction;

use super::Effects;

impl Effects {
    pub(super) fn run_auth(&mut self, action: &AuthAction) -> Option<AuthAction> {
        match action {
            AuthAction::Login(credentials) => Some(self.login(credentials)),
            AuthAction::Logout => {
                if let Err(e) = self.session.clear() {
                    tracing::warn!("Failed to erase session record: {}", e);
                }
                None
            }
            AuthAction::CheckAuthStatus => Some(self.check_auth_status()),
            AuthAction::LoginSuccess(_)
            | AuthAction::LoginFailure(_)
            | AuthAction::SetAuthFromStorage(_) => None,
        }
    }

    fn login(&mut self, credentials: &Credentials) -> AuthAction {
        let user = match self.api.login(credentials) {
            Ok(user) => user,
            Err(e) => {
                tracing::info!("Login failed for {}: {}", credentials.username, e);
                return AuthAction::LoginFailure(e.to_string());
            }
        };

        // A session that cannot be persisted counts as a failed login.
        if let Err(e) = self.session.save(&user) {
            return AuthAction::LoginFailure(e.to_string());
        }

        tracing::info!("Logged in as {}", user.username);
        AuthAction::LoginSuccess(user)
    }

    fn check_auth_status(&mut self) -> AuthAction {
        match self.session.restore() {
            Ok(SessionRestore::Restored(user)) => {
                tracing::debug!("Restored session for {}", user.username);
                AuthAction::SetAuthFromStorage(user)
            }
            Ok(SessionRestore::Corrupt) | Ok(SessionRestore::Missing) => AuthAction::Logout,
            Err(e) => {
                tracing::warn!("Could not read session record: {}", e);
                AuthAction::Logout
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MockShopApi;
    use crate::auth::{Credentials, User};
    use crate::effects::Effects;
    use crate::session::{SessionStore, SESSION_KEY};
    use crate::storage::MemoryStorage;
    use crate::store::auth::AuthAction;
    use crate::store::Action;

    fn emily() -> User {
        User {
            id: 1,
            username: "emilys".into(),
            first_name: "Emily".into(),
            access_token: "access".into(),
            ..Default::default()
        }
    }

    fn effects_with(storage: &MemoryStorage) -> Effects {
        let api = MockShopApi::new().with_account("emilys", "emilyspass", emily());
        Effects::new(api, SessionStore::new(storage.clone()))
    }

    #[test]
    fn login_success_persists_user() {
        let storage = MemoryStorage::new();
        let mut effects = effects_with(&storage);

        let next = effects.run(&AuthAction::Login(Credentials::new("emilys", "emilyspass")).into());

        assert_eq!(next, Some(Action::Auth(AuthAction::LoginSuccess(emily()))));
        assert!(storage.contains(SESSION_KEY));
    }

    #[test]
    fn login_failure_persists_nothing() {
        let storage = MemoryStorage::new();
        let mut effects = effects_with(&storage);

        let next = effects.run(&AuthAction::Login(Credentials::new("emilys", "wrong")).into());

        assert_eq!(
            next,
            Some(Action::Auth(AuthAction::LoginFailure(
                "Invalid credentials (HTTP 400)".into()
            )))
        );
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_erases_record() {
        let storage = MemoryStorage::new().with_item(SESSION_KEY, "{}");
        let mut effects = effects_with(&storage);

        assert_eq!(effects.run(&AuthAction::Logout.into()), None);
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn check_status_restores_valid_record() {
        let json = serde_json::to_string(&emily()).unwrap();
        let storage = MemoryStorage::new().with_item(SESSION_KEY, &json);
        let mut effects = effects_with(&storage);

        let next = effects.run(&AuthAction::CheckAuthStatus.into());

        assert_eq!(
            next,
            Some(Action::Auth(AuthAction::SetAuthFromStorage(emily())))
        );
    }

    #[test]
    fn check_status_with_malformed_record_logs_out_and_erases() {
        let storage = MemoryStorage::new().with_item(SESSION_KEY, "{not json");
        let mut effects = effects_with(&storage);

        let next = effects.run(&AuthAction::CheckAuthStatus.into());

        assert_eq!(next, Some(Action::Auth(AuthAction::Logout)));
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn check_status_without_record_logs_out() {
        let storage = MemoryStorage::new();
        let mut effects = effects_with(&storage);

        let next = effects.run(&AuthAction::CheckAuthStatus.into());
        assert_eq!(next, Some(Action::Auth(AuthAction::Logout)));
    }

    #[test]
    fn completion_actions_have_no_effect() {
        let storage = MemoryStorage::new();
        let mut effects = effects_with(&storage);

        assert_eq!(effects.run(&AuthAction::LoginSuccess(emily()).into()), None);
        assert_eq!(
            effects.run(&AuthAction::LoginFailure("x".into()).into()),
            None
        );
        assert!(storage.is_empty());
    }
}
