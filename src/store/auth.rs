//! Auth/session slice of the store.

use crate::auth::{Credentials, User};

use super::AppState;

/// Session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Actions handled by the auth slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Start a login; the effect posts the credentials.
    Login(Credentials),
    LoginSuccess(User),
    LoginFailure(String),
    /// Drop the session; the effect erases the persisted record.
    Logout,
    /// Try to restore a persisted session; no state change by itself.
    CheckAuthStatus,
    SetAuthFromStorage(User),
}

impl AuthAction {
    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "[Auth] Login",
            Self::LoginSuccess(_) => "[Auth] Login Success",
            Self::LoginFailure(_) => "[Auth] Login Failure",
            Self::Logout => "[Auth] Logout",
            Self::CheckAuthStatus => "[Auth] Check Auth Status",
            Self::SetAuthFromStorage(_) => "[Auth] Set Auth From Storage",
        }
    }
}

/// Auth reducer.
pub fn reduce(state: AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::Login(_) => AuthState {
            loading: true,
            error: None,
            ..state
        },
        AuthAction::LoginSuccess(user) | AuthAction::SetAuthFromStorage(user) => AuthState {
            user: Some(user.clone()),
            is_authenticated: true,
            loading: false,
            error: None,
        },
        AuthAction::LoginFailure(error) => AuthState {
            user: None,
            is_authenticated: false,
            loading: false,
            error: Some(error.clone()),
        },
        AuthAction::Logout => AuthState::default(),
        AuthAction::CheckAuthStatus => state,
    }
}

pub fn select_is_authenticated(state: &AppState) -> bool {
    state.auth.is_authenticated
}

pub fn select_user(state: &AppState) -> Option<User> {
    state.auth.user.clone()
}

pub fn select_auth_loading(state: &AppState) -> bool {
    state.auth.loading
}

pub fn select_auth_error(state: &AppState) -> Option<String> {
    state.auth.error.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emily() -> User {
        User {
            id: 1,
            username: "emilys".into(),
            first_name: "Emily".into(),
            access_token: "token".into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_sets_loading_and_clears_error() {
        let state = AuthState {
            error: Some("old".into()),
            ..Default::default()
        };
        let next = reduce(state, &AuthAction::Login(Credentials::new("a", "b")));
        assert!(next.loading);
        assert!(next.error.is_none());
        assert!(!next.is_authenticated);
    }

    #[test]
    fn login_success_authenticates() {
        let loading = reduce(
            AuthState::default(),
            &AuthAction::Login(Credentials::new("emilys", "emilyspass")),
        );
        let next = reduce(loading, &AuthAction::LoginSuccess(emily()));
        assert!(next.is_authenticated);
        assert!(!next.loading);
        assert_eq!(next.user, Some(emily()));
    }

    #[test]
    fn login_failure_keeps_session_unauthenticated() {
        let next = reduce(
            AuthState::default(),
            &AuthAction::LoginFailure("Invalid credentials".into()),
        );
        assert!(!next.is_authenticated);
        assert!(next.user.is_none());
        assert_eq!(next.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn logout_resets_everything() {
        let authed = reduce(AuthState::default(), &AuthAction::SetAuthFromStorage(emily()));
        assert!(authed.is_authenticated);

        let next = reduce(authed, &AuthAction::Logout);
        assert_eq!(next, AuthState::default());
    }

    #[test]
    fn check_auth_status_leaves_state_alone() {
        let authed = reduce(AuthState::default(), &AuthAction::SetAuthFromStorage(emily()));
        let next = reduce(authed.clone(), &AuthAction::CheckAuthStatus);
        assert_eq!(next, authed);
    }
}
