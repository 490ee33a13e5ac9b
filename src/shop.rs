//! The running storefront: store plus effects.
//!
//! [`Shop::dispatch`] applies an action to the store, runs its effect, and
//! keeps going with the completion action until nothing is left. Each network
//! request therefore yields exactly one success-or-failure action before
//! `dispatch` returns.

use std::collections::VecDeque;

use crate::auth::{Credentials, User};
use crate::catalog::ProductId;
use crate::effects::Effects;
use crate::store::auth::AuthAction;
use crate::store::products::ProductsAction;
use crate::store::{app_store, Action, AppState, AppStore, Selection};

/// Store and effects wired together.
pub struct Shop {
    store: AppStore,
    effects: Effects,
}

impl Shop {
    /// Create a shop with an empty store.
    pub fn new(effects: Effects) -> Self {
        Self {
            store: app_store(),
            effects,
        }
    }

    /// Dispatch an action and every completion it produces.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let mut queue = VecDeque::from([action.into()]);

        while let Some(action) = queue.pop_front() {
            tracing::debug!("dispatch {}", action.name());
            self.store.dispatch(&action);
            if let Some(next) = self.effects.run(&action) {
                queue.push_back(next);
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Subscribe to a value derived from the state.
    pub fn select<T, F>(&mut self, selector: F) -> Selection<T>
    where
        T: Clone + PartialEq + 'static,
        F: Fn(&AppState) -> T + 'static,
    {
        self.store.select(selector)
    }

    /// Restore the persisted session, if any.
    pub fn check_auth_status(&mut self) {
        self.dispatch(AuthAction::CheckAuthStatus);
    }

    /// Log in; returns the store's error message on failure.
    pub fn login(&mut self, credentials: Credentials) -> Result<User, String> {
        self.dispatch(AuthAction::Login(credentials));

        let auth = &self.state().auth;
        match (&auth.user, &auth.error) {
            (Some(user), _) if auth.is_authenticated => Ok(user.clone()),
            (_, Some(error)) => Err(error.clone()),
            _ => Err("Login failed".to_string()),
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            tracing::info!("Logging out {}", user.username);
        }
        self.dispatch(AuthAction::Logout);
    }

    pub fn load_products(&mut self) {
        self.dispatch(ProductsAction::LoadProducts);
    }

    pub fn toggle_favorite(&mut self, id: ProductId) {
        self.dispatch(ProductsAction::ToggleFavorite(id));
    }

    pub fn clear_favorites(&mut self) {
        self.dispatch(ProductsAction::ClearFavorites);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().auth.is_authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.state().auth.user.as_ref()
    }
}
