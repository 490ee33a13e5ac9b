//! Side effects triggered by actions.
//!
//! Reducers stay pure; everything that touches the network or local storage
//! happens here. [`Effects::run`] is called after the store has applied an
//! action and returns at most one follow-up action: the completion of the
//! request it started (success or failure), or a session restore result.
//!
//! - [`auth`] - login, logout, and session restore
//! - [`products`] - catalog loading

pub mod auth;
pub mod products;

use crate::api::ShopApi;
use crate::session::SessionStore;
use crate::store::Action;

/// Executes the I/O belonging to actions.
pub struct Effects {
    api: Box<dyn ShopApi>,
    session: SessionStore,
    authenticated_catalog: bool,
}

impl Effects {
    /// Create the effects runner over an API and a session store.
    pub fn new(api: impl ShopApi + 'static, session: SessionStore) -> Self {
        Self {
            api: Box::new(api),
            session,
            authenticated_catalog: false,
        }
    }

    /// Load the catalog from `/auth/products` when a session token exists.
    pub fn with_authenticated_catalog(mut self, enabled: bool) -> Self {
        self.authenticated_catalog = enabled;
        self
    }

    /// Run the effect for `action`, returning its completion action.
    pub fn run(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::Auth(action) => self.run_auth(action).map(Action::from),
            Action::Products(action) => self.run_products(action).map(Action::from),
        }
    }
}
