//! Root state and action types.

use super::auth::{self, AuthAction, AuthState};
use super::products::{self, ProductsAction, ProductsState};
use super::Store;

/// Whole-application state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub products: ProductsState,
}

/// Any action the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Products(ProductsAction),
}

impl Action {
    /// Stable label for logs; never includes payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth(action) => action.name(),
            Self::Products(action) => action.name(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<ProductsAction> for Action {
    fn from(action: ProductsAction) -> Self {
        Self::Products(action)
    }
}

/// Root reducer: routes each action to its slice.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    match action {
        Action::Auth(action) => AppState {
            auth: auth::reduce(state.auth, action),
            ..state
        },
        Action::Products(action) => AppState {
            products: products::reduce(state.products, action),
            ..state
        },
    }
}

/// The application store.
pub type AppStore = Store<AppState, Action>;

/// Create an empty application store.
pub fn app_store() -> AppStore {
    Store::new(AppState::default(), reduce)
}
