//! Screen routing and the authentication guard.
//!
//! Three routes exist: `/login`, `/products` and `/favorites`. The last two
//! are guarded; activating them asks the [`AuthGuard`], which redirects to
//! `/login` when there is no session.

use std::fmt;

/// A screen of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Products,
    Favorites,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Products => "/products",
            Route::Favorites => "/favorites",
        }
    }

    /// Resolve a path, applying redirects.
    ///
    /// The empty path and `/` go to `/login`; anything unknown goes to
    /// `/products`.
    pub fn resolve(path: &str) -> Route {
        match path.trim().trim_end_matches('/') {
            "" => Route::Login,
            "/login" | "login" => Route::Login,
            "/products" | "products" => Route::Products,
            "/favorites" | "favorites" => Route::Favorites,
            other => {
                tracing::debug!("Unknown route '{}', redirecting to /products", other);
                Route::Products
            }
        }
    }

    /// Whether activating this route requires a session.
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Something that can switch screens.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Outcome of the last guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Pending,
    Authorized,
    Unauthorized,
}

/// Permits guarded routes only for an authenticated session.
#[derive(Debug, Default)]
pub struct AuthGuard {
    state: GuardState,
}

impl AuthGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a guarded route may be activated.
    ///
    /// Reads exactly one value from `authenticated`, typically a selection of
    /// the authenticated flag; later values are never consulted. `false` or
    /// no value at all denies and redirects to `/login`.
    pub fn can_activate(
        &mut self,
        authenticated: impl IntoIterator<Item = bool>,
        navigator: &mut dyn Navigator,
    ) -> bool {
        self.state = GuardState::Pending;

        match authenticated.into_iter().next() {
            Some(true) => {
                self.state = GuardState::Authorized;
                true
            }
            _ => {
                self.state = GuardState::Unauthorized;
                navigator.navigate(Route::Login);
                false
            }
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }
}

/// Tracks the current screen and how we got there.
#[derive(Debug, Default)]
pub struct Router {
    current: Option<Route>,
    history: Vec<Route>,
    guard: AuthGuard,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `path`, running the guard for protected routes.
    ///
    /// Returns the route that ends up current.
    pub fn activate(
        &mut self,
        path: &str,
        authenticated: impl IntoIterator<Item = bool>,
    ) -> Route {
        let route = Route::resolve(path);

        if route.is_guarded() {
            let mut guard = std::mem::take(&mut self.guard);
            let allowed = guard.can_activate(authenticated, self);
            self.guard = guard;
            if !allowed {
                return Route::Login;
            }
        }

        self.navigate(route);
        route
    }

    pub fn current(&self) -> Option<Route> {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate {}", route);
        self.current = Some(route);
        self.history.push(route);
    }
}
