//! Canned [`ShopApi`] for tests.
//!
//! `MockShopApi` answers logins from a list of known accounts and serves a
//! fixed catalog (or a fixed failure). Every call is recorded so tests can
//! assert which endpoints an effect used.
//!
//! # Example
//!
//! ```
//! use turtleshop::api::{MockShopApi, ShopApi};
//! use turtleshop::auth::{Credentials, User};
//!
//! let api = MockShopApi::new().with_account("emilys", "emilyspass", User::default());
//! assert!(api.login(&Credentials::new("emilys", "emilyspass")).is_ok());
//! assert!(api.login(&Credentials::new("emilys", "nope")).is_err());
//! assert_eq!(api.calls(), vec!["login emilys", "login emilys"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::auth::{Credentials, User};
use crate::catalog::ProductsPage;
use crate::error::{Result, ShopError};

use super::ShopApi;

/// Mock API implementation for testing.
///
/// Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct MockShopApi {
    accounts: Vec<(String, String, User)>,
    catalog: Option<ProductsPage>,
    catalog_error: Option<String>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MockShopApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `username`/`password` and answer with `user`.
    pub fn with_account(mut self, username: &str, password: &str, user: User) -> Self {
        self.accounts
            .push((username.to_string(), password.to_string(), user));
        self
    }

    /// Serve this page from both catalog endpoints.
    pub fn with_catalog(mut self, page: ProductsPage) -> Self {
        self.catalog = Some(page);
        self
    }

    /// Fail catalog requests with a 500 carrying `message`.
    pub fn with_catalog_error(mut self, message: &str) -> Self {
        self.catalog_error = Some(message.to_string());
        self
    }

    /// Calls made so far, e.g. `"login emilys"`, `"products"`,
    /// `"auth/products"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn serve_catalog(&self) -> Result<ProductsPage> {
        if let Some(message) = &self.catalog_error {
            return Err(ShopError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        Ok(self.catalog.clone().unwrap_or_default())
    }
}

impl ShopApi for MockShopApi {
    fn login(&self, credentials: &Credentials) -> Result<User> {
        self.record(format!("login {}", credentials.username));

        self.accounts
            .iter()
            .find(|(username, password, _)| {
                *username == credentials.username && *password == credentials.password
            })
            .map(|(_, _, user)| user.clone())
            .ok_or_else(|| ShopError::Api {
                status: 400,
                message: "Invalid credentials".to_string(),
            })
    }

    fn products(&self) -> Result<ProductsPage> {
        self.record("products".to_string());
        self.serve_catalog()
    }

    fn authenticated_products(&self, _token: &str) -> Result<ProductsPage> {
        self.record("auth/products".to_string());
        self.serve_catalog()
    }
}
