//! Storefront API access.
//!
//! [`ShopApi`] is the seam between the effects layer and the network.
//! [`HttpShopApi`] talks to a DummyJSON-compatible server over blocking
//! `reqwest`; [`MockShopApi`] answers from canned data in tests.

mod client;
mod mock;

pub use client::{HttpShopApi, DEFAULT_API_URL};
pub use mock::MockShopApi;

use crate::auth::{Credentials, User};
use crate::catalog::ProductsPage;
use crate::error::Result;

/// Operations the storefront needs from the remote API.
pub trait ShopApi {
    /// `POST /auth/login`.
    fn login(&self, credentials: &Credentials) -> Result<User>;

    /// `GET /products` (public).
    fn products(&self) -> Result<ProductsPage>;

    /// `GET /auth/products` with a bearer token.
    fn authenticated_products(&self, token: &str) -> Result<ProductsPage>;

    /// Fetch the catalog, using the authenticated endpoint only when a
    /// non-empty token is available.
    fn catalog(&self, token: Option<&str>) -> Result<ProductsPage> {
        match token {
            Some(token) if !token.is_empty() => self.authenticated_products(token),
            _ => self.products(),
        }
    }
}
