//! HTTP client for the DummyJSON API.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::auth::{Credentials, User};
use crate::catalog::ProductsPage;
use crate::error::{Result, ShopError};

use super::ShopApi;

/// Public DummyJSON instance.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

/// Blocking HTTP implementation of [`ShopApi`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use turtleshop::api::{HttpShopApi, ShopApi};
///
/// let api = HttpShopApi::new("https://dummyjson.com", Duration::from_secs(30)).unwrap();
/// let page = api.products().unwrap();
/// println!("{} products", page.total);
/// ```
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    base_url: String,
    timeout: Duration,
    client: Client,
}

/// Error body returned by DummyJSON on failures.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl HttpShopApi {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-success responses into [`ShopError::Api`].
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Err(ShopError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl ShopApi for HttpShopApi {
    fn login(&self, credentials: &Credentials) -> Result<User> {
        let url = self.url("/auth/login");
        tracing::debug!("POST {} as {}", url, credentials.username);

        let response = self.client.post(&url).json(credentials).send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn products(&self) -> Result<ProductsPage> {
        let url = self.url("/products");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn authenticated_products(&self, token: &str) -> Result<ProductsPage> {
        let url = self.url("/auth/products");
        tracing::debug!("GET {} (bearer)", url);

        let response = self.client.get(&url).bearer_auth(token).send()?;
        Ok(Self::check(response)?.json()?)
    }
}
