//! TurtleShop - a terminal storefront for the DummyJSON catalog.
//!
//! Logging in, browsing products and keeping favorites are modelled as a
//! small unidirectional data flow: actions go into a [`store`], pure reducers
//! produce the next state, [`effects`] perform the network and storage work,
//! and screens observe the state through selections.
//!
//! # Modules
//!
//! - [`api`] - HTTP client for the shop API, plus a mock
//! - [`auth`] - Credentials and the authenticated user
//! - [`catalog`] - Products and catalog pages
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`effects`] - Side effects triggered by actions
//! - [`error`] - Error types and result aliases
//! - [`favorites`] - The favorites screen and its sticky list
//! - [`router`] - Screen routing and the auth guard
//! - [`session`] - Persisted login session
//! - [`shop`] - Store and effects wired together
//! - [`storage`] - Key/value persistence backends
//! - [`store`] - State container, reducers and selectors
//! - [`ui`] - Prompts, spinners, tables and terminal output
//!
//! # Example
//!
//! ```
//! use turtleshop::api::MockShopApi;
//! use turtleshop::auth::{Credentials, User};
//! use turtleshop::effects::Effects;
//! use turtleshop::session::SessionStore;
//! use turtleshop::shop::Shop;
//! use turtleshop::storage::MemoryStorage;
//!
//! let api = MockShopApi::new().with_account("emilys", "emilyspass", User::default());
//! let mut shop = Shop::new(Effects::new(api, SessionStore::new(MemoryStorage::new())));
//!
//! shop.login(Credentials::new("emilys", "emilyspass")).unwrap();
//! assert!(shop.is_authenticated());
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
pub mod favorites;
pub mod router;
pub mod session;
pub mod shop;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{Result, ShopError};
