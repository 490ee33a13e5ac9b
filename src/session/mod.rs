//! Persisted session handling.
//!
//! The logged-in user is kept under the [`SESSION_KEY`] storage key as a
//! JSON record. This module reads, writes and erases that record; the auth
//! effects decide when.

mod store;

pub use store::{SessionRestore, SessionStore};

/// Storage key holding the serialized user.
pub const SESSION_KEY: &str = "user";
