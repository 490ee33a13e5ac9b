//! Authentication data model.

mod user;

pub use user::{Credentials, User};
