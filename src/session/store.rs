//! Session storage.

use crate::auth::User;
use crate::error::Result;
use crate::storage::KeyValueStorage;

use super::SESSION_KEY;

/// Outcome of reading the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRestore {
    /// A valid record was found.
    Restored(User),
    /// A record was found but could not be parsed; it has been erased.
    Corrupt,
    /// Nothing is stored.
    Missing,
}

/// Storage for the logged-in user.
pub struct SessionStore {
    storage: Box<dyn KeyValueStorage>,
}

impl SessionStore {
    /// Create a session store over any key-value storage.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Save the user record.
    pub fn save(&mut self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_KEY, &json)
    }

    /// Restore the persisted session, erasing it if it is unreadable.
    pub fn restore(&mut self) -> Result<SessionRestore> {
        let Some(json) = self.storage.get_item(SESSION_KEY)? else {
            return Ok(SessionRestore::Missing);
        };

        match serde_json::from_str::<User>(&json) {
            Ok(user) => Ok(SessionRestore::Restored(user)),
            Err(e) => {
                tracing::warn!("Discarding unreadable session record: {}", e);
                self.storage.remove_item(SESSION_KEY)?;
                Ok(SessionRestore::Corrupt)
            }
        }
    }

    /// Erase the persisted session.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY)
    }

    /// Bearer token of the persisted session.
    ///
    /// Any read or parse problem means "no token"; the record is left alone.
    pub fn token(&self) -> Option<String> {
        let json = self.storage.get_item(SESSION_KEY).ok()??;
        let user: User = serde_json::from_str(&json).ok()?;
        user.token().map(str::to_string)
    }
}
