mod memory;
mod persistent;

pub use memory::SessionStore;
pub use persistent::PersistentStore;

use crate::error::SessionError;

/// Session-scoped key holding the authenticated user's identifier
pub const USER_ID_KEY: &str = "loggedInUser";

/// Persisted key holding the access token
pub const TOKEN_KEY: &str = "token";

/// How long values written to a store survive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScope {
    /// Gone when the process exits
    Session,
    /// Survives restarts
    Persisted,
}

/// Key/value storage port used by the submission workflow
pub trait KeyValueStore: Send + Sync {
    fn scope(&self) -> StoreScope;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
}
