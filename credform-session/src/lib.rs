// Configuration for the credential form client
mod settings;

// Key/value storage ports (session-scoped and persisted)
pub mod store;

mod error;

pub use error::SessionError;
pub use settings::Settings;
pub use store::{KeyValueStore, PersistentStore, SessionStore, StoreScope, TOKEN_KEY, USER_ID_KEY};
