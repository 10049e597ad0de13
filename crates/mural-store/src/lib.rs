pub mod memory;

use thiserror::Error;

use mural_types::models::{Message, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Append-only access to registered users. Insertion order is preserved;
/// there is no uniqueness constraint on usernames.
pub trait UserStore: Send + Sync {
    fn add(&self, user: User) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.list()?.is_empty())
    }
}

/// Append-only access to chat messages, in insertion order.
pub trait MessageStore: Send + Sync {
    fn add(&self, message: Message) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Message>, StoreError>;
}
