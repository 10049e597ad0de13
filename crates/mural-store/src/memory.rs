//! Process-memory stores. All data lives for the lifetime of the process
//! and is lost on restart.

use std::sync::RwLock;

use mural_types::models::{Message, User};

use crate::{MessageStore, StoreError, UserStore};

#[derive(Default)]
pub struct MemoryUsers {
    users: RwLock<Vec<User>>,
}

impl UserStore for MemoryUsers {
    fn add(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        users.push(user);
        Ok(())
    }

    fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.clone())
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.is_empty())
    }
}

#[derive(Default)]
pub struct MemoryMessages {
    messages: RwLock<Vec<Message>>,
}

impl MessageStore for MemoryMessages {
    fn add(&self, message: Message) -> Result<(), StoreError> {
        let mut messages = self.messages.write().map_err(|_| StoreError::LockPoisoned)?;
        messages.push(message);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Message>, StoreError> {
        let messages = self.messages.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn user(username: &str) -> User {
        User {
            username: username.into(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            nickname: username.to_uppercase(),
        }
    }

    #[test]
    fn users_keep_insertion_order() {
        let store = MemoryUsers::default();
        store.add(user("ana")).unwrap();
        store.add(user("bia")).unwrap();
        store.add(user("caio")).unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, ["ana", "bia", "caio"]);
    }

    #[test]
    fn duplicate_usernames_are_accepted() {
        let store = MemoryUsers::default();
        store.add(user("ana")).unwrap();
        store.add(user("ana")).unwrap();

        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn is_empty_tracks_additions() {
        let store = MemoryUsers::default();
        assert!(store.is_empty().unwrap());

        store.add(user("ana")).unwrap();
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn messages_keep_insertion_order() {
        let store = MemoryMessages::default();
        for text in ["oi", "tudo bem?", "tchau"] {
            store
                .add(Message {
                    username: "ana".into(),
                    message: text.into(),
                    date: Utc::now(),
                })
                .unwrap();
        }

        let texts: Vec<String> = store.list().unwrap().into_iter().map(|m| m.message).collect();
        assert_eq!(texts, ["oi", "tudo bem?", "tchau"]);
    }
}
