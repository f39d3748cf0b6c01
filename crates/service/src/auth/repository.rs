use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::domain::{NewUser, UserRecord};

/// Errors surfaced by persistence implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate email")]
    DuplicateEmail,
    #[error("storage error: {0}")]
    Storage(String),
}

/// Repository abstraction for account persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;
    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, UserRecord>>, // key: email
    }

    impl MockUserRepository {
        /// Number of stored records; handy for "nothing was created" checks
        pub fn len(&self) -> usize {
            self.users.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|u| u.id == id).cloned())
        }

        async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(&user.email) {
                return Err(RepositoryError::DuplicateEmail);
            }
            let now = Utc::now();
            let record = UserRecord {
                id: Uuid::new_v4(),
                email: user.email.clone(),
                password_hash: user.password_hash,
                name: user.name,
                created_at: now,
                updated_at: now,
            };
            users.insert(user.email, record.clone());
            Ok(record)
        }
    }
}
