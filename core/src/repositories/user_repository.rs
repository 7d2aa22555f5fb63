//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User persistence operations
///
/// Implementations handle the actual storage while keeping the
/// abstraction boundary between domain and infrastructure layers.
/// Concurrent reads are assumed safe.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that name
    /// * `Err(DomainError)` - Store error
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// List every registered user
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}

/// Mock user repository for testing
pub struct MockUserRepository {
    users: tokio::sync::RwLock<Vec<User>>,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            users: tokio::sync::RwLock::new(Vec::new()),
        }
    }

    /// Insert a user into the mock store
    pub async fn insert(&self, user: User) {
        self.users.write().await.push(user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}
