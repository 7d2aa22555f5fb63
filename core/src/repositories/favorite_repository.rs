//! Favorite repository trait: books a user has marked as favorites.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::entities::book::Book;
use crate::errors::DomainError;

/// Repository trait for the user-to-favorite-books association
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Books the given subject has marked as favorites
    ///
    /// A subject with no favorites yields an empty list, not an error.
    async fn find_for_user(&self, subject: &str) -> Result<Vec<Book>, DomainError>;
}

/// Mock favorite repository for testing
pub struct MockFavoriteRepository {
    favorites: tokio::sync::RwLock<HashMap<String, Vec<Book>>>,
}

impl MockFavoriteRepository {
    pub fn new() -> Self {
        Self {
            favorites: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, subject: &str, book: Book) {
        self.favorites
            .write()
            .await
            .entry(subject.to_string())
            .or_default()
            .push(book);
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn find_for_user(&self, subject: &str) -> Result<Vec<Book>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites.get(subject).cloned().unwrap_or_default())
    }
}
