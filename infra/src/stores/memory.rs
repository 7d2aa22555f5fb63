//! In-memory store implementations.
//!
//! Reads are concurrent behind `RwLock`; the only write path (book
//! creation) is append-only, matching the collaborator contract the
//! core services assume.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use shelf_core::capabilities::{ADD_BOOK, SHOW_USERS};
use shelf_core::domain::entities::{Book, Role, User};
use shelf_core::errors::DomainError;
use shelf_core::repositories::{BookRepository, FavoriteRepository, UserRepository};

use crate::password::BcryptVerifier;

/// In-memory user store
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}

/// In-memory book store
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookStore {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.books.read().await.clone())
    }

    async fn add(&self, book: Book) -> Result<Book, DomainError> {
        let mut books = self.books.write().await;
        books.push(book.clone());
        tracing::debug!(book = %book.name, "book appended to catalog");
        Ok(book)
    }
}

/// In-memory favorite store, keyed by token subject
pub struct MemoryFavoriteStore {
    favorites: RwLock<HashMap<String, Vec<Book>>>,
}

impl MemoryFavoriteStore {
    pub fn new(favorites: HashMap<String, Vec<Book>>) -> Self {
        Self {
            favorites: RwLock::new(favorites),
        }
    }
}

#[async_trait]
impl FavoriteRepository for MemoryFavoriteStore {
    async fn find_for_user(&self, subject: &str) -> Result<Vec<Book>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites.get(subject).cloned().unwrap_or_default())
    }
}

/// Builds the seeded demo stores
///
/// Two accounts: `admin` (both capabilities) and `reader` (none), plus a
/// small starting catalog with a favorite each.
pub fn seed_stores() -> Result<
    (
        Arc<MemoryUserStore>,
        Arc<MemoryBookStore>,
        Arc<MemoryFavoriteStore>,
    ),
    DomainError,
> {
    let admin = User::new(
        "admin",
        BcryptVerifier::hash("admin123")?,
        Role::Admin,
        vec![SHOW_USERS.to_string(), ADD_BOOK.to_string()],
    );
    let reader = User::new(
        "reader",
        BcryptVerifier::hash("reader123")?,
        Role::Member,
        vec![],
    );

    let hobbit = Book::new("The Hobbit", "J.R.R. Tolkien");
    let nineteen_eighty_four = Book::new("1984", "George Orwell");
    let fahrenheit = Book::new("Fahrenheit 451", "Ray Bradbury");

    let mut favorites = HashMap::new();
    favorites.insert(
        admin.username.clone(),
        vec![nineteen_eighty_four.clone(), hobbit.clone()],
    );
    favorites.insert(reader.username.clone(), vec![fahrenheit.clone()]);

    Ok((
        Arc::new(MemoryUserStore::new(vec![admin, reader])),
        Arc::new(MemoryBookStore::new(vec![
            hobbit,
            nineteen_eighty_four,
            fahrenheit,
        ])),
        Arc::new(MemoryFavoriteStore::new(favorites)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_users_and_capabilities() {
        let (users, _, _) = seed_stores().unwrap();

        let admin = users.find_by_username("admin").await.unwrap().unwrap();
        assert!(admin.has_capability(SHOW_USERS));
        assert!(admin.has_capability(ADD_BOOK));

        let reader = users.find_by_username("reader").await.unwrap().unwrap();
        assert!(reader.audience.is_empty());

        assert!(users.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_book_store_append() {
        let (_, books, _) = seed_stores().unwrap();
        let before = books.find_all().await.unwrap().len();

        books.add(Book::new("Dune", "Frank Herbert")).await.unwrap();

        let all = books.find_all().await.unwrap();
        assert_eq!(all.len(), before + 1);
        assert!(all.iter().any(|b| b.name == "Dune"));
    }

    #[tokio::test]
    async fn test_favorites_for_unknown_subject_are_empty() {
        let (_, _, favorites) = seed_stores().unwrap();
        assert!(favorites.find_for_user("ghost").await.unwrap().is_empty());
        assert!(!favorites.find_for_user("admin").await.unwrap().is_empty());
    }
}
