//! Book repository trait defining the interface for catalog persistence.

use async_trait::async_trait;

use crate::domain::entities::book::Book;
use crate::errors::DomainError;

/// Repository trait for Book persistence operations
///
/// `add` is append-only; the service layer imposes no ordering or
/// transactional guarantee across requests.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List every book in the catalog
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Append a book to the catalog
    async fn add(&self, book: Book) -> Result<Book, DomainError>;
}

/// Mock book repository for testing
pub struct MockBookRepository {
    books: tokio::sync::RwLock<Vec<Book>>,
    fail_writes: bool,
}

impl MockBookRepository {
    pub fn new() -> Self {
        Self {
            books: tokio::sync::RwLock::new(Vec::new()),
            fail_writes: false,
        }
    }

    /// A mock whose writes always fail, for store-failure paths
    pub fn failing() -> Self {
        Self {
            books: tokio::sync::RwLock::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.books.read().await.clone())
    }

    async fn add(&self, book: Book) -> Result<Book, DomainError> {
        if self.fail_writes {
            return Err(DomainError::Store {
                message: "write rejected".to_string(),
            });
        }
        self.books.write().await.push(book.clone());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_find_all() {
        let repo = MockBookRepository::new();
        let book = repo.add(Book::new("Dune", "Frank Herbert")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![book]);
    }

    #[tokio::test]
    async fn test_failing_repo_rejects_writes() {
        let repo = MockBookRepository::failing();
        let result = repo.add(Book::new("Dune", "Frank Herbert")).await;
        assert!(matches!(result, Err(DomainError::Store { .. })));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
