//! Book entity in the catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, generated at creation
    pub id: Uuid,

    /// Book title
    pub name: String,

    /// Author name
    pub author: String,
}

impl Book {
    /// Creates a new book with a freshly generated id
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            author: author.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_books_get_distinct_ids() {
        let a = Book::new("Dune", "Frank Herbert");
        let b = Book::new("Dune", "Frank Herbert");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let book = Book::new("Neuromancer", "William Gibson");
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, back);
    }
}
