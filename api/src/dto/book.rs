//! Catalog DTOs.

use serde::{Deserialize, Serialize};

use shelf_core::domain::entities::Book;

/// Body of POST /book
///
/// Fields are optional so presence is checked explicitly and missing
/// data maps to 400 instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBookRequest {
    pub name: Option<String>,
    pub author: Option<String>,
}

/// Body of GET /books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
    pub token: String,
}

/// Body of GET /favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Book>,
    pub token: String,
}
