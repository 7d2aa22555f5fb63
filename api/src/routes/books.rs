use actix_web::{web, HttpResponse};

use crate::dto::auth::MessageTokenResponse;
use crate::dto::book::{AddBookRequest, BooksResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use shelf_core::capabilities::ADD_BOOK;
use shelf_core::domain::entities::Book;
use shelf_core::errors::ErrorResponse;
use shelf_core::repositories::{
    BookRepository, FavoriteRepository, PasswordVerifier, UserRepository,
};

/// Handler for GET /books
///
/// Open to any verified session. A successful listing refreshes the
/// token; an empty or unreachable store answers 500 with the presented
/// token echoed back.
pub async fn list_books<U, B, F, P>(
    state: web::Data<AppState<U, B, F, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    match state.books.find_all().await {
        Ok(books) if !books.is_empty() => {
            let token = match state.token_service.refresh(&auth.token) {
                Ok(token) => token,
                Err(error) => return handle_domain_error(&error),
            };
            HttpResponse::Ok().json(BooksResponse { books, token })
        }
        Ok(_) => HttpResponse::InternalServerError().json(BooksResponse {
            books: vec![],
            token: auth.token,
        }),
        Err(error) => {
            log::error!("Book store failure: {error}");
            HttpResponse::InternalServerError().json(BooksResponse {
                books: vec![],
                token: auth.token,
            })
        }
    }
}

/// Handler for POST /book
///
/// Requires the `ADD_BOOK` capability. The book is assigned a freshly
/// generated unique id at creation. Presence of `name` and `author` is
/// the only validation performed.
///
/// # Errors
/// - 400 when name or author is missing (nothing is stored)
/// - 403 `{message, token}` when the capability is missing
/// - 500 `{message, token}` when the store rejects the write
pub async fn add_book<U, B, F, P>(
    state: web::Data<AppState<U, B, F, P>>,
    auth: AuthContext,
    body: web::Json<AddBookRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
    F: FavoriteRepository + 'static,
    P: PasswordVerifier + 'static,
{
    let (name, author) = match (&body.name, &body.author) {
        (Some(name), Some(author)) if !name.is_empty() && !author.is_empty() => (name, author),
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("validation_error", "Invalid book data"));
        }
    };

    let audience = match state.token_service.audience_of(&auth.token) {
        Ok(audience) => audience,
        Err(error) => return handle_domain_error(&error),
    };

    if !audience.iter().any(|c| c == ADD_BOOK) {
        log::warn!("Subject {} denied book creation", auth.subject);
        return HttpResponse::Forbidden().json(MessageTokenResponse {
            message: "Not authorized to add books".to_string(),
            token: auth.token,
        });
    }

    match state.books.add(Book::new(name, author)).await {
        Ok(book) => {
            let token = match state.token_service.refresh(&auth.token) {
                Ok(token) => token,
                Err(error) => return handle_domain_error(&error),
            };
            log::info!("Subject {} added book {}", auth.subject, book.id);
            HttpResponse::Ok().json(MessageTokenResponse {
                message: "Book added successfully".to_string(),
                token,
            })
        }
        Err(error) => {
            log::error!("Book store rejected write: {error}");
            HttpResponse::InternalServerError().json(MessageTokenResponse {
                message: "Cannot add this book.".to_string(),
                token: auth.token,
            })
        }
    }
}
