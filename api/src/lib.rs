//! HTTP API layer for the Bookshelf backend.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
