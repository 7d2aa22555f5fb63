//! Domain layer: entities owned by the Bookshelf system.

pub mod entities;
