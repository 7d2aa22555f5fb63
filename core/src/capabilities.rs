//! Capability names carried in the token audience claim.
//!
//! Each capability gates a single endpoint; a user's entitlements are the
//! set of these strings stored on their record and copied into every token
//! issued for them.

/// Permission to list all registered users
pub const SHOW_USERS: &str = "SHOW_USERS";

/// Permission to add a book to the catalog
pub const ADD_BOOK: &str = "ADD_BOOK";
