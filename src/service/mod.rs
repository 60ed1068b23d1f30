//! BookmarkService: one transaction per CRUD operation, plus request validation.

mod crud;
mod validation;
pub use crud::BookmarkService;
pub use validation::RequestValidator;
