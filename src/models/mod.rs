//! Data models for the library catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookForm, BookListing, FieldErrors, NewBook};
