//! Repository layer for document storage operations

pub mod books;

use std::sync::Arc;

use crate::store::XmlStore;

/// Main repository struct holding the shared document store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn XmlStore>) -> Self {
        Self {
            books: books::BooksRepository::new(store),
        }
    }
}
