//! Books repository
//!
//! Translates between the store's document representation and in-memory book
//! records. Every operation loads the full document from disk; mutations
//! rewrite the whole document back. Nothing is cached between calls.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Book,
    store::{BookElement, XmlStore},
};

#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<dyn XmlStore>,
}

impl BooksRepository {
    pub fn new(store: Arc<dyn XmlStore>) -> Self {
        Self { store }
    }

    /// Find a book by exact ISBN match (no normalization, no case folding).
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let document = self.store.load().await?;
        Ok(document
            .books
            .iter()
            .find(|element| element.isbn == isbn)
            .map(Book::from))
    }

    /// Append a book to the document. Uniqueness of the ISBN is the caller's
    /// responsibility; no check is performed here.
    pub async fn add(&self, book: &Book) -> AppResult<()> {
        let mut document = self.store.load().await?;
        document.books.push(BookElement::from(book));
        self.store.save(&document).await
    }

    /// Replace the book located by `isbn` (not by `book.isbn`, which may
    /// differ) with the given record, keeping its position in the document.
    ///
    /// Returns `false` without saving when no element matches. The miss is a
    /// silent no-op at this layer; not-found signaling is the service's job.
    pub async fn update(&self, isbn: &str, book: &Book) -> AppResult<bool> {
        let mut document = self.store.load().await?;
        let Some(element) = document.books.iter_mut().find(|e| e.isbn == isbn) else {
            return Ok(false);
        };
        *element = BookElement::from(book);
        self.store.save(&document).await?;
        Ok(true)
    }

    /// Remove the book located by `isbn`. A miss is a silent no-op, returning
    /// `false` without saving.
    pub async fn delete(&self, isbn: &str) -> AppResult<bool> {
        let mut document = self.store.load().await?;
        let before = document.books.len();
        document.books.retain(|element| element.isbn != isbn);
        if document.books.len() == before {
            return Ok(false);
        }
        self.store.save(&document).await?;
        Ok(true)
    }

    /// All books in document order (not sorted).
    pub async fn get_all(&self) -> AppResult<Vec<Book>> {
        let document = self.store.load().await?;
        Ok(document.books.iter().map(Book::from).collect())
    }
}

impl From<&BookElement> for Book {
    fn from(element: &BookElement) -> Self {
        Self {
            isbn: element.isbn.clone(),
            title: element.title.clone(),
            authors: element.authors.clone(),
            year: element.year,
            price: element.price,
            category: element.category.clone(),
            cover: element.cover.clone(),
        }
    }
}

impl From<&Book> for BookElement {
    fn from(book: &Book) -> Self {
        Self {
            category: book.category.clone(),
            cover: book.cover.clone(),
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            authors: book.authors.clone(),
            year: book.year,
            price: book.price,
        }
    }
}
