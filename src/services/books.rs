//! Book management service
//!
//! Owns the validation rules and the error taxonomy of the API: lookups that
//! miss raise not-found, creates with a missing or malformed ISBN raise
//! bad-request. Store failures pass through untranslated.

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDto},
    repository::Repository,
    services::report::ReportGenerator,
};

const BOOK_DOES_NOT_EXIST: &str = "The book does not exist.";
const NO_ISBN_CODE: &str = "A book cannot be tracked with no ISBN code.";
const INVALID_ISBN_CODE: &str = "ISBN code is not valid.";

/// ISBNs are opaque identifiers validated by length only (no checksum)
const ISBN_LENGTHS: [usize; 2] = [10, 13];

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    report_generator: ReportGenerator,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            report_generator: ReportGenerator::new(),
        }
    }

    /// Look up a book by ISBN.
    ///
    /// An empty ISBN matches nothing and therefore takes the same not-found
    /// path as any unknown ISBN; it is deliberately not a validation error.
    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<BookDto> {
        match self.repository.books.get_by_isbn(isbn).await? {
            Some(book) => {
                tracing::info!("Retrieved book with ISBN {}", isbn);
                Ok(book.to_dto())
            }
            None => {
                tracing::error!("Book with ISBN {:?} not found", isbn);
                Err(AppError::NotFound(BOOK_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Create a book from a validated DTO.
    ///
    /// When a book with the same ISBN already exists, the existing record is
    /// returned unchanged and nothing is persisted.
    pub async fn add_book(&self, dto: &BookDto) -> AppResult<BookDto> {
        let isbn = dto
            .isbn
            .as_deref()
            .ok_or_else(|| AppError::BadRequest(NO_ISBN_CODE.to_string()))?;
        if !ISBN_LENGTHS.contains(&isbn.len()) {
            return Err(AppError::BadRequest(INVALID_ISBN_CODE.to_string()));
        }

        if let Some(existing) = self.repository.books.get_by_isbn(isbn).await? {
            tracing::info!("Book with ISBN {} already exists, returning it", isbn);
            return Ok(existing.to_dto());
        }

        let book = Book::from_dto(isbn, dto);
        self.repository.books.add(&book).await?;
        tracing::info!("Added book with ISBN {}", isbn);
        Ok(book.to_dto())
    }

    /// Replace all fields of the book identified by the path `isbn`.
    ///
    /// The DTO's own isbn is ignored; the path value is the identity.
    pub async fn edit_book(&self, isbn: &str, dto: &BookDto) -> AppResult<()> {
        if self.repository.books.get_by_isbn(isbn).await?.is_none() {
            tracing::error!("Cannot edit book with ISBN {:?}: not found", isbn);
            return Err(AppError::NotFound(BOOK_DOES_NOT_EXIST.to_string()));
        }

        let book = Book::from_dto(isbn, dto);
        let modified = self.repository.books.update(isbn, &book).await?;
        tracing::info!("Edited book with ISBN {} (modified: {})", isbn, modified);
        Ok(())
    }

    /// Delete a book. A missing ISBN is a silent success, mirroring the
    /// repository's no-op policy.
    pub async fn delete_book(&self, isbn: &str) -> AppResult<()> {
        let deleted = self.repository.books.delete(isbn).await?;
        tracing::info!("Deleted book with ISBN {} (existed: {})", isbn, deleted);
        Ok(())
    }

    /// Render the HTML report over every stored book in document order.
    pub async fn generate_report(&self) -> AppResult<String> {
        let books = self.repository.books.get_all().await?;
        tracing::info!("Generating report for {} book(s)", books.len());
        Ok(self.report_generator.generate_html_report(&books))
    }
}
