//! Book entity and its external DTO representation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Delimiter between author names in the DTO representation
pub const AUTHORS_DELIMITER: &str = ", ";

/// Book record as persisted in the bookstore document
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Opaque identifier, 10 or 13 characters once validated
    pub isbn: String,
    pub title: String,
    /// Ordered author list, may be empty
    pub authors: Vec<String>,
    pub year: i32,
    pub price: Decimal,
    pub category: Option<String>,
    pub cover: Option<String>,
}

/// External JSON shape of a book
///
/// Differs from [`Book`] in that `authors` is a single `", "`-joined string
/// and `isbn` is nullable (a create request may omit it, which the service
/// rejects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: Option<String>,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub price: Decimal,
    pub category: Option<String>,
    pub cover: Option<String>,
}

impl Book {
    /// Convert to the external DTO shape, joining authors on `", "`.
    pub fn to_dto(&self) -> BookDto {
        BookDto {
            isbn: Some(self.isbn.clone()),
            title: self.title.clone(),
            authors: self.authors.join(AUTHORS_DELIMITER),
            year: self.year,
            price: self.price,
            category: self.category.clone(),
            cover: self.cover.clone(),
        }
    }

    /// Build an entity from a DTO, using `isbn` as the identity regardless of
    /// what the DTO carries.
    pub fn from_dto(isbn: &str, dto: &BookDto) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: dto.title.clone(),
            authors: split_authors(&dto.authors),
            year: dto.year,
            price: dto.price,
            category: dto.category.clone(),
            cover: dto.cover.clone(),
        }
    }
}

/// Split a `", "`-joined author string into the ordered author list.
///
/// The empty string maps to an empty list so joining and splitting round-trip
/// for books without authors.
pub fn split_authors(authors: &str) -> Vec<String> {
    if authors.is_empty() {
        return Vec::new();
    }
    authors
        .split(AUTHORS_DELIMITER)
        .map(|a| a.to_string())
        .collect()
}
