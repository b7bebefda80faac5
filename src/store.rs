//! XML-backed document store
//!
//! The whole bookstore lives in a single XML file. Every load parses the file
//! fully into memory and every save rewrites it in full. There is no locking
//! and no atomic rename: concurrent read-modify-write cycles follow
//! last-write-wins semantics, which is a documented limitation of the format.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// In-memory parse of the persisted XML document
///
/// ```xml
/// <bookstore>
///   <book category="..." cover="...">
///     <isbn>...</isbn><title>...</title>
///     <author>...</author>
///     <year>...</year><price>...</price>
///   </book>
/// </bookstore>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bookstore")]
pub struct BookstoreDocument {
    #[serde(rename = "book", default)]
    pub books: Vec<BookElement>,
}

/// One `book` element of the document
///
/// `isbn` and `title` are required children; their absence is a parse error.
/// `category` and `cover` are optional attributes. Zero `author` children is
/// valid and yields an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookElement {
    #[serde(rename = "@category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "@cover", default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub isbn: String,
    pub title: String,
    #[serde(rename = "author", default)]
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Store abstraction over the persisted document
///
/// Injected into the repository so tests can substitute an in-memory
/// document instead of touching the filesystem.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait XmlStore: Send + Sync {
    /// Read and parse the whole document. Missing or malformed files are
    /// errors that propagate to the caller unmodified.
    async fn load(&self) -> AppResult<BookstoreDocument>;

    /// Serialize the whole document and overwrite the file.
    async fn save(&self, document: &BookstoreDocument) -> AppResult<()>;
}

/// File-based store reading and writing a configured path
#[derive(Clone)]
pub struct FileXmlStore {
    path: PathBuf,
}

impl FileXmlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl XmlStore for FileXmlStore {
    async fn load(&self) -> AppResult<BookstoreDocument> {
        tracing::debug!("Loading XML from file: {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        quick_xml::de::from_str(&content).map_err(|e| AppError::XmlParse(e.to_string()))
    }

    async fn save(&self, document: &BookstoreDocument) -> AppResult<()> {
        tracing::debug!("Saving XML to file: {}", self.path.display());
        let body = quick_xml::se::to_string(document)
            .map_err(|e| AppError::XmlWrite(e.to_string()))?;
        let content = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", body);
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bookstore>
  <book category="web" cover="paperback">
    <isbn>1234567890</isbn>
    <title>Learning XML</title>
    <author>Erik T. Ray</author>
    <year>2003</year>
    <price>39.95</price>
  </book>
  <book category="children">
    <isbn>9781234567897</isbn>
    <title>Harry Potter</title>
    <author>J K. Rowling</author>
    <author>Another Author</author>
    <year>2005</year>
    <price>29.99</price>
  </book>
</bookstore>"#;

    #[test]
    fn test_parse_document() {
        let doc: BookstoreDocument = quick_xml::de::from_str(SAMPLE).unwrap();
        assert_eq!(doc.books.len(), 2);

        let first = &doc.books[0];
        assert_eq!(first.isbn, "1234567890");
        assert_eq!(first.title, "Learning XML");
        assert_eq!(first.authors, vec!["Erik T. Ray"]);
        assert_eq!(first.year, 2003);
        assert_eq!(first.price, "39.95".parse::<Decimal>().unwrap());
        assert_eq!(first.category.as_deref(), Some("web"));
        assert_eq!(first.cover.as_deref(), Some("paperback"));

        let second = &doc.books[1];
        assert_eq!(second.authors.len(), 2);
        assert_eq!(second.cover, None);
    }

    #[test]
    fn test_parse_empty_document() {
        let doc: BookstoreDocument = quick_xml::de::from_str("<bookstore/>").unwrap();
        assert!(doc.books.is_empty());
    }

    #[test]
    fn test_parse_book_without_authors() {
        let xml = r#"<bookstore><book><isbn>1111111111</isbn><title>T</title><year>2000</year><price>1.00</price></book></bookstore>"#;
        let doc: BookstoreDocument = quick_xml::de::from_str(xml).unwrap();
        assert!(doc.books[0].authors.is_empty());
        assert_eq!(doc.books[0].category, None);
    }

    #[test]
    fn test_parse_missing_title_fails() {
        let xml = r#"<bookstore><book><isbn>1111111111</isbn><year>2000</year><price>1.00</price></book></bookstore>"#;
        assert!(quick_xml::de::from_str::<BookstoreDocument>(xml).is_err());
    }

    #[test]
    fn test_parse_non_numeric_year_fails() {
        let xml = r#"<bookstore><book><isbn>1111111111</isbn><title>T</title><year>abc</year><price>1.00</price></book></bookstore>"#;
        assert!(quick_xml::de::from_str::<BookstoreDocument>(xml).is_err());
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookstore.xml");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let store = FileXmlStore::new(&path);
        let doc = store.load().await.unwrap();
        assert_eq!(doc.books.len(), 2);

        store.save(&doc).await.unwrap();
        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded, doc);
    }

    #[tokio::test]
    async fn test_file_store_missing_file_fails() {
        let store = FileXmlStore::new("/nonexistent/bookstore.xml");
        assert!(matches!(store.load().await, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_file_store_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookstore.xml");
        tokio::fs::write(&path, "<bookstore><book></bookstore>")
            .await
            .unwrap();

        let store = FileXmlStore::new(&path);
        assert!(matches!(store.load().await, Err(AppError::XmlParse(_))));
    }
}
