//! HTML report rendering

use crate::models::{book::AUTHORS_DELIMITER, Book};

/// Renders an HTML table from a sequence of books
#[derive(Clone, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the report: fixed skeleton, one header row, one data row per
    /// book in input order. No sorting, no filtering.
    pub fn generate_html_report(&self, books: &[Book]) -> String {
        let mut html = String::new();
        html.push_str("<html><body><h1>Bookstore Report</h1><table border='1'>");
        html.push_str(
            "<tr><th>ISBN</th><th>Title</th><th>Authors</th><th>Year</th><th>Price</th><th>Category</th><th>Cover</th></tr>",
        );

        for book in books {
            html.push_str("<tr>");
            html.push_str(&format!("<td>{}</td>", book.isbn));
            html.push_str(&format!("<td>{}</td>", book.title));
            html.push_str(&format!("<td>{}</td>", book.authors.join(AUTHORS_DELIMITER)));
            html.push_str(&format!("<td>{}</td>", book.year));
            html.push_str(&format!("<td>${:.2}</td>", book.price));
            html.push_str(&format!(
                "<td>{}</td>",
                book.category.as_deref().unwrap_or_default()
            ));
            html.push_str(&format!(
                "<td>{}</td>",
                book.cover.as_deref().unwrap_or_default()
            ));
            html.push_str("</tr>");
        }

        html.push_str("</table></body></html>");
        html
    }
}
