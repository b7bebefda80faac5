//! Book endpoints
//!
//! Thin handlers mapping HTTP verbs to the book service and domain failures
//! to transport statuses (see `AppError::into_response`).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::{error::AppResult, models::BookDto};

/// Get a book by ISBN
///
/// `GET /api/book/{isbn}` — 200 with the book, 404 when it does not exist.
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookDto>> {
    let book = state.services.books.get_book_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// Create a book
///
/// `POST /api/book` — 201 with the stored book (the existing one when the
/// ISBN is already tracked), 400 on a missing or malformed ISBN.
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(dto): Json<BookDto>,
) -> AppResult<(StatusCode, Json<BookDto>)> {
    let created = state.services.books.add_book(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a book's fields
///
/// `PUT /api/book/{isbn}` — 204 on success, 404 when the ISBN is unknown.
pub async fn edit_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(dto): Json<BookDto>,
) -> AppResult<StatusCode> {
    state.services.books.edit_book(&isbn, &dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
///
/// `DELETE /api/book/{isbn}` — always 204; deleting an unknown ISBN is a
/// silent no-op.
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Render the bookstore report
///
/// `GET /api/book/report` — 200 with a `text/html` body.
pub async fn get_report(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let report = state.services.books.generate_report().await?;
    Ok(Html(report))
}
