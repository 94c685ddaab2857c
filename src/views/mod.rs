//! HTML pages

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::models::{BookForm, BookListing, FieldErrors};

pub const SAVED_MESSAGE: &str = "Book successfully saved!";
pub const NOT_SAVED_NOTICE: &str = "Something went wrong while saving your request data";

/// Everything the registration form shows
#[derive(Debug, Default)]
pub struct FormView {
    /// Values to put back in the inputs
    pub values: BookForm,
    pub errors: FieldErrors,
    /// Success message
    pub message: Option<&'static str>,
    /// Warning shown when the store refused the book
    pub notice: Option<&'static str>,
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                nav {
                    a href="/form" { "Add a book" }
                    " | "
                    a href="/books" { "Books" }
                }
                (content)
            }
        }
    }
}

pub fn form_page(view: &FormView) -> Markup {
    let fields = [
        ("title", "Title", view.values.title.as_str()),
        ("author", "Author", view.values.author.as_str()),
        ("isbn", "ISBN", view.values.isbn.as_str()),
    ];

    layout(
        "Add a book",
        html! {
            h1 { "Add a book" }
            @if let Some(message) = view.message {
                p.message.success { (message) }
            }
            @if let Some(notice) = view.notice {
                p.message.danger { (notice) }
            }
            form method="post" action="/form" {
                @for (name, label, value) in fields {
                    div.field {
                        label for=(name) { (label) }
                        input type="text" id=(name) name=(name) value=(value);
                        @if let Some(error) = view.errors.get(name) {
                            span.error { (error) }
                        }
                    }
                }
                button type="submit" { "Save" }
            }
        },
    )
}

pub fn books_page(books: &[BookListing]) -> Markup {
    layout(
        "Books",
        html! {
            h1 { "Books" }
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Author" }
                        th { "ISBN" }
                    }
                }
                tbody {
                    @for book in books {
                        tr {
                            td { (book.title) }
                            td { (book.author_name) }
                            td { (book.isbn) }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, code: u32, name: &str, message: &str) -> Markup {
    layout(
        status.canonical_reason().unwrap_or("Error"),
        html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p.error { (message) }
            p { small { "code " (code) " (" (name) ")" } }
        },
    )
}
