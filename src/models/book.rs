//! Book model, registration form and its validation rules

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use validator::{Validate, ValidationError};

use crate::config::AuthorNamePolicy;

pub const TITLE_EMPTY: &str = "Title field must not be empty.";
pub const AUTHOR_INVALID: &str = "Author name can not be empty or contain digits.";
pub const AUTHOR_SYMBOLS: &str = "Author name can not be empty or contain digits or symbols.";
pub const ISBN_INVALID: &str = "ISBN must contain exactly 13 digits.";

/// Number of digits in an ISBN-13.
pub const ISBN_LENGTH: usize = 13;

/// Book row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
}

/// Book to insert, once its author has been resolved
#[derive(Debug, Clone)]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub isbn: &'a str,
    pub author_id: i64,
}

/// One row of the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct BookListing {
    pub title: String,
    pub author_name: String,
    pub isbn: String,
}

/// Field name to message, in form order. Empty when the input is valid.
pub type FieldErrors = IndexMap<&'static str, String>;

/// Book registration form as submitted. All three keys are required;
/// their values are checked by [`BookForm::field_errors`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_author_name"))]
    pub author: String,
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,
}

impl BookForm {
    pub const FIELDS: [&'static str; 3] = ["title", "author", "isbn"];

    /// Run every rule and collect one message per failing field.
    pub fn field_errors(&self, policy: AuthorNamePolicy) -> FieldErrors {
        let failures = self.validate().err();
        let by_field = failures.as_ref().map(|f| f.field_errors()).unwrap_or_default();

        let mut errors = FieldErrors::new();
        for field in Self::FIELDS {
            if field == "author" && policy == AuthorNamePolicy::LettersOnly {
                if !is_letters_only_name(&self.author) {
                    errors.insert(field, AUTHOR_SYMBOLS.to_string());
                }
                continue;
            }

            let message = by_field
                .get(field)
                .and_then(|list| list.first())
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                });
            if let Some(message) = message {
                errors.insert(field, message);
            }
        }
        errors
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("title").with_message(Cow::Borrowed(TITLE_EMPTY)));
    }
    Ok(())
}

/// Decimal digits of any script (category Nd). Roman numerals and
/// fractions are not digits.
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

fn validate_author_name(author: &str) -> Result<(), ValidationError> {
    if author.is_empty() || author.chars().any(is_decimal_digit) {
        return Err(ValidationError::new("author").with_message(Cow::Borrowed(AUTHOR_INVALID)));
    }
    Ok(())
}

fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    if isbn.chars().count() != ISBN_LENGTH || !isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("isbn").with_message(Cow::Borrowed(ISBN_INVALID)));
    }
    Ok(())
}

fn is_letters_only_name(author: &str) -> bool {
    !author.is_empty()
        && author
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.'))
}
