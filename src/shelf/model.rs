use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single book on the shelf. `isbn` is the record's unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

/// The three input fields of the add form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Isbn,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Title, Field::Author, Field::Isbn]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Isbn => "isbn",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("field '{0}' is empty")]
    EmptyField(Field),
}

/// Raw values of the add form.
///
/// A field counts as empty only when it is the empty string; whitespace is
/// kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Isbn => &self.isbn,
        }
    }

    pub fn validate(&self) -> Result<Book, FormError> {
        if let Some(field) = Field::all()
            .iter()
            .find(|field| self.value(**field).is_empty())
        {
            return Err(FormError::EmptyField(*field));
        }
        Ok(Book::new(&self.title, &self.author, &self.isbn))
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.isbn.clear();
    }

    pub fn is_blank(&self) -> bool {
        Field::all().iter().all(|field| self.value(*field).is_empty())
    }
}
