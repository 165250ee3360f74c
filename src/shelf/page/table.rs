use crate::model::Book;

/// Label of the delete control in each row.
pub const DELETE_LABEL: &str = "X";

/// Where a click inside the table landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The delete control of the row for `isbn`.
    Delete { isbn: String },
    /// One of the text cells of a row.
    Cell { isbn: String, column: usize },
    /// Table chrome outside any row.
    Outside,
}

/// One rendered table row: three text cells plus a delete control.
///
/// The row carries its isbn as metadata, so lookups never depend on cell
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl BookRow {
    pub fn from_book(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }

    /// Cell texts in column order: title, author, isbn, delete control.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.author.as_str(),
            self.isbn.as_str(),
            DELETE_LABEL,
        ]
    }

    pub fn delete_target(&self) -> ClickTarget {
        ClickTarget::Delete {
            isbn: self.isbn.clone(),
        }
    }
}

/// The table body: rows in insertion order, no sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTable {
    rows: Vec<BookRow>,
}

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: &Book) {
        self.rows.push(BookRow::from_book(book));
    }

    /// Removes every row carrying `isbn`. Returns false if there was none.
    pub fn remove(&mut self, isbn: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.isbn != isbn);
        self.rows.len() != before
    }

    pub fn replace_all(&mut self, books: &[Book]) {
        self.rows = books.iter().map(BookRow::from_book).collect();
    }

    pub fn row(&self, isbn: &str) -> Option<&BookRow> {
        self.rows.iter().find(|row| row.isbn == isbn)
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The "no books" message shown under the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyState {
    visible: bool,
}

impl EmptyState {
    pub const MESSAGE: &'static str = "No books on the shelf yet.";

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
