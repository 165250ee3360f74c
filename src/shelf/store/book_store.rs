use super::backend::KeyValueStorage;
use super::slot::BookSlot;
use crate::error::Result;
use crate::model::Book;
use log::info;

/// Result of inserting a book into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The book was persisted.
    Added(Book),
    /// A record with the same isbn already exists; nothing was written.
    /// Carries the existing record.
    DuplicateIsbn(Book),
}

/// The record store: add, remove and list books.
///
/// Every call goes back to the slot, so two stores over the same storage
/// always agree. Isbn uniqueness is enforced here, so every caller gets it.
pub struct BookStore<K: KeyValueStorage> {
    slot: BookSlot<K>,
}

impl<K: KeyValueStorage> BookStore<K> {
    pub fn new(slot: BookSlot<K>) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &BookSlot<K> {
        &self.slot
    }

    pub fn get_books(&self) -> Result<Vec<Book>> {
        self.slot.list_all()
    }

    pub fn find(&self, isbn: &str) -> Result<Option<Book>> {
        Ok(self.get_books()?.into_iter().find(|book| book.isbn == isbn))
    }

    pub fn contains_isbn(&self, isbn: &str) -> Result<bool> {
        Ok(self.find(isbn)?.is_some())
    }

    pub fn add_book(&mut self, book: Book) -> Result<AddOutcome> {
        let mut books = self.slot.list_all()?;
        if let Some(existing) = books.iter().find(|b| b.isbn == book.isbn) {
            return Ok(AddOutcome::DuplicateIsbn(existing.clone()));
        }
        books.push(book.clone());
        self.slot.save_all(&books)?;
        info!("added book isbn={}", book.isbn);
        Ok(AddOutcome::Added(book))
    }

    /// Returns true iff a record with `isbn` was removed.
    pub fn remove_book(&mut self, isbn: &str) -> Result<bool> {
        let removed = self.slot.remove_by_isbn(isbn)?;
        if removed > 0 {
            info!("removed book isbn={}", isbn);
        }
        Ok(removed > 0)
    }
}
