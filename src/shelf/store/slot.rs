use super::backend::KeyValueStorage;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default storage key holding the serialized book list.
pub const BOOKS_KEY: &str = "books";

/// What to do when the slot holds text that is not a valid book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptSlotPolicy {
    /// Surface [`ShelfError::CorruptSlot`] and leave the stored text alone.
    #[default]
    Fail,
    /// Log a warning and read the slot as an empty list.
    Empty,
}

impl fmt::Display for CorruptSlotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptSlotPolicy::Fail => f.write_str("fail"),
            CorruptSlotPolicy::Empty => f.write_str("empty"),
        }
    }
}

impl FromStr for CorruptSlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fail" => Ok(CorruptSlotPolicy::Fail),
            "empty" => Ok(CorruptSlotPolicy::Empty),
            other => Err(format!(
                "Invalid corrupt-slot policy '{}' (expected 'fail' or 'empty')",
                other
            )),
        }
    }
}

/// The durable slot: the whole book list stored as JSON under one key.
///
/// Every mutation rewrites the full list. There is no merge or partial
/// write, and nothing is cached between calls.
pub struct BookSlot<K: KeyValueStorage> {
    storage: K,
    key: String,
    on_corrupt: CorruptSlotPolicy,
}

impl<K: KeyValueStorage> BookSlot<K> {
    pub fn new(storage: K) -> Self {
        Self {
            storage,
            key: BOOKS_KEY.to_string(),
            on_corrupt: CorruptSlotPolicy::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptSlotPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn list_all(&self) -> Result<Vec<Book>> {
        let Some(text) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Book>>(&text) {
            Ok(books) => {
                debug!("slot '{}' holds {} books", self.key, books.len());
                Ok(books)
            }
            Err(source) => match self.on_corrupt {
                CorruptSlotPolicy::Fail => Err(ShelfError::CorruptSlot {
                    key: self.key.clone(),
                    source,
                }),
                CorruptSlotPolicy::Empty => {
                    warn!(
                        "slot '{}' is corrupt ({}); reading it as empty",
                        self.key, source
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    pub fn save_all(&self, books: &[Book]) -> Result<()> {
        let text = serde_json::to_string(books).map_err(ShelfError::Serialization)?;
        self.storage.set_item(&self.key, &text)
    }

    pub fn add_one(&self, book: Book) -> Result<()> {
        let mut books = self.list_all()?;
        books.push(book);
        self.save_all(&books)
    }

    /// Drops every record with `isbn` and returns how many were removed.
    pub fn remove_by_isbn(&self, isbn: &str) -> Result<usize> {
        let mut books = self.list_all()?;
        let before = books.len();
        books.retain(|book| book.isbn != isbn);
        self.save_all(&books)?;
        Ok(before - books.len())
    }
}
