//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for shelf operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds
//! no business logic and does no terminal I/O.
//!
//! Configuration commands work on a directory rather than a store and are
//! called directly from [`crate::commands::config`].
//!
//! `ShelfApi<K: KeyValueStorage>` owns its [`BookStore`] explicitly, so there
//! is no ambient storage handle anywhere in the crate:
//! - Production: `ShelfApi<FsStorage>`
//! - Testing: `ShelfApi<MemStorage>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::{Book, BookForm};
use crate::store::{BookSlot, BookStore, KeyValueStorage};

pub struct ShelfApi<K: KeyValueStorage> {
    store: BookStore<K>,
}

impl<K: KeyValueStorage> ShelfApi<K> {
    pub fn new(store: BookStore<K>) -> Self {
        Self { store }
    }

    /// Builds the store over `storage` using the slot key and corrupt-slot
    /// policy from `config`.
    pub fn from_config(storage: K, config: &ShelfConfig) -> Self {
        let slot = BookSlot::new(storage)
            .with_key(config.slot_key.clone())
            .with_corrupt_policy(config.on_corrupt);
        Self::new(BookStore::new(slot))
    }

    pub fn add_book(&mut self, form: &BookForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, form)
    }

    pub fn delete_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, isbn)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn books(&self) -> Result<Vec<Book>> {
        self.store.get_books()
    }

    pub fn store(&self) -> &BookStore<K> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_storage::MemStorage;
    use crate::store::CorruptSlotPolicy;

    fn api() -> ShelfApi<MemStorage> {
        ShelfApi::from_config(MemStorage::new(), &ShelfConfig::default())
    }

    #[test]
    fn add_dispatches_to_store() {
        let mut api = api();
        let result = api
            .add_book(&BookForm::new("Dune", "Frank Herbert", "123"))
            .unwrap();
        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(api.books().unwrap().len(), 1);
    }

    #[test]
    fn delete_dispatches_to_store() {
        let mut api = api();
        api.add_book(&BookForm::new("Dune", "Frank Herbert", "123"))
            .unwrap();
        let result = api.delete_book("123").unwrap();
        assert_eq!(result.affected_books.len(), 1);
        assert!(api.list_books().unwrap().listed_books.is_empty());
    }

    #[test]
    fn from_config_applies_key_and_policy() {
        let config = ShelfConfig {
            slot_key: "library".to_string(),
            on_corrupt: CorruptSlotPolicy::Empty,
        };
        let storage = MemStorage::new();
        storage.put_raw("library", "garbage");
        let api = ShelfApi::from_config(storage, &config);

        assert_eq!(api.store().slot().key(), "library");
        assert!(api.books().unwrap().is_empty());
    }
}
