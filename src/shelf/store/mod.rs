//! # Storage Layer
//!
//! Storage is split in three pieces, leaf first:
//!
//! - [`backend::KeyValueStorage`]: raw key-value text storage. This is the
//!   only trait a new backend has to implement.
//!   - [`fs_storage::FsStorage`]: production backend, one file per key
//!     (`<data dir>/<key>.json`), atomic writes.
//!   - [`mem_storage::MemStorage`]: in-memory backend for tests, with write
//!     error simulation.
//! - [`slot::BookSlot`]: the durable slot. The whole book list serialized as
//!   a JSON array under a single key (`books`). Read-all / write-all, no
//!   caching.
//! - [`book_store::BookStore`]: the record store the rest of the crate talks
//!   to. Adds, removes and lists books, and rejects duplicate isbns.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── books.json      # [{"title": "...", "author": "...", "isbn": "..."}, ...]
//! └── config.json     # ShelfConfig
//! ```

pub mod backend;
pub mod book_store;
pub mod fs_storage;
pub mod mem_storage;
pub mod slot;

pub use backend::KeyValueStorage;
pub use book_store::{AddOutcome, BookStore};
pub use slot::{BookSlot, CorruptSlotPolicy, BOOKS_KEY};
