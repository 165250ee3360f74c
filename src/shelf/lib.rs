//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic bookshelf library** with a small CLI client on
//! top. Users add and remove book records (title, author, isbn); the records
//! persist as one JSON list under a single storage key and are shown as the
//! rows of a table.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the page, prints messages      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page (page/)                                               │
//! │  - Form, table rows, empty-state message                    │
//! │  - Event handlers: ready, submit, table click               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Add / delete / list flows, returning CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore → BookSlot → KeyValueStorage                   │
//! │  - FsStorage (production), MemStorage (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `page` inward, code never writes to stdout/stderr and never exits
//! the process. User feedback flows out as [`commands::CmdMessage`]s through
//! a [`page::Notifier`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade over commands
//! - [`commands`]: Add, delete, list and config flows
//! - [`store`]: Storage abstraction, durable slot and record store
//! - [`page`]: Presentation state and event handlers
//! - [`model`]: `Book` and `BookForm`
//! - [`config`]: Configuration file
//! - [`init`]: Data directory resolution and context setup
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod page;
pub mod store;
