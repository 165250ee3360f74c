//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! It drives a [`shelf::page::ShelfPage`] the way a browser would drive a
//! page: every invocation renders the page from storage (`on_ready`), then
//! fires at most one event.
//!
//! - `shelf` / `shelf list`: render the table, or the empty-state message.
//! - `shelf add --title .. --author .. --isbn ..`: fill the form and submit.
//! - `shelf delete <isbn>`: click the delete control of that row.
//! - `shelf config [key] [value]`: show or set configuration.
//!
//! User-input rejections are printed as messages and exit with status 0.
//! Storage and config failures exit with status 1.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
