//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything from `page` inward is UI agnostic. The CLI layer owns argument
//! parsing, data directory and logging setup, dispatch to the page event
//! handlers, and rendering of the page and its messages.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
