use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookStore, KeyValueStorage};

pub const MSG_REMOVED: &str = "Book removed successfully!";

pub fn run<K: KeyValueStorage>(store: &mut BookStore<K>, isbn: &str) -> Result<CmdResult> {
    let existing = store.find(isbn)?;
    let removed = store.remove_book(isbn)?;

    match existing {
        Some(book) if removed => Ok(CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(CmdMessage::success(MSG_REMOVED))),
        _ => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No book with ISBN {} on the shelf",
            isbn
        )))),
    }
}
