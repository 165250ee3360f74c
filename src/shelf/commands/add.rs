use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookForm;
use crate::store::{AddOutcome, BookStore, KeyValueStorage};

pub const MSG_EMPTY_FIELDS: &str = "Please fill in all fields";
pub const MSG_DUPLICATE_ISBN: &str = "A book with this ISBN already exists!";
pub const MSG_ADDED: &str = "Book added successfully!";

/// Validates `form` and stores the book it describes.
///
/// Rejections (empty field, duplicate isbn) are reported as error messages
/// with no affected books; the store is left untouched.
pub fn run<K: KeyValueStorage>(store: &mut BookStore<K>, form: &BookForm) -> Result<CmdResult> {
    let book = match form.validate() {
        Ok(book) => book,
        Err(_) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(MSG_EMPTY_FIELDS)))
        }
    };

    match store.add_book(book)? {
        AddOutcome::Added(book) => Ok(CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(CmdMessage::success(MSG_ADDED))),
        AddOutcome::DuplicateIsbn(_) => {
            Ok(CmdResult::default().with_message(CmdMessage::error(MSG_DUPLICATE_ISBN)))
        }
    }
}
