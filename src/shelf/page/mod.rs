//! # Presentation Layer
//!
//! [`ShelfPage`] is the UI state of the bookshelf: the add form, the table of
//! rows and the empty-state message. Clients feed it events and render
//! whatever it holds afterwards:
//!
//! - [`ShelfPage::on_ready`]: initial render from storage.
//! - [`ShelfPage::on_submit`]: the add flow, using the current form values.
//! - [`ShelfPage::on_table_click`]: the delete flow, acting only on a delete
//!   control.
//!
//! User feedback goes to a [`Notifier`] passed into each handler. The page
//! owns the [`ShelfApi`] and therefore the store handle.

pub mod notify;
pub mod table;

pub use notify::{Notifier, RecordingNotifier};
pub use table::{BookRow, BookTable, ClickTarget, EmptyState, DELETE_LABEL};

use crate::api::ShelfApi;
use crate::error::Result;
use crate::model::BookForm;
use crate::store::KeyValueStorage;
use log::debug;

pub struct ShelfPage<K: KeyValueStorage> {
    api: ShelfApi<K>,
    table: BookTable,
    empty_state: EmptyState,
    pub form: BookForm,
}

impl<K: KeyValueStorage> ShelfPage<K> {
    pub fn new(api: ShelfApi<K>) -> Self {
        Self {
            api,
            table: BookTable::new(),
            empty_state: EmptyState::default(),
            form: BookForm::default(),
        }
    }

    pub fn api(&self) -> &ShelfApi<K> {
        &self.api
    }

    pub fn table(&self) -> &BookTable {
        &self.table
    }

    pub fn empty_state(&self) -> &EmptyState {
        &self.empty_state
    }

    /// Renders one row per stored book and sets the empty-state message.
    pub fn on_ready(&mut self) -> Result<()> {
        let listed = self.api.list_books()?.listed_books;
        self.table.replace_all(&listed);
        self.empty_state.set_visible(listed.is_empty());
        debug!("page ready with {} rows", self.table.len());
        Ok(())
    }

    /// Handles a form submission. Returns true if a book was added.
    ///
    /// A rejected submission leaves the form, the table and the store as
    /// they were.
    pub fn on_submit(&mut self, notifier: &mut dyn Notifier) -> Result<bool> {
        let result = self.api.add_book(&self.form)?;

        let added = !result.affected_books.is_empty();
        if added {
            for book in &result.affected_books {
                self.table.append(book);
            }
            self.form.clear();
            self.refresh_empty_state()?;
        }

        for message in &result.messages {
            notifier.notify(message);
        }
        Ok(added)
    }

    /// Handles a click inside the table body. Returns true if a book was
    /// removed; clicks on anything but a delete control do nothing.
    ///
    /// The row stays in the table when the store cannot be updated.
    pub fn on_table_click(
        &mut self,
        target: &ClickTarget,
        notifier: &mut dyn Notifier,
    ) -> Result<bool> {
        let ClickTarget::Delete { isbn } = target else {
            return Ok(false);
        };

        let result = self.api.delete_book(isbn)?;
        self.table.remove(isbn);
        self.refresh_empty_state()?;

        for message in &result.messages {
            notifier.notify(message);
        }
        Ok(!result.affected_books.is_empty())
    }

    /// Shows the empty-state message iff the store holds no books.
    pub fn refresh_empty_state(&mut self) -> Result<()> {
        let empty = self.api.books()?.is_empty();
        self.empty_state.set_visible(empty);
        Ok(())
    }
}
