use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BookStore, KeyValueStorage};

pub fn run<K: KeyValueStorage>(store: &BookStore<K>) -> Result<CmdResult> {
    let books = store.get_books()?;
    Ok(CmdResult::default().with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::mem_storage::MemStorage;
    use crate::store::BookSlot;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = BookStore::new(BookSlot::new(MemStorage::new()));
        store.add_book(Book::new("Zed", "z", "9")).unwrap();
        store.add_book(Book::new("Alpha", "a", "1")).unwrap();

        let result = run(&store).unwrap();

        let titles: Vec<&str> = result
            .listed_books
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Zed", "Alpha"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = BookStore::new(BookSlot::new(MemStorage::new()));
        assert!(run(&store).unwrap().listed_books.is_empty());
    }
}
