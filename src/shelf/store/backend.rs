use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::slot::BookSlot`] handles the "what" (the serialized book list).
/// Values are opaque text; a missing key is `Ok(None)`, not an error.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
