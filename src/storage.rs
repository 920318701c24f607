//! Browser localStorage shim. The whole persistence layer is one key whose
//! value is the JSON-encoded price book, rewritten in full on every change.

use gloo::storage::{LocalStorage, Storage};

use crate::config::PRICES_STORAGE_KEY;
use crate::prices::PriceBook;

fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

fn write_raw(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        tracing::warn!("failed to write {key:?} to localStorage: {err:?}");
    }
}

/// Read the persisted price book. Absent or malformed data falls back to an
/// empty book.
pub fn load_price_book() -> PriceBook {
    PriceBook::from_persisted(read_raw(PRICES_STORAGE_KEY))
}

/// Mirror the full book to localStorage, overwriting any prior value. No
/// partial or merge semantics.
pub fn save_price_book(book: &PriceBook) {
    let Ok(raw) = book.encode() else { return };
    write_raw(PRICES_STORAGE_KEY, &raw);
}
