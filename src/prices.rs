//! The price book: the only piece of persisted application state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Currency tag shown in front of stored price text.
pub const CURRENCY: &str = "PKR";

/// Mapping from product id to display price text. Absence of a key means
/// "no price set". Values are kept verbatim; nothing here parses or
/// normalizes numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceBook {
    entries: BTreeMap<String, String>,
}

impl PriceBook {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Store `raw` under `id`. An empty (after trimming) value unsets the
    /// price instead; anything else is kept as the literal text.
    pub fn set(&mut self, id: &str, raw: &str) {
        if raw.trim().is_empty() {
            self.entries.remove(id);
        } else {
            self.entries.insert(id.to_string(), raw.to_string());
        }
    }

    /// Drop every entry (the admin "reset saved prices" flow).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Price text for a product card: the stored literal with the currency
    /// tag, only when prices are publicly visible and one is set. `None`
    /// renders as the placeholder.
    pub fn display_price(&self, id: &str, show: bool) -> Option<String> {
        if !show {
            return None;
        }
        self.get(id).map(|price| format!("{CURRENCY} {price}"))
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn decode(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Load policy for the persisted blob: absent means empty, malformed
    /// means warn and fall back to empty. Never fails, never blocks
    /// rendering.
    pub fn from_persisted(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::decode(&raw) {
            Ok(mut book) => {
                book.retain_known();
                book
            }
            Err(err) => {
                tracing::warn!("failed to parse saved prices, starting empty: {err}");
                Self::default()
            }
        }
    }

    /// Remove entries whose key matches no catalog product.
    fn retain_known(&mut self) {
        let unknown: Vec<String> = self
            .entries
            .keys()
            .filter(|id| !catalog::is_known_id(id))
            .cloned()
            .collect();
        for id in unknown {
            tracing::warn!("discarding saved price for unknown product id {id:?}");
            self.entries.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    #[test]
    fn no_persisted_data_yields_empty_book() {
        let book = PriceBook::from_persisted(None);
        for product in PRODUCTS {
            assert_eq!(book.display_price(product.id, true), None);
        }
    }

    #[test]
    fn persisted_entry_is_loaded() {
        let book = PriceBook::from_persisted(Some(r#"{"p1":"250"}"#.to_string()));
        assert_eq!(book.get("p1"), Some("250"));
        assert_eq!(book.get("p2"), None);
    }

    #[test]
    fn malformed_persisted_data_falls_back_to_empty() {
        let book = PriceBook::from_persisted(Some("not-json".to_string()));
        assert_eq!(book, PriceBook::default());
    }

    #[test]
    fn unknown_ids_are_pruned_on_load() {
        let book = PriceBook::from_persisted(Some(r#"{"p1":"10","discontinued":"5"}"#.to_string()));
        assert_eq!(book.get("p1"), Some("10"));
        assert_eq!(book.get("discontinued"), None);
    }

    #[test]
    fn empty_value_clears_the_entry() {
        let mut book = PriceBook::default();
        for product in PRODUCTS {
            book.set(product.id, "120");
            assert_eq!(book.get(product.id), Some("120"));
            book.set(product.id, "");
            assert_eq!(book.get(product.id), None);
        }
    }

    #[test]
    fn whitespace_only_value_also_clears() {
        let mut book = PriceBook::default();
        book.set("p1", "99");
        book.set("p1", "   ");
        assert_eq!(book.get("p1"), None);
    }

    #[test]
    fn stored_text_is_kept_verbatim() {
        let mut book = PriceBook::default();
        book.set("p2", "249.99 (pack of 10)");
        assert_eq!(book.get("p2"), Some("249.99 (pack of 10)"));
        assert_eq!(
            book.display_price("p2", true),
            Some("PKR 249.99 (pack of 10)".to_string())
        );
    }

    #[test]
    fn hidden_prices_never_display() {
        let mut book = PriceBook::default();
        book.set("p1", "250");
        assert_eq!(book.display_price("p1", false), None);
        assert_eq!(book.display_price("p2", true), None);
    }

    #[test]
    fn clear_empties_the_book() {
        let mut book = PriceBook::default();
        book.set("p1", "10");
        book.set("p2", "20");
        book.clear();
        assert_eq!(book, PriceBook::default());
    }

    #[test]
    fn encode_decode_round_trip_keeps_only_saved_keys() {
        let mut book = PriceBook::default();
        book.set("p2", "100");

        let raw = book.encode().unwrap();
        assert_eq!(raw, r#"{"p2":"100"}"#);

        let reloaded = PriceBook::from_persisted(Some(raw));
        assert_eq!(reloaded.get("p2"), Some("100"));
        assert_eq!(reloaded, book);
    }
}
