//! Load/save/reset interface over persisted storage for the content
//! document.
//!
//! The store owns a single key in an injected [`KeyValueStorage`] surface.
//! Reads merge the stored value over the canonical defaults; writes encode
//! the whole document. Storage failures never reach the caller: they are
//! logged as warnings and degraded to defaults (reads) or ignored (writes),
//! so the application keeps running regardless of storage availability.
//!
//! # Merge semantics
//!
//! - top-level keys of the stored object overwrite the default keys;
//! - `images` is itself shallow-merged, so an unset slot keeps its default;
//! - `products` is replaced wholesale when present. Stored product lists
//!   are never reconciled per-element with the default list; if the
//!   default list changes shape, old stored lists stay as saved.

use crate::{
    content::document::ContentDocument,
    log,
    storage::KeyValueStorage,
};
use serde_json::Value;

/// The one fixed key the document is persisted under.
pub const STORAGE_KEY: &str = "wisemencc-content";

/// Single source of truth for the [`ContentDocument`].
pub struct ContentStore {
    storage: Box<dyn KeyValueStorage>,
}

impl ContentStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the stored document, merged over defaults.
    ///
    /// Returns a fresh default document when nothing is stored, when the
    /// storage surface fails, or when the stored value does not decode.
    pub fn load(&self) -> ContentDocument {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ContentDocument::default(),
            Err(err) => {
                log!("store"; "failed to read stored content: {err}");
                return ContentDocument::default();
            }
        };

        let stored: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log!("store"; "stored content is malformed, using defaults: {err}");
                return ContentDocument::default();
            }
        };

        let merged = overlay_defaults(default_value(), &stored);
        match serde_json::from_value(merged) {
            Ok(doc) => doc,
            Err(err) => {
                log!("store"; "stored content does not fit the document, using defaults: {err}");
                ContentDocument::default()
            }
        }
    }

    /// Encode and persist the document.
    ///
    /// Write failures are logged and swallowed; the caller's document stays
    /// valid in memory for the rest of the session.
    pub fn save(&self, doc: &ContentDocument) {
        let encoded = match serde_json::to_string(doc) {
            Ok(encoded) => encoded,
            Err(err) => {
                log!("store"; "failed to encode content: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(STORAGE_KEY, &encoded) {
            log!("store"; "failed to save content: {err}");
        }
    }

    /// Remove the stored value and return a fresh default document.
    ///
    /// Does not save; the next `load` with no intervening `save` yields
    /// the defaults again.
    pub fn reset(&self) -> ContentDocument {
        if let Err(err) = self.storage.remove(STORAGE_KEY) {
            log!("store"; "failed to clear stored content: {err}");
        }
        ContentDocument::default()
    }
}

/// The default document as a JSON value.
fn default_value() -> Value {
    serde_json::to_value(ContentDocument::default()).unwrap_or(Value::Null)
}

/// Overlay a stored object onto the defaults.
///
/// Top-level shallow, except `images` which merges one level deep. Keys
/// that only exist in the stored object are carried along untouched;
/// decoding back into [`ContentDocument`] ignores them.
pub fn overlay_defaults(defaults: Value, stored: &Value) -> Value {
    let mut merged = defaults;
    let (Some(base), Some(patch)) = (merged.as_object_mut(), stored.as_object()) else {
        return merged;
    };

    for (key, value) in patch {
        if key == "images" {
            match (base.get_mut("images").and_then(Value::as_object_mut), value.as_object()) {
                (Some(base_images), Some(patch_images)) => {
                    for (slot, url) in patch_images {
                        base_images.insert(slot.clone(), url.clone());
                    }
                }
                _ => {
                    base.insert(key.clone(), value.clone());
                }
            }
        } else {
            base.insert(key.clone(), value.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use serde_json::json;

    /// Storage surface that fails every operation.
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::io(key, std::io::Error::other("disk on fire")))
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::io(key, std::io::Error::other("disk on fire")))
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::io(key, std::io::Error::other("disk on fire")))
        }
    }

    fn memory_store() -> ContentStore {
        ContentStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_without_stored_value_returns_defaults() {
        assert_eq!(memory_store().load(), ContentDocument::default());
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let store = memory_store();
        let mut doc = ContentDocument::default();
        doc.hero_tagline = "New Tagline".into();
        store.save(&doc);
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_load_is_idempotent_after_save() {
        let store = memory_store();
        store.save(&store.load());
        let first = store.load();
        store.save(&first);
        assert_eq!(store.load(), first);
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage.seed(STORAGE_KEY, "{not json");
        let store = ContentStore::new(Box::new(storage));
        assert_eq!(store.load(), ContentDocument::default());
    }

    #[test]
    fn test_wrong_shape_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        // Decodes as JSON but the products entry has the wrong type.
        storage.seed(STORAGE_KEY, r#"{"products": "not a list"}"#);
        let store = ContentStore::new(Box::new(storage));
        assert_eq!(store.load(), ContentDocument::default());
    }

    #[test]
    fn test_broken_storage_degrades_to_defaults() {
        let store = ContentStore::new(Box::new(BrokenStorage));
        assert_eq!(store.load(), ContentDocument::default());
        // save and reset must not panic either
        store.save(&ContentDocument::default());
        assert_eq!(store.reset(), ContentDocument::default());
    }

    #[test]
    fn test_reset_then_load_yields_defaults() {
        let store = memory_store();
        let mut doc = ContentDocument::default();
        doc.logo_title = "Other Brand".into();
        store.save(&doc);
        assert_eq!(store.reset(), ContentDocument::default());
        assert_eq!(store.load(), ContentDocument::default());
    }

    #[test]
    fn test_partial_store_backfills_defaults() {
        let storage = MemoryStorage::new();
        storage.seed(STORAGE_KEY, r#"{"heroTagline": "New Tagline"}"#);
        let store = ContentStore::new(Box::new(storage));

        let doc = store.load();
        assert_eq!(doc.hero_tagline, "New Tagline");
        assert_eq!(doc.shop_title, "Shop Our Beans");
        assert_eq!(doc.products.len(), 3);
    }

    #[test]
    fn test_images_merge_is_key_wise() {
        let storage = MemoryStorage::new();
        storage.seed(STORAGE_KEY, r#"{"images": {"heroBackground": "X"}}"#);
        let store = ContentStore::new(Box::new(storage));

        let doc = store.load();
        let defaults = crate::content::document::SiteImages::default();
        assert_eq!(doc.images.hero_background, "X");
        assert_eq!(doc.images.equation_coffee, defaults.equation_coffee);
        assert_eq!(doc.images.equation_mission, defaults.equation_mission);
        assert_eq!(doc.images.footer_background, defaults.footer_background);
    }

    #[test]
    fn test_stored_products_replace_wholesale() {
        let storage = MemoryStorage::new();
        storage.seed(
            STORAGE_KEY,
            r#"{"products": [{"id": 9, "name": "Kenya", "roast": "Light Roast",
                "price": 18.5, "description": "Berry-forward.", "image": ""}]}"#,
        );
        let store = ContentStore::new(Box::new(storage));

        let doc = store.load();
        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.products[0].name, "Kenya");
    }

    #[test]
    fn test_unknown_stored_keys_are_ignored() {
        let storage = MemoryStorage::new();
        storage.seed(STORAGE_KEY, r#"{"heroTagline": "T", "somethingElse": 42}"#);
        let store = ContentStore::new(Box::new(storage));

        let doc = store.load();
        assert_eq!(doc.hero_tagline, "T");
    }

    #[test]
    fn test_overlay_defaults_non_object_stored() {
        let defaults = default_value();
        let merged = overlay_defaults(defaults.clone(), &json!([1, 2, 3]));
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_overlay_defaults_images_wrong_type_overwrites() {
        // A stored `images` that is not an object replaces the slot map;
        // decoding then fails and load() falls back to full defaults.
        let merged = overlay_defaults(default_value(), &json!({"images": 7}));
        assert_eq!(merged["images"], json!(7));
    }
}
