//! Content document and its persistence.

pub mod document;
pub mod store;

pub use document::{ContentDocument, ImageSlot, Product, SiteImages};
pub use store::{ContentStore, STORAGE_KEY};
