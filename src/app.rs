//! Application state: the loaded document, the transient view flags, and
//! the editor, with one handler per user action.
//!
//! Every transition is synchronous and completes inside the triggering
//! request. The document is single-writer (the one editor) and edits go
//! through the store immediately, so the in-memory snapshot and the
//! persisted value only diverge when a write fails (which the store logs
//! and swallows).

use crate::{
    content::{ContentDocument, ContentStore, ImageSlot},
    editor::{self, AdminState, EditError, ProductField, Section, Tab},
};

/// Nav style flips once the page is scrolled past this many pixels.
pub const SCROLL_THRESHOLD_PX: u32 = 50;

/// Transient view flags. Never persisted; reset by restarting the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Past the scroll threshold; switches the nav to its solid style.
    pub scrolled: bool,
    /// Mobile menu open. Closed again by any navigation-link press.
    pub menu_open: bool,
    /// Visual counter only; increments and nothing else.
    pub cart_count: u32,
    /// Editor overlay visible.
    pub admin_open: bool,
}

impl UiState {
    pub fn set_scroll_offset(&mut self, y: u32) {
        self.scrolled = y > SCROLL_THRESHOLD_PX;
    }
}

/// The running application.
pub struct App {
    store: ContentStore,
    pub content: ContentDocument,
    pub ui: UiState,
    pub admin: AdminState,
}

impl App {
    /// Load the document once at session start from the injected store.
    pub fn new(store: ContentStore) -> Self {
        let content = store.load();
        Self {
            store,
            content,
            ui: UiState::default(),
            admin: AdminState::default(),
        }
    }

    // ------------------------------------------------------------------
    // Page actions
    // ------------------------------------------------------------------

    pub fn add_to_cart(&mut self) {
        self.ui.cart_count += 1;
    }

    pub fn toggle_menu(&mut self) {
        self.ui.menu_open = !self.ui.menu_open;
    }

    /// A navigation-link press closes the mobile menu.
    pub fn navigate(&mut self) {
        self.ui.menu_open = false;
    }

    pub fn open_admin(&mut self) {
        self.ui.admin_open = true;
        self.ui.menu_open = false;
    }

    pub fn close_admin(&mut self) {
        self.ui.admin_open = false;
    }

    // ------------------------------------------------------------------
    // Editor actions
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        self.admin.select_tab(tab);
    }

    pub fn toggle_section(&mut self, section: Section) {
        self.admin.toggle_section(section);
    }

    /// Set one scalar text field and persist the new snapshot.
    pub fn update_field(&mut self, key: &str, value: &str) -> Result<(), EditError> {
        self.content = editor::apply_field(&self.content, key, value)?;
        self.store.save(&self.content);
        Ok(())
    }

    /// Replace one field of the product at `index` and persist.
    pub fn update_product(
        &mut self,
        index: usize,
        field: ProductField,
        value: &str,
    ) -> Result<(), EditError> {
        self.content = editor::apply_product(&self.content, index, field, value)?;
        self.store.save(&self.content);
        Ok(())
    }

    /// Replace one image slot and persist.
    pub fn update_image(&mut self, slot: ImageSlot, value: &str) {
        self.content = editor::apply_image(&self.content, slot, value);
        self.store.save(&self.content);
    }

    // ------------------------------------------------------------------
    // Reset flow
    // ------------------------------------------------------------------

    /// Arm the confirmation step; nothing is cleared yet.
    pub fn request_reset(&mut self) {
        self.admin.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.admin.confirm_reset = false;
    }

    /// Clear stored content and replace the displayed document with the
    /// defaults. Tab and section selection survive the reset.
    pub fn confirm_reset(&mut self) {
        self.content = self.store.reset();
        self.admin.confirm_reset = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn app() -> App {
        App::new(ContentStore::new(Box::new(MemoryStorage::new())))
    }

    #[test]
    fn test_scroll_threshold() {
        let mut ui = UiState::default();
        ui.set_scroll_offset(0);
        assert!(!ui.scrolled);
        ui.set_scroll_offset(50);
        assert!(!ui.scrolled);
        ui.set_scroll_offset(51);
        assert!(ui.scrolled);
        ui.set_scroll_offset(10);
        assert!(!ui.scrolled);
    }

    #[test]
    fn test_cart_only_increments() {
        let mut app = app();
        app.add_to_cart();
        app.add_to_cart();
        assert_eq!(app.ui.cart_count, 2);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut app = app();
        app.toggle_menu();
        assert!(app.ui.menu_open);
        app.navigate();
        assert!(!app.ui.menu_open);
    }

    #[test]
    fn test_open_admin_closes_menu() {
        let mut app = app();
        app.toggle_menu();
        app.open_admin();
        assert!(app.ui.admin_open);
        assert!(!app.ui.menu_open);
    }

    #[test]
    fn test_update_field_persists() {
        let mut app = app();
        app.update_field("heroTagline", "New Tagline").unwrap();
        assert_eq!(app.content.hero_tagline, "New Tagline");
        // A fresh load through the same store sees the edit.
        assert_eq!(app.store.load().hero_tagline, "New Tagline");
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut app = app();
        app.update_field("logoTitle", "Other").unwrap();

        app.request_reset();
        assert!(app.admin.confirm_reset);
        // Still edited until confirmed.
        assert_eq!(app.content.logo_title, "Other");

        app.cancel_reset();
        assert!(!app.admin.confirm_reset);
        assert_eq!(app.content.logo_title, "Other");

        app.request_reset();
        app.confirm_reset();
        assert_eq!(app.content, ContentDocument::default());
        assert!(!app.admin.confirm_reset);
    }

    #[test]
    fn test_edits_survive_restart_on_disk() {
        use crate::storage::FileStorage;

        let dir = tempfile::tempdir().unwrap();
        let open = || {
            App::new(ContentStore::new(Box::new(FileStorage::new(dir.path()))))
        };

        let mut app = open();
        app.update_field("heroTagline", "Fresh Roast Daily").unwrap();
        app.update_product(0, ProductField::Price, "24.50").unwrap();
        drop(app);

        let app = open();
        assert_eq!(app.content.hero_tagline, "Fresh Roast Daily");
        assert_eq!(app.content.products[0].price, 24.5);
        // Untouched fields still carry the defaults.
        let defaults = ContentDocument::default();
        assert_eq!(app.content.products.len(), 3);
        assert_eq!(app.content.products[1], defaults.products[1]);
        assert_eq!(app.content.products[2], defaults.products[2]);
        assert_eq!(app.content.logo_title, defaults.logo_title);
    }

    #[test]
    fn test_reset_keeps_editor_selection() {
        let mut app = app();
        app.select_tab(Tab::Images);
        app.toggle_section(Section::Footer);

        app.request_reset();
        app.confirm_reset();

        assert_eq!(app.admin.tab, Tab::Images);
        assert_eq!(app.admin.expanded, Some(Section::Footer));
    }
}
