//! Stateless HTML rendering of the site and the editor overlay.

pub mod admin;
pub mod html;
pub mod page;

pub use page::render_page;
