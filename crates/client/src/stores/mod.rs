//! Global stores for application state.

pub mod favorites;
pub mod theme;
pub mod toasts;

pub use favorites::{add_favorite, is_favorite, remove_favorite, FAVORITES};
pub use theme::{apply_document_theme, set_theme, Theme, THEME};
pub use toasts::{dismiss, notify_error, notify_success, Toast, ToastVariant, TOASTS};
