//! Maud page templates for the web UI.

pub mod error;
pub mod keyword;
pub mod related;

pub use error::render_error_page;
pub use keyword::render_keyword_page;
pub use related::render_related_page;
