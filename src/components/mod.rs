//! Maud HTML template components for the web UI.
//!
//! - `layout`: page skeleton and navigation
//! - `alert`: error and info messages
//! - `form`: form, input, select and label components
//! - `table`: result tables
//! - `media`: embedded player and channel avatar

pub mod alert;
pub mod form;
pub mod layout;
pub mod media;
pub mod table;

pub use alert::{Alert, AlertVariant};
pub use form::{Form, FormGroup, Input, Select};
pub use layout::{BaseLayout, NavItem};
pub use media::{EmbedPlayer, ProfileImage};
pub use table::{Table, TableRow, TableVariant};
