pub mod formatting;
pub mod status;
pub mod types;
pub mod updates;

pub use status::set_status;
pub use types::StatusLevel;
pub use updates::{render_filter_panel, render_listing, render_suggestions};
