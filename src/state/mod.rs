pub mod requests;
pub mod theme;

pub use requests::RequestSequencer;
pub use theme::{provide_theme_context, use_theme, Theme};
