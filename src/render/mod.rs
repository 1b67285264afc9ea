//! Presentational layer: pure functions that build HTML for screens and
//! the overview grid.
//!
//! Rendering is side-effect free; the web router binds these functions to
//! URL paths, and downstream screenshot capture tooling photographs the
//! served pages.

pub mod overview;
pub mod page;
pub mod screen;

pub use overview::{render_overview, DisplayState, DEFAULT_SCALE, SCALE_OPTIONS};
pub use page::{escape_html, html_page};
pub use screen::render_screen;
