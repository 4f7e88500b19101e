//! Diagram source handling: the versioned buffer, themes and built-in examples.

mod buffer;
pub mod examples;
pub mod theme;

pub use buffer::{version_caption, DiagramBuffer};
pub use examples::{find_example, DiagramExample, DEFAULT_DIAGRAM, EXAMPLES};
pub use theme::{apply_theme, has_inline_theme, is_known_theme, RandomTheme, ThemeSelection, THEMES};
