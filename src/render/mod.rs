//! Text templates for the generated stylesheet and class source.

mod code;
mod css;

pub use code::{CodeTemplate, render_code};
pub use css::{CssTemplate, render_css};
