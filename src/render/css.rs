//! Themed stylesheet rendering.

use crate::manifest::derive_resource_key;
use crate::models::FileNameEntry;

/// Image locations substituted into each themed rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssTemplate<'a> {
  /// Prefix of images shown on dark backgrounds (`vs-dark` and `hc-black`).
  pub light_url_prefix: &'a str,
  /// Prefix of images shown on the light background (`vs`).
  pub dark_url_prefix: &'a str,
}

impl Default for CssTemplate<'static> {
  fn default() -> Self {
    Self {
      light_url_prefix: "light/component",
      dark_url_prefix: "dark/component",
    }
  }
}

/// Render one rule block per entry, in entry order.
///
/// Entries sharing a class name produce conflicting blocks; callers decide beforehand whether
/// that is acceptable.
pub fn render_css(entries: &[FileNameEntry], template: &CssTemplate) -> String {
  let light = template.light_url_prefix.trim_end_matches('/');
  let dark = template.dark_url_prefix.trim_end_matches('/');

  entries
    .iter()
    .map(|entry| {
      let key = derive_resource_key(entry).class_name;
      let light_url = escape_css_string(&format!("{light}/{entry}"));
      let dark_url = escape_css_string(&format!("{dark}/{entry}"));
      format!(
        r#"
.vs-dark .{key},
.hc-black .{key}{{
	background-image: url("{light_url}");
}}

.vs .{key}{{
	background-image: url("{dark_url}");
}}
"#
      )
    })
    .collect()
}

/// Escape a value for use inside a double-quoted CSS string.
fn escape_css_string(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '"' => escaped.push_str("\\\""),
      '\\' => escaped.push_str("\\\\"),
      '\n' => escaped.push_str("\\a "),
      '\r' => escaped.push_str("\\d "),
      _ => escaped.push(c),
    }
  }
  escaped
}
