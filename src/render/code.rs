//! Resource key class rendering.

use crate::manifest::derive_resource_key;
use crate::models::FileNameEntry;

/// Parameters of the generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTemplate<'a> {
  /// Exported class name.
  pub class_name: &'a str,
  /// Module imported ahead of the class, typically the generated stylesheet.
  pub stylesheet_import: Option<&'a str>,
}

impl Default for CodeTemplate<'static> {
  fn default() -> Self {
    Self {
      class_name: "PropertyResource",
      stylesheet_import: None,
    }
  }
}

/// Render an exported class holding one static string field per entry.
pub fn render_code(entries: &[FileNameEntry], template: &CodeTemplate) -> String {
  let mut code = String::new();

  if let Some(import) = template.stylesheet_import {
    code.push_str(&format!("import '{import}';\n\n"));
  }

  code.push_str(&format!("export class {} {{ \n", template.class_name));
  for entry in entries {
    let key = derive_resource_key(entry);
    code.push_str(&format!(
      "\t public static {}:string='{}';\n",
      key.identifier, key.class_name
    ));
  }
  code.push_str("}\n");

  code
}
