use itertools::Itertools;

use super::{
  EmissionPlan, EmitOptions, TRANSPORT_MODULE,
  writer::{SourceWriter, string_literal},
  write_header,
};
use crate::generator::ast::ClientRootNode;

/// Renders `index.ts`: every planned class re-exported under its class name, plus the
/// transport helper's exports.
#[must_use]
pub fn render_barrel(plan: &EmissionPlan, root: &ClientRootNode, options: &EmitOptions) -> String {
  let mut w = SourceWriter::new();
  write_header(&mut w, root, options);

  for (_, module) in plan.iter() {
    w.line(format!(
      "import {} from {};",
      module.class_name,
      string_literal(&format!("./{}", module.module))
    ));
  }

  if !plan.is_empty() {
    w.blank();
    let names = plan.iter().map(|(_, module)| module.class_name.as_str()).join(", ");
    w.line(format!("export {{ {names} }};"));
  }

  w.line(format!(
    "export * from {};",
    string_literal(&format!("./{TRANSPORT_MODULE}"))
  ));
  w.finish()
}
