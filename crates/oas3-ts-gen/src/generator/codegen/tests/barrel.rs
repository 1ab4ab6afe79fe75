use crate::generator::{
  ast::ClientRootNode,
  codegen::{EmissionPlan, EmitOptions, barrel::render_barrel},
};

#[test]
fn test_barrel_reexports_every_module() {
  let plan = EmissionPlan::from_tags(["pets", "store"]);
  let code = render_barrel(&plan, &ClientRootNode::default(), &EmitOptions::default());

  assert!(code.contains("import PetsApi from './pets.api';\nimport StoreApi from './store.api';\n"));
  assert!(code.contains("export { PetsApi, StoreApi };\n"));
  assert!(code.ends_with("export * from './http-client';\n"));
}

#[test]
fn test_barrel_names_for_leading_digit_tag() {
  let plan = EmissionPlan::from_tags(["2fa", "x"]);
  let code = render_barrel(&plan, &ClientRootNode::default(), &EmitOptions::default());

  assert!(code.contains("import _2faApi from './2fa.api';\n"));
  assert!(code.contains("export { _2faApi, XApi };\n"));
}

#[test]
fn test_barrel_without_modules_still_exports_transport() {
  let code = render_barrel(&EmissionPlan::default(), &ClientRootNode::default(), &EmitOptions::default());
  assert!(!code.contains("import "));
  assert!(!code.contains("export {"));
  assert!(code.contains("export * from './http-client';"));
}
