use serde_json::Value;

use crate::generator::document::OpenApiDocument;

pub(super) const PETSTORE: &str = include_str!("../../../fixtures/petstore.json");

pub(super) fn parse_value(json: &str) -> Value {
  serde_json::from_str(json).expect("failed to parse test spec")
}

pub(super) fn parse_document(json: &str) -> OpenApiDocument {
  OpenApiDocument::from_value(&parse_value(json)).expect("failed to build document view")
}

pub(super) fn petstore() -> OpenApiDocument {
  parse_document(PETSTORE)
}
