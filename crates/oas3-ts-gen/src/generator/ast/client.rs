use crate::generator::document::OpenApiDocument;

/// Document-level facts shared by every generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRootNode {
  pub title: Option<String>,
  pub version: Option<String>,
  pub base_url: String,
}

impl From<&OpenApiDocument> for ClientRootNode {
  fn from(value: &OpenApiDocument) -> Self {
    Self {
      title: value.title.clone().filter(|title| !title.is_empty()),
      version: value.version.clone().filter(|version| !version.is_empty()),
      base_url: value.base_url.clone().unwrap_or_default(),
    }
  }
}
