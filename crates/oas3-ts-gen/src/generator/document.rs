//! Read-only view of the parts of an OpenAPI document the generator consumes.
//!
//! Only `info.title`, `info.version`, the first server URL and the path table are read. References are
//! never resolved and no validation beyond shape checks is performed.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use crate::error::{GenerateError, GenerateResult};

/// HTTP verbs that carry operation semantics inside a path item, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Post,
  Put,
  Patch,
  Delete,
  Options,
  Head,
}

impl HttpMethod {
  /// Parses a path-item key; anything that is not one of the seven verbs yields `None`.
  #[must_use]
  pub fn from_key(key: &str) -> Option<Self> {
    key.parse().ok()
  }

  #[must_use]
  pub fn upper(self) -> String {
    self.as_ref().to_uppercase()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Cookie,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(rename = "in", default)]
  pub location: Option<ParameterLocation>,
}

impl Parameter {
  /// Declared name, treating an empty string as absent.
  #[must_use]
  pub fn declared_name(&self) -> Option<&str> {
    self.name.as_deref().filter(|name| !name.is_empty())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  #[serde(default)]
  pub request_body: Option<Value>,
}

impl Operation {
  #[must_use]
  pub fn has_request_body(&self) -> bool {
    self.request_body.as_ref().is_some_and(|body| !body.is_null())
  }

  /// `requestBody.required`, false when absent or not an object.
  #[must_use]
  pub fn request_body_required(&self) -> bool {
    self
      .request_body
      .as_ref()
      .and_then(|body| body.get("required"))
      .and_then(Value::as_bool)
      .unwrap_or(false)
  }
}

/// One path entry: its operations in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
  pub operations: Vec<(HttpMethod, Operation)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenApiDocument {
  pub title: Option<String>,
  pub version: Option<String>,
  /// `servers[0].url`, when declared.
  pub base_url: Option<String>,
  pub paths: IndexMap<String, PathItem>,
}

impl OpenApiDocument {
  /// Builds the view from a parsed JSON value.
  ///
  /// Non-object path items and non-method keys (shared `parameters`, `summary`,
  /// `servers`, `$ref`, extensions) are skipped.
  pub fn from_value(value: &Value) -> GenerateResult<Self> {
    let info = value.get("info");
    let info_str = |key: &str| info.and_then(|info| info.get(key)).and_then(Value::as_str).map(str::to_string);

    let mut paths = IndexMap::new();
    if let Some(table) = value.get("paths").and_then(Value::as_object) {
      for (path_key, item) in table {
        let Some(item) = item.as_object() else {
          continue;
        };

        let mut operations = vec![];
        for (key, raw) in item {
          let Some(method) = HttpMethod::from_key(key) else {
            continue;
          };
          let operation =
            Operation::deserialize(raw).map_err(|source| GenerateError::InvalidOperation {
              method: method.upper(),
              path: path_key.clone(),
              source,
            })?;
          operations.push((method, operation));
        }

        paths.insert(path_key.clone(), PathItem { operations });
      }
    }

    Ok(Self {
      title: info_str("title"),
      version: info_str("version"),
      base_url: value
        .get("servers")
        .and_then(|servers| servers.get(0))
        .and_then(|server| server.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string),
      paths,
    })
  }

  /// Every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .operations
        .iter()
        .map(move |(method, operation)| (path.as_str(), *method, operation))
    })
  }
}
