mod client;
mod documentation;
mod parsed_path;

#[cfg(test)]
mod tests;

pub use client::ClientRootNode;
pub use documentation::Documentation;
pub use parsed_path::{ParsedPath, PathPart};
use strum::{AsRefStr, Display};

use crate::generator::document::HttpMethod;

/// Members of the options object a generated method may accept, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ArgKind {
  PathParams,
  Query,
  Headers,
  Body,
}

/// Arguments of one generated method. Empty buckets are omitted from the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodArgs {
  pub path_params: Vec<String>,
  pub query: Vec<String>,
  pub headers: Vec<String>,
  pub body: Option<BodyArg>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyArg {
  pub required: bool,
}

impl MethodArgs {
  /// Present argument kinds, always ordered `pathParams`, `query`, `headers`, `body`.
  #[must_use]
  pub fn kinds(&self) -> Vec<ArgKind> {
    [
      (!self.path_params.is_empty()).then_some(ArgKind::PathParams),
      (!self.query.is_empty()).then_some(ArgKind::Query),
      (!self.headers.is_empty()).then_some(ArgKind::Headers),
      self.body.map(|_| ArgKind::Body),
    ]
    .into_iter()
    .flatten()
    .collect()
  }

  /// Whether callers must pass the options object at all.
  #[must_use]
  pub fn requires_options(&self) -> bool {
    !self.path_params.is_empty() || self.body.is_some_and(|body| body.required)
  }
}

/// One method of a generated API class.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ApiMethod {
  pub name: String,
  /// The function name this method was derived from, when `name` had to differ from it.
  pub renamed_from: Option<String>,
  pub http_method: HttpMethod,
  pub path: ParsedPath,
  /// The raw path template, kept for documentation.
  pub path_template: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub args: MethodArgs,
}

/// One generated API module: a single default-exported class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiModule {
  pub class_name: String,
  pub methods: Vec<ApiMethod>,
}

impl ApiModule {
  #[must_use]
  pub fn uses_query(&self) -> bool {
    self.methods.iter().any(|method| !method.args.query.is_empty())
  }
}
