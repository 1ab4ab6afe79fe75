use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
  generator::document::{HttpMethod, OpenApiDocument, Operation, Parameter, ParameterLocation},
  naming::operations::{function_name, unique_param_names},
};

/// Bucket receiving operations that declare no tags.
pub const DEFAULT_TAG: &str = "default";

/// One operation as it will appear inside one tag module.
///
/// An operation listed under N tags yields N entries that share the same
/// underlying [`Operation`] and the same `fn_name`.
#[derive(Debug, Clone)]
pub struct IndexedOperation {
  /// Sanitized function name for the generated method.
  pub fn_name: String,
  /// The HTTP method for this operation.
  pub method: HttpMethod,
  /// The path template exactly as written in the document (e.g. `/users/{id}`).
  pub path: String,
  /// The original operation definition.
  pub operation: Rc<Operation>,
}

impl IndexedOperation {
  #[must_use]
  pub fn parameters(&self) -> ParameterBuckets<'_> {
    ParameterBuckets::classify(&self.operation.parameters)
  }
}

/// Declared parameter names split by location, each deduplicated independently.
///
/// Cookie parameters and unknown locations are not consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBuckets<'a> {
  pub path: Vec<&'a str>,
  pub query: Vec<&'a str>,
  pub header: Vec<&'a str>,
}

impl<'a> ParameterBuckets<'a> {
  #[must_use]
  pub fn classify(parameters: &'a [Parameter]) -> Self {
    let located = move |location: ParameterLocation| {
      unique_param_names(parameters.iter().filter(move |param| param.location == Some(location)))
    };

    Self {
      path: located(ParameterLocation::Path),
      query: located(ParameterLocation::Query),
      header: located(ParameterLocation::Header),
    }
  }
}

/// Operations grouped by tag, in first-encounter order of the tags.
pub type TagGroups = IndexMap<String, Vec<IndexedOperation>>;

/// Groups every operation of the document under each of its tags.
///
/// Traversal follows document order (paths, then methods) and nothing is sorted
/// afterwards. Untagged operations land in [`DEFAULT_TAG`]. A tag repeated inside one
/// operation's tag list appends that operation once per occurrence.
pub fn index_by_tag(document: &OpenApiDocument) -> TagGroups {
  let mut groups = TagGroups::new();

  for (path, method, operation) in document.operations() {
    let fn_name = function_name(operation, path, method);
    let operation = Rc::new(operation.clone());

    let default_tags = [DEFAULT_TAG.to_string()];
    let tags = if operation.tags.is_empty() {
      &default_tags[..]
    } else {
      &operation.tags[..]
    };

    for tag in tags {
      groups.entry(tag.clone()).or_default().push(IndexedOperation {
        fn_name: fn_name.clone(),
        method,
        path: path.to_string(),
        operation: Rc::clone(&operation),
      });
    }
  }

  groups
}
