use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::identifiers::to_identifier;
use crate::generator::document::{HttpMethod, Operation, Parameter};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Segment used when a path contributes no literal text, e.g. `/` or `/{id}`.
pub(crate) const ROOT_SEGMENT: &str = "root";

/// Derives the generated function name for an operation.
///
/// A non-empty `operationId` is sanitized directly. Otherwise the name is built from the
/// method and the literal text of the path, with `{param}` placeholders removed:
///
/// ```text
/// GET /users/{id}/orders/{orderId} => get_users_orders
/// GET /                            => get_root
/// ```
pub fn function_name(operation: &Operation, path: &str, method: HttpMethod) -> String {
  match operation.operation_id.as_deref() {
    Some(operation_id) if !operation_id.is_empty() => to_identifier(operation_id),
    _ => to_identifier(&derive_name_from_path(method, path)),
  }
}

pub(crate) fn derive_name_from_path(method: HttpMethod, path: &str) -> String {
  let segments = path
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(|segment| PLACEHOLDER_RE.replace_all(segment, "").into_owned())
    .filter(|segment| !segment.is_empty())
    .collect::<Vec<_>>();

  if segments.is_empty() {
    format!("{method}_{ROOT_SEGMENT}")
  } else {
    format!("{method}_{}", segments.join("_"))
  }
}

/// Declared parameter names with unnamed entries dropped and duplicates collapsed,
/// keeping first-seen order.
pub fn unique_param_names<'a, I>(parameters: I) -> Vec<&'a str>
where
  I: IntoIterator<Item = &'a Parameter>,
{
  parameters
    .into_iter()
    .filter_map(Parameter::declared_name)
    .unique()
    .collect()
}
