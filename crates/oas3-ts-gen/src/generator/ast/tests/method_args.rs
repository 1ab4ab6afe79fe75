use crate::generator::ast::{ArgKind, BodyArg, MethodArgs};

fn names(values: &[&str]) -> Vec<String> {
  values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn test_no_arguments() {
  let args = MethodArgs::default();
  assert!(args.kinds().is_empty());
  assert!(!args.requires_options());
}

#[test]
fn test_kinds_are_ordered() {
  let args = MethodArgs {
    path_params: names(&["id"]),
    query: names(&["page"]),
    headers: names(&["X-Trace"]),
    body: Some(BodyArg { required: false }),
  };
  assert_eq!(
    args.kinds(),
    [ArgKind::PathParams, ArgKind::Query, ArgKind::Headers, ArgKind::Body]
  );
}

#[test]
fn test_query_only() {
  let args = MethodArgs {
    query: names(&["page"]),
    ..MethodArgs::default()
  };
  assert_eq!(args.kinds(), [ArgKind::Query]);
  assert!(!args.requires_options());
}

#[test]
fn test_required_body_requires_options() {
  let args = MethodArgs {
    body: Some(BodyArg { required: true }),
    ..MethodArgs::default()
  };
  assert!(args.requires_options());
}

#[test]
fn test_arg_kind_names() {
  assert_eq!(ArgKind::PathParams.to_string(), "pathParams");
  assert_eq!(ArgKind::Query.to_string(), "query");
  assert_eq!(ArgKind::Headers.to_string(), "headers");
  assert_eq!(ArgKind::Body.to_string(), "body");
}
