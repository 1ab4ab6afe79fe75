use crate::generator::{
  ast::{ApiMethod, ApiModule, BodyArg, Documentation, MethodArgs, ParsedPath},
  codegen::PlannedModule,
  operation_registry::IndexedOperation,
};

/// Method name used when an operation's function name sanitizes to nothing.
pub(crate) const FALLBACK_METHOD_NAME: &str = "operation";

/// Names a class method cannot take, even when quoted.
const RESERVED_METHOD_NAMES: &[&str] = &["constructor"];

/// Converts indexed operations into method definitions for the emitter.
pub(crate) struct OperationConverter;

impl OperationConverter {
  pub(crate) fn convert_module(planned: &PlannedModule, operations: &[IndexedOperation]) -> ApiModule {
    ApiModule {
      class_name: planned.class_name.clone(),
      methods: operations.iter().map(Self::convert).collect(),
    }
  }

  pub(crate) fn convert(entry: &IndexedOperation) -> ApiMethod {
    let buckets = entry.parameters();
    let owned = |names: &[&str]| names.iter().map(|name| (*name).to_string()).collect::<Vec<_>>();

    let operation = &entry.operation;
    let args = MethodArgs {
      path_params: owned(&buckets.path),
      query: owned(&buckets.query),
      headers: owned(&buckets.header),
      body: operation.has_request_body().then(|| BodyArg {
        required: operation.request_body_required(),
      }),
    };

    let mut docs = Documentation::from_optional(operation.summary.as_deref());
    if !docs.is_empty() {
      docs.push("");
    }
    docs.push(format!("{} {}", entry.method.upper(), entry.path));

    let (name, renamed_from) = method_name(&entry.fn_name);

    ApiMethod::builder()
      .name(name)
      .maybe_renamed_from(renamed_from)
      .http_method(entry.method)
      .path(ParsedPath::parse(&entry.path, &buckets.path))
      .path_template(entry.path.clone())
      .docs(docs)
      .args(args)
      .build()
  }
}

/// The emitted method name for `fn_name`, plus the original when the two differ.
///
/// An empty name becomes [`FALLBACK_METHOD_NAME`] and a reserved one gets a trailing `_`.
fn method_name(fn_name: &str) -> (String, Option<String>) {
  if fn_name.is_empty() {
    (FALLBACK_METHOD_NAME.to_string(), None)
  } else if RESERVED_METHOD_NAMES.contains(&fn_name) {
    (format!("{fn_name}_"), Some(fn_name.to_string()))
  } else {
    (fn_name.to_string(), None)
  }
}
