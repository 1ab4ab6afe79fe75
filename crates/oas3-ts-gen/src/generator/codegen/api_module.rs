use itertools::Itertools;

use super::{
  EmitOptions, PathEncoding, TRANSPORT_MODULE,
  transport::{CLIENT_CLASS, QUERY_VALUE_TYPE},
  writer::{SourceWriter, string_literal, template_text},
  write_header,
};
use crate::{
  generator::ast::{ApiMethod, ApiModule, ArgKind, ClientRootNode, MethodArgs, ParsedPath, PathPart},
  naming::identifiers::is_plain_identifier,
};

/// Private field holding the transport. Its `#` prefix keeps it out of reach of any
/// generated method name.
const CLIENT_FIELD: &str = "#client";

/// Renders one tag module: a default-exported class with one method per operation.
#[must_use]
pub fn render_api_module(module: &ApiModule, root: &ClientRootNode, options: &EmitOptions) -> String {
  let mut w = SourceWriter::new();
  write_header(&mut w, root, options);

  let transport = string_literal(&format!("./{TRANSPORT_MODULE}"));
  w.line(format!("import {CLIENT_CLASS} from {transport};"));
  if module.uses_query() {
    w.line(format!("import type {{ {QUERY_VALUE_TYPE} }} from {transport};"));
  }
  w.blank();

  w.block(format!("export default class {} {{", module.class_name), "}", |w| {
    w.line(format!("readonly {CLIENT_FIELD}: {CLIENT_CLASS};"));
    w.blank();
    w.block(
      format!("constructor(client: {CLIENT_CLASS} = new {CLIENT_CLASS}()) {{"),
      "}",
      |w| {
        w.line(format!("this.{CLIENT_FIELD} = client;"));
      },
    );
    for method in &module.methods {
      w.blank();
      write_method(w, method, options.path_encoding);
    }
  });

  w.finish()
}

fn write_method(w: &mut SourceWriter, method: &ApiMethod, encoding: PathEncoding) {
  w.doc_comment(method.docs.lines());

  let signature = format!(
    "async {}<T = unknown>({}): Promise<T> {{",
    property_key(&method.name),
    parameter_list(&method.args)
  );

  w.block(signature, "}", |w| {
    w.block(format!("return this.{CLIENT_FIELD}.request<T>({{"), "});", |w| {
      w.line(format!(
        "method: {},",
        string_literal(&method.http_method.upper())
      ));
      w.line(format!("path: {},", path_expression(&method.path, encoding)));
      for kind in method.args.kinds() {
        match kind {
          ArgKind::PathParams => {}
          ArgKind::Query | ArgKind::Headers | ArgKind::Body => {
            w.line(format!("{kind},"));
          }
        }
      }
    });
  });
}

/// The single destructured options parameter, or nothing when no argument applies.
fn parameter_list(args: &MethodArgs) -> String {
  let kinds = args.kinds();
  if kinds.is_empty() {
    return String::new();
  }

  let names = kinds.iter().join(", ");
  let members = kinds.iter().map(|kind| member_type(*kind, args)).join("; ");
  let default = if args.requires_options() { "" } else { " = {}" };

  format!("{{ {names} }}: {{ {members} }}{default}")
}

fn member_type(kind: ArgKind, args: &MethodArgs) -> String {
  match kind {
    ArgKind::PathParams => format!(
      "{kind}: {}",
      object_type(&args.path_params, false, "string | number")
    ),
    ArgKind::Query => format!("{kind}?: {}", object_type(&args.query, true, QUERY_VALUE_TYPE)),
    ArgKind::Headers => format!("{kind}?: {}", object_type(&args.headers, true, "string")),
    ArgKind::Body => {
      let optional = if args.body.is_some_and(|body| body.required) { "" } else { "?" };
      format!("{kind}{optional}: unknown")
    }
  }
}

fn object_type(names: &[String], optional: bool, value_type: &str) -> String {
  let marker = if optional { "?" } else { "" };
  let fields = names
    .iter()
    .map(|name| format!("{}{marker}: {value_type}", property_key(name)))
    .join("; ");
  format!("{{ {fields} }}")
}

/// The request path as a JS expression.
///
/// Values are interpolated from `pathParams` by declared name; `Encoded` wraps each
/// in `encodeURIComponent`.
fn path_expression(path: &ParsedPath, encoding: PathEncoding) -> String {
  if !path.has_params() {
    let literal = path
      .parts()
      .iter()
      .map(|part| match part {
        PathPart::Literal(text) | PathPart::Param(text) => text.as_str(),
      })
      .collect::<String>();
    return string_literal(&literal);
  }

  let body = path
    .parts()
    .iter()
    .map(|part| match part {
      PathPart::Literal(text) => template_text(text),
      PathPart::Param(name) => {
        let access = member_access("pathParams", name);
        match encoding {
          PathEncoding::Raw => format!("${{{access}}}"),
          PathEncoding::Encoded => format!("${{encodeURIComponent(String({access}))}}"),
        }
      }
    })
    .collect::<String>();
  format!("`{body}`")
}

fn property_key(name: &str) -> String {
  if is_plain_identifier(name) {
    name.to_string()
  } else {
    string_literal(name)
  }
}

fn member_access(object: &str, name: &str) -> String {
  if is_plain_identifier(name) {
    format!("{object}.{name}")
  } else {
    format!("{object}[{}]", string_literal(name))
  }
}
