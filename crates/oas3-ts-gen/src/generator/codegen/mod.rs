use clap::ValueEnum;

use super::ast::ClientRootNode;

pub mod api_module;
pub mod barrel;
pub mod emission_plan;
pub mod transport;
pub mod writer;

#[cfg(test)]
mod tests;

pub use emission_plan::{EmissionPlan, PlannedModule};
use writer::SourceWriter;

/// Stem of the shared transport helper module.
pub const TRANSPORT_MODULE: &str = "http-client";
/// Suffix appended to each tag stem (`pets` -> `pets.api`).
pub const API_MODULE_SUFFIX: &str = ".api";
/// Suffix appended to each generated class name.
pub const API_CLASS_SUFFIX: &str = "Api";
pub const BARREL_MODULE: &str = "index";
pub const SOURCE_EXTENSION: &str = "ts";

#[must_use]
pub fn file_name(module: &str) -> String {
  format!("{module}.{SOURCE_EXTENSION}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  /// File name relative to the output directory.
  pub name: String,
  pub content: String,
}

/// How path parameter values are placed into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PathEncoding {
  /// Interpolate values verbatim.
  #[default]
  Raw,
  /// Wrap each value in `encodeURIComponent`.
  Encoded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct EmitOptions {
  #[builder(default)]
  pub path_encoding: PathEncoding,
  /// Shown in the banner of every generated file.
  pub source: Option<String>,
}

/// Writes the "do not edit" banner shared by every generated file.
///
/// The banner holds no timestamps so regenerating an unchanged spec is byte-identical.
pub(crate) fn write_header(w: &mut SourceWriter, root: &ClientRootNode, options: &EmitOptions) {
  w.line("/* eslint-disable */");
  w.line("// AUTO-GENERATED CODE - DO NOT EDIT!");
  let title = root.title.as_deref().map(single_line);
  let version = root.version.as_deref().map(single_line);
  let summary = match (title, version) {
    (Some(title), Some(version)) => Some(format!("// {title} ({version})")),
    (Some(title), None) => Some(format!("// {title}")),
    (None, Some(version)) => Some(format!("// Version: {version}")),
    (None, None) => None,
  };
  if let Some(summary) = summary {
    w.line(summary);
  }
  if let Some(source) = &options.source {
    w.line(format!("// Source: {}", single_line(source)));
  }
  w.blank();
}

fn single_line(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}
