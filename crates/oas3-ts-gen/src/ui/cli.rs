use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::codegen::PathEncoding;

/// Used when neither the argument nor `OAS3_TS_GEN_SPEC` names a document.
pub const DEFAULT_SPEC: &str = "http://localhost:8000/openapi.json";
pub const DEFAULT_OUT_DIR: &str = "src/api";

#[derive(Parser, Debug)]
#[command(name = "oas3-ts-gen")]
#[command(author, version, about = "OpenAPI to TypeScript client generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate a TypeScript client from an OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// URL or file path of the OpenAPI JSON document
  #[arg(value_name = "SPEC", env = "OAS3_TS_GEN_SPEC", default_value = DEFAULT_SPEC)]
  pub spec: String,

  /// Directory the generated modules are written to
  #[arg(short, long, value_name = "DIR", env = "OAS3_TS_GEN_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
  pub output: PathBuf,

  /// How path parameter values are placed into request paths
  #[arg(long, value_enum, default_value = "raw")]
  pub path_encoding: PathEncoding,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every generated method grouped by tag
  Operations {
    /// URL or file path of the OpenAPI JSON document
    #[arg(value_name = "SPEC", env = "OAS3_TS_GEN_SPEC", default_value = DEFAULT_SPEC)]
    spec: String,
  },
}
