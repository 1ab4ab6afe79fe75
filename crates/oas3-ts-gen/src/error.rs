use std::path::PathBuf;

use reqwest::StatusCode;

/// Failures that abort a generation run.
///
/// Loader failures (`Fetch`, `HttpStatus`, `Parse`, `TooManyRedirects`, `InvalidRedirect`, `Read`)
/// always happen before any file is written. `Write` may leave earlier files in place.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
  #[error("failed to fetch OpenAPI spec from {url}: {source}")]
  Fetch {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("OpenAPI spec download from {url} failed with HTTP status {status}")]
  HttpStatus { url: String, status: StatusCode },

  #[error("OpenAPI spec from {origin} is not valid JSON: {source}")]
  Parse {
    origin: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("operation `{method} {path}` has an unexpected shape: {source}")]
  InvalidOperation {
    method: String,
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("gave up on {url} after {limit} redirects")]
  TooManyRedirects { url: String, limit: usize },

  #[error("redirect from {url} points to an invalid location `{location}`")]
  InvalidRedirect { url: String, location: String },

  #[error("failed to read OpenAPI spec file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
