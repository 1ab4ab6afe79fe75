use std::{
  fmt,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use reqwest::{Client, ClientBuilder, StatusCode, Url, header::LOCATION, redirect::Policy};
use serde_json::Value;

use crate::error::{GenerateError, GenerateResult};

/// Upper bound on `Location` hops before a download is abandoned.
pub const MAX_REDIRECTS: usize = 10;

/// Where an OpenAPI document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  Url(Url),
  File(PathBuf),
}

impl SpecSource {
  /// Interprets `input` as an `http(s)` URL, a `file://` URL, or a plain filesystem path.
  #[must_use]
  pub fn parse(input: &str) -> Self {
    match Url::parse(input) {
      Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
      Ok(url) if url.scheme() == "file" => url
        .to_file_path()
        .map_or_else(|()| Self::File(PathBuf::from(input)), Self::File),
      _ => Self::File(PathBuf::from(input)),
    }
  }
}

impl fmt::Display for SpecSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Url(url) => write!(f, "{url}"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

pub struct SpecLoader {
  client: Client,
  max_redirects: usize,
}

impl SpecLoader {
  /// Builds a loader whose HTTP client never follows redirects on its own.
  pub fn new() -> GenerateResult<Self> {
    Self::from_builder(Client::builder())
  }

  /// Builds a loader from a preconfigured client builder. Any redirect policy on `builder`
  /// is replaced, since redirects are followed here.
  pub fn from_builder(builder: ClientBuilder) -> GenerateResult<Self> {
    let client = builder
      .redirect(Policy::none())
      .build()
      .map_err(|source| GenerateError::Fetch {
        url: String::new(),
        source,
      })?;

    Ok(Self {
      client,
      max_redirects: MAX_REDIRECTS,
    })
  }

  #[cfg(test)]
  #[must_use]
  pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
    self.max_redirects = max_redirects;
    self
  }

  pub async fn load(&self, source: &SpecSource) -> GenerateResult<Value> {
    match source {
      SpecSource::Url(url) => self.fetch(url.clone()).await,
      SpecSource::File(path) => read_file(path).await,
    }
  }

  /// Downloads and parses the document at `url`, chasing redirects one hop at a time.
  pub async fn fetch(&self, url: Url) -> GenerateResult<Value> {
    let mut current = url;
    let mut hops = 0;

    loop {
      let response = self
        .client
        .get(current.clone())
        .send()
        .await
        .map_err(|source| GenerateError::Fetch {
          url: current.to_string(),
          source,
        })?;

      let status = response.status();
      if is_followed_redirect(status)
        && let Some(location) = response.headers().get(LOCATION)
      {
        if hops >= self.max_redirects {
          return Err(GenerateError::TooManyRedirects {
            url: current.to_string(),
            limit: self.max_redirects,
          });
        }

        let invalid = || GenerateError::InvalidRedirect {
          url: current.to_string(),
          location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
        };
        let target = location.to_str().map_err(|_| invalid())?;
        current = current.join(target).map_err(|_| invalid())?;
        hops += 1;
        continue;
      }

      if status.is_client_error() || status.is_server_error() {
        return Err(GenerateError::HttpStatus {
          url: current.to_string(),
          status,
        });
      }

      let body = response.bytes().await.map_err(|source| GenerateError::Fetch {
        url: current.to_string(),
        source,
      })?;

      return parse_json(&body, current.as_str());
    }
  }
}

fn is_followed_redirect(status: StatusCode) -> bool {
  matches!(
    status,
    StatusCode::MOVED_PERMANENTLY
      | StatusCode::FOUND
      | StatusCode::SEE_OTHER
      | StatusCode::TEMPORARY_REDIRECT
      | StatusCode::PERMANENT_REDIRECT
  )
}

async fn read_file(path: &Path) -> GenerateResult<Value> {
  let file = AsyncMmapFile::open(path).await.map_err(|err| GenerateError::Read {
    path: path.to_path_buf(),
    source: std::io::Error::other(err.to_string()),
  })?;

  parse_json(file.as_slice(), &path.display().to_string())
}

pub(crate) fn parse_json(bytes: &[u8], origin: &str) -> GenerateResult<Value> {
  serde_json::from_slice(bytes).map_err(|source| GenerateError::Parse {
    origin: origin.to_string(),
    source,
  })
}
