use axum::{
  Router,
  http::{StatusCode, header},
  response::IntoResponse,
  routing::get,
};
use reqwest::{Client, Url};

use super::support::PETSTORE;
use crate::{
  error::GenerateError,
  generator::{codegen::EmitOptions, orchestrator::generate},
  utils::{SpecLoader, SpecSource, spec::MAX_REDIRECTS},
};

async fn openapi() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "application/json")], PETSTORE)
}

fn redirect(status: StatusCode, location: &'static str) -> impl IntoResponse {
  (status, [(header::LOCATION, location)])
}

fn router() -> Router {
  Router::new()
    .route("/openapi.json", get(openapi))
    .route(
      "/docs/spec",
      get(|| async { redirect(StatusCode::FOUND, "../openapi.json") }),
    )
    .route(
      "/v1/spec",
      get(|| async { redirect(StatusCode::MOVED_PERMANENTLY, "/docs/spec") }),
    )
    .route(
      "/loop",
      get(|| async { redirect(StatusCode::TEMPORARY_REDIRECT, "/loop") }),
    )
    .route(
      "/unavailable",
      get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
    )
    .route("/broken", get(|| async { "{ \"openapi\": " }))
}

async fn serve() -> Url {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router()).await.unwrap();
  });
  Url::parse(&format!("http://{addr}/")).unwrap()
}

fn loader() -> SpecLoader {
  SpecLoader::from_builder(Client::builder().no_proxy()).unwrap()
}

#[tokio::test]
async fn test_fetch_direct() {
  let base = serve().await;
  let value = loader().fetch(base.join("openapi.json").unwrap()).await.unwrap();
  assert_eq!(value["info"]["title"], "Petstore");
}

#[tokio::test]
async fn test_fetch_follows_redirect_chain() {
  let base = serve().await;
  let value = loader().fetch(base.join("v1/spec").unwrap()).await.unwrap();
  assert_eq!(value["info"]["version"], "1.0.0");
}

#[tokio::test]
async fn test_fetch_redirect_loop_is_bounded() {
  let base = serve().await;
  let err = loader().fetch(base.join("loop").unwrap()).await.unwrap_err();
  assert!(matches!(err, GenerateError::TooManyRedirects { limit, .. } if limit == MAX_REDIRECTS));
}

#[tokio::test]
async fn test_fetch_respects_custom_redirect_limit() {
  let base = serve().await;
  let err = loader()
    .with_max_redirects(1)
    .fetch(base.join("v1/spec").unwrap())
    .await
    .unwrap_err();
  assert!(matches!(err, GenerateError::TooManyRedirects { limit: 1, .. }));
}

#[tokio::test]
async fn test_fetch_http_error_status() {
  let base = serve().await;
  let err = loader().fetch(base.join("unavailable").unwrap()).await.unwrap_err();
  assert!(matches!(
    err,
    GenerateError::HttpStatus { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
  ));
}

#[tokio::test]
async fn test_fetch_malformed_json() {
  let base = serve().await;
  let url = base.join("broken").unwrap();
  let err = loader().fetch(url.clone()).await.unwrap_err();
  assert!(matches!(err, GenerateError::Parse { ref origin, .. } if origin == url.as_str()));
}

#[tokio::test]
async fn test_load_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing.json");
  let err = loader().load(&SpecSource::File(path.clone())).await.unwrap_err();
  assert!(matches!(err, GenerateError::Read { path: ref failed, .. } if failed == &path));
}

#[tokio::test]
async fn test_generate_writes_nothing_when_load_fails() {
  let base = serve().await;
  let dir = tempfile::tempdir().unwrap();
  let out_dir = dir.path().join("api");
  let source = SpecSource::Url(base.join("unavailable").unwrap());

  let err = generate(&loader(), &source, &out_dir, EmitOptions::default(), |_| {})
    .await
    .unwrap_err();

  assert!(matches!(err, GenerateError::HttpStatus { .. }));
  assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_generate_from_url() {
  let base = serve().await;
  let dir = tempfile::tempdir().unwrap();
  let source = SpecSource::Url(base.join("v1/spec").unwrap());

  let output = generate(&loader(), &source, dir.path(), EmitOptions::default(), |_| {})
    .await
    .unwrap();

  assert_eq!(output.stats.tags, 3);
  assert!(dir.path().join("index.ts").is_file());
}
