use crate::generator::{
  ast::ClientRootNode,
  codegen::{EmitOptions, transport::render_transport_helper},
};

fn render_default() -> String {
  render_transport_helper(&ClientRootNode::default(), &EmitOptions::default())
}

#[test]
fn test_transport_exports() {
  let code = render_default();
  assert!(code.contains("export class HttpClient {"));
  assert!(code.contains("export default HttpClient;"));
  assert!(code.contains("export class RequestError extends Error {"));
  assert!(code.contains("export type QueryValue = QueryPrimitive | QueryPrimitive[];"));
}

#[test]
fn test_transport_request_error_carries_status_and_body() {
  let code = render_default();
  assert!(code.contains("readonly status: number;"));
  assert!(code.contains("readonly body: string;"));
  assert!(code.contains("throw new RequestError(response.status, await response.text());"));
}

#[test]
fn test_transport_behaviour_hooks() {
  let code = render_default();
  assert!(code.contains(".replace(/\\/+$/, '')"));
  assert!(code.contains("if (item !== null && item !== undefined) {"));
  assert!(code.contains("if (headerKey(headers, 'accept') === undefined) {"));
  assert!(code.contains("if (this.getToken && headerKey(headers, 'authorization') === undefined) {"));
  assert!(code.contains("headers['Authorization'] = `Bearer ${token}`;"));
  assert!(code.contains("body = JSON.stringify(options.body);"));
}

#[test]
fn test_transport_base_url_from_document() {
  let root = ClientRootNode {
    title: Some("Petstore".to_string()),
    version: Some("1.0.0".to_string()),
    base_url: "https://petstore.example.com/v1".to_string(),
  };
  let code = render_transport_helper(&root, &EmitOptions::default());

  assert!(code.starts_with("/* eslint-disable */\n// AUTO-GENERATED CODE - DO NOT EDIT!\n// Petstore (1.0.0)\n"));
  assert!(code.contains("export const DEFAULT_BASE_URL = 'https://petstore.example.com/v1';"));
}

#[test]
fn test_transport_header_includes_source() {
  let options = EmitOptions::builder().source("https://example.com/openapi.json".to_string()).build();
  let code = render_transport_helper(&ClientRootNode::default(), &options);
  assert!(code.contains("// Source: https://example.com/openapi.json\n"));
}

#[test]
fn test_transport_is_deterministic() {
  assert_eq!(render_default(), render_default());
}
