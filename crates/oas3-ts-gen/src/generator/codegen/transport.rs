use super::{
  EmitOptions,
  writer::{SourceWriter, string_literal},
  write_header,
};
use crate::generator::ast::ClientRootNode;

pub const CLIENT_CLASS: &str = "HttpClient";
pub const QUERY_VALUE_TYPE: &str = "QueryValue";

const TYPES: &str = r"export type QueryPrimitive = string | number | boolean | null | undefined;
export type QueryValue = QueryPrimitive | QueryPrimitive[];
export type QueryParams = Record<string, QueryValue>;
export type HeaderMap = Record<string, string | undefined>;
export type TokenProvider = () => Promise<string | null | undefined> | string | null | undefined;

export interface HttpClientOptions {
  /** Base URL every request path is appended to; trailing slashes are ignored. */
  baseUrl?: string;
  /** Headers sent with every request; per-call headers win. */
  headers?: HeaderMap;
  /** Supplies a bearer token; skipped when a call sets its own Authorization header. */
  getToken?: TokenProvider;
  fetch?: typeof fetch;
}

export interface RequestOptions {
  method: string;
  path: string;
  query?: QueryParams;
  headers?: HeaderMap;
  body?: unknown;
  /** Declares the body encoding; a non-JSON type sends the body as-is. */
  contentType?: string;
}";

const CLIENT: &str = r"/** Raised for every non-2xx response. */
export class RequestError extends Error {
  readonly status: number;
  readonly body: string;

  constructor(status: number, body: string) {
    super(`Request failed with status ${status}`);
    this.name = 'RequestError';
    this.status = status;
    this.body = body;
  }
}

const JSON_CONTENT_TYPE = 'application/json';

function isJsonContentType(value: string | null | undefined): boolean {
  if (!value) {
    return false;
  }
  const mediaType = value.split(';')[0].trim().toLowerCase();
  return mediaType === JSON_CONTENT_TYPE || mediaType.endsWith('+json');
}

function headerKey(headers: HeaderMap, name: string): string | undefined {
  const wanted = name.toLowerCase();
  return Object.keys(headers).find((key) => key.toLowerCase() === wanted && headers[key] !== undefined);
}

function definedHeaders(headers: HeaderMap): Record<string, string> {
  const result: Record<string, string> = {};
  for (const [key, value] of Object.entries(headers)) {
    if (value !== undefined) {
      result[key] = value;
    }
  }
  return result;
}

function isPassthroughBody(body: unknown): boolean {
  return (
    (typeof FormData !== 'undefined' && body instanceof FormData) ||
    (typeof Blob !== 'undefined' && body instanceof Blob) ||
    (typeof URLSearchParams !== 'undefined' && body instanceof URLSearchParams) ||
    body instanceof ArrayBuffer
  );
}

export class HttpClient {
  private readonly baseUrl: string;
  private readonly defaultHeaders: HeaderMap;
  private readonly getToken?: TokenProvider;
  private readonly fetchImpl: typeof fetch;

  constructor(options: HttpClientOptions = {}) {
    this.baseUrl = (options.baseUrl ?? DEFAULT_BASE_URL).replace(/\/+$/, '');
    this.defaultHeaders = { ...(options.headers ?? {}) };
    this.getToken = options.getToken;
    this.fetchImpl = options.fetch ?? ((input, init) => fetch(input, init));
  }

  buildUrl(path: string, query?: QueryParams): string {
    const params = new URLSearchParams();
    for (const [key, value] of Object.entries(query ?? {})) {
      const values = Array.isArray(value) ? value : [value];
      for (const item of values) {
        if (item !== null && item !== undefined) {
          params.append(key, String(item));
        }
      }
    }
    const url = `${this.baseUrl}${path}`;
    const search = params.toString();
    return search ? `${url}?${search}` : url;
  }

  async request<T = unknown>(options: RequestOptions): Promise<T> {
    const headers: HeaderMap = { ...this.defaultHeaders, ...(options.headers ?? {}) };
    if (headerKey(headers, 'accept') === undefined) {
      headers['Accept'] = JSON_CONTENT_TYPE;
    }

    let body: BodyInit | undefined;
    if (options.body !== undefined) {
      const contentTypeKey = headerKey(headers, 'content-type');
      const contentType = options.contentType ?? (contentTypeKey ? headers[contentTypeKey] : undefined);
      if (contentType && !isJsonContentType(contentType)) {
        body = options.body as BodyInit;
        if (contentTypeKey === undefined) {
          headers['Content-Type'] = contentType;
        }
      } else if (!contentType && isPassthroughBody(options.body)) {
        body = options.body as BodyInit;
      } else {
        body = JSON.stringify(options.body);
        if (contentTypeKey === undefined) {
          headers['Content-Type'] = contentType ?? JSON_CONTENT_TYPE;
        }
      }
    }

    if (this.getToken && headerKey(headers, 'authorization') === undefined) {
      const token = await this.getToken();
      if (token) {
        headers['Authorization'] = `Bearer ${token}`;
      }
    }

    const response = await this.fetchImpl(this.buildUrl(options.path, options.query), {
      method: options.method,
      headers: definedHeaders(headers),
      body,
    });

    if (!response.ok) {
      throw new RequestError(response.status, await response.text());
    }

    const text = await response.text();
    if (response.status === 204 || text.length === 0) {
      return undefined as T;
    }
    if (isJsonContentType(response.headers.get('content-type'))) {
      return JSON.parse(text) as T;
    }
    return text as unknown as T;
  }
}

export default HttpClient;";

/// Renders the shared transport helper module.
#[must_use]
pub fn render_transport_helper(root: &ClientRootNode, options: &EmitOptions) -> String {
  let mut w = SourceWriter::new();
  write_header(&mut w, root, options);
  w.lines(TYPES.lines());
  w.blank();
  w.line(format!(
    "export const DEFAULT_BASE_URL = {};",
    string_literal(&root.base_url)
  ));
  w.blank();
  w.lines(CLIENT.lines());
  w.finish()
}
