use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

// Compile static regexes only once for sanitization.
static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Fallback base used when a tag sanitizes to nothing.
pub(crate) const EMPTY_TAG_BASE: &str = "tag";

/// Maps any string to an identifier-safe string over `[A-Za-z0-9_]`.
///
/// Every run of other characters becomes a single underscore, repeated underscores
/// collapse to one, and leading or trailing underscores are trimmed. The result may
/// be empty.
pub fn to_identifier(raw: &str) -> String {
  if raw.is_empty() {
    return String::new();
  }

  let replaced = INVALID_CHARS_RE.replace_all(raw, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// Base (pre-suffix) class name for a tag: `pet store` -> `Pet_store`.
///
/// Class names cannot be quoted, so a sanitized tag that starts with a digit gets a
/// leading underscore: `2fa` -> `_2fa`.
pub fn tag_class_base(tag: &str) -> String {
  let ident = to_identifier(tag);
  if ident.is_empty() {
    return capitalize_first(EMPTY_TAG_BASE);
  }
  if is_plain_identifier(&ident) {
    capitalize_first(&ident)
  } else {
    format!("_{ident}")
  }
}

/// File stem for a tag: sanitized and lower-cased.
pub fn tag_file_stem(tag: &str) -> String {
  let ident = to_identifier(tag);
  if ident.is_empty() {
    return EMPTY_TAG_BASE.to_string();
  }
  ident.to_lowercase()
}

/// Returns `base` or the first `base_N` (N >= 2) that is not in `used_names`.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}_{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Whether `name` can be written unquoted as a method name or property key.
///
/// Sanitized names only contain `[A-Za-z0-9_]`, so the only failures are the empty
/// string and a leading digit.
pub fn is_plain_identifier(name: &str) -> bool {
  name
    .chars()
    .next()
    .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
