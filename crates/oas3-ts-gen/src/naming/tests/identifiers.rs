use std::collections::BTreeSet;

use crate::naming::identifiers::{
  capitalize_first, ensure_unique, is_plain_identifier, tag_class_base, tag_file_stem, to_identifier,
};

fn is_identifier_safe(value: &str) -> bool {
  value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[test]
fn test_to_identifier_replaces_invalid_runs() {
  assert_eq!(to_identifier("list-users"), "list_users");
  assert_eq!(to_identifier("list users by id"), "list_users_by_id");
  assert_eq!(to_identifier("a.b/c:d"), "a_b_c_d");
  assert_eq!(to_identifier("a -- b"), "a_b");
}

#[test]
fn test_to_identifier_trims_and_collapses_underscores() {
  assert_eq!(to_identifier("__private__"), "private");
  assert_eq!(to_identifier("a___b"), "a_b");
  assert_eq!(to_identifier("-leading and trailing-"), "leading_and_trailing");
}

#[test]
fn test_to_identifier_keeps_valid_input() {
  assert_eq!(to_identifier("getUserById"), "getUserById");
  assert_eq!(to_identifier("v2_users"), "v2_users");
  assert_eq!(to_identifier("123abc"), "123abc");
}

#[test]
fn test_to_identifier_is_total() {
  let inputs = [
    "",
    " ",
    "___",
    "!!!",
    "héllo wörld",
    "日本語",
    "emoji 🚀 launch",
    "tab\tand\nnewline",
    "{id}",
    "\u{0}",
  ];

  for input in inputs {
    let ident = to_identifier(input);
    assert!(is_identifier_safe(&ident), "{input:?} produced {ident:?}");
    assert!(!ident.starts_with('_') && !ident.ends_with('_'), "{input:?} produced {ident:?}");
    assert!(!ident.contains("__"), "{input:?} produced {ident:?}");
  }
}

#[test]
fn test_to_identifier_only_invalid_characters_is_empty() {
  assert_eq!(to_identifier(""), "");
  assert_eq!(to_identifier("!@#$%^&*()"), "");
  assert_eq!(to_identifier("日本語"), "");
}

#[test]
fn test_to_identifier_non_ascii_becomes_separator() {
  assert_eq!(to_identifier("café_menu"), "caf_menu");
  assert_eq!(to_identifier("naïve"), "na_ve");
}

#[test]
fn test_capitalize_first() {
  assert_eq!(capitalize_first("pets"), "Pets");
  assert_eq!(capitalize_first("Pets"), "Pets");
  assert_eq!(capitalize_first("pet_store"), "Pet_store");
  assert_eq!(capitalize_first("9lives"), "9lives");
  assert_eq!(capitalize_first(""), "");
}

#[test]
fn test_tag_names() {
  assert_eq!(tag_class_base("pet store"), "Pet_store");
  assert_eq!(tag_file_stem("pet store"), "pet_store");
  assert_eq!(tag_class_base("UserAccounts"), "UserAccounts");
  assert_eq!(tag_file_stem("UserAccounts"), "useraccounts");
}

#[test]
fn test_tag_class_base_with_leading_digit() {
  assert_eq!(tag_class_base("2fa"), "_2fa");
  assert_eq!(tag_class_base("3d models"), "_3d_models");
  assert!(is_plain_identifier(&tag_class_base("2fa")));
  assert_eq!(tag_file_stem("2fa"), "2fa");
}

#[test]
fn test_tag_names_fall_back_when_empty() {
  assert_eq!(tag_class_base("***"), "Tag");
  assert_eq!(tag_file_stem("***"), "tag");
  assert_eq!(tag_file_stem(""), "tag");
}

#[test]
fn test_ensure_unique() {
  let used = ["pets", "pets_2"].into_iter().map(String::from).collect::<BTreeSet<_>>();
  assert_eq!(ensure_unique("users", &used), "users");
  assert_eq!(ensure_unique("pets", &used), "pets_3");
}

#[test]
fn test_plain_identifiers() {
  assert!(is_plain_identifier("listUsers"));
  assert!(is_plain_identifier("_internal"));
  assert!(is_plain_identifier("get_users_orders"));
  assert!(!is_plain_identifier("123abc"));
  assert!(!is_plain_identifier(""));
}
