use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{API_CLASS_SUFFIX, API_MODULE_SUFFIX, file_name};
use crate::naming::identifiers::{ensure_unique, tag_class_base, tag_file_stem};

/// Where a tag's module lands and what its class is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlannedModule {
  /// Module specifier without extension, e.g. `pets.api`.
  pub module: String,
  /// Exported class name, e.g. `PetsApi`.
  pub class_name: String,
}

impl PlannedModule {
  #[must_use]
  pub fn file_name(&self) -> String {
    file_name(&self.module)
  }
}

/// Tag -> {file, class} mapping, one entry per tag in tag order.
///
/// Stems and class names are unique across the plan, so the mapping is bijective even
/// when distinct tags sanitize to the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionPlan {
  entries: IndexMap<String, PlannedModule>,
}

impl EmissionPlan {
  pub fn from_tags<I, S>(tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut used_stems = BTreeSet::new();
    let mut used_classes = BTreeSet::new();
    let mut entries = IndexMap::new();

    for tag in tags {
      let tag = tag.as_ref();
      if entries.contains_key(tag) {
        continue;
      }

      let stem = ensure_unique(&tag_file_stem(tag), &used_stems);
      let class_base = ensure_unique(&tag_class_base(tag), &used_classes);
      used_stems.insert(stem.clone());
      used_classes.insert(class_base.clone());

      entries.insert(
        tag.to_string(),
        PlannedModule {
          module: format!("{stem}{API_MODULE_SUFFIX}"),
          class_name: format!("{class_base}{API_CLASS_SUFFIX}"),
        },
      );
    }

    Self { entries }
  }

  #[must_use]
  pub fn get(&self, tag: &str) -> Option<&PlannedModule> {
    self.entries.get(tag)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &PlannedModule)> {
    self.entries.iter().map(|(tag, module)| (tag.as_str(), module))
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
