//! Orchestration for the OpenAPI to TypeScript client pipeline.
//!
//! [`Orchestrator`] turns a loaded document into the complete set of output files in
//! memory. [`generate`] wraps it with loading and writing:
//!
//! 1. load the spec (nothing is written if this fails)
//! 2. render the transport helper
//! 3. index operations by tag and plan file and class names
//! 4. render one module per tag
//! 5. render the barrel, which depends on the whole plan
//! 6. write the files in that order, stopping at the first failure

use std::{
  collections::BTreeSet,
  fmt,
  path::{Path, PathBuf},
};

use crate::{
  error::{GenerateError, GenerateResult},
  generator::{
    ast::{ApiModule, ClientRootNode},
    codegen::{
      BARREL_MODULE, EmissionPlan, EmitOptions, GeneratedFile, TRANSPORT_MODULE,
      api_module::render_api_module, barrel::render_barrel, file_name, transport::render_transport_helper,
    },
    document::OpenApiDocument,
    operation_converter::OperationConverter,
    operation_registry::index_by_tag,
  },
  naming::identifiers::is_plain_identifier,
  utils::{SpecLoader, SpecSource},
};

/// High-level orchestrator for OpenAPI to TypeScript client generation.
pub struct Orchestrator {
  document: OpenApiDocument,
  options: EmitOptions,
}

/// Non-fatal findings reported alongside the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
  /// Two operations in one module share a method name; the later one shadows the earlier.
  DuplicateMethodName { class_name: String, method: String },
  /// The method name is not a plain identifier and is emitted as a quoted key.
  QuotedMethodName {
    class_name: String,
    method: String,
    path: String,
  },
  /// The function name is reserved inside a class and was emitted under another name.
  RenamedMethod {
    class_name: String,
    from: String,
    to: String,
  },
}

impl fmt::Display for GenerationWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateMethodName { class_name, method } => {
        write!(f, "{class_name}.{method} is declared more than once")
      }
      Self::QuotedMethodName {
        class_name,
        method,
        path,
      } => write!(f, "{class_name}['{method}'] ({path}) is not a plain identifier"),
      Self::RenamedMethod { class_name, from, to } => {
        write!(f, "{class_name}.{from} is reserved and was emitted as {class_name}.{to}")
      }
    }
  }
}

/// Statistics about the code generation process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Number of tag modules emitted
  pub tags: usize,
  /// Number of operations in the document
  pub operations: usize,
  /// Number of methods emitted across all modules (operations fan out per tag)
  pub methods: usize,
  /// Number of files produced
  pub files: usize,
  pub warnings: Vec<GenerationWarning>,
}

/// Everything one run produces, in write order.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  pub plan: EmissionPlan,
  pub stats: GenerationStats,
}

impl Orchestrator {
  #[must_use]
  pub fn new(document: OpenApiDocument, options: EmitOptions) -> Self {
    Self { document, options }
  }

  /// Renders every output file. Pure: the same document and options always yield
  /// byte-identical files in the same order.
  #[must_use]
  pub fn generate(&self) -> GeneratedOutput {
    let root = ClientRootNode::from(&self.document);
    let mut files = vec![GeneratedFile {
      name: file_name(TRANSPORT_MODULE),
      content: render_transport_helper(&root, &self.options),
    }];

    let groups = index_by_tag(&self.document);
    let plan = EmissionPlan::from_tags(groups.keys());

    let mut modules = vec![];
    for (tag, operations) in &groups {
      let Some(planned) = plan.get(tag) else {
        continue;
      };
      let module = OperationConverter::convert_module(planned, operations);
      files.push(GeneratedFile {
        name: planned.file_name(),
          content: render_api_module(&module, &root, &self.options),
      });
      modules.push(module);
    }

    files.push(GeneratedFile {
      name: file_name(BARREL_MODULE),
      content: render_barrel(&plan, &root, &self.options),
    });

    let stats = GenerationStats {
      tags: plan.len(),
      operations: self.document.operations().count(),
      methods: modules.iter().map(|module| module.methods.len()).sum(),
      files: files.len(),
      warnings: collect_warnings(&modules),
    };

    GeneratedOutput { files, plan, stats }
  }
}

fn collect_warnings(modules: &[ApiModule]) -> Vec<GenerationWarning> {
  let mut warnings = vec![];

  for module in modules {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();

    for method in &module.methods {
      if let Some(from) = &method.renamed_from {
        warnings.push(GenerationWarning::RenamedMethod {
          class_name: module.class_name.clone(),
          from: from.clone(),
          to: method.name.clone(),
        });
      }
      if !is_plain_identifier(&method.name) {
        warnings.push(GenerationWarning::QuotedMethodName {
          class_name: module.class_name.clone(),
          method: method.name.clone(),
          path: method.path_template.clone(),
        });
      }
      if !seen.insert(method.name.as_str()) && reported.insert(method.name.as_str()) {
        warnings.push(GenerationWarning::DuplicateMethodName {
          class_name: module.class_name.clone(),
          method: method.name.clone(),
        });
      }
    }
  }

  warnings
}

/// Progress notifications emitted by [`generate`].
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
  Loading(&'a SpecSource),
  Generating,
  Writing(&'a Path),
  Wrote(&'a Path),
}

/// Loads `source`, generates the client and writes it into `out_dir`.
///
/// A loader failure returns before anything touches the filesystem. Writes overwrite
/// existing files and stop at the first failure, leaving earlier files in place.
pub async fn generate<F>(
  loader: &SpecLoader,
  source: &SpecSource,
  out_dir: &Path,
  options: EmitOptions,
  mut on_progress: F,
) -> GenerateResult<GeneratedOutput>
where
  F: FnMut(Progress<'_>),
{
  on_progress(Progress::Loading(source));
  let value = loader.load(source).await?;
  let document = OpenApiDocument::from_value(&value)?;

  on_progress(Progress::Generating);
  let output = Orchestrator::new(document, options).generate();

  on_progress(Progress::Writing(out_dir));
  write_files(out_dir, &output.files, |path| on_progress(Progress::Wrote(path))).await?;

  Ok(output)
}

/// Writes `files` into `out_dir` in order, creating the directory if needed.
pub async fn write_files<F>(out_dir: &Path, files: &[GeneratedFile], mut on_written: F) -> GenerateResult<()>
where
  F: FnMut(&Path),
{
  let write_error = |path: PathBuf| move |source| GenerateError::Write { path, source };

  tokio::fs::create_dir_all(out_dir)
    .await
    .map_err(write_error(out_dir.to_path_buf()))?;

  for file in files {
    let path = out_dir.join(&file.name);
    tokio::fs::write(&path, &file.content)
      .await
      .map_err(write_error(path.clone()))?;
    on_written(&path);
  }

  Ok(())
}
