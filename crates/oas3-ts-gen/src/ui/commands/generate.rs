use std::{
  io::{self, Write},
  path::{Path, PathBuf},
};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::{EmissionPlan, EmitOptions, PathEncoding},
    orchestrator::{GenerationStats, Progress, generate},
  },
  ui::{Colors, GenerateCommand},
  utils::{SpecLoader, SpecSource},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub source: SpecSource,
  pub output: PathBuf,
  pub path_encoding: PathEncoding,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      spec,
      output,
      path_encoding,
      verbose,
      quiet,
    } = command;

    let spec = spec.trim();
    if spec.is_empty() {
      anyhow::bail!("OpenAPI spec location must not be empty");
    }

    Ok(Self {
      source: SpecSource::parse(spec),
      output,
      path_encoding,
      verbose,
      quiet,
    })
  }

  fn emit_options(&self) -> EmitOptions {
    EmitOptions::builder()
      .path_encoding(self.path_encoding)
      .source(self.source.to_string())
      .build()
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn progress(&self, progress: Progress<'_>) {
    let message = match progress {
      Progress::Loading(source) => format!("Loading OpenAPI spec from: {source}"),
      Progress::Generating => "Generating TypeScript client...".to_string(),
      Progress::Writing(dir) => format!("Writing to: {}", dir.display()),
      Progress::Wrote(path) => {
        self.log_wrote(path);
        return;
      }
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn log_wrote(&self, path: &Path) {
    self.info(&format!("Wrote {}", path.display()).with(self.colors.info()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats, plan: &EmissionPlan) {
    if self.config.quiet {
      return;
    }

    self.stat("Tags:", stats.tags.to_string());
    self.stat("Operations:", stats.operations.to_string());
    self.stat("Methods generated:", stats.methods.to_string());
    self.stat("Files written:", stats.files.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_modules(plan);
    self.print_warnings(stats);
  }

  fn print_modules(&self, plan: &EmissionPlan) {
    if self.config.quiet || !self.config.verbose {
      return;
    }

    for (tag, module) in plan.iter() {
      println!(
        "              {} -> {} ({})",
        tag.with(self.colors.accent()),
        module.file_name().with(self.colors.info()),
        module.class_name.as_str().with(self.colors.value())
      );
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    // Best effort: a closed stderr must not fail an otherwise successful run.
    let _ = self.write_warnings(&mut io::stderr().lock(), stats);
  }

  /// Writes the separator and every warning to a single stream.
  fn write_warnings(&self, out: &mut impl Write, stats: &GenerationStats) -> io::Result<()> {
    writeln!(out)?;
    for warning in &stats.warnings {
      writeln!(
        out,
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      )?;
    }
    out.flush()
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript client".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);
  let loader = SpecLoader::new()?;

  let output = generate(
    &loader,
    &config.source,
    &config.output,
    config.emit_options(),
    |progress| logger.progress(progress),
  )
  .await?;

  logger.print_statistics(&output.stats, &output.plan);
  logger.log_success();
  Ok(())
}
