use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
  },
  ui::{Cli, Colors},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
  pub input: PathBuf,
  /// `None` writes to standard output.
  pub output: Option<PathBuf>,
}

impl GenerateConfig {
  /// Returns `None` when no input path was given.
  pub fn from_cli(cli: Cli) -> Option<Self> {
    let input = cli.input()?.clone();
    Some(Self {
      input,
      output: cli.output,
    })
  }

  async fn load(&self) -> anyhow::Result<Orchestrator> {
    let loader = SpecLoader::open(&self.input).await?;
    let orchestrator = Orchestrator::from_slice(loader.bytes())
      .with_context(|| format!("failed to load schema document {}", loader.path().display()))?;
    Ok(orchestrator)
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, code)
          .await
          .with_context(|| format!("failed to write {}", path.display()))?;
      }
      None => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(code.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }

  fn destination(&self) -> String {
    self
      .output
      .as_ref()
      .map_or_else(|| "standard output".to_string(), |path| path.display().to_string())
  }
}

/// Progress reporting on stderr; stdout may be carrying the generated code.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
  }

  fn stat(&self, label: &str, value: String) {
    eprintln!(
      "            {:<25} {}",
      label.with(self.colors.label()),
      value.with(self.colors.value())
    );
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating C# client...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("Operations converted:", stats.operations_converted.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.destination())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    eprintln!();
    eprintln!(
      "{} {}",
      format_timestamp().with(self.colors.timestamp()),
      "Successfully generated C# client".with(self.colors.success())
    );
  }
}

/// Load, emit, then write everything in one go; nothing is written on failure.
pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let orchestrator = config.load().await?;

  logger.log_generating();
  let GeneratedOutput { code, stats } = orchestrator.generate_with_header();
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(&code).await?;

  logger.log_success();
  Ok(())
}
