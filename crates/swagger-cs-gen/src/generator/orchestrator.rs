//! Orchestration for the Swagger to C# generation pipeline.
//!
//! The `Orchestrator` owns a loaded [`SchemaModel`] and turns it into one C#
//! compilation unit plus the statistics gathered on the way. Name collisions
//! that survive into the output are reported as [`GenerationWarning`]s.

use itertools::Itertools;

use crate::generator::{
  codegen::{self, client::method_name},
  errors::ModelResult,
  metrics::{GenerationStats, GenerationWarning},
  naming::identifiers::strip_newlines,
  schema::SchemaModel,
};

pub(crate) const GENERATED_MARKER: &str = "/* Code generated by swagger-cs-gen. DO NOT EDIT. */";

/// Generated source together with what it took to produce it.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

/// Metadata about the schema used for the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
}

pub struct Orchestrator {
  model: SchemaModel,
  load_warnings: Vec<GenerationWarning>,
}

impl Orchestrator {
  pub fn new(model: SchemaModel, load_warnings: Vec<GenerationWarning>) -> Self {
    Self { model, load_warnings }
  }

  /// Loads and resolves the raw document bytes.
  ///
  /// # Errors
  ///
  /// Fails with the first structural, reference or type-support problem found.
  pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
    let (model, warnings) = SchemaModel::load(bytes)?;
    Ok(Self::new(model, warnings))
  }

  pub fn metadata(&self) -> Option<CodeMetadata> {
    // Both values end up inside a block comment.
    let comment_safe = |text: &str| strip_newlines(text).replace("*/", "* /");
    self.model.info.as_ref().map(|info| CodeMetadata {
      title: comment_safe(&info.title),
      version: comment_safe(&info.version),
    })
  }

  /// Emits the compilation unit without the generated-code header.
  pub fn generate(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();
    stats.record_model(&self.model);
    stats.record_warnings(self.load_warnings.iter().cloned());
    stats.record_warnings(self.duplicate_type_names());
    stats.record_warnings(self.duplicate_method_names());

    GeneratedOutput {
      code: codegen::generate(&self.model),
      stats,
    }
  }

  /// Emits the compilation unit preceded by the generated-code marker and,
  /// when the schema has an `info` block, its title and version.
  pub fn generate_with_header(&self) -> GeneratedOutput {
    let GeneratedOutput { code, stats } = self.generate();

    let mut header = format!("{GENERATED_MARKER}\n");
    if let Some(metadata) = self.metadata() {
      header.push_str(&format!("/* {} (version {}) */\n", metadata.title, metadata.version));
    }

    GeneratedOutput {
      code: format!("{header}\n{code}"),
      stats,
    }
  }

  fn duplicate_type_names(&self) -> Vec<GenerationWarning> {
    self
      .model
      .definitions
      .iter()
      .map(|definition| definition.type_name.clone())
      .duplicates()
      .map(|type_name| GenerationWarning::DuplicateTypeName { type_name })
      .collect()
  }

  fn duplicate_method_names(&self) -> Vec<GenerationWarning> {
    self
      .model
      .operations
      .iter()
      .map(method_name)
      .duplicates()
      .map(|method_name| GenerationWarning::DuplicateMethodName { method_name })
      .collect()
  }
}
