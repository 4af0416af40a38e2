use serde_json::{Value, json};

use crate::generator::{
  errors::ModelError,
  metrics::GenerationWarning,
  orchestrator::Orchestrator,
  schema::{DefinitionId, Operation, SchemaModel},
};

pub(crate) const NAKAMA_API: &str = include_str!("../../../fixtures/nakama_api.json");

/// Wraps `definitions` and `paths` in a minimal document.
pub(crate) fn document(definitions: Value, paths: Value) -> String {
  json!({
    "swagger": "2.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "definitions": definitions,
    "paths": paths,
  })
  .to_string()
}

pub(crate) fn load(json: &str) -> (SchemaModel, Vec<GenerationWarning>) {
  SchemaModel::load(json.as_bytes()).expect("test document should load")
}

pub(crate) fn load_model(json: &str) -> SchemaModel {
  load(json).0
}

pub(crate) fn load_error(json: &str) -> ModelError {
  SchemaModel::load(json.as_bytes()).expect_err("test document should be rejected")
}

pub(crate) fn generate(json: &str) -> String {
  Orchestrator::from_slice(json.as_bytes())
    .expect("test document should load")
    .generate()
    .code
}

pub(crate) fn definition_id(model: &SchemaModel, name: &str) -> DefinitionId {
  model
    .definitions
    .iter()
    .position(|definition| definition.name == name)
    .map(DefinitionId::new)
    .unwrap_or_else(|| panic!("definition '{name}' should exist"))
}

pub(crate) fn operation<'a>(model: &'a SchemaModel, operation_id: &str) -> &'a Operation {
  model
    .operations
    .iter()
    .find(|operation| operation.operation_id == operation_id)
    .unwrap_or_else(|| panic!("operation '{operation_id}' should exist"))
}

/// The text from `start` up to the next `stop` marker (or the end of `code`).
pub(crate) fn section<'a>(code: &'a str, start: &str, stop: &str) -> &'a str {
  let begin = code
    .find(start)
    .unwrap_or_else(|| panic!("'{start}' should appear in generated code"));
  let rest = &code[begin..];
  let end = rest[start.len()..].find(stop).map_or(rest.len(), |index| index + start.len());
  &rest[..end]
}

/// One generated client method, from its signature to the next doc comment.
pub(crate) fn method<'a>(code: &'a str, method_name: &str) -> &'a str {
  section(code, &format!(" {method_name}("), "/// <summary>")
}

pub(crate) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(code.contains(expected), "missing {context}: expected '{expected}'");
}

pub(crate) fn assert_not_contains(code: &str, pattern: &str, context: &str) {
  assert!(!code.contains(pattern), "{context}: '{pattern}' should not appear");
}

pub(crate) fn assert_contains_all(code: &str, checks: &[(&str, &str)]) {
  for (expected, context) in checks {
    assert_contains(code, expected, context);
  }
}

pub(crate) fn assert_in_order(code: &str, patterns: &[&str]) {
  let mut cursor = 0;
  for pattern in patterns {
    let found = code[cursor..]
      .find(pattern)
      .unwrap_or_else(|| panic!("'{pattern}' should appear after byte {cursor}"));
    cursor += found + pattern.len();
  }
}
