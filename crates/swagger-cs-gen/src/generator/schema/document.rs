//! Serde mirror of the Swagger 2.0 subset the generator reads.
//!
//! Every map is an [`IndexMap`] so declaration order survives parsing; the
//! emitted code follows that order.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
  #[serde(default)]
  pub info: Option<RawInfo>,
  #[serde(default)]
  pub definitions: IndexMap<String, RawDefinition>,
  /// Path items are kept untyped here: their keys mix HTTP methods, shared
  /// parameters and `x-` extensions.
  #[serde(default)]
  pub paths: IndexMap<String, IndexMap<String, Value>>,
  #[serde(default)]
  pub security_definitions: Option<IndexMap<String, RawSecurityScheme>>,
  #[serde(default)]
  pub security: Option<Vec<IndexMap<String, Value>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawInfo {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawDefinition {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub properties: IndexMap<String, RawProperty>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawProperty {
  #[serde(rename = "type", default)]
  pub schema_type: Option<String>,
  #[serde(rename = "$ref", default)]
  pub reference: Option<String>,
  #[serde(default)]
  pub items: Option<RawItems>,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawItems {
  #[serde(rename = "type", default)]
  pub schema_type: Option<String>,
  #[serde(rename = "$ref", default)]
  pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOperation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub parameters: Vec<RawParameter>,
  #[serde(default)]
  pub responses: IndexMap<String, RawResponse>,
  #[serde(default)]
  pub security: Option<Vec<IndexMap<String, Value>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  #[serde(default)]
  pub required: bool,
  #[serde(rename = "type", default)]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub items: Option<RawItems>,
  #[serde(default)]
  pub schema: Option<RawItems>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawResponse {
  #[serde(default)]
  pub schema: Option<RawItems>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSecurityScheme {
  #[serde(rename = "type", default)]
  pub scheme_type: String,
}
