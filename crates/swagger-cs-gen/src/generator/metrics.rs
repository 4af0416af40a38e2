use strum::Display;

use crate::generator::schema::SchemaModel;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub operations_converted: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, model: &SchemaModel) {
    self.types_generated += model.definitions.len();
    self.operations_converted += model.operations.len();
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "[{operation_id}] only the first security alternative is honored, {ignored} ignored")]
  IgnoredSecurityAlternatives { operation_id: String, ignored: usize },
  #[strum(to_string = "[{operation_id}] security scheme '{honored}' is honored, {ignored} other scheme(s) ignored")]
  IgnoredSecuritySchemes {
    operation_id: String,
    honored: String,
    ignored: usize,
  },
  #[strum(to_string = "client method '{method_name}' is generated more than once")]
  DuplicateMethodName { method_name: String },
  #[strum(to_string = "type '{type_name}' is generated more than once")]
  DuplicateTypeName { type_name: String },
}
