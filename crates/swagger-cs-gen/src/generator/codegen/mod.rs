//! C# source emission.
//!
//! Every piece of output is an [`Emit`] fragment written into a shared
//! [`CodeWriter`]; [`generate`] assembles them into one compilation unit:
//! namespace, usings, runtime support types, one interface/class pair per
//! definition and the `ApiClient` class.

pub(crate) mod client;
pub(crate) mod mapping;
pub(crate) mod runtime;
pub(crate) mod types;
pub(crate) mod writer;

#[cfg(test)]
mod tests;

use self::{
  client::ClientFragment,
  runtime::{RuntimeFragment, USINGS},
  types::TypeDefinitionFragment,
  writer::{CodeWriter, Emit},
};
use crate::generator::{naming::identifiers::to_namespace, schema::SchemaModel};

/// The whole compilation unit for a loaded schema.
pub(crate) struct CompilationUnit<'a> {
  model: &'a SchemaModel,
}

impl<'a> CompilationUnit<'a> {
  pub(crate) fn new(model: &'a SchemaModel) -> Self {
    Self { model }
  }

  pub(crate) fn namespace(&self) -> String {
    to_namespace(self.model.info.as_ref().map_or("", |info| info.title.as_str()))
  }
}

impl Emit for CompilationUnit<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    out.block(format!("namespace {}", self.namespace()), |out| {
      for using in USINGS {
        out.line(format!("using {using};"));
      }
      out.blank();
      out.emit(&RuntimeFragment);

      for definition in self.model.definitions.iter() {
        out.blank();
        out.emit(&TypeDefinitionFragment::new(definition, &self.model.definitions));
      }

      out.blank();
      out.emit(&ClientFragment::new(self.model));
    });
  }
}

pub(crate) fn generate(model: &SchemaModel) -> String {
  let mut out = CodeWriter::new();
  out.emit(&CompilationUnit::new(model));
  out.into_string()
}
