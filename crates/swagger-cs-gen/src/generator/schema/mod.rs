//! In-memory model of the schema document.
//!
//! Parsing happens in two passes: the raw document is deserialized as-is, then
//! every `$ref` string is resolved into a [`DefinitionId`] so nothing downstream
//! ever looks at reference strings again.

mod document;
mod loader;
mod model;

pub(crate) use loader::DEFINITIONS_PREFIX;
pub use model::{
  AuthRequirement, DefinitionId, DefinitionTable, ElementType, Operation, Parameter, ParameterLocation,
  ParameterType, Primitive, Property, PropertyType, SchemaModel, TypeDefinition,
};
