use http::Method;

/// Index of a [`TypeDefinition`] inside its [`DefinitionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(usize);

impl DefinitionId {
  pub(crate) const fn new(index: usize) -> Self {
    Self(index)
  }

  pub const fn index(self) -> usize {
    self.0
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
  Integer,
  Boolean,
  String,
}

impl Primitive {
  pub(crate) fn from_schema_type(schema_type: &str) -> Option<Self> {
    match schema_type {
      "integer" => Some(Self::Integer),
      "boolean" => Some(Self::Boolean),
      "string" => Some(Self::String),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
  Primitive(Primitive),
  Reference(DefinitionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
  Integer,
  Boolean,
  String,
  ArrayOf(ElementType),
  ReferenceTo(DefinitionId),
}

impl From<Primitive> for PropertyType {
  fn from(primitive: Primitive) -> Self {
    match primitive {
      Primitive::Integer => Self::Integer,
      Primitive::Boolean => Self::Boolean,
      Primitive::String => Self::String,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
  /// Wire name, exactly as declared in the schema.
  pub name: String,
  pub description: Option<String>,
  pub ty: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
  /// Schema key under `definitions`.
  pub name: String,
  /// Generated type name (`ToTitleCase(name)`).
  pub type_name: String,
  pub description: Option<String>,
  pub properties: Vec<Property>,
}

/// Resolution table for definitions, addressed by [`DefinitionId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionTable {
  definitions: Vec<TypeDefinition>,
}

impl DefinitionTable {
  pub(crate) fn new(definitions: Vec<TypeDefinition>) -> Self {
    Self { definitions }
  }

  /// Returns the definition behind `id`.
  ///
  /// Ids are only handed out by the table that owns them, so indexing cannot go out of range.
  pub fn get(&self, id: DefinitionId) -> &TypeDefinition {
    &self.definitions[id.index()]
  }

  pub fn type_name(&self, id: DefinitionId) -> &str {
    &self.get(id).type_name
  }

  pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
    self.definitions.iter()
  }

  pub fn len(&self) -> usize {
    self.definitions.len()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
  Path,
  Query,
  Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
  Primitive(Primitive),
  ArrayOf(Primitive),
  Reference(DefinitionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub required: bool,
  pub ty: ParameterType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthRequirement {
  None,
  BasicCredentials,
  #[default]
  BearerToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
  /// URL template, e.g. `/v2/account/{id}`.
  pub path: String,
  pub method: Method,
  pub operation_id: String,
  pub summary: Option<String>,
  pub parameters: Vec<Parameter>,
  pub auth: AuthRequirement,
  /// `None` for no-content responses.
  pub response: Option<DefinitionId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInfo {
  pub title: String,
  pub version: String,
}

/// Fully resolved, read-only view of a schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
  pub info: Option<ApiInfo>,
  pub definitions: DefinitionTable,
  pub operations: Vec<Operation>,
}
