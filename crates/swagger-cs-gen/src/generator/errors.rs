use strum::Display;
use thiserror::Error;

/// The schema entity an error or warning is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Owner {
  #[strum(to_string = "definition '{name}'")]
  Definition { name: String },
  #[strum(to_string = "operation '{method} {path}'")]
  Operation { method: String, path: String },
}

impl Owner {
  pub(crate) fn definition(name: &str) -> Self {
    Self::Definition { name: name.to_string() }
  }

  pub(crate) fn operation(method: &str, path: &str) -> Self {
    Self::Operation {
      method: method.to_uppercase(),
      path: path.to_string(),
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
  #[error("malformed schema document at '{path}': {message}")]
  MalformedDocument { path: String, message: String },
  /// A field the generator cannot do without is absent; a malformed document in all but name.
  #[error("malformed schema document: {owner} is missing required field '{field}'")]
  MissingField { owner: Owner, field: String },
  #[error("unresolved reference '{reference}' in {owner}")]
  UnresolvedReference { owner: Owner, reference: String },
}

impl SchemaError {
  pub(crate) fn missing(owner: &Owner, field: impl Into<String>) -> Self {
    Self::MissingField {
      owner: owner.clone(),
      field: field.into(),
    }
  }

  pub(crate) fn unresolved(owner: &Owner, reference: &str) -> Self {
    Self::UnresolvedReference {
      owner: owner.clone(),
      reference: reference.to_string(),
    }
  }

  pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>, prefix: &str) -> Self {
    let inner = err.path().to_string();
    let path = match (prefix.is_empty(), inner.as_str()) {
      (true, _) => inner.clone(),
      (false, "." | "") => prefix.to_string(),
      (false, _) => format!("{prefix}.{inner}"),
    };
    Self::MalformedDocument {
      path,
      message: err.into_inner().to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UnsupportedKind {
  #[strum(to_string = "type '{name}'")]
  Type { name: String },
  #[strum(to_string = "array item type '{name}'")]
  ArrayItems { name: String },
  #[strum(to_string = "parameter location '{name}'")]
  Location { name: String },
  #[strum(to_string = "inline schema")]
  InlineSchema,
  /// C# rejects a member named like its enclosing type.
  #[strum(to_string = "member name '{name}' equal to its enclosing type")]
  MemberNamedLikeType { name: String },
}

/// A schema value whose shape has no entry in the fixed C# mapping table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported {kind} for '{field}' in {owner}")]
pub struct UnsupportedTypeError {
  pub owner: Owner,
  pub field: String,
  pub kind: UnsupportedKind,
}

impl UnsupportedTypeError {
  pub(crate) fn new(owner: &Owner, field: &str, kind: UnsupportedKind) -> Self {
    Self {
      owner: owner.clone(),
      field: field.to_string(),
      kind,
    }
  }
}

/// Any failure that prevents a [`SchemaModel`](super::schema::SchemaModel) from being built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
  #[error(transparent)]
  Schema(#[from] SchemaError),
  #[error(transparent)]
  UnsupportedType(#[from] UnsupportedTypeError),
}

pub(crate) type ModelResult<T> = Result<T, ModelError>;
