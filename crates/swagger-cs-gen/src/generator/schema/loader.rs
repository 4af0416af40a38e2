use http::Method;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
  document::{RawDefinition, RawDocument, RawItems, RawOperation, RawParameter, RawProperty, RawResponse},
  model::{
    ApiInfo, AuthRequirement, DefinitionId, DefinitionTable, ElementType, Operation, Parameter, ParameterLocation,
    ParameterType, Primitive, Property, PropertyType, SchemaModel, TypeDefinition,
  },
};
use crate::generator::{
  errors::{ModelError, ModelResult, Owner, SchemaError, UnsupportedKind, UnsupportedTypeError},
  metrics::GenerationWarning,
  naming::identifiers::{clean_reference, to_pascal_case},
};

pub(crate) const DEFINITIONS_PREFIX: &str = "#/definitions/";

const SHARED_PARAMETERS_KEY: &str = "parameters";
const EXTENSION_PREFIX: &str = "x-";
const SUCCESS_STATUS: &str = "200";

impl SchemaModel {
  /// Parses raw schema bytes and resolves every reference into a [`DefinitionId`].
  ///
  /// Returns the model together with the non-fatal warnings collected while
  /// interpreting the document.
  pub fn load(bytes: &[u8]) -> ModelResult<(Self, Vec<GenerationWarning>)> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let document: RawDocument =
      serde_path_to_error::deserialize(&mut deserializer).map_err(|err| SchemaError::from_path_error(err, ""))?;
    deserializer
      .end()
      .map_err(|err| SchemaError::MalformedDocument {
        path: ".".to_string(),
        message: err.to_string(),
      })?;

    let mut loader = SchemaLoader::new(&document);
    let model = loader.load()?;
    Ok((model, loader.warnings))
  }
}

struct SchemaLoader<'a> {
  document: &'a RawDocument,
  warnings: Vec<GenerationWarning>,
}

impl<'a> SchemaLoader<'a> {
  fn new(document: &'a RawDocument) -> Self {
    Self {
      document,
      warnings: vec![],
    }
  }

  fn load(&mut self) -> ModelResult<SchemaModel> {
    let definitions = self
      .document
      .definitions
      .iter()
      .map(|(name, raw)| self.load_definition(name, raw))
      .collect::<ModelResult<Vec<_>>>()?;

    let document = self.document;
    let mut operations = vec![];
    for (path, item) in &document.paths {
      operations.extend(self.load_path_item(path, item)?);
    }

    let info = self.document.info.as_ref().map(|info| ApiInfo {
      title: info.title.clone(),
      version: info.version.clone(),
    });

    Ok(SchemaModel {
      info,
      definitions: DefinitionTable::new(definitions),
      operations,
    })
  }

  fn resolve(&self, reference: &str, owner: &Owner) -> ModelResult<DefinitionId> {
    reference
      .strip_prefix(DEFINITIONS_PREFIX)
      .and_then(|name| self.document.definitions.get_index_of(name))
      .map(DefinitionId::new)
      .ok_or_else(|| SchemaError::unresolved(owner, reference).into())
  }

  fn load_definition(&self, name: &str, raw: &RawDefinition) -> ModelResult<TypeDefinition> {
    let owner = Owner::definition(name);
    let type_name = clean_reference(name);
    let properties = raw
      .properties
      .iter()
      .map(|(prop_name, prop)| {
        let member = to_pascal_case(prop_name);
        if member == type_name {
          return Err(
            UnsupportedTypeError::new(&owner, prop_name, UnsupportedKind::MemberNamedLikeType { name: member }).into(),
          );
        }
        Ok(Property {
          name: prop_name.clone(),
          description: prop.description.clone(),
          ty: self.property_type(prop_name, prop, &owner)?,
        })
      })
      .collect::<ModelResult<Vec<_>>>()?;

    Ok(TypeDefinition {
      name: name.to_string(),
      type_name,
      description: raw.description.clone(),
      properties,
    })
  }

  fn property_type(&self, name: &str, raw: &RawProperty, owner: &Owner) -> ModelResult<PropertyType> {
    if let Some(reference) = raw.reference.as_deref() {
      return Ok(PropertyType::ReferenceTo(self.resolve(reference, owner)?));
    }

    let Some(schema_type) = raw.schema_type.as_deref() else {
      return Err(SchemaError::missing(owner, format!("properties.{name}.type")).into());
    };

    if schema_type == "array" {
      let items = raw
        .items
        .as_ref()
        .ok_or_else(|| SchemaError::missing(owner, format!("properties.{name}.items")))?;
      return Ok(PropertyType::ArrayOf(self.element_type(name, items, owner)?));
    }

    Primitive::from_schema_type(schema_type)
      .map(PropertyType::from)
      .ok_or_else(|| unsupported_type(owner, name, schema_type))
  }

  fn element_type(&self, name: &str, items: &RawItems, owner: &Owner) -> ModelResult<ElementType> {
    if let Some(reference) = items.reference.as_deref() {
      return Ok(ElementType::Reference(self.resolve(reference, owner)?));
    }

    let schema_type = items
      .schema_type
      .as_deref()
      .ok_or_else(|| SchemaError::missing(owner, format!("properties.{name}.items.type")))?;

    Primitive::from_schema_type(schema_type)
      .map(ElementType::Primitive)
      .ok_or_else(|| {
        UnsupportedTypeError::new(
          owner,
          name,
          UnsupportedKind::ArrayItems {
            name: schema_type.to_string(),
          },
        )
        .into()
      })
  }

  fn load_path_item(&mut self, path: &str, item: &IndexMap<String, Value>) -> ModelResult<Vec<Operation>> {
    let shared: Vec<RawParameter> = match item.get(SHARED_PARAMETERS_KEY) {
      Some(value) => deserialize_at(value, &format!("paths.{path}.{SHARED_PARAMETERS_KEY}"))?,
      None => vec![],
    };

    let mut operations = vec![];
    for (key, value) in item {
      if key == SHARED_PARAMETERS_KEY || key.starts_with(EXTENSION_PREFIX) {
        continue;
      }

      let location = format!("paths.{path}.{key}");
      let method = parse_method(key).ok_or_else(|| SchemaError::MalformedDocument {
        path: location.clone(),
        message: format!("unknown HTTP method '{key}'"),
      })?;
      let raw: RawOperation = deserialize_at(value, &location)?;
      operations.push(self.load_operation(path, method, &shared, &raw)?);
    }

    Ok(operations)
  }

  fn load_operation(
    &mut self,
    path: &str,
    method: Method,
    shared: &[RawParameter],
    raw: &RawOperation,
  ) -> ModelResult<Operation> {
    let owner = Owner::operation(method.as_str(), path);
    let operation_id = raw
      .operation_id
      .clone()
      .ok_or_else(|| SchemaError::missing(&owner, "operationId"))?;

    let not_overridden = |shared_param: &&RawParameter| {
      !raw
        .parameters
        .iter()
        .any(|own| own.name == shared_param.name && own.location == shared_param.location)
    };
    let parameters = shared
      .iter()
      .filter(not_overridden)
      .chain(&raw.parameters)
      .map(|param| self.load_parameter(param, &owner))
      .collect::<ModelResult<Vec<_>>>()?;

    let response = self.load_response(raw, &owner)?;
    let auth = self.auth_requirement(&operation_id, raw.security.as_ref(), &owner)?;

    Ok(Operation {
      path: path.to_string(),
      method,
      operation_id,
      summary: raw.summary.clone(),
      parameters,
      auth,
      response,
    })
  }

  fn load_parameter(&self, raw: &RawParameter, owner: &Owner) -> ModelResult<Parameter> {
    let name = raw.name.as_str();
    let (location, required, ty) = match raw.location.as_str() {
      "path" => {
        let primitive = primitive_parameter(raw, owner)?;
        (ParameterLocation::Path, true, ParameterType::Primitive(primitive))
      }
      "query" => {
        let ty = if raw.schema_type.as_deref() == Some("array") {
          let item_type = raw
            .items
            .as_ref()
            .and_then(|items| items.schema_type.as_deref())
            .ok_or_else(|| SchemaError::missing(owner, format!("parameters.{name}.items.type")))?;
          let primitive = Primitive::from_schema_type(item_type).ok_or_else(|| {
            UnsupportedTypeError::new(
              owner,
              name,
              UnsupportedKind::ArrayItems {
                name: item_type.to_string(),
              },
            )
          })?;
          ParameterType::ArrayOf(primitive)
        } else {
          ParameterType::Primitive(primitive_parameter(raw, owner)?)
        };
        (ParameterLocation::Query, raw.required, ty)
      }
      "body" => {
        let schema = raw
          .schema
          .as_ref()
          .ok_or_else(|| SchemaError::missing(owner, format!("parameters.{name}.schema")))?;
        let ty = match (schema.reference.as_deref(), schema.schema_type.as_deref()) {
          (Some(reference), _) => ParameterType::Reference(self.resolve(reference, owner)?),
          (None, Some("string")) => ParameterType::Primitive(Primitive::String),
          (None, Some(other)) => return Err(unsupported_type(owner, name, other)),
          (None, None) => {
            return Err(UnsupportedTypeError::new(owner, name, UnsupportedKind::InlineSchema).into());
          }
        };
        (ParameterLocation::Body, raw.required, ty)
      }
      other => {
        return Err(
          UnsupportedTypeError::new(
            owner,
            name,
            UnsupportedKind::Location {
              name: other.to_string(),
            },
          )
          .into(),
        );
      }
    };

    Ok(Parameter {
      name: name.to_string(),
      location,
      required,
      ty,
    })
  }

  fn load_response(&self, raw: &RawOperation, owner: &Owner) -> ModelResult<Option<DefinitionId>> {
    let (status, response) =
      success_response(raw).ok_or_else(|| SchemaError::missing(owner, format!("responses.{SUCCESS_STATUS}")))?;
    let field = format!("responses.{status}");

    let Some(schema) = response.schema.as_ref() else {
      return Ok(None);
    };

    match (schema.reference.as_deref(), schema.schema_type.as_deref()) {
      (Some(reference), _) => Ok(Some(self.resolve(reference, owner)?)),
      (None, Some(other)) => Err(unsupported_type(owner, &field, other)),
      (None, None) => Err(UnsupportedTypeError::new(owner, &field, UnsupportedKind::InlineSchema).into()),
    }
  }

  fn auth_requirement(
    &mut self,
    operation_id: &str,
    security: Option<&Vec<IndexMap<String, Value>>>,
    owner: &Owner,
  ) -> ModelResult<AuthRequirement> {
    let alternatives = security
      .filter(|alternatives| !alternatives.is_empty())
      .or_else(|| self.document.security.as_ref().filter(|alternatives| !alternatives.is_empty()));

    let Some((first, rest)) = alternatives.and_then(|alternatives| alternatives.split_first()) else {
      return Ok(AuthRequirement::BearerToken);
    };

    if !rest.is_empty() {
      self.warnings.push(GenerationWarning::IgnoredSecurityAlternatives {
        operation_id: operation_id.to_string(),
        ignored: rest.len(),
      });
    }

    let Some(scheme) = first.keys().next() else {
      return Ok(AuthRequirement::None);
    };

    if first.len() > 1 {
      self.warnings.push(GenerationWarning::IgnoredSecuritySchemes {
        operation_id: operation_id.to_string(),
        honored: scheme.clone(),
        ignored: first.len() - 1,
      });
    }

    self.classify_scheme(scheme, owner)
  }

  fn classify_scheme(&self, scheme: &str, owner: &Owner) -> ModelResult<AuthRequirement> {
    let Some(definitions) = self.document.security_definitions.as_ref() else {
      return Ok(match scheme {
        "BasicAuth" => AuthRequirement::BasicCredentials,
        "HttpKeyAuth" => AuthRequirement::BearerToken,
        _ => AuthRequirement::None,
      });
    };

    let definition = definitions
      .get(scheme)
      .ok_or_else(|| SchemaError::unresolved(owner, scheme))?;

    match definition.scheme_type.as_str() {
      "basic" => Ok(AuthRequirement::BasicCredentials),
      "apiKey" | "oauth2" => Ok(AuthRequirement::BearerToken),
      other => Err(
        UnsupportedTypeError::new(
          owner,
          &format!("security.{scheme}"),
          UnsupportedKind::Type {
            name: other.to_string(),
          },
        )
        .into(),
      ),
    }
  }
}

fn primitive_parameter(raw: &RawParameter, owner: &Owner) -> ModelResult<Primitive> {
  let name = raw.name.as_str();
  let schema_type = raw
    .schema_type
    .as_deref()
    .ok_or_else(|| SchemaError::missing(owner, format!("parameters.{name}.type")))?;
  Primitive::from_schema_type(schema_type).ok_or_else(|| unsupported_type(owner, name, schema_type))
}

fn success_response(raw: &RawOperation) -> Option<(&str, &RawResponse)> {
  if let Some(response) = raw.responses.get(SUCCESS_STATUS) {
    return Some((SUCCESS_STATUS, response));
  }

  raw
    .responses
    .iter()
    .find(|(status, _)| status.len() == 3 && status.starts_with('2'))
    .map(|(status, response)| (status.as_str(), response))
}

fn parse_method(key: &str) -> Option<Method> {
  match key {
    "get" => Some(Method::GET),
    "put" => Some(Method::PUT),
    "post" => Some(Method::POST),
    "delete" => Some(Method::DELETE),
    "options" => Some(Method::OPTIONS),
    "head" => Some(Method::HEAD),
    "patch" => Some(Method::PATCH),
    _ => None,
  }
}

fn deserialize_at<T: DeserializeOwned>(value: &Value, prefix: &str) -> ModelResult<T> {
  serde_path_to_error::deserialize(value)
    .map_err(|err| SchemaError::from_path_error(err, prefix).into())
}

fn unsupported_type(owner: &Owner, field: &str, schema_type: &str) -> ModelError {
  UnsupportedTypeError::new(
    owner,
    field,
    UnsupportedKind::Type {
      name: schema_type.to_string(),
    },
  )
  .into()
}
