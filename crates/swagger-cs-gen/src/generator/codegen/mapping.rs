//! The fixed schema → C# type table.

use crate::generator::schema::{
  DefinitionId, DefinitionTable, ElementType, Parameter, ParameterLocation, ParameterType, Primitive, PropertyType,
};

pub(crate) const fn primitive_type(primitive: Primitive) -> &'static str {
  match primitive {
    Primitive::Integer => "int",
    Primitive::Boolean => "bool",
    Primitive::String => "string",
  }
}

/// C# value types cannot hold `null` unless wrapped in `Nullable<T>`.
pub(crate) const fn is_value_type(primitive: Primitive) -> bool {
  matches!(primitive, Primitive::Integer | Primitive::Boolean)
}

pub(crate) fn interface_name(table: &DefinitionTable, id: DefinitionId) -> String {
  format!("I{}", table.type_name(id))
}

/// Type exposed by the capability interface (and the class accessor implementing it).
pub(crate) fn accessor_type(table: &DefinitionTable, ty: PropertyType) -> String {
  match ty {
    PropertyType::Integer => primitive_type(Primitive::Integer).to_string(),
    PropertyType::Boolean => primitive_type(Primitive::Boolean).to_string(),
    PropertyType::String => primitive_type(Primitive::String).to_string(),
    PropertyType::ArrayOf(ElementType::Primitive(primitive)) => format!("List<{}>", primitive_type(primitive)),
    PropertyType::ArrayOf(ElementType::Reference(id)) => format!("IEnumerable<{}>", interface_name(table, id)),
    PropertyType::ReferenceTo(id) => interface_name(table, id),
  }
}

/// Type of a generated method argument.
pub(crate) fn argument_type(table: &DefinitionTable, param: &Parameter) -> String {
  match param.ty {
    ParameterType::Primitive(primitive) if is_nullable_value(param) => format!("{}?", primitive_type(primitive)),
    ParameterType::Primitive(primitive) => primitive_type(primitive).to_string(),
    ParameterType::ArrayOf(primitive) => format!("IEnumerable<{}>", primitive_type(primitive)),
    ParameterType::Reference(id) => table.type_name(id).to_string(),
  }
}

/// Optional query values of value type are bound as `T?` so callers can leave them out.
pub(crate) fn is_nullable_value(param: &Parameter) -> bool {
  matches!(param.ty, ParameterType::Primitive(primitive) if is_value_type(primitive))
    && param.location == ParameterLocation::Query
    && !param.required
}

/// Whether the argument can be `null` at runtime.
pub(crate) fn admits_null(param: &Parameter) -> bool {
  match param.ty {
    ParameterType::Primitive(primitive) => !is_value_type(primitive) || is_nullable_value(param),
    ParameterType::ArrayOf(_) | ParameterType::Reference(_) => true,
  }
}

/// Expression turning a value of `primitive` into its textual wire form.
pub(crate) fn to_wire_string(primitive: Primitive, expr: &str) -> String {
  match primitive {
    Primitive::Integer => format!("{expr}.ToString()"),
    Primitive::Boolean => format!("{expr}.ToString().ToLower()"),
    Primitive::String => expr.to_string(),
  }
}
