use super::{
  mapping::accessor_type,
  writer::{CodeWriter, Emit, string_literal},
};
use crate::generator::{
  naming::identifiers::{strip_newlines, to_backing_field_name, to_pascal_case},
  schema::{DefinitionTable, ElementType, Property, PropertyType, TypeDefinition},
};

/// Interface, implementing class and `ToString` for one schema definition.
pub(crate) struct TypeDefinitionFragment<'a> {
  definition: &'a TypeDefinition,
  table: &'a DefinitionTable,
}

impl<'a> TypeDefinitionFragment<'a> {
  pub(crate) fn new(definition: &'a TypeDefinition, table: &'a DefinitionTable) -> Self {
    Self { definition, table }
  }

  fn emit_interface(&self, out: &mut CodeWriter) {
    let name = &self.definition.type_name;

    if let Some(description) = &self.definition.description {
      out.summary(&strip_newlines(description));
    }
    out.block(format!("public interface I{name}"), |out| {
      for (index, property) in self.definition.properties.iter().enumerate() {
        if index > 0 {
          out.blank();
        }
        if let Some(description) = &property.description {
          out.summary(&strip_newlines(description));
        }
        out.line(format!(
          "{} {} {{ get; }}",
          accessor_type(self.table, property.ty),
          to_pascal_case(&property.name)
        ));
      }
    });
  }

  fn emit_class(&self, out: &mut CodeWriter) {
    let name = &self.definition.type_name;

    out.line("/// <inheritdoc />");
    out.block(format!("internal class {name} : I{name}"), |out| {
      for property in &self.definition.properties {
        out.emit(&PropertyFragment::new(property, self.table));
        out.blank();
      }
      out.emit(&ToStringFragment::new(&self.definition.properties));
    });
  }
}

impl Emit for TypeDefinitionFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    self.emit_interface(out);
    out.blank();
    self.emit_class(out);
  }
}

/// A class member implementing one interface accessor, tagged with its wire name.
///
/// Reference-typed values are exposed through the interface type and stored in a
/// concrete-typed backing field, which is the member the serializer sees.
struct PropertyFragment<'a> {
  property: &'a Property,
  table: &'a DefinitionTable,
}

impl<'a> PropertyFragment<'a> {
  fn new(property: &'a Property, table: &'a DefinitionTable) -> Self {
    Self { property, table }
  }
}

impl Emit for PropertyFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    let name = to_pascal_case(&self.property.name);
    let data_member = format!("[DataMember(Name={})]", string_literal(&self.property.name));
    let accessor = accessor_type(self.table, self.property.ty);

    out.line("/// <inheritdoc />");
    match self.property.ty {
      PropertyType::Integer
      | PropertyType::Boolean
      | PropertyType::String
      | PropertyType::ArrayOf(ElementType::Primitive(_)) => {
        out.line(data_member);
        out.line(format!("public {accessor} {name} {{ get; set; }}"));
      }
      PropertyType::ArrayOf(ElementType::Reference(id)) => {
        let field = to_backing_field_name(&self.property.name);
        let concrete = self.table.type_name(id);
        out.line(format!("public {accessor} {name} => {field} ?? new List<{concrete}>(0);"));
        out.line(data_member);
        out.line(format!("public List<{concrete}> {field} {{ get; set; }}"));
      }
      PropertyType::ReferenceTo(id) => {
        let field = to_backing_field_name(&self.property.name);
        out.line(format!("public {accessor} {name} => {field};"));
        out.line(data_member);
        out.line(format!("public {} {field} {{ get; set; }}", self.table.type_name(id)));
      }
    }
  }
}

/// Debug rendering: `Name: value, ` per property, arrays as `[a, b]`.
struct ToStringFragment<'a> {
  properties: &'a [Property],
}

impl<'a> ToStringFragment<'a> {
  fn new(properties: &'a [Property]) -> Self {
    Self { properties }
  }
}

impl Emit for ToStringFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    out.block("public override string ToString()", |out| {
      out.line("var output = \"\";");
      for property in self.properties {
        let name = to_pascal_case(&property.name);
        if matches!(property.ty, PropertyType::ArrayOf(_)) {
          out.line(format!(
            "output = string.Concat(output, \"{name}: [\", string.Join(\", \", {name}), \"], \");"
          ));
        } else {
          out.line(format!("output = string.Concat(output, \"{name}: \", {name}, \", \");"));
        }
      }
      out.line("return output;");
    });
  }
}
