use serde_json::json;

use crate::generator::{
  codegen::{
    types::TypeDefinitionFragment,
    writer::{CodeWriter, Emit},
  },
  schema::SchemaModel,
  tests::support::{
    NAKAMA_API, assert_contains, assert_contains_all, assert_not_contains, definition_id, document, load_model,
  },
};

fn emit_definition(model: &SchemaModel, name: &str) -> String {
  let id = definition_id(model, name);
  let mut out = CodeWriter::new();
  TypeDefinitionFragment::new(model.definitions.get(id), &model.definitions).emit(&mut out);
  out.into_string()
}

#[test]
fn test_primitive_and_array_properties() {
  let json = document(
    json!({
      "apiUser": {
        "properties": {
          "create_time": { "type": "integer" },
          "labels": { "type": "array", "items": { "type": "string" } }
        }
      }
    }),
    json!({}),
  );

  let expected = r#"public interface IApiUser
{
    int CreateTime { get; }

    List<string> Labels { get; }
}

/// <inheritdoc />
internal class ApiUser : IApiUser
{
    /// <inheritdoc />
    [DataMember(Name="create_time")]
    public int CreateTime { get; set; }

    /// <inheritdoc />
    [DataMember(Name="labels")]
    public List<string> Labels { get; set; }

    public override string ToString()
    {
        var output = "";
        output = string.Concat(output, "CreateTime: ", CreateTime, ", ");
        output = string.Concat(output, "Labels: [", string.Join(", ", Labels), "], ");
        return output;
    }
}
"#;

  assert_eq!(emit_definition(&load_model(&json), "apiUser"), expected);
}

#[test]
fn test_reference_properties_use_backing_fields() {
  let code = emit_definition(&load_model(NAKAMA_API), "apiAccount");

  assert_contains_all(
    &code,
    &[
      ("IApiUser User { get; }", "interface reference accessor"),
      (
        "IEnumerable<IApiAccountDevice> Devices { get; }",
        "interface reference array accessor",
      ),
      ("public IApiUser User => _user;", "class reference accessor"),
      (
        "[DataMember(Name=\"user\")]\n    public ApiUser _user { get; set; }",
        "reference backing field",
      ),
      (
        "public IEnumerable<IApiAccountDevice> Devices => _devices ?? new List<ApiAccountDevice>(0);",
        "array accessor default",
      ),
      (
        "[DataMember(Name=\"devices\")]\n    public List<ApiAccountDevice> _devices { get; set; }",
        "array backing field",
      ),
      ("[DataMember(Name=\"verify_time\")]\n    public int VerifyTime { get; set; }", "primitive member"),
    ],
  );
  assert_not_contains(&code, "[DataMember(Name=\"user\")]\n    public IApiUser", "metadata on accessor");
}

#[test]
fn test_descriptions_become_single_line_summaries() {
  let model = load_model(NAKAMA_API);

  let email = emit_definition(&model, "apiAccountEmail");
  assert!(email.starts_with(
    "/// <summary>\n/// Send an email with password to the server. Used with authenticate/link/unlink.\n/// </summary>\npublic interface IApiAccountEmail\n"
  ));
  assert_contains(
    &email,
    "    /// <summary>\n    /// A valid RFC-5322 email address.\n    /// </summary>\n    string Email { get; }",
    "property summary",
  );
}

#[test]
fn test_empty_definition_still_emits_types() {
  let code = emit_definition(&load_model(NAKAMA_API), "protobufEmpty");

  assert_contains_all(
    &code,
    &[
      ("public interface IProtobufEmpty\n{\n}\n", "empty interface"),
      ("internal class ProtobufEmpty : IProtobufEmpty\n{\n", "class"),
      ("var output = \"\";\n        return output;", "empty ToString"),
    ],
  );
}

#[test]
fn test_type_names_are_title_cased_and_wire_names_kept() {
  let json = document(
    json!({
      "writeStorageObjectsRequest": {
        "properties": {
          "objects": { "type": "array", "items": { "$ref": "#/definitions/writeStorageObjectsRequest" } },
          "permission_read": { "type": "boolean" }
        }
      }
    }),
    json!({}),
  );

  let code = emit_definition(&load_model(&json), "writeStorageObjectsRequest");
  assert_contains_all(
    &code,
    &[
      ("public interface IWriteStorageObjectsRequest", "interface name"),
      (
        "IEnumerable<IWriteStorageObjectsRequest> Objects { get; }",
        "self-referencing array",
      ),
      ("[DataMember(Name=\"permission_read\")]", "wire name"),
      ("public bool PermissionRead { get; set; }", "renamed identifier"),
    ],
  );
}
