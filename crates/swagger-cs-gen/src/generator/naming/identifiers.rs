//! Naming rules that map schema identifiers onto C# identifiers.
//!
//! All functions here are total: any input, including the empty string, produces a value.

use super::reserved::{escape_keyword, sanitize};
use crate::generator::schema::DEFINITIONS_PREFIX;

pub(crate) const DEFAULT_NAMESPACE: &str = "Api";

/// Upper-cases the first character and leaves the rest untouched.
///
/// ```text
/// apiAccount   => ApiAccount
/// api_account  => Api_account
/// ```
pub(crate) fn to_title_case(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// `snake_case` to `PascalCase`: `create_match` => `CreateMatch`.
pub(crate) fn to_pascal_case(input: &str) -> String {
  convert_snake_case(input, true)
}

/// `snake_case` to `camelCase`: `create_match` => `createMatch`.
pub(crate) fn to_camel_case(input: &str) -> String {
  convert_snake_case(input, false)
}

/// Single left-to-right scan. Position 0 is forced to the requested case and is
/// never treated as a separator; after that an underscore is dropped and arms a
/// flag that upper-cases whatever character comes next, underscores included.
fn convert_snake_case(input: &str, upper_first: bool) -> String {
  let mut output = String::with_capacity(input.len());
  let mut capitalize_next = false;

  for (index, ch) in input.chars().enumerate() {
    if index == 0 {
      if upper_first {
        output.extend(ch.to_uppercase());
      } else {
        output.extend(ch.to_lowercase());
      }
    } else if capitalize_next {
      output.extend(ch.to_uppercase());
      capitalize_next = false;
    } else if ch == '_' {
      capitalize_next = true;
    } else {
      output.push(ch);
    }
  }

  output
}

/// Collapses free text onto one line so it can sit inside a `///` comment.
pub(crate) fn strip_newlines(input: &str) -> String {
  input.replace("\r\n", " ").replace('\n', " ")
}

/// `#/definitions/apiSession` => `ApiSession`. Applying it to an already cleaned name is a no-op.
pub(crate) fn clean_reference(reference: &str) -> String {
  to_title_case(reference.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(reference))
}

/// Identifier for a generated method argument.
pub(crate) fn to_parameter_name(name: &str) -> String {
  escape_keyword(&to_camel_case(name))
}

/// Name of the concrete-typed backing field behind an interface-typed accessor.
pub(crate) fn to_backing_field_name(name: &str) -> String {
  format!("_{}", to_camel_case(name))
}

/// C# namespace derived from the API title.
///
/// ```text
/// "Nakama API v2" => NakamaAPIV2
/// ""              => Api
/// "2fa service"   => Api2faService
/// ```
pub(crate) fn to_namespace(title: &str) -> String {
  let namespace: String = sanitize(title).split('_').map(to_title_case).collect();

  match namespace.chars().next() {
    None => DEFAULT_NAMESPACE.to_string(),
    Some(first) if first.is_ascii_digit() => format!("{DEFAULT_NAMESPACE}{namespace}"),
    Some(_) => namespace,
  }
}
