use std::collections::HashSet;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::{
  mapping::{admits_null, argument_type, interface_name, primitive_type, to_wire_string},
  runtime::{ADAPTER_INTERFACE, RESPONSE_EXCEPTION},
  writer::{CodeWriter, Emit, string_literal},
};
use crate::generator::{
  naming::identifiers::{strip_newlines, to_parameter_name, to_pascal_case},
  schema::{
    AuthRequirement, DefinitionTable, Operation, Parameter, ParameterLocation, ParameterType, Primitive, SchemaModel,
  },
};

pub(crate) const CLIENT_CLASS: &str = "ApiClient";
pub(crate) const METHOD_SUFFIX: &str = "Async";

const BEARER_TOKEN: &str = "bearerToken";
const USERNAME: &str = "username";
const PASSWORD: &str = "password";
const PREFIXED_USERNAME: &str = "basicAuthUsername";
const PREFIXED_PASSWORD: &str = "basicAuthPassword";
const PREFIXED_TOKEN: &str = "bearerAuthToken";

/// Locals declared in every method body; arguments must not shadow them.
const METHOD_LOCALS: [&str; 9] = [
  "urlpath",
  "queryParams",
  "uri",
  "request",
  "header",
  "credentials",
  "response",
  "contents",
  "elem",
];
const CLASH_SUFFIX: &str = "Param";

/// Everything but RFC 3986 unreserved characters is escaped in query keys.
const QUERY_KEY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

pub(crate) fn query_key(name: &str) -> String {
  utf8_percent_encode(name, QUERY_KEY).to_string()
}

pub(crate) fn method_name(operation: &Operation) -> String {
  format!("{}{METHOD_SUFFIX}", to_pascal_case(&operation.operation_id))
}

/// The low level client class with one method per operation.
pub(crate) struct ClientFragment<'a> {
  model: &'a SchemaModel,
}

impl<'a> ClientFragment<'a> {
  pub(crate) fn new(model: &'a SchemaModel) -> Self {
    Self { model }
  }
}

impl Emit for ClientFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    let summary = match self.model.info.as_ref().map(|info| strip_newlines(&info.title)) {
      Some(title) if !title.is_empty() => format!("The low level client for the {title} API."),
      _ => "The low level API client.".to_string(),
    };
    out.summary(&summary);
    out.block(format!("internal class {CLIENT_CLASS}"), |out| {
      out.line(format!("private readonly {ADAPTER_INTERFACE} _adapter;"));
      out.line("private readonly Uri _baseUri;");
      out.blank();
      out.block(
        format!("public {CLIENT_CLASS}({ADAPTER_INTERFACE} adapter, Uri baseUri)"),
        |out| {
          out.line("_adapter = adapter;");
          out.line("_baseUri = baseUri;");
        },
      );

      for operation in &self.model.operations {
        out.blank();
        out.emit(&OperationFragment::new(operation, &self.model.definitions));
      }
    });
  }
}

/// Names of the credential arguments an operation takes, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Credentials {
  None,
  Basic { username: &'static str, password: &'static str },
  Bearer { token: &'static str },
}

impl Credentials {
  /// Credentials fall back to prefixed names when a declared argument
  /// already uses `username`, `password` or `bearerToken`.
  pub(crate) fn for_operation(operation: &Operation) -> Self {
    match operation.auth {
      AuthRequirement::None => Self::None,
      AuthRequirement::BearerToken if declares_any(operation, &[BEARER_TOKEN]) => Self::Bearer {
        token: PREFIXED_TOKEN,
      },
      AuthRequirement::BearerToken => Self::Bearer { token: BEARER_TOKEN },
      AuthRequirement::BasicCredentials => {
        if declares_any(operation, &[USERNAME, PASSWORD]) {
          Self::Basic {
            username: PREFIXED_USERNAME,
            password: PREFIXED_PASSWORD,
          }
        } else {
          Self::Basic {
            username: USERNAME,
            password: PASSWORD,
          }
        }
      }
    }
  }

  fn names(&self) -> Vec<&'static str> {
    match self {
      Self::None => vec![],
      Self::Basic { username, password } => vec![*username, *password],
      Self::Bearer { token } => vec![*token],
    }
  }

  fn arguments(&self) -> Vec<String> {
    self.names().into_iter().map(|name| format!("string {name}")).collect()
  }
}

fn declares_any(operation: &Operation, names: &[&str]) -> bool {
  operation
    .parameters
    .iter()
    .map(|param| to_parameter_name(&param.name))
    .any(|name| names.iter().any(|reserved| *reserved == name))
}

/// C# argument names for the operation's parameters, in declaration order.
///
/// A name that would repeat a credential, an earlier argument or a method local
/// gets a `Param` suffix, then a counter until it is unique.
pub(crate) fn argument_names(operation: &Operation, credentials: &Credentials) -> Vec<String> {
  let mut taken: HashSet<String> = METHOD_LOCALS
    .iter()
    .chain(credentials.names().iter())
    .map(ToString::to_string)
    .collect();

  operation
    .parameters
    .iter()
    .map(|param| {
      let base = to_parameter_name(&param.name);
      let mut name = base.clone();
      let mut counter = 1;
      while taken.contains(&name) {
        name = match counter {
          1 => format!("{base}{CLASH_SUFFIX}"),
          n => format!("{base}{CLASH_SUFFIX}{n}"),
        };
        counter += 1;
      }
      taken.insert(name.clone());
      name
    })
    .collect()
}

/// One `async` method: argument checks, URL building, auth, dispatch and decoding.
pub(crate) struct OperationFragment<'a> {
  operation: &'a Operation,
  table: &'a DefinitionTable,
  credentials: Credentials,
  arguments: Vec<String>,
}

impl<'a> OperationFragment<'a> {
  pub(crate) fn new(operation: &'a Operation, table: &'a DefinitionTable) -> Self {
    let credentials = Credentials::for_operation(operation);
    let arguments = argument_names(operation, &credentials);
    Self {
      operation,
      table,
      credentials,
      arguments,
    }
  }

  /// Parameters declared in `location`, paired with their argument names.
  fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = (&'a Parameter, &str)> + '_ {
    self
      .operation
      .parameters
      .iter()
      .zip(self.arguments.iter().map(String::as_str))
      .filter(move |(param, _)| param.location == location)
  }

  fn return_type(&self) -> String {
    self
      .operation
      .response
      .map_or_else(|| "Task".to_string(), |id| format!("Task<{}>", interface_name(self.table, id)))
  }

  fn emit_signature(&self, out: &mut CodeWriter) {
    let arguments: Vec<String> = self
      .credentials
      .arguments()
      .into_iter()
      .chain(
        self
          .operation
          .parameters
          .iter()
          .zip(&self.arguments)
          .map(|(param, name)| format!("{} {name}", argument_type(self.table, param))),
      )
      .collect();

    let head = format!("public async {} {}", self.return_type(), method_name(self.operation));
    if arguments.is_empty() {
      out.line(format!("{head}()"));
      return;
    }

    out.line(format!("{head}("));
    out.indented(|out| {
      let last = arguments.len() - 1;
      for (index, argument) in arguments.iter().enumerate() {
        let separator = if index == last { ")" } else { "," };
        out.line(format!("{argument}{separator}"));
      }
    });
  }

  fn emit_argument_checks(&self, out: &mut CodeWriter) {
    let checked = self
      .operation
      .parameters
      .iter()
      .zip(&self.arguments)
      .filter(|(param, _)| param.required && admits_null(param))
      .map(|(_, name)| name);

    let mut any = false;
    for name in checked {
      any = true;
      out.block(format!("if ({name} == null)"), |out| {
        let message = format!("'{name}' is required but was null.");
        out.line(format!("throw new ArgumentException({});", string_literal(&message)));
      });
    }
    if any {
      out.blank();
    }
  }

  fn emit_url(&self, out: &mut CodeWriter) {
    out.line(format!("var urlpath = {};", string_literal(&self.operation.path)));
    for (param, name) in self.parameters_in(ParameterLocation::Path) {
      let ParameterType::Primitive(primitive) = param.ty else {
        continue;
      };
      let placeholder = string_literal(&format!("{{{}}}", param.name));
      let value = to_wire_string(primitive, name);
      out.line(format!("urlpath = urlpath.Replace({placeholder}, Uri.EscapeDataString({value}));"));
    }

    let has_query = self.parameters_in(ParameterLocation::Query).next().is_some();
    if has_query {
      out.blank();
      out.line("var queryParams = \"\";");
      for (param, name) in self.parameters_in(ParameterLocation::Query) {
        out.emit(&QueryParameterFragment::new(param, name));
      }
    }

    out.blank();
    out.line("var uri = new UriBuilder(_baseUri)");
    out.braced("}.Uri;", |out| {
      if has_query {
        out.line("Path = urlpath,");
        out.line("Query = queryParams");
      } else {
        out.line("Path = urlpath");
      }
    });
  }

  fn emit_request(&self, out: &mut CodeWriter) {
    let method = string_literal(self.operation.method.as_str());
    out.line("var request = new HttpRequestMessage");
    out.braced("};", |out| {
      out.line("RequestUri = uri,");
      out.line(format!("Method = new HttpMethod({method}),"));
      out.line("Headers =");
      out.braced("}", |out| {
        out.line("Accept = { new MediaTypeWithQualityHeaderValue(\"application/json\") }");
      });
    });
  }

  fn emit_authorization(&self, out: &mut CodeWriter) {
    match self.credentials {
      Credentials::None => {}
      Credentials::Basic { username, password } => {
        out.blank();
        out.line(format!("var credentials = Encoding.UTF8.GetBytes({username} + \":\" + {password});"));
        out.line("var header = string.Concat(\"Basic \", Convert.ToBase64String(credentials));");
        out.line("request.Headers.Authorization = AuthenticationHeaderValue.Parse(header);");
      }
      Credentials::Bearer { token } => {
        out.blank();
        out.block(format!("if (!string.IsNullOrEmpty({token}))"), |out| {
          out.line(format!("var header = string.Concat(\"Bearer \", {token});"));
          out.line("request.Headers.Authorization = AuthenticationHeaderValue.Parse(header);");
        });
      }
    }
  }

  fn emit_body(&self, out: &mut CodeWriter) {
    for (param, name) in self.parameters_in(ParameterLocation::Body) {
      let assignment = format!("request.Content = new StringContent({name}.ToJson());");
      out.blank();
      if param.required {
        out.line(assignment);
      } else {
        out.block(format!("if ({name} != null)"), |out| out.line(assignment));
      }
    }
  }

  fn emit_dispatch(&self, out: &mut CodeWriter) {
    out.blank();
    out.line("var response = await _adapter.SendAsync(request);");
    out.line("var contents = await response.Content.ReadAsStringAsync();");
    out.block("if (!response.IsSuccessStatusCode)", |out| {
      out.line(format!("throw new {RESPONSE_EXCEPTION}((int) response.StatusCode, contents);"));
    });
    if let Some(id) = self.operation.response {
      out.line(format!("return contents.FromJson<{}>();", self.table.type_name(id)));
    }
  }
}

impl Emit for OperationFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    let summary = self.operation.summary.as_deref().map(strip_newlines).unwrap_or_default();
    out.summary(&summary);
    self.emit_signature(out);
    out.braced("}", |out| {
      self.emit_argument_checks(out);
      self.emit_url(out);
      out.blank();
      self.emit_request(out);
      self.emit_authorization(out);
      self.emit_body(out);
      self.emit_dispatch(out);
    });
  }
}

/// Appends `key=value&` to `queryParams`, once per element for arrays.
struct QueryParameterFragment<'a> {
  param: &'a Parameter,
  name: &'a str,
}

impl<'a> QueryParameterFragment<'a> {
  fn new(param: &'a Parameter, name: &'a str) -> Self {
    Self { param, name }
  }

  fn append(key: &str, value: &str) -> String {
    format!("queryParams = string.Concat(queryParams, {}, {value}, \"&\");", string_literal(&format!("{key}=")))
  }
}

impl Emit for QueryParameterFragment<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    let key = query_key(&self.param.name);
    let name = self.name;

    match self.param.ty {
      ParameterType::ArrayOf(primitive) => {
        let element = primitive_type(primitive);
        let value = escaped_value(primitive, "elem");
        out.block(format!("foreach (var elem in {name} ?? new {element}[0])"), |out| {
          out.line(Self::append(&key, &value));
        });
      }
      ParameterType::Primitive(primitive) => {
        let line = Self::append(&key, &escaped_value(primitive, name));
        if self.param.required {
          out.line(line);
        } else {
          out.block(format!("if ({name} != null)"), |out| out.line(line));
        }
      }
      ParameterType::Reference(_) => {}
    }
  }
}

fn escaped_value(primitive: Primitive, expr: &str) -> String {
  format!("Uri.EscapeDataString({})", to_wire_string(primitive, expr))
}

