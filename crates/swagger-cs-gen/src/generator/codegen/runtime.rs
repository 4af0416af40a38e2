use super::writer::{CodeWriter, Emit};

pub(crate) const USINGS: &[&str] = &[
  "System",
  "System.Collections.Generic",
  "System.Net.Http",
  "System.Net.Http.Headers",
  "System.Runtime.Serialization",
  "System.Text",
  "System.Threading.Tasks",
  "TinyJson",
];

pub(crate) const ADAPTER_INTERFACE: &str = "IHttpAdapter";
pub(crate) const RESPONSE_EXCEPTION: &str = "ApiResponseException";

/// Declarations every generated client relies on: the request failure type and
/// the transport seam requests are dispatched through.
pub(crate) struct RuntimeFragment;

impl RuntimeFragment {
  fn emit_exception(out: &mut CodeWriter) {
    out.summary("Raised when the server answers a request with a non-success status code.");
    out.block(format!("public class {RESPONSE_EXCEPTION} : Exception"), |out| {
      out.summary("The HTTP status code of the response.");
      out.line("public long StatusCode { get; }");
      out.blank();
      out.block(
        format!("public {RESPONSE_EXCEPTION}(long statusCode, string content) : base(content)"),
        |out| out.line("StatusCode = statusCode;"),
      );
      out.blank();
      out.block("public override string ToString()", |out| {
        out.line("return $\"{nameof(ApiResponseException)}(StatusCode={StatusCode}, Message='{Message}')\";");
      });
    });
  }

  fn emit_adapter(out: &mut CodeWriter) {
    out.summary("Sends fully built HTTP requests. Timeouts, retries and cancellation belong to the implementation.");
    out.block(format!("public interface {ADAPTER_INTERFACE}"), |out| {
      out.summary("Send the request and return the response once it has arrived.");
      out.line("Task<HttpResponseMessage> SendAsync(HttpRequestMessage request);");
    });
    out.blank();
    out.summary("An adapter which sends requests with the .NET <c>HttpClient</c>.");
    out.block(format!("public class HttpClientAdapter : {ADAPTER_INTERFACE}"), |out| {
      out.line("private readonly HttpClient _httpClient;");
      out.blank();
      out.block("public HttpClientAdapter(HttpClient httpClient)", |out| {
        out.line("_httpClient = httpClient;");
      });
      out.blank();
      out.line("/// <inheritdoc />");
      out.line("public Task<HttpResponseMessage> SendAsync(HttpRequestMessage request) => _httpClient.SendAsync(request);");
    });
  }
}

impl Emit for RuntimeFragment {
  fn emit(&self, out: &mut CodeWriter) {
    Self::emit_exception(out);
    out.blank();
    Self::emit_adapter(out);
  }
}
