const INDENT: &str = "    ";

/// A piece of C# source that knows how to write itself.
pub(crate) trait Emit {
  fn emit(&self, out: &mut CodeWriter);
}

/// Line-oriented, indentation-aware text buffer for C# output.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
  buffer: String,
  depth: usize,
}

impl CodeWriter {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Writes one line at the current depth. Empty input writes a bare newline.
  pub(crate) fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buffer.push_str(INDENT);
      }
      self.buffer.push_str(text);
    }
    self.buffer.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buffer.push('\n');
  }

  pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
    self.depth += 1;
    body(self);
    self.depth -= 1;
  }

  /// `header`, then `{`, the indented body, and `}` on their own lines.
  pub(crate) fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
    self.line(header);
    self.braced("}", body);
  }

  /// Like [`block`](Self::block) without a header line and with a custom closing line (e.g. `};`).
  pub(crate) fn braced(&mut self, close: &str, body: impl FnOnce(&mut Self)) {
    self.line("{");
    self.indented(body);
    self.line(close);
  }

  pub(crate) fn summary(&mut self, text: &str) {
    self.line("/// <summary>");
    self.line(format!("/// {text}").trim_end());
    self.line("/// </summary>");
  }

  pub(crate) fn emit(&mut self, fragment: &impl Emit) {
    fragment.emit(self);
  }

  pub(crate) fn into_string(self) -> String {
    self.buffer
  }
}

/// Quotes `value` as a C# string literal.
pub(crate) fn string_literal(value: &str) -> String {
  let mut literal = String::with_capacity(value.len() + 2);
  literal.push('"');
  for ch in value.chars() {
    match ch {
      '"' => literal.push_str("\\\""),
      '\\' => literal.push_str("\\\\"),
      '\n' => literal.push_str("\\n"),
      '\r' => literal.push_str("\\r"),
      '\t' => literal.push_str("\\t"),
      _ => literal.push(ch),
    }
  }
  literal.push('"');
  literal
}
