use std::fmt::Write;

const INDENT: &str = "  ";

/// Line-oriented formatter shared by every renderer.
///
/// Output always uses `\n` line endings, carries no trailing whitespace and ends with
/// exactly one newline.
#[derive(Debug, Default)]
pub struct SourceWriter {
  buf: String,
  depth: usize,
}

impl SourceWriter {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
    let text = text.as_ref().trim_end();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buf.push_str(INDENT);
      }
      self.buf.push_str(text);
    }
    self.buf.push('\n');
    self
  }

  pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for line in lines {
      self.line(line);
    }
    self
  }

  /// Emits a blank line unless the buffer is empty or already ends with one.
  pub fn blank(&mut self) -> &mut Self {
    if !self.buf.is_empty() && !self.buf.ends_with("\n\n") {
      self.buf.push('\n');
    }
    self
  }

  /// Writes `open`, the body one level deeper, then `close`.
  pub fn block(&mut self, open: impl AsRef<str>, close: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
    self.line(open);
    self.depth += 1;
    body(self);
    self.depth -= 1;
    self.line(close)
  }

  /// Writes a `/** ... */` comment; nothing when `lines` is empty.
  pub fn doc_comment(&mut self, lines: &[String]) -> &mut Self {
    if lines.is_empty() {
      return self;
    }
    self.line("/**");
    for line in lines {
      let safe = line.replace("*/", "*\\/");
      if safe.is_empty() {
        self.line(" *");
      } else {
        self.line(format!(" * {safe}"));
      }
    }
    self.line(" */")
  }

  #[must_use]
  pub fn finish(self) -> String {
    let mut out = self.buf.trim_end_matches('\n').to_string();
    out.push('\n');
    out
  }
}

/// Single-quoted JS string literal.
pub fn string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('\'');
  for c in value.chars() {
    match c {
      '\'' => out.push_str("\\'"),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      c if c.is_control() => {
        let _ = write!(out, "\\u{:04x}", u32::from(c));
      }
      c => out.push(c),
    }
  }
  out.push('\'');
  out
}

/// Escapes literal text for use inside a template literal.
pub fn template_text(value: &str) -> String {
  value.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}
