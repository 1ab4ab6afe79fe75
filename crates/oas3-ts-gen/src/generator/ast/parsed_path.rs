/// A path template split into literal text and substitutable parameters.
///
/// Only placeholders naming a declared path parameter become [`PathPart::Param`];
/// any other `{...}` text, including unbalanced braces, stays literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPath {
  parts: Vec<PathPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPart {
  Literal(String),
  Param(String),
}

impl ParsedPath {
  pub fn parse(template: &str, declared: &[&str]) -> Self {
    let mut parts = vec![];
    let mut literal = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
      let after_open = &rest[open + 1..];
      let Some(close) = after_open.find('}') else {
        break;
      };

      let name = &after_open[..close];
      literal.push_str(&rest[..open]);

      if declared.contains(&name) {
        if !literal.is_empty() {
          parts.push(PathPart::Literal(std::mem::take(&mut literal)));
        }
        parts.push(PathPart::Param(name.to_string()));
      } else {
        literal.push('{');
        literal.push_str(name);
        literal.push('}');
      }

      rest = &after_open[close + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
      parts.push(PathPart::Literal(literal));
    }

    Self { parts }
  }

  pub fn parts(&self) -> &[PathPart] {
    &self.parts
  }

  pub fn has_params(&self) -> bool {
    self.parts.iter().any(|part| matches!(part, PathPart::Param(_)))
  }
}
