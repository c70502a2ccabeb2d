use serde::Serialize;

/// A constant value stored in an attribute field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConstValue {
  Int(i64),
  Bool(bool),
  String(String),
}

impl ConstValue {
  pub fn as_int(&self) -> Option<i64> {
    match self {
      ConstValue::Int(value) => Some(*value),
      _ => None,
    }
  }
}

/// An annotation attached to a method at compile time: a name plus an
/// immutable record of named constant fields. Read-only input to codegen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
  pub name: String,
  pub fields: Vec<(String, ConstValue)>,
}

impl Attribute {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      fields: Vec::new(),
    }
  }

  pub fn with_field(
    mut self,
    name: &str,
    value: ConstValue,
  ) -> Self {
    self.fields.push((name.to_string(), value));
    self
  }

  pub fn field(
    &self,
    name: &str,
  ) -> Option<&ConstValue> {
    self
      .fields
      .iter()
      .find(|(field, _)| field == name)
      .map(|(_, value)| value)
  }

  /// Field lookup with a default, the way annotation consumers read
  /// optional fields.
  pub fn field_or(
    &self,
    name: &str,
    default: ConstValue,
  ) -> ConstValue {
    self.field(name).cloned().unwrap_or(default)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_or_returns_default_when_missing() {
    let attr = Attribute::new("TargetRpc");
    assert_eq!(attr.field_or("channel", ConstValue::Int(0)), ConstValue::Int(0));
  }

  #[test]
  fn field_or_passes_explicit_value_through() {
    let attr = Attribute::new("TargetRpc").with_field("channel", ConstValue::Int(4));
    assert_eq!(attr.field_or("channel", ConstValue::Int(0)), ConstValue::Int(4));
  }
}
