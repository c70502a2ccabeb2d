use core::fmt;
use std::fmt::{Display, Formatter};

use netweave_metadata::MethodDefinition;

#[derive(Debug, Clone, PartialEq)]
pub enum Severity {
  Info,
  Warning,
  Error,
  Hint,
}

/// The member a diagnostic is attributed to. The pass operates on compiled
/// metadata, so there is no source span to point at; the owning type and
/// method name are the anchor instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberContext {
  pub type_name: String,
  pub method_name: String,
}

impl Display for MemberContext {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    if self.type_name.is_empty() {
      return write!(f, "{}", self.method_name);
    }

    write!(f, "{}::{}", self.type_name, self.method_name)
  }
}

impl From<&MethodDefinition> for MemberContext {
  fn from(method: &MethodDefinition) -> Self {
    Self {
      type_name: method.declaring_type.clone(),
      method_name: method.name.clone(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
  pub severity: Severity,
  pub message: String,
  pub error_code: String,
  pub context: MemberContext,
  pub notes: Vec<String>,
}

impl Diagnostic {
  pub fn new(
    severity: Severity,
    message: String,
    error_code: String,
    context: MemberContext,
  ) -> Self {
    Self {
      severity,
      message,
      error_code,
      context,
      notes: Vec::new(),
    }
  }

  pub fn with_note(
    mut self,
    note: String,
  ) -> Self {
    self.notes.push(note);
    self
  }
}
