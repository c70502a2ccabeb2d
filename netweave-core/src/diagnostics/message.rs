use core::fmt;
use std::fmt::{Display, Formatter};

use netweave_metadata::TypeRef;

use super::diagnostic_report::{Diagnostic, MemberContext, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticMessage {
  /// Annotated method name lacks the required prefix.
  NamingViolation(MemberContext),
  /// Annotated method is static.
  InvalidModifier(MemberContext),
  /// Annotated method does not return void.
  InvalidReturnType(MemberContext, TypeRef),
  /// Annotated method has no instructions to relocate.
  MissingBody(MemberContext),
  /// Connection-typed parameter outside the first position.
  DisallowedConnectionParameter(MemberContext, String),
  /// No wire reader/writer registered for a parameter type. Fails the
  /// whole build: skipping would leave the call and receive halves
  /// disagreeing on argument layout.
  UnsupportedParameterType {
    member: MemberContext,
    param: String,
    ty: TypeRef,
  },
  /// The attribute's `channel` field is not an integer.
  InvalidChannelField(MemberContext),
}

impl Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::NamingViolation(member) => {
        write!(f, "{} must start with 'Target'", member.method_name)
      },
      DiagnosticMessage::InvalidModifier(member) => {
        write!(f, "{} must not be static", member.method_name)
      },
      DiagnosticMessage::InvalidReturnType(member, found) => {
        write!(f, "{} must return void, found '{}'", member.method_name, found)
      },
      DiagnosticMessage::MissingBody(member) => {
        write!(f, "{} has no body to relocate", member.method_name)
      },
      DiagnosticMessage::DisallowedConnectionParameter(member, param) => {
        write!(
          f,
          "connection parameter '{}' of {} is only valid in the first position",
          param, member.method_name
        )
      },
      DiagnosticMessage::UnsupportedParameterType { member, param, ty } => {
        write!(
          f,
          "cannot serialize parameter '{}' of type '{}' in {}",
          param, ty, member.method_name
        )
      },
      DiagnosticMessage::InvalidChannelField(member) => {
        write!(f, "{} has a non-integer 'channel' field", member.method_name)
      },
    }
  }
}

impl From<&DiagnosticMessage> for MemberContext {
  fn from(value: &DiagnosticMessage) -> Self {
    match value {
      DiagnosticMessage::NamingViolation(member)
      | DiagnosticMessage::InvalidModifier(member)
      | DiagnosticMessage::InvalidReturnType(member, _)
      | DiagnosticMessage::MissingBody(member)
      | DiagnosticMessage::DisallowedConnectionParameter(member, _)
      | DiagnosticMessage::UnsupportedParameterType { member, .. }
      | DiagnosticMessage::InvalidChannelField(member) => member.clone(),
    }
  }
}

impl DiagnosticMessage {
  fn code(&self) -> String {
    match self {
      DiagnosticMessage::NamingViolation(_) => "NW0001".to_string(),
      DiagnosticMessage::InvalidModifier(_) => "NW0002".to_string(),
      DiagnosticMessage::InvalidReturnType(_, _) => "NW0003".to_string(),
      DiagnosticMessage::MissingBody(_) => "NW0004".to_string(),
      DiagnosticMessage::DisallowedConnectionParameter(_, _) => "NW0005".to_string(),
      DiagnosticMessage::UnsupportedParameterType { .. } => "NW0006".to_string(),
      DiagnosticMessage::InvalidChannelField(_) => "NW0007".to_string(),
    }
  }

  /// Whether the outer driver must abandon the build instead of just
  /// excluding this method.
  pub fn is_build_fatal(&self) -> bool {
    matches!(self, DiagnosticMessage::UnsupportedParameterType { .. })
  }

  pub fn report(&self) -> Diagnostic {
    let diagnostic = Diagnostic::new(
      Severity::Error,
      self.to_string(),
      self.code(),
      self.into(),
    );

    match self {
      DiagnosticMessage::NamingViolation(member) => diagnostic.with_note(format!(
        "consider renaming it to 'Target{}'",
        member.method_name
      )),
      _ => diagnostic,
    }
  }
}
