use netweave_config::DebugTrace;
use netweave_log::trace_dbg;
use netweave_metadata::{Attribute, MethodId, ModuleDefinition, RemoteCallKind};

use super::{Weaver, TARGET_PREFIX};
use crate::diagnostics::message::DiagnosticMessage;

impl Weaver<'_> {
  /// Decide whether an annotated method may be woven at all. Each failed
  /// rule is reported to the sink before returning; the member list is
  /// never touched here, so a rejected method leaves its type unchanged.
  pub fn validate_targeted_call(
    &mut self,
    module: &ModuleDefinition,
    method_id: MethodId,
    attr: &Attribute,
  ) -> bool {
    let method = module.methods.get(&method_id);
    trace_dbg!(
      self.config,
      DebugTrace::Validator,
      "validating {}",
      method.full_name()
    );

    if !method.name.starts_with(TARGET_PREFIX) {
      self.error(DiagnosticMessage::NamingViolation(method.into()));
      return false;
    }

    if method.is_static {
      self.error(DiagnosticMessage::InvalidModifier(method.into()));
      return false;
    }

    if !self.validate_function(method) {
      return false;
    }

    self.validate_parameters(method, attr, RemoteCallKind::Targeted)
  }
}
