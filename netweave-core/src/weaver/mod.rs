pub mod refs;
pub mod serializers;

mod splitter;
mod stub;
mod validator;

use netweave_bytecode::{BodyBuilder, Instr};
use netweave_config::WeaveConfig;
use netweave_log::phase_warn;
use netweave_metadata::{
  Attribute, MethodDefinition, MethodId, ModuleDefinition, Parameter, RemoteCallKind, TypeDefId,
};

use crate::diagnostics::{diagnostic_report::Diagnostic, message::DiagnosticMessage};
use refs::RuntimeRefs;
use serializers::SerializerTable;

/// Prefix an annotated method's name must carry.
pub const TARGET_PREFIX: &str = "Target";
/// Prefix of the generated sibling holding the user's original body.
pub const CALL_PREFIX: &str = "Call";
/// Prefix of the generated receive stub.
pub const INVOKE_PREFIX: &str = "InvokeTargetRpc";

/// The string key incoming call messages are routed by. Send side and stub
/// registration both go through here, so the two can never diverge.
pub fn derive_wire_name(name: &str) -> &str {
  match name.strip_prefix(TARGET_PREFIX) {
    // a bare prefix leaves no suffix to route on
    Some("") | None => name,
    Some(stripped) => stripped,
  }
}

/// Whether the method's first parameter is the optional destination
/// endpoint. Both generation sides consult this one predicate, applied to
/// the original signature.
pub fn has_connection_parameter(
  method: &MethodDefinition,
  refs: &RuntimeRefs,
) -> bool {
  match method.params.first() {
    Some(param) => param.ty == refs.connection_type,
    None => false,
  }
}

/// Relocate a method's body into a renamed sibling appended to the same
/// type, leaving the original signature in place with no body. The body is
/// moved, never duplicated; attributes stay behind so the relocated sibling
/// is not itself a weave candidate.
pub fn substitute_method(
  module: &mut ModuleDefinition,
  type_id: TypeDefId,
  method_id: MethodId,
  new_name: &str,
) -> MethodId {
  let (visibility, is_static, params, return_type, body) = {
    let original = module.methods.get_mut(&method_id);
    (
      original.visibility,
      original.is_static,
      original.params.clone(),
      original.return_type.clone(),
      original.body.take(),
    )
  };

  let mut relocated = MethodDefinition::new(new_name, visibility, is_static, return_type);
  relocated.params = params;
  relocated.body = body;

  module.add_method(type_id, relocated)
}

/// The weaving pass over one module. Holds the runtime references and the
/// serializer registry the generated code is wired against, and collects
/// diagnostics for the outer driver.
pub struct Weaver<'a> {
  config: &'a WeaveConfig,
  pub refs: RuntimeRefs,
  pub serializers: SerializerTable,
  pub diagnostics: Vec<Diagnostic>,
  /// Set once a build-fatal condition was reported; the driver must not
  /// emit the module.
  pub weaving_failed: bool,
}

impl<'a> Weaver<'a> {
  pub fn new(config: &'a WeaveConfig) -> Self {
    let refs = RuntimeRefs::default();
    let serializers = SerializerTable::with_defaults(&refs);

    Self {
      config,
      refs,
      serializers,
      diagnostics: Vec::new(),
      weaving_failed: false,
    }
  }

  pub(crate) fn error(
    &mut self,
    message: DiagnosticMessage,
  ) {
    if message.is_build_fatal() {
      self.weaving_failed = true;
      phase_warn!(self.config, "weaving cannot continue: {}", message);
    }

    self.diagnostics.push(message.report());
  }

  fn write_setup_locals(
    &self,
    builder: &mut BodyBuilder,
  ) {
    builder.declare_local("writer", &self.refs.writer_type.full_name);
  }

  fn write_create_writer(
    &self,
    builder: &mut BodyBuilder,
  ) {
    builder.emit(Instr::Call(self.refs.writer_pool_get.clone()));
    builder.emit(Instr::StoreLocal(0));
  }

  fn write_recycle_writer(
    &self,
    builder: &mut BodyBuilder,
  ) {
    builder.emit(Instr::LoadLocal(0));
    builder.emit(Instr::Call(self.refs.writer_pool_recycle.clone()));
  }

  /// Guard at the top of a receive stub: when this endpoint is not the
  /// active client, warn and return without touching the arguments.
  fn write_client_active_check(
    &self,
    builder: &mut BodyBuilder,
    method_name: &str,
  ) {
    let resume = builder.new_label();
    builder.emit(Instr::Call(self.refs.is_client_active.clone()));
    builder.emit(Instr::BranchIfTrue(resume));
    builder.emit(Instr::LoadString(format!(
      "{} {} called on a non-client endpoint",
      RemoteCallKind::Targeted,
      method_name
    )));
    builder.emit(Instr::Call(self.refs.log_warning.clone()));
    builder.emit(Instr::Return);
    builder.bind_label(resume);
  }

  /// The fixed parameter list every receive stub gets: the receiving
  /// instance and the incoming argument reader.
  fn add_invoke_parameters(
    &self,
    method: &mut MethodDefinition,
  ) {
    method
      .params
      .push(Parameter::new("obj", self.refs.behaviour_type.clone()));
    method
      .params
      .push(Parameter::new("reader", self.refs.reader_type.clone()));
  }

  /// Serialize each user-supplied argument into the writer in local 0,
  /// in declared order. `skip_first` drops the destination endpoint, which
  /// never crosses the wire.
  fn write_arguments(
    &mut self,
    builder: &mut BodyBuilder,
    method: &MethodDefinition,
    skip_first: bool,
  ) -> bool {
    let skip = if skip_first { 1 } else { 0 };

    for (index, param) in method.params.iter().enumerate().skip(skip) {
      let write = match self.serializers.writer_for(&param.ty) {
        Some(write) => write.clone(),
        None => {
          self.error(DiagnosticMessage::UnsupportedParameterType {
            member: method.into(),
            param: param.name.clone(),
            ty: param.ty.clone(),
          });
          return false;
        },
      };

      builder.emit(Instr::LoadLocal(0));
      builder.emit(Instr::LoadArg((index + 1) as u16));
      builder.emit(Instr::Call(write));
    }

    true
  }

  /// Deserialize the remaining parameters from the incoming reader (stub
  /// argument 1), in declared order.
  fn read_arguments(
    &mut self,
    builder: &mut BodyBuilder,
    method: &MethodDefinition,
    skip_first: bool,
  ) -> bool {
    let skip = if skip_first { 1 } else { 0 };

    for param in method.params.iter().skip(skip) {
      let read = match self.serializers.reader_for(&param.ty) {
        Some(read) => read.clone(),
        None => {
          self.error(DiagnosticMessage::UnsupportedParameterType {
            member: method.into(),
            param: param.name.clone(),
            ty: param.ty.clone(),
          });
          return false;
        },
      };

      builder.emit(Instr::LoadArg(1));
      builder.emit(Instr::Call(read));
    }

    true
  }

  fn validate_function(
    &mut self,
    method: &MethodDefinition,
  ) -> bool {
    if !method.is_void() {
      self.error(DiagnosticMessage::InvalidReturnType(
        method.into(),
        method.return_type.clone(),
      ));
      return false;
    }

    if method.body.is_none() {
      self.error(DiagnosticMessage::MissingBody(method.into()));
      return false;
    }

    true
  }

  fn validate_parameters(
    &mut self,
    method: &MethodDefinition,
    attr: &Attribute,
    kind: RemoteCallKind,
  ) -> bool {
    for (index, param) in method.params.iter().enumerate() {
      if param.ty != self.refs.connection_type {
        continue;
      }

      if kind == RemoteCallKind::Targeted && index == 0 {
        continue;
      }

      self.error(DiagnosticMessage::DisallowedConnectionParameter(
        method.into(),
        param.name.clone(),
      ));
      return false;
    }

    if let Some(channel) = attr.field("channel") {
      if channel.as_int().is_none() {
        self.error(DiagnosticMessage::InvalidChannelField(method.into()));
        return false;
      }
    }

    true
  }
}
