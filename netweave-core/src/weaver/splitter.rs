use netweave_bytecode::{format_body, BodyBuilder, Instr};
use netweave_config::{DebugPrint, DebugTrace};
use netweave_log::{log_dbg, trace_dbg};
use netweave_metadata::{Attribute, ConstValue, MethodId, ModuleDefinition, TypeDefId};

use super::{derive_wire_name, has_connection_parameter, substitute_method, Weaver, CALL_PREFIX};

impl Weaver<'_> {
  /// Split an annotated method in place: relocate the user's body into a
  /// `Call`-prefixed sibling, then rewrite the original into send-side
  /// code. Callers compiled against the original name keep resolving to
  /// it, so dependent modules never need relinking.
  ///
  /// Returns the sibling holding the user's body, or `None` when an
  /// argument cannot be serialized. In the failure case the type has
  /// already been mutated; the fatal diagnostic obliges the driver to
  /// discard the module.
  pub fn split_call_method(
    &mut self,
    module: &mut ModuleDefinition,
    type_id: TypeDefId,
    method_id: MethodId,
    attr: &Attribute,
  ) -> Option<MethodId> {
    let call_name = format!("{}{}", CALL_PREFIX, module.methods.get(&method_id).name);
    let call_id = substitute_method(module, type_id, method_id, &call_name);

    let method = module.methods.get(&method_id);
    let has_connection = has_connection_parameter(method, &self.refs);
    let wire_name = derive_wire_name(&method.name).to_string();
    let full_name = method.full_name();
    let declaring_type = method.declaring_type.clone();
    let channel = attr
      .field_or("channel", ConstValue::Int(0))
      .as_int()
      .unwrap_or(0);

    trace_dbg!(
      self.config,
      DebugTrace::Splitter,
      "splitting {} (wire name {}, channel {})",
      full_name,
      wire_name,
      channel
    );

    let mut builder = BodyBuilder::new();
    self.write_setup_locals(&mut builder);
    self.write_create_writer(&mut builder);

    if !self.write_arguments(&mut builder, method, has_connection) {
      return None;
    }

    // (instance, destination, type token, wire name, writer, channel)
    builder.emit(Instr::LoadArg(0));
    if has_connection {
      builder.emit(Instr::LoadArg(1));
    } else {
      // null destination: the receiving side resolves its own default
      builder.emit(Instr::LoadNull);
    }
    builder.emit(Instr::LoadTypeToken(declaring_type));
    builder.emit(Instr::Call(self.refs.type_from_token.clone()));
    builder.emit(Instr::LoadString(wire_name));
    builder.emit(Instr::LoadLocal(0));
    builder.emit(Instr::LoadInt(channel));
    builder.emit(Instr::CallVirtual(self.refs.send_targeted.clone()));

    self.write_recycle_writer(&mut builder);
    builder.emit(Instr::Return);

    let body = builder.finish();
    log_dbg!(
      self.config,
      "rewrote {} into {} send-side instructions",
      full_name,
      body.instructions.len()
    );

    if self.config.debug_print.contains(&DebugPrint::SplitMethod) && !self.config.quiet {
      println!("{}:\n{}", full_name, format_body(&body));
    }

    module.methods.get_mut(&method_id).body = Some(body);

    Some(call_id)
  }
}
