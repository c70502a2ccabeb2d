use netweave_bytecode::{BodyBuilder, Instr, MethodRef};
use netweave_config::{DebugPrint, DebugTrace};
use netweave_log::trace_dbg;
use netweave_metadata::{
  HandlerRegistration, MethodDefinition, MethodId, ModuleDefinition, RemoteCallKind, TypeDefId,
  TypeRef, Visibility,
};

use super::{derive_wire_name, has_connection_parameter, Weaver, INVOKE_PREFIX};

impl Weaver<'_> {
  /// Generate the method the dispatch machinery executes when a targeted
  /// call message arrives: guard, cast the receiving instance, resolve or
  /// read the arguments, and hand off to the user's relocated logic.
  ///
  /// On success the stub is appended to the type together with its
  /// wire-name registration. Returns `None` without appending anything
  /// when a parameter cannot be deserialized.
  pub fn generate_receive_stub(
    &mut self,
    module: &mut ModuleDefinition,
    type_id: TypeDefId,
    original_id: MethodId,
    user_logic_id: MethodId,
  ) -> Option<MethodId> {
    let original = module.methods.get(&original_id);
    let user_logic = module.methods.get(&user_logic_id);

    let stub_name = format!("{}{}", INVOKE_PREFIX, original.name);
    let wire_name = derive_wire_name(&original.name).to_string();
    let declaring_type = original.declaring_type.clone();
    let has_connection = has_connection_parameter(original, &self.refs);
    let user_logic_ref = MethodRef::new(&user_logic.declaring_type, &user_logic.name);

    trace_dbg!(
      self.config,
      DebugTrace::Stub,
      "generating {} for wire name {}",
      stub_name,
      wire_name
    );

    let mut builder = BodyBuilder::new();
    self.write_client_active_check(&mut builder, &original.name);

    builder.emit(Instr::LoadArg(0));
    builder.emit(Instr::CastClass(declaring_type));

    // the message itself carries no endpoint argument; the receiving side
    // fills in its locally active connection
    if has_connection {
      builder.emit(Instr::Call(self.refs.ready_connection.clone()));
    }

    if !self.read_arguments(&mut builder, original, has_connection) {
      return None;
    }

    builder.emit(Instr::CallVirtual(user_logic_ref));
    builder.emit(Instr::Return);

    let mut stub = MethodDefinition::new(&stub_name, Visibility::Family, true, TypeRef::void());
    self.add_invoke_parameters(&mut stub);
    stub.body = Some(builder.finish());

    if self.config.debug_print.contains(&DebugPrint::ReceiveStub) && !self.config.quiet {
      println!("{:#}", stub.to_json());
    }

    let stub_id = module.add_method(type_id, stub);
    module
      .types
      .get_mut(&type_id)
      .handlers
      .push(HandlerRegistration {
        wire_name,
        kind: RemoteCallKind::Targeted,
        method: stub_id,
      });

    Some(stub_id)
  }
}
