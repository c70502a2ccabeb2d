use netweave_bytecode::{Instr, MethodBody, MethodRef};
use netweave_config::WeaveConfig;
use netweave_core::Weaver;
use netweave_metadata::{
  Attribute, ConstValue, MethodDefinition, MethodId, ModuleDefinition, Parameter, TypeDefId,
  TypeDefinition, TypeRef, Visibility,
};

/// The instructions a compiler would have produced for the user's method
/// body. Content is arbitrary; the pass must relocate it untouched.
pub fn user_body() -> MethodBody {
  MethodBody {
    locals: Vec::new(),
    instructions: vec![
      Instr::Nop,
      Instr::LoadArg(0),
      Instr::LoadArg(1),
      Instr::CallVirtual(MethodRef::new("Player", "apply_heal")),
      Instr::Return,
    ],
  }
}

pub fn player_module() -> (ModuleDefinition, TypeDefId) {
  let mut module = ModuleDefinition::new();
  let player = module.add_type(TypeDefinition::new("Player"));

  (module, player)
}

/// `TargetHeal(int amount)`, optionally with a leading destination
/// endpoint: `TargetHeal(NetworkConnection conn, int amount)`.
pub fn target_heal(with_connection: bool) -> MethodDefinition {
  let mut method = MethodDefinition::new("TargetHeal", Visibility::Public, false, TypeRef::void());

  if with_connection {
    method
      .params
      .push(Parameter::new("conn", TypeRef::new("NetworkConnection")));
  }

  method.params.push(Parameter::new("amount", TypeRef::new("i32")));
  method.body = Some(user_body());

  method
}

pub fn targeted_attr() -> Attribute {
  Attribute::new("TargetRpc")
}

#[allow(dead_code)]
pub fn targeted_attr_with_channel(channel: i64) -> Attribute {
  Attribute::new("TargetRpc").with_field("channel", ConstValue::Int(channel))
}

/// Run the full pipeline on a `TargetHeal` fixture: validate -> split ->
/// stub. Returns `(module, type, original, call sibling, stub)`.
#[allow(dead_code)]
pub fn weave_heal(
  with_connection: bool,
) -> (ModuleDefinition, TypeDefId, MethodId, MethodId, MethodId) {
  let (mut module, player) = player_module();
  let original = module.add_method(player, target_heal(with_connection));
  let attr = targeted_attr();

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(
    weaver.validate_targeted_call(&module, original, &attr),
    "fixture should validate: {:?}",
    weaver.diagnostics
  );

  let call = weaver
    .split_call_method(&mut module, player, original, &attr)
    .expect("split should succeed");
  let stub = weaver
    .generate_receive_stub(&mut module, player, original, call)
    .expect("stub generation should succeed");

  assert!(weaver.diagnostics.is_empty(), "unexpected diagnostics: {:?}", weaver.diagnostics);

  (module, player, original, call, stub)
}

#[allow(dead_code)]
pub fn assert_error_code(
  weaver: &Weaver,
  code: &str,
) {
  let codes: Vec<&str> = weaver
    .diagnostics
    .iter()
    .map(|diag| diag.error_code.as_str())
    .collect();

  assert!(
    codes.contains(&code),
    "expected diagnostic {}, got {:?}",
    code,
    codes
  );
}
