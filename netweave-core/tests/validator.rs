mod common;

use netweave_config::WeaveConfig;
use netweave_core::Weaver;
use netweave_metadata::{ConstValue, Parameter, TypeRef};

/// Tests that a rejected method is reported with the right error code and
/// leaves the owning type's member list untouched.

#[test]
fn rejects_method_without_prefix() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method.name = "Heal".to_string();
  let id = module.add_method(player, method);
  let before = module.member_count(player);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  common::assert_error_code(&weaver, "NW0001");
  assert_eq!(module.member_count(player), before);
}

#[test]
fn naming_violation_suggests_the_corrected_name() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method.name = "Heal".to_string();
  let id = module.add_method(player, method);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);
  weaver.validate_targeted_call(&module, id, &common::targeted_attr());

  assert_eq!(weaver.diagnostics.len(), 1);
  assert_eq!(
    weaver.diagnostics[0].notes,
    vec!["consider renaming it to 'TargetHeal'".to_string()]
  );
}

#[test]
fn rejects_static_method() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method.is_static = true;
  let id = module.add_method(player, method);
  let before = module.member_count(player);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  common::assert_error_code(&weaver, "NW0002");
  assert_eq!(module.member_count(player), before);
}

#[test]
fn rejects_non_void_return() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method.return_type = TypeRef::new("i32");
  let id = module.add_method(player, method);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  common::assert_error_code(&weaver, "NW0003");
}

#[test]
fn rejects_method_without_body() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method.body = None;
  let id = module.add_method(player, method);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  common::assert_error_code(&weaver, "NW0004");
}

#[test]
fn rejects_connection_parameter_outside_first_position() {
  let (mut module, player) = common::player_module();
  let mut method = common::target_heal(false);
  method
    .params
    .push(Parameter::new("conn", TypeRef::new("NetworkConnection")));
  let id = module.add_method(player, method);

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  common::assert_error_code(&weaver, "NW0005");
}

#[test]
fn rejects_non_integer_channel_field() {
  let (mut module, player) = common::player_module();
  let id = module.add_method(player, common::target_heal(false));
  let attr = common::targeted_attr().with_field("channel", ConstValue::String("fast".to_string()));

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(!weaver.validate_targeted_call(&module, id, &attr));
  common::assert_error_code(&weaver, "NW0007");
}

#[test]
fn accepts_well_formed_method() {
  let (mut module, player) = common::player_module();
  let id = module.add_method(player, common::target_heal(false));

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  assert!(weaver.diagnostics.is_empty());
}

#[test]
fn accepts_leading_connection_parameter() {
  let (mut module, player) = common::player_module();
  let id = module.add_method(player, common::target_heal(true));

  let config = WeaveConfig::default();
  let mut weaver = Weaver::new(&config);

  assert!(weaver.validate_targeted_call(&module, id, &common::targeted_attr()));
  assert!(weaver.diagnostics.is_empty());
}
