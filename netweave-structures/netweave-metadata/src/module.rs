use crate::{
  definition::{MethodDefinition, MethodId, TypeDefId, TypeDefinition},
  Store,
};

/// One compiled module's metadata graph. Methods live in a module-level
/// arena; a type's member list holds their ids, so a pass can rewrite one
/// method while appending siblings to the same type.
#[derive(Debug, Clone, Default)]
pub struct ModuleDefinition {
  pub types: Store<TypeDefinition>,
  pub methods: Store<MethodDefinition>,
}

impl ModuleDefinition {
  pub fn new() -> Self {
    Self {
      types: Store::new(),
      methods: Store::new(),
    }
  }

  pub fn add_type(
    &mut self,
    type_def: TypeDefinition,
  ) -> TypeDefId {
    self.types.alloc(type_def)
  }

  /// Append a method to a type's member list. Fills in the method's
  /// declaring-type name; members are never removed.
  pub fn add_method(
    &mut self,
    type_id: TypeDefId,
    mut method: MethodDefinition,
  ) -> MethodId {
    method.declaring_type = self.types.get(&type_id).name.clone();
    let method_id = self.methods.alloc(method);
    self.types.get_mut(&type_id).methods.push(method_id);

    method_id
  }

  pub fn member_count(
    &self,
    type_id: TypeDefId,
  ) -> usize {
    self.types.get(&type_id).methods.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::definition::{TypeRef, Visibility};

  #[test]
  fn add_method_appends_and_fills_declaring_type() {
    let mut module = ModuleDefinition::new();
    let player = module.add_type(TypeDefinition::new("Player"));

    let first = module.add_method(
      player,
      MethodDefinition::new("TargetHeal", Visibility::Public, false, TypeRef::void()),
    );
    let second = module.add_method(
      player,
      MethodDefinition::new("TargetWarp", Visibility::Public, false, TypeRef::void()),
    );

    assert_eq!(module.types.get(&player).methods, vec![first, second]);
    assert_eq!(module.methods.get(&first).declaring_type, "Player");
    assert_eq!(module.methods.get(&first).full_name(), "Player::TargetHeal");
    assert_eq!(module.member_count(player), 2);
    assert_eq!(module.methods.len(), 2);
    assert_eq!(module.types.iter().count(), 1);
  }
}
