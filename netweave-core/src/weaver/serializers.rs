use std::collections::HashMap;

use netweave_bytecode::MethodRef;
use netweave_metadata::TypeRef;

use super::refs::RuntimeRefs;

#[derive(Debug, Clone)]
pub struct SerializerPair {
  pub read: MethodRef,
  pub write: MethodRef,
}

/// Registry of wire readers/writers, keyed by parameter type identity.
/// A miss here is the unsupported-parameter condition that fails a build.
#[derive(Debug, Clone)]
pub struct SerializerTable {
  entries: HashMap<String, SerializerPair>,
}

impl SerializerTable {
  pub fn new() -> Self {
    Self {
      entries: HashMap::new(),
    }
  }

  /// Readers/writers for the primitive wire types.
  pub fn with_defaults(refs: &RuntimeRefs) -> Self {
    let mut table = Self::new();

    for ty in ["i32", "i64", "u32", "u64", "f32", "f64", "bool", "String"] {
      table.register(
        ty,
        SerializerPair {
          read: MethodRef::new(
            &refs.reader_type.full_name,
            &format!("read_{}", ty.to_lowercase()),
          ),
          write: MethodRef::new(
            &refs.writer_type.full_name,
            &format!("write_{}", ty.to_lowercase()),
          ),
        },
      );
    }

    table
  }

  pub fn register(
    &mut self,
    type_name: &str,
    pair: SerializerPair,
  ) {
    self.entries.insert(type_name.to_string(), pair);
  }

  pub fn reader_for(
    &self,
    ty: &TypeRef,
  ) -> Option<&MethodRef> {
    self.entries.get(&ty.full_name).map(|pair| &pair.read)
  }

  pub fn writer_for(
    &self,
    ty: &TypeRef,
  ) -> Option<&MethodRef> {
    self.entries.get(&ty.full_name).map(|pair| &pair.write)
  }
}

impl Default for SerializerTable {
  fn default() -> Self {
    Self::new()
  }
}
