use core::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::json;

use netweave_bytecode::MethodBody;

use crate::{attribute::Attribute, Id};

pub type MethodId = Id<MethodDefinition>;
pub type TypeDefId = Id<TypeDefinition>;

/// Type identity, compared by full name. Parameter and return types in a
/// compiled module are references, not definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeRef {
  pub full_name: String,
}

impl TypeRef {
  pub fn new(full_name: &str) -> Self {
    Self {
      full_name: full_name.to_string(),
    }
  }

  pub fn void() -> Self {
    Self::new("void")
  }

  pub fn is_void(&self) -> bool {
    self.full_name == "void"
  }
}

impl Display for TypeRef {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    write!(f, "{}", self.full_name)
  }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Visibility {
  Public,
  /// Callable by the framework dispatch machinery only.
  Family,
  Private,
}

/// The remote-call kinds the runtime routes. This pass only processes
/// `Targeted`; the other kinds are handled by sibling passes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum RemoteCallKind {
  Broadcast,
  HostCommand,
  Targeted,
}

impl Display for RemoteCallKind {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    match self {
      RemoteCallKind::Broadcast => write!(f, "Rpc"),
      RemoteCallKind::HostCommand => write!(f, "Command"),
      RemoteCallKind::Targeted => write!(f, "TargetRpc"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
  pub name: String,
  pub ty: TypeRef,
}

impl Parameter {
  pub fn new(
    name: &str,
    ty: TypeRef,
  ) -> Self {
    Self {
      name: name.to_string(),
      ty,
    }
  }
}

/// The load-time association between a wire name and the stub that handles
/// it. Stored as synthesized metadata so message routing never scans method
/// names at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerRegistration {
  pub wire_name: String,
  pub kind: RemoteCallKind,
  pub method: MethodId,
}

/// One method of a compiled type: signature, attribute list and instruction
/// body. Mutated in place by the weaving pass; generated siblings are
/// appended next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
  pub name: String,
  /// Name of the owning type; filled in when the method is added to a
  /// module.
  pub declaring_type: String,
  pub visibility: Visibility,
  pub is_static: bool,
  pub params: Vec<Parameter>,
  pub return_type: TypeRef,
  /// `None` for abstract/extern methods that carry no instructions.
  pub body: Option<MethodBody>,
  pub attributes: Vec<Attribute>,
}

impl MethodDefinition {
  pub fn new(
    name: &str,
    visibility: Visibility,
    is_static: bool,
    return_type: TypeRef,
  ) -> Self {
    Self {
      name: name.to_string(),
      declaring_type: String::new(),
      visibility,
      is_static,
      params: Vec::new(),
      return_type,
      body: None,
      attributes: Vec::new(),
    }
  }

  pub fn full_name(&self) -> String {
    if self.declaring_type.is_empty() {
      return self.name.clone();
    }

    format!("{}::{}", self.declaring_type, self.name)
  }

  pub fn is_void(&self) -> bool {
    self.return_type.is_void()
  }

  pub fn attribute(
    &self,
    name: &str,
  ) -> Option<&Attribute> {
    self.attributes.iter().find(|attr| attr.name == name)
  }

  pub fn to_json(&self) -> serde_json::Value {
    json!({
      "name": self.name,
      "declaring_type": self.declaring_type,
      "visibility": self.visibility,
      "static": self.is_static,
      "return_type": self.return_type.full_name,
      "params": self.params.iter().map(|p| format!("{}: {}", p.name, p.ty)).collect::<Vec<String>>(),
      "body": self.body.as_ref().map(|body| {
        body.instructions.iter().map(|instr| instr.to_string()).collect::<Vec<String>>()
      }),
    })
  }
}

/// A compiled type: an ordered, append-only member list plus the handler
/// registrations synthesized for it.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
  pub name: String,
  pub methods: Vec<MethodId>,
  pub handlers: Vec<HandlerRegistration>,
}

impl TypeDefinition {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      methods: Vec::new(),
      handlers: Vec::new(),
    }
  }
}
