use serde::Serialize;

use crate::instr::Instr;

/// A named local variable slot declared by a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalSlot {
  pub name: String,
  pub ty: String,
}

/// A finalized instruction sequence. Built once through `BodyBuilder` and
/// never mutated afterwards; a rewrite replaces the whole body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MethodBody {
  pub locals: Vec<LocalSlot>,
  pub instructions: Vec<Instr>,
}

impl MethodBody {
  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }

  pub fn len(&self) -> usize {
    self.instructions.len()
  }
}
