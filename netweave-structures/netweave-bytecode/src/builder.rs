use crate::{
  body::{LocalSlot, MethodBody},
  instr::{Instr, LabelId},
};

/// Append-only builder for a single method body.
///
/// Emission order is final: instructions are appended, never edited in
/// place. Forward branches go through labels created up front and bound at
/// the point they resolve to.
pub struct BodyBuilder {
  locals: Vec<LocalSlot>,
  instructions: Vec<Instr>,

  /// Bound flag per created label, indexed by `LabelId`.
  labels: Vec<bool>,
}

impl BodyBuilder {
  pub fn new() -> Self {
    Self {
      locals: Vec::new(),
      instructions: Vec::new(),
      labels: Vec::new(),
    }
  }

  /// Declare a local slot and return its index.
  pub fn declare_local(
    &mut self,
    name: &str,
    ty: &str,
  ) -> u16 {
    let index = self.locals.len() as u16;
    self.locals.push(LocalSlot {
      name: name.to_string(),
      ty: ty.to_string(),
    });

    index
  }

  /// Append an instruction.
  pub fn emit(
    &mut self,
    instr: Instr,
  ) {
    self.instructions.push(instr);
  }

  /// Create a fresh, unbound label.
  pub fn new_label(&mut self) -> LabelId {
    let label = LabelId(self.labels.len() as u32);
    self.labels.push(false);

    label
  }

  /// Bind a label at the current position, emitting its marker.
  ///
  /// # Panics
  /// Panics in debug mode if the label was already bound.
  pub fn bind_label(
    &mut self,
    label: LabelId,
  ) {
    debug_assert!(
      !self.labels[label.0 as usize],
      "label L{} bound twice",
      label.0
    );
    self.labels[label.0 as usize] = true;
    self.instructions.push(Instr::Label(label));
  }

  /// Finish building and return the completed body.
  ///
  /// # Panics
  /// Panics in debug mode if any created label was never bound.
  pub fn finish(self) -> MethodBody {
    debug_assert!(
      self.labels.iter().all(|bound| *bound),
      "body finished with unbound labels"
    );

    MethodBody {
      locals: self.locals,
      instructions: self.instructions,
    }
  }
}

impl Default for BodyBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn emits_in_order() {
    let mut builder = BodyBuilder::new();
    builder.emit(Instr::LoadArg(0));
    builder.emit(Instr::Nop);
    builder.emit(Instr::Return);

    let body = builder.finish();
    assert_eq!(
      body.instructions,
      vec![Instr::LoadArg(0), Instr::Nop, Instr::Return]
    );
  }

  #[test]
  fn locals_are_indexed_in_declaration_order() {
    let mut builder = BodyBuilder::new();
    assert_eq!(builder.declare_local("writer", "NetworkWriter"), 0);
    assert_eq!(builder.declare_local("scratch", "i32"), 1);

    let body = builder.finish();
    assert_eq!(body.locals.len(), 2);
    assert_eq!(body.locals[0].name, "writer");
  }

  #[test]
  fn bound_label_lands_as_marker() {
    let mut builder = BodyBuilder::new();
    let skip = builder.new_label();
    builder.emit(Instr::BranchIfTrue(skip));
    builder.emit(Instr::Return);
    builder.bind_label(skip);
    builder.emit(Instr::Nop);

    let body = builder.finish();
    assert_eq!(body.instructions[0], Instr::BranchIfTrue(skip));
    assert_eq!(body.instructions[2], Instr::Label(skip));
  }

  #[test]
  #[should_panic(expected = "unbound labels")]
  fn unbound_label_is_rejected() {
    let mut builder = BodyBuilder::new();
    let never = builder.new_label();
    builder.emit(Instr::BranchIfTrue(never));
    builder.finish();
  }
}
