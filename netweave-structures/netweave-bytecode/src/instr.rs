use serde::Serialize;

/// A forward-branch target inside one method body.
///
/// Labels are created by the builder before the branch that uses them and
/// bound exactly once at the point they resolve to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabelId(pub u32);

/// A by-name reference to a callable: either a runtime collaborator or a
/// sibling method generated by the same pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRef {
  pub declaring_type: String,
  pub name: String,
}

impl MethodRef {
  pub fn new(
    declaring_type: &str,
    name: &str,
  ) -> Self {
    Self {
      declaring_type: declaring_type.to_string(),
      name: name.to_string(),
    }
  }
}

/// A single low-level operation in a method body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Instr {
  /// Push argument `n` onto the evaluation stack. Argument 0 is the
  /// receiver for instance methods.
  LoadArg(u16),

  /// Push local slot `n`.
  LoadLocal(u16),

  /// Pop into local slot `n`.
  StoreLocal(u16),

  /// Push the null sentinel.
  LoadNull,

  /// Push an inline string constant.
  LoadString(String),

  /// Push an inline integer constant.
  LoadInt(i64),

  /// Push the runtime token of the named type.
  LoadTypeToken(String),

  /// Checked downcast of the stack top to the named type.
  CastClass(String),

  /// Static or non-virtual call.
  Call(MethodRef),

  /// Virtual call through the receiver on the stack.
  CallVirtual(MethodRef),

  /// Pop a boolean; jump forward to `label` when true.
  BranchIfTrue(LabelId),

  /// Branch target marker. Emitted by `BodyBuilder::bind_label`, never
  /// directly.
  Label(LabelId),

  /// Return from the method.
  Return,

  /// No-operation.
  Nop,
}
