use core::fmt;
use std::fmt::{Display, Formatter, Write};

use crate::{
  body::MethodBody,
  instr::{Instr, MethodRef},
};

impl Display for MethodRef {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    write!(f, "{}::{}", self.declaring_type, self.name)
  }
}

impl Display for Instr {
  fn fmt(
    &self,
    f: &mut Formatter,
  ) -> fmt::Result {
    match self {
      Instr::LoadArg(index) => write!(f, "ldarg {}", index),
      Instr::LoadLocal(index) => write!(f, "ldloc {}", index),
      Instr::StoreLocal(index) => write!(f, "stloc {}", index),
      Instr::LoadNull => write!(f, "ldnull"),
      Instr::LoadString(value) => write!(f, "ldstr \"{}\"", value),
      Instr::LoadInt(value) => write!(f, "ldc {}", value),
      Instr::LoadTypeToken(type_name) => write!(f, "ldtoken {}", type_name),
      Instr::CastClass(type_name) => write!(f, "castclass {}", type_name),
      Instr::Call(method) => write!(f, "call {}", method),
      Instr::CallVirtual(method) => write!(f, "callvirt {}", method),
      Instr::BranchIfTrue(label) => write!(f, "brtrue L{}", label.0),
      Instr::Label(label) => write!(f, "L{}:", label.0),
      Instr::Return => write!(f, "ret"),
      Instr::Nop => write!(f, "nop"),
    }
  }
}

/// Render a body as stable, line-oriented text. Used by debug dumps and
/// golden tests.
pub fn format_body(body: &MethodBody) -> String {
  let mut output = String::new();

  for (index, local) in body.locals.iter().enumerate() {
    writeln!(output, "local {}: {}: {}", index, local.name, local.ty).unwrap();
  }

  for instr in &body.instructions {
    match instr {
      Instr::Label(_) => writeln!(output, "{}", instr).unwrap(),
      _ => writeln!(output, "  {}", instr).unwrap(),
    }
  }

  output
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::builder::BodyBuilder;

  #[test]
  fn formats_labels_unindented() {
    let mut builder = BodyBuilder::new();
    builder.declare_local("writer", "NetworkWriter");
    let resume = builder.new_label();
    builder.emit(Instr::BranchIfTrue(resume));
    builder.emit(Instr::Return);
    builder.bind_label(resume);
    builder.emit(Instr::Call(MethodRef::new("NetworkWriterPool", "get")));

    let text = format_body(&builder.finish());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "local 0: writer: NetworkWriter");
    assert_eq!(lines[1], "  brtrue L0");
    assert_eq!(lines[3], "L0:");
    assert_eq!(lines[4], "  call NetworkWriterPool::get");
  }
}
