use serde::{Deserialize, Serialize};

/// Which woven artifacts get dumped to stdout after generation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DebugPrint {
  SplitMethod,
  ReceiveStub,
}

/// Per-component trace categories for stderr debug output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DebugTrace {
  Validator,
  Splitter,
  Stub,
  Serializers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaveConfig {
  pub debug: bool,
  pub debug_print: Vec<DebugPrint>,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
}

impl WeaveConfig {
  pub fn new(
    debug: bool,
    debug_print: Vec<DebugPrint>,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug,
      debug_print,
      debug_trace,
      quiet,
      verbose,
    }
  }

  pub fn new_basic(
    debug_print: Vec<DebugPrint>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug_print,
      quiet,
      verbose,
      ..Self::default()
    }
  }
}
