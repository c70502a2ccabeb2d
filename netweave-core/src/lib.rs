pub mod diagnostics;
pub mod weaver;

pub use weaver::{derive_wire_name, has_connection_parameter, substitute_method, Weaver};
