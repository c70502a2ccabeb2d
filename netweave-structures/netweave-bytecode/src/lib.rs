pub mod body;
pub mod builder;
pub mod display;
pub mod instr;

pub use body::{LocalSlot, MethodBody};
pub use builder::BodyBuilder;
pub use display::format_body;
pub use instr::{Instr, LabelId, MethodRef};
