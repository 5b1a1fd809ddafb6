pub mod disasm;
pub mod emit;
pub mod ir;
pub mod lower;
pub mod lower_error;
pub mod op;

pub use ir::LoweredProgram;
pub use op::{ARG_SLOT, Op};
