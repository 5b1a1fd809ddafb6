//! Standard-I/O lowering shim for the simplec compiler.
//!
//! Translates library I/O calls (`printf`, `putchar` and their stream-aware
//! variants) into fixed sequences of bytecode VM instructions at compile
//! time. The VM has no libc; every call becomes a handful of primitive
//! load/print instructions appended to the output stream.

pub mod bytecode;
pub mod fmt;
pub mod lang;
pub mod streams;

pub use bytecode::lower::Lowerer;
pub use bytecode::lower_error::{Diagnostic, LowerError};
pub use bytecode::{LoweredProgram, Op};
pub use lang::callsite::{Arg, CallSite, LibFn, SourceLoc};
