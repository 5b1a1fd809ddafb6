pub mod callsite;

pub use callsite::{Arg, CallSite, LibFn, SourceLoc};
