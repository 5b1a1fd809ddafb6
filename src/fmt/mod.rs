pub mod directive;
pub mod parse;

pub use directive::{ConvKind, Conversion, Directive};
pub use parse::parse_format;
