// =============================================================================
// CALLSITE - Library call descriptors handed over by the front end
// =============================================================================

/// Position of a call-site in the compiled source, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLoc {
    pub line: u32,
    pub col: u32,
}

impl SourceLoc {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The fixed vocabulary of library I/O functions the shim lowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibFn {
    Printf,
    Putchar,
    Fprintf,
    Fputc,
}

impl LibFn {
    pub fn name(&self) -> &'static str {
        match self {
            LibFn::Printf => "printf",
            LibFn::Putchar => "putchar",
            LibFn::Fprintf => "fprintf",
            LibFn::Fputc => "fputc",
        }
    }

    pub fn from_name(name: &str) -> Option<LibFn> {
        match name {
            "printf" => Some(LibFn::Printf),
            "putchar" => Some(LibFn::Putchar),
            "fprintf" => Some(LibFn::Fprintf),
            "fputc" => Some(LibFn::Fputc),
            _ => None,
        }
    }
}

/// One call argument, tagged with what the front end statically knows.
///
/// simplec gives no typing guarantees for variadic arguments, so this tag is
/// the only type information lowering ever sees.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// String literal with a compile-time-known value.
    ConstStr(String),

    /// Integer literal with a compile-time-known value.
    ConstInt(i64),

    /// Opaque runtime value or pointer. The string names the variable or
    /// slot the VM loads it from.
    Runtime(String),
}

impl Arg {
    /// Human-readable kind tag, used in type-mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Arg::ConstStr(_) => "string constant",
            Arg::ConstInt(_) => "integer constant",
            Arg::Runtime(_) => "runtime value",
        }
    }
}

/// A single library I/O invocation, as described by the front end.
///
/// Immutable; built per call-site during compilation and discarded after
/// lowering.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSite {
    pub func: LibFn,

    /// Explicit stream name for the `f*` variants. `None` means stdout.
    pub stream: Option<String>,

    /// Ordered argument expressions, format string first where one exists.
    pub args: Vec<Arg>,

    pub loc: SourceLoc,
}

impl CallSite {
    pub fn new(func: LibFn, args: Vec<Arg>, loc: SourceLoc) -> Self {
        Self {
            func,
            stream: None,
            args,
            loc,
        }
    }

    pub fn with_stream(func: LibFn, stream: impl Into<String>, args: Vec<Arg>, loc: SourceLoc) -> Self {
        Self {
            func,
            stream: Some(stream.into()),
            args,
            loc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_libfn_name_roundtrip() {
        for func in [LibFn::Printf, LibFn::Putchar, LibFn::Fprintf, LibFn::Fputc] {
            assert_eq!(LibFn::from_name(func.name()), Some(func));
        }
    }

    #[test]
    fn test_libfn_unknown_name() {
        assert_eq!(LibFn::from_name("fopen"), None);
    }

    #[test]
    fn test_source_loc_display() {
        assert_eq!(SourceLoc::new(12, 3).to_string(), "12:3");
    }

    #[test]
    fn test_arg_kind_names() {
        assert_eq!(Arg::ConstStr("x".to_string()).kind_name(), "string constant");
        assert_eq!(Arg::ConstInt(0).kind_name(), "integer constant");
        assert_eq!(Arg::Runtime("p".to_string()).kind_name(), "runtime value");
    }
}
