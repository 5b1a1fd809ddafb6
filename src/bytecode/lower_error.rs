use crate::lang::callsite::SourceLoc;

/// A lowering failure for one call-site.
///
/// Every variant is detected while the call-site is being lowered and is
/// final: lowering is deterministic, so nothing is retried, and a failing
/// call-site emits no instructions at all.
#[derive(Debug, Clone, PartialEq)]
pub enum LowerError {
    /// Malformed or unsupported conversion specifier.
    Format { spec: String, offset: usize },

    /// The format string's conversions need more arguments than were passed.
    Arity { needed: usize, given: usize },

    /// A statically-known argument contradicts what its directive expects.
    Type {
        expected: &'static str,
        found: &'static str,
    },

    /// Stream name outside the well-known set. Front-end bug, not a user
    /// error.
    UnknownStream { name: String },
}

impl LowerError {
    pub fn format(spec: impl Into<String>, offset: usize) -> Self {
        LowerError::Format {
            spec: spec.into(),
            offset,
        }
    }

    pub fn arity(needed: usize, given: usize) -> Self {
        LowerError::Arity { needed, given }
    }

    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        LowerError::Type { expected, found }
    }

    pub fn unknown_stream(name: impl Into<String>) -> Self {
        LowerError::UnknownStream { name: name.into() }
    }
}

impl std::fmt::Display for LowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowerError::Format { spec, offset } => {
                write!(
                    f,
                    "format error: unsupported conversion '{}' at byte {}",
                    spec, offset
                )
            }
            LowerError::Arity { needed, given } => {
                write!(
                    f,
                    "arity error: format string needs {} argument(s), {} given",
                    needed, given
                )
            }
            LowerError::Type { expected, found } => {
                write!(f, "type error: directive expects {}, got {}", expected, found)
            }
            LowerError::UnknownStream { name } => {
                write!(
                    f,
                    "unknown stream '{}' (only stdin, stdout and stderr exist)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for LowerError {}

/// A lowering error tied to the offending call-site's source location.
///
/// Lowering keeps going after a failed call-site so one compilation pass can
/// report every bad call, then fails the step as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub loc: SourceLoc,
    pub error: LowerError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc, self.error)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = LowerError::format("%q", 7);

        let msg = err.to_string();
        assert!(msg.contains("format error"));
        assert!(msg.contains("%q"));
        assert!(msg.contains("byte 7"));
    }

    #[test]
    fn test_arity_error_display() {
        let err = LowerError::arity(2, 1);

        let msg = err.to_string();
        assert!(msg.contains("arity error"));
        assert!(msg.contains("2 argument(s)"));
        assert!(msg.contains("1 given"));
    }

    #[test]
    fn test_type_error_display() {
        let err = LowerError::mismatch("string", "integer constant");

        let msg = err.to_string();
        assert!(msg.contains("type error"));
        assert!(msg.contains("expects string"));
        assert!(msg.contains("integer constant"));
    }

    #[test]
    fn test_unknown_stream_display() {
        let err = LowerError::unknown_stream("stdlog");

        assert!(err.to_string().contains("stdlog"));
    }

    #[test]
    fn test_diagnostic_carries_location() {
        let diag = Diagnostic {
            loc: SourceLoc::new(4, 9),
            error: LowerError::arity(1, 0),
        };

        let msg = diag.to_string();
        assert!(msg.starts_with("4:9: "));
        assert!(msg.contains("arity error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = LowerError::format("%", 0);
        let _: &dyn std::error::Error = &err;
    }
}
