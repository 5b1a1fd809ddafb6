// =============================================================================
// DIRECTIVE - Parsed pieces of a format string
// =============================================================================

/// What a conversion renders its argument as.
///
/// This is the supported subset of the C specifier grammar: `d`, `s`, `c`,
/// `f`. `%%` never reaches this level; the parser folds it into the
/// surrounding literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvKind {
    Int,
    Str,
    Char,
    Float,
}

impl ConvKind {
    /// What the directive expects its argument to be, for diagnostics.
    pub fn expects(&self) -> &'static str {
        match self {
            ConvKind::Int => "integer",
            ConvKind::Str => "string",
            ConvKind::Char => "character code",
            ConvKind::Float => "number",
        }
    }
}

/// One `%`-introduced conversion: kind plus the width/precision modifiers
/// that were written with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub kind: ConvKind,

    /// Minimum field width, right-aligned.
    pub width: Option<usize>,

    /// `.N` modifier: digits after the point for `f`, maximum length for `s`.
    pub precision: Option<usize>,

    /// `0` flag: pad numeric fields with zeros instead of spaces.
    pub zero_pad: bool,
}

impl Conversion {
    pub fn plain(kind: ConvKind) -> Self {
        Self {
            kind,
            width: None,
            precision: None,
            zero_pad: false,
        }
    }
}

/// One segment of a parsed format string, consumed in order by lowering.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// A run of ordinary characters, printed verbatim.
    Literal(String),

    /// A conversion that consumes the next call argument.
    Conversion(Conversion),
}

impl Directive {
    /// How many call arguments this directive consumes.
    pub fn args_consumed(&self) -> usize {
        match self {
            Directive::Literal(_) => 0,
            Directive::Conversion(_) => 1,
        }
    }
}
