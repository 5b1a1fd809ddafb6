use log::warn;

use crate::bytecode::emit::Emitter;
use crate::bytecode::lower_error::{Diagnostic, LowerError};
use crate::bytecode::{ARG_SLOT, LoweredProgram, Op};
use crate::fmt::directive::{ConvKind, Conversion, Directive};
use crate::fmt::parse::parse_format;
use crate::lang::callsite::{Arg, CallSite, LibFn};
use crate::streams::{STDOUT, resolve_stream};

/// Lowers library I/O call-sites into VM instruction sequences.
///
/// Each call-site is lowered to completion into its own buffer before the
/// next one is considered; only complete sequences are committed to the
/// output stream, so a failing call-site leaves no trace in the output.
pub struct Lowerer {
    emitter: Emitter,
}

impl Lowerer {
    pub fn new() -> Self {
        Self {
            emitter: Emitter::new(),
        }
    }

    /// Lower every call-site of a compilation unit.
    ///
    /// Best-effort: a failing call-site becomes a diagnostic at its source
    /// location and the rest still lower, so one pass reports every bad
    /// call. The step as a whole fails if any call-site failed.
    pub fn lower_program(mut self, calls: &[CallSite]) -> Result<LoweredProgram, Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();

        for call in calls {
            match self.lower_call(call) {
                Ok(ops) => self.emitter.commit(ops),
                Err(error) => diagnostics.push(Diagnostic {
                    loc: call.loc,
                    error,
                }),
            }
        }

        if diagnostics.is_empty() {
            Ok(self.emitter.finish())
        } else {
            Err(diagnostics)
        }
    }

    /// Lower one call-site to its instruction sequence.
    ///
    /// Pure with respect to the output stream: nothing is appended here, the
    /// caller commits the returned sequence as a unit.
    pub fn lower_call(&self, call: &CallSite) -> Result<Vec<Op>, LowerError> {
        let stream = match &call.stream {
            Some(name) => resolve_stream(name)?,
            None => STDOUT,
        };

        let mut ops = Vec::new();

        // The VM prints to one current stream; explicit-stream calls select
        // it up front and restore stdout after, keeping call-sites
        // self-contained.
        let redirected = stream != STDOUT;
        if redirected {
            ops.push(Op::SetStream { handle: stream });
        }

        match call.func {
            LibFn::Printf | LibFn::Fprintf => self.lower_printf(call, &mut ops)?,
            LibFn::Putchar | LibFn::Fputc => self.lower_putchar(call, &mut ops)?,
        }

        if redirected {
            ops.push(Op::SetStream { handle: STDOUT });
        }

        Ok(ops)
    }

    fn lower_printf(&self, call: &CallSite, ops: &mut Vec<Op>) -> Result<(), LowerError> {
        let Some((fmt, rest)) = call.args.split_first() else {
            return Err(LowerError::arity(1, 0));
        };

        match fmt {
            Arg::ConstStr(text) => {
                let directives = parse_format(text)?;
                self.lower_directives(&directives, rest, ops)
            }

            // Runtime-computed format string: there is nothing to parse at
            // compile time, so interpolation is impossible. Degrade to
            // printing the raw pointer as a string.
            Arg::Runtime(source) => {
                warn!(
                    "{}: dynamic format string '{}' printed without interpolation",
                    call.loc, source
                );
                if !rest.is_empty() {
                    warn!(
                        "{}: {} argument(s) after a dynamic format string are dropped",
                        call.loc,
                        rest.len()
                    );
                }
                ops.push(Op::LoadArg {
                    slot: ARG_SLOT,
                    source: source.clone(),
                });
                ops.push(Op::PrintStr { slot: ARG_SLOT });
                Ok(())
            }

            Arg::ConstInt(_) => Err(LowerError::mismatch("string", fmt.kind_name())),
        }
    }

    fn lower_putchar(&self, call: &CallSite, ops: &mut Vec<Op>) -> Result<(), LowerError> {
        if call.args.len() != 1 {
            return Err(LowerError::arity(1, call.args.len()));
        }

        match &call.args[0] {
            Arg::ConstInt(value) => {
                ops.push(Op::LoadInt {
                    slot: ARG_SLOT,
                    value: *value,
                });
                ops.push(Op::PrintChar { slot: ARG_SLOT });
            }
            Arg::Runtime(source) => {
                ops.push(Op::LoadArg {
                    slot: ARG_SLOT,
                    source: source.clone(),
                });
                ops.push(Op::PrintChar { slot: ARG_SLOT });
            }
            arg @ Arg::ConstStr(_) => {
                return Err(LowerError::mismatch("character code", arg.kind_name()));
            }
        }

        Ok(())
    }

    fn lower_directives(
        &self,
        directives: &[Directive],
        args: &[Arg],
        ops: &mut Vec<Op>,
    ) -> Result<(), LowerError> {
        let needed: usize = directives.iter().map(|d| d.args_consumed()).sum();
        if needed > args.len() {
            return Err(LowerError::arity(needed, args.len()));
        }
        if args.len() > needed {
            // C printf ignores excess variadic arguments; keep that behavior
            // but say so.
            warn!("{} excess printf argument(s) ignored", args.len() - needed);
        }

        let mut next_arg = args.iter();
        for directive in directives {
            match directive {
                Directive::Literal(text) => {
                    ops.push(Op::LoadStr {
                        slot: ARG_SLOT,
                        text: text.clone(),
                    });
                    ops.push(Op::PrintStr { slot: ARG_SLOT });
                }
                Directive::Conversion(conv) => {
                    let arg = next_arg
                        .next()
                        .ok_or_else(|| LowerError::arity(needed, args.len()))?;
                    self.lower_conversion(conv, arg, ops)?;
                }
            }
        }

        Ok(())
    }

    fn lower_conversion(
        &self,
        conv: &Conversion,
        arg: &Arg,
        ops: &mut Vec<Op>,
    ) -> Result<(), LowerError> {
        match (conv.kind, arg) {
            // The VM has no integer-to-decimal instruction. Constants get
            // their digit sequence synthesized here; runtime values fall
            // back to the VM's number-formatting routine.
            (ConvKind::Int, Arg::ConstInt(value)) => {
                // the 0 flag is ignored when a precision is given, like C
                let allow_zero_pad = conv.precision.is_none();
                let text = pad_field(&int_text(*value, conv), conv, allow_zero_pad);
                push_const_text(text, ops);
            }
            (ConvKind::Int, Arg::Runtime(source)) => {
                push_runtime(source, Op::PrintNum { slot: ARG_SLOT }, ops);
            }

            (ConvKind::Float, Arg::ConstInt(value)) => {
                // exact up to 2^53; larger magnitudes round to the nearest
                // representable double, as C's int-to-double promotion does
                let digits = conv.precision.unwrap_or(6);
                let text = pad_field(&format!("{:.*}", digits, *value as f64), conv, true);
                push_const_text(text, ops);
            }
            (ConvKind::Float, Arg::Runtime(source)) => {
                push_runtime(source, Op::PrintNum { slot: ARG_SLOT }, ops);
            }

            (ConvKind::Str, Arg::ConstStr(value)) => {
                let mut text = value.clone();
                if let Some(max) = conv.precision {
                    text = text.chars().take(max).collect();
                }
                let text = pad_field(&text, conv, false);
                push_const_text(text, ops);
            }
            (ConvKind::Str, Arg::Runtime(source)) => {
                push_runtime(source, Op::PrintStr { slot: ARG_SLOT }, ops);
            }

            (ConvKind::Char, Arg::ConstInt(value)) => {
                ops.push(Op::LoadInt {
                    slot: ARG_SLOT,
                    value: *value,
                });
                ops.push(Op::PrintChar { slot: ARG_SLOT });
            }
            (ConvKind::Char, Arg::Runtime(source)) => {
                push_runtime(source, Op::PrintChar { slot: ARG_SLOT }, ops);
            }

            // Statically visible mismatches. Best-effort only: a runtime
            // value can still hold the wrong thing, simplec's variadic
            // arguments carry no type guarantees.
            (kind, arg) => return Err(LowerError::mismatch(kind.expects(), arg.kind_name())),
        }

        Ok(())
    }
}

impl Default for Lowerer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_const_text(text: String, ops: &mut Vec<Op>) {
    ops.push(Op::LoadStr {
        slot: ARG_SLOT,
        text,
    });
    ops.push(Op::PrintStr { slot: ARG_SLOT });
}

fn push_runtime(source: &str, print: Op, ops: &mut Vec<Op>) {
    ops.push(Op::LoadArg {
        slot: ARG_SLOT,
        source: source.to_string(),
    });
    ops.push(print);
}

/// Render an integer constant, honoring `.N`: the digit count is
/// zero-extended to the precision, sign excluded, C-style.
fn int_text(value: i64, conv: &Conversion) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut text = String::new();
    if value < 0 {
        text.push('-');
    }
    if let Some(min) = conv.precision {
        if digits.len() < min {
            text.push_str(&"0".repeat(min - digits.len()));
        }
    }
    text.push_str(&digits);
    text
}

/// Apply width and the zero flag to a compile-time-rendered field.
///
/// Runtime values keep their natural width; the VM's print routines have no
/// padding support, so this is the only place width can be honored.
fn pad_field(text: &str, conv: &Conversion, allow_zero_pad: bool) -> String {
    let Some(width) = conv.width else {
        return text.to_string();
    };
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let fill = width - len;
    if allow_zero_pad && conv.zero_pad {
        // zeros go between the sign and the digits
        if let Some(rest) = text.strip_prefix('-') {
            return format!("-{}{}", "0".repeat(fill), rest);
        }
        return format!("{}{}", "0".repeat(fill), text);
    }
    format!("{}{}", " ".repeat(fill), text)
}
