use crate::bytecode::lower_error::LowerError;
use crate::fmt::directive::{ConvKind, Conversion, Directive};

/// Largest accepted width or precision. Padding is materialized at compile
/// time, so a field wider than this is a broken format string, not a
/// formatting request.
const MAX_FIELD: usize = 4096;

/// Parse a compile-time-known format string into an ordered directive
/// sequence.
///
/// Scans left to right. `%` starts a conversion: an optional `0` flag,
/// decimal width, optional `.precision`, then a type character out of
/// `d s c f`. `%%` is folded into the surrounding literal run, so a format
/// string without real conversions always parses to at most one `Literal`.
///
/// An unknown type character or a `%` at end of input fails with a format
/// error carrying the offending specifier text and its byte offset; the
/// caller aborts the call-site without emitting anything.
pub fn parse_format(fmt: &str) -> Result<Vec<Directive>, LowerError> {
    let chars: Vec<(usize, char)> = fmt.char_indices().collect();
    let mut directives = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c != '%' {
            literal.push(c);
            i += 1;
            continue;
        }

        // '%%' is plain text, not a conversion
        if let Some(&(_, '%')) = chars.get(i + 1) {
            literal.push('%');
            i += 2;
            continue;
        }

        i += 1;

        let mut zero_pad = false;
        while let Some(&(_, '0')) = chars.get(i) {
            zero_pad = true;
            i += 1;
        }

        let width = scan_number(&chars, &mut i);

        let mut precision = None;
        if let Some(&(_, '.')) = chars.get(i) {
            i += 1;
            // '%.s' means precision zero, like C
            precision = Some(scan_number(&chars, &mut i).unwrap_or(0));
        }

        let kind = match chars.get(i) {
            Some(&(_, 'd')) => ConvKind::Int,
            Some(&(_, 's')) => ConvKind::Str,
            Some(&(_, 'c')) => ConvKind::Char,
            Some(&(_, 'f')) => ConvKind::Float,
            Some(&(pos, other)) => {
                let spec = &fmt[start..pos + other.len_utf8()];
                return Err(LowerError::format(spec, start));
            }
            None => {
                return Err(LowerError::format(&fmt[start..], start));
            }
        };
        i += 1;

        if width.unwrap_or(0) > MAX_FIELD || precision.unwrap_or(0) > MAX_FIELD {
            let end = chars.get(i).map(|&(pos, _)| pos).unwrap_or(fmt.len());
            return Err(LowerError::format(&fmt[start..end], start));
        }

        if !literal.is_empty() {
            directives.push(Directive::Literal(std::mem::take(&mut literal)));
        }
        directives.push(Directive::Conversion(Conversion {
            kind,
            width,
            precision,
            zero_pad,
        }));
    }

    if !literal.is_empty() {
        directives.push(Directive::Literal(literal));
    }

    Ok(directives)
}

fn scan_number(chars: &[(usize, char)], i: &mut usize) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.get(*i) {
        let Some(digit) = c.to_digit(10) else { break };
        // saturate; anything past MAX_FIELD is rejected by the caller anyway
        let next = value
            .unwrap_or(0)
            .saturating_mul(10)
            .saturating_add(digit as usize);
        value = Some(next);
        *i += 1;
    }
    value
}
