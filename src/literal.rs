//! Constant lexing: hex/octal/decimal integers with suffixes, simple
//! (non-exponent) floats, and simple character constants. The only place
//! that builds a [`Constant`].

use crate::ast::{Constant, ConstantKind, FloatSuffix, IntegerBase, IntegerSuffix};
use crate::error::PResult;
use crate::scanner::Scanner;

/// `u`/`U`, `l`/`L`, `ll`/`LL` in any combination and case.
fn integer_suffix(sc: &mut Scanner) -> IntegerSuffix {
    let mut suffix = IntegerSuffix::default();
    loop {
        if !suffix.unsigned && (sc.match_byte(b'u') || sc.match_byte(b'U')) {
            suffix.unsigned = true;
            continue;
        }
        if !suffix.long && !suffix.long_long {
            let pos = sc.pos();
            if sc.match_byte(b'l') || sc.match_byte(b'L') {
                if sc.match_byte(b'l') || sc.match_byte(b'L') {
                    suffix.long_long = true;
                } else {
                    suffix.long = true;
                }
                continue;
            }
            sc.set_pos(pos);
        }
        break;
    }
    suffix
}

fn float_suffix(sc: &mut Scanner) -> FloatSuffix {
    if sc.match_byte(b'f') || sc.match_byte(b'F') {
        FloatSuffix { float: true, long_double: false }
    } else if sc.match_byte(b'l') || sc.match_byte(b'L') {
        FloatSuffix { float: false, long_double: true }
    } else {
        FloatSuffix::default()
    }
}

/// Skips leading whitespace, then tries, in order: hex integer, octal
/// integer, decimal integer (with an optional `.digits` tail promoting it to
/// a simple float), simple character constant. Returns `None` (cursor fully
/// restored, whitespace included) if nothing matches; `Err` only for an
/// overflowing integer literal.
pub fn constant<'a>(sc: &mut Scanner<'a>) -> PResult<Option<Constant<'a>>> {
    let pre_ws = sc.pos();
    sc.skip_whitespace();
    let start = sc.pos();

    if let Some((_, value)) = sc.hex_nat()? {
        let suffix = integer_suffix(sc);
        let full_text = sc_slice(sc, start);
        return Ok(Some(Constant {
            kind: ConstantKind::Integer { base: IntegerBase::Hexadecimal, value, suffix },
            text: full_text,
        }));
    }

    if let Some((_, value)) = sc.octal_nat()? {
        // A lone `0` not followed by `.` was already consumed as octal zero;
        // if a `.` follows, back up and let the decimal-float path handle it.
        if sc.peek().map(|b| b == b'.').unwrap_or(false) {
            sc.set_pos(start);
        } else {
            let suffix = integer_suffix(sc);
            let full_text = sc_slice(sc, start);
            return Ok(Some(Constant {
                kind: ConstantKind::Integer { base: IntegerBase::Octal, value, suffix },
                text: full_text,
            }));
        }
    }

    if let Some((_, value)) = sc.decimal_nat()? {
        if sc.match_byte(b'.') {
            let _ = sc.decimal_nat()?;
            let suffix = float_suffix(sc);
            let full_text = sc_slice(sc, start);
            return Ok(Some(Constant { kind: ConstantKind::Float { suffix }, text: full_text }));
        }
        let suffix = integer_suffix(sc);
        let full_text = sc_slice(sc, start);
        return Ok(Some(Constant {
            kind: ConstantKind::Integer { base: IntegerBase::Decimal, value, suffix },
            text: full_text,
        }));
    }

    // Leading `.digits` float with no integer part, e.g. `.5f`.
    if sc.match_byte(b'.') {
        if sc.decimal_nat()?.is_some() {
            let suffix = float_suffix(sc);
            let full_text = sc_slice(sc, start);
            return Ok(Some(Constant { kind: ConstantKind::Float { suffix }, text: full_text }));
        }
        sc.set_pos(start);
    }

    if sc.match_byte(b'\'') {
        let value = match sc.advance() {
            Ok(b'\\') => match sc.advance() {
                Ok(b'n') => b'\n',
                Ok(b't') => b'\t',
                Ok(b'r') => b'\r',
                Ok(b'0') => 0,
                Ok(b'\\') => b'\\',
                Ok(b'\'') => b'\'',
                Ok(b'"') => b'"',
                Ok(other) => other,
                Err(_) => {
                    sc.set_pos(pre_ws);
                    return Ok(None);
                }
            },
            Ok(b) => b,
            Err(_) => {
                sc.set_pos(pre_ws);
                return Ok(None);
            }
        };
        if !sc.match_byte(b'\'') {
            sc.set_pos(pre_ws);
            return Ok(None);
        }
        let full_text = sc_slice(sc, start);
        return Ok(Some(Constant { kind: ConstantKind::Character { value }, text: full_text }));
    }

    sc.set_pos(pre_ws);
    Ok(None)
}

fn sc_slice<'a>(sc: &Scanner<'a>, start: usize) -> &'a [u8] {
    sc.slice(start, sc.pos())
}
