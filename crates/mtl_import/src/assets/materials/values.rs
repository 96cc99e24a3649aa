//! Text to value coercion for directive arguments
//!
//! Material files in the wild are full of junk tokens, so none of these
//! fail: whatever numeric prefix a token has is used, and a token with no
//! numeric prefix reads as zero.

use super::cursor::Cursor;
use crate::foundation::math::Color3;

/// Parse a decimal float, independent of the process locale
///
/// Accepts an optional sign, integer and fractional digits and an optional
/// exponent. Trailing garbage after the longest numeric prefix is ignored;
/// an empty or non-numeric token yields `0.0`.
pub fn parse_float(token: &[u8]) -> f32 {
    let len = float_prefix_len(token);
    std::str::from_utf8(&token[..len])
        .ok()
        .and_then(|text| text.parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Parse a base-10 integer; malformed or out-of-range input yields `0`
pub fn parse_int(token: &[u8]) -> i32 {
    let mut len = sign_len(token);
    len += digit_run(&token[len..]);
    std::str::from_utf8(&token[..len])
        .ok()
        .and_then(|text| text.parse::<i32>().ok())
        .unwrap_or(0)
}

/// Read three tokens as an RGB triple
///
/// Missing components (short line, end of input) stay at `0.0`.
pub fn parse_color(cursor: &mut Cursor<'_>) -> Color3 {
    let r = parse_float(cursor.next_word());
    let g = parse_float(cursor.next_word());
    let b = parse_float(cursor.next_word());
    Color3::new(r, g, b)
}

/// Length of the longest prefix of `token` that forms a valid float literal
fn float_prefix_len(token: &[u8]) -> usize {
    let mut len = sign_len(token);

    let int_digits = digit_run(&token[len..]);
    len += int_digits;

    let mut frac_digits = 0;
    if token.get(len) == Some(&b'.') {
        frac_digits = digit_run(&token[len + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(token.get(len), Some(b'e' | b'E')) {
        let exp_start = len + 1;
        let exp_sign = sign_len(&token[exp_start..]);
        let exp_digits = digit_run(&token[exp_start + exp_sign..]);
        if exp_digits > 0 {
            len = exp_start + exp_sign + exp_digits;
        }
    }

    len
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
