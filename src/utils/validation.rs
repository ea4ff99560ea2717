use crate::utils::error::{Result, SolverError};

pub trait Validate {
    type Output;

    fn validate(&self) -> Result<Self::Output>;
}

pub fn validate_required_field<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| SolverError::MissingValueError {
        field: field_name.to_string(),
    })
}

/// Rejects lengths `<= 0`. NaN compares false and is let through.
pub fn validate_positive_length(field_name: &str, value: f32) -> Result<f32> {
    if value <= 0.0 {
        return Err(SolverError::NonPositiveValueError {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Converts text the way C `atof` does: leading whitespace is skipped, the
/// longest numeric prefix (decimal or `0x` hexadecimal) is converted and the
/// rest ignored. Text without a numeric prefix yields `0.0`.
pub fn parse_c_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));
    if let Some(value) = parse_hex_float(trimmed) {
        return value;
    }
    let literal = numeric_prefix(trimmed);
    literal.parse::<f64>().unwrap_or(0.0)
}

/// `[+-]0x` followed by hex digits, an optional `.` fraction and an optional
/// binary exponent `p[+-]digits`. Returns `None` when no hex digit follows
/// the `0x`, leaving the leading `0` to the decimal path.
fn parse_hex_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let (negative, mut pos) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    if !matches!(bytes.get(pos..pos + 2), Some([b'0', b'x' | b'X'])) {
        return None;
    }
    pos += 2;

    let mut mantissa = 0.0_f64;
    let mut scale: i32 = 0;
    let mut digits = 0;
    while let Some(d) = bytes.get(pos).and_then(|b| char::from(*b).to_digit(16)) {
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = bytes.get(pos).and_then(|b| char::from(*b).to_digit(16)) {
            mantissa = mantissa * 16.0 + f64::from(d);
            scale -= 4;
            digits += 1;
            pos += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'p' | b'P')) {
        let mut exp_pos = pos + 1;
        let exp_negative = bytes.get(exp_pos) == Some(&b'-');
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            let exponent = bytes[exp_pos..exp_pos + exp_digits]
                .iter()
                .fold(0_i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
            scale = if exp_negative {
                scale.saturating_sub(exponent)
            } else {
                scale.saturating_add(exponent)
            };
        }
    }

    let value = mantissa * 2.0_f64.powi(scale);
    Some(if negative { -value } else { value })
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = &bytes[end..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return &s[..end + word.len()];
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
