//! Raw text coercion for numeric input fields.
//!
//! Input fields hand over whatever the user typed. Coercion follows the
//! browser's `Number(text)` conversion and maps anything non-numeric to `0`,
//! so a half-typed value never interrupts the calculation.
//!
//! Surrounding whitespace is the browser's set (Unicode space separators,
//! line terminators and the byte order mark), not Rust's `char::is_whitespace`.

/// Coerce raw field text to a number. Never fails; non-numeric text is `0`.
pub fn to_number(text: &str) -> f64 {
    let value = parse_number(text.trim_matches(is_js_whitespace)).unwrap_or(0.0);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return Some(value);
    }

    // `f64::from_str` also accepts "inf", "infinity" and "nan" in any case,
    // none of which are numeric for an input field.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    s.parse::<f64>().ok()
}

/// `0x1F`, `0o17`, `0b101`. Unsigned only.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0_f64;
    for c in s[2..].chars() {
        let digit = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}
