//! Fixed-point number rendering.
//!
//! Rounding works on the shortest decimal form of the value (what `{}`
//! prints) and goes half-up, so `2.675` renders as `2.68` even though the
//! nearest binary value sits just below the tie.

/// Separators used when rendering grouped numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Render `value` with exactly `decimals` fractional digits, `.` as the
/// decimal point and no grouping. Non-finite values render as `NaN`,
/// `Infinity` and `-Infinity`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    match split_fixed(value, decimals) {
        Fixed::Finite {
            negative,
            integer,
            fraction,
        } => {
            let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
            if negative {
                out.push('-');
            }
            out.push_str(&integer);
            if !fraction.is_empty() {
                out.push('.');
                out.push_str(&fraction);
            }
            out
        }
        Fixed::Named(name) => name.to_string(),
    }
}

/// Same as [`format_fixed`] with the integer part grouped in threes,
/// e.g. `1234567.891` -> `1,234,567.89`.
pub fn format_grouped(value: f64, decimals: usize, format: &NumberFormat) -> String {
    let (negative, integer, fraction) = match split_fixed(value, decimals) {
        Fixed::Finite {
            negative,
            integer,
            fraction,
        } => (negative, integer, fraction),
        Fixed::Named(name) => return name.to_string(),
    };

    let mut out = String::with_capacity(integer.len() * 4 / 3 + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            out.push(format.grouping_separator);
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

enum Fixed {
    Finite {
        negative: bool,
        integer: String,
        fraction: String,
    },
    Named(&'static str),
}

fn split_fixed(value: f64, decimals: usize) -> Fixed {
    if value.is_nan() {
        return Fixed::Named("NaN");
    }
    if value.is_infinite() {
        return Fixed::Named(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // `{}` never uses exponent notation and yields the shortest digits that
    // round-trip.
    let shortest = format!("{}", value.abs());
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let kept = integer.len() + decimals;
    let round_up = digits.get(kept).is_some_and(|d| *d >= b'5');
    digits.resize(kept, b'0');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let fraction = digits.split_off(split);
    Fixed::Finite {
        negative: value.is_sign_negative(),
        integer: String::from_utf8_lossy(&digits).into_owned(),
        fraction: String::from_utf8_lossy(&fraction).into_owned(),
    }
}
