//! Numeric literal scanning.
//!
//! Accepts what C `strtod` accepts for decimal input: an optional sign,
//! digits with an optional fraction, an optional exponent, and the words
//! `inf`, `infinity` and `nan` in any case. Hexadecimal floats are not
//! recognised.

/// Length in bytes of the longest numeric literal at the start of `input`,
/// or `None` if there is none.
pub fn scan_number(input: &[u8]) -> Option<usize> {
    let mut pos = 0;
    if matches!(input.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if let Some(len) = scan_special(&input[pos..]) {
        return Some(pos + len);
    }

    let int_digits = count_digits(&input[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if input.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&input[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it.
    if matches!(input.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(input.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&input[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

fn count_digits(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn scan_special(input: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            input.len() >= word.len() && input[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| word.len())
}

/// Parse the numeric literal at the start of `input`, returning the value and
/// the number of bytes consumed.
pub fn parse_number_prefix(input: &str) -> Option<(f64, usize)> {
    parse_number_bytes(input.as_bytes())
}

/// Byte-slice form of [`parse_number_prefix`]; `input` need not be valid
/// UTF-8 past the literal.
///
/// Leading C whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`) is skipped
/// and counted in the consumed length, but only when a literal follows it.
pub fn parse_number_bytes(input: &[u8]) -> Option<(f64, usize)> {
    let blanks = input.iter().take_while(|&&b| is_c_space(b)).count();
    let digits = &input[blanks..];
    let len = scan_number(digits)?;
    // The scanned bytes are ASCII.
    let value = std::str::from_utf8(&digits[..len]).ok()?.parse::<f64>().ok()?;
    Some((value, blanks + len))
}

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Parse a whole cell text as a number. Leading whitespace is allowed,
/// anything after the literal is not.
pub fn parse_number_literal(text: &str) -> Option<f64> {
    let (value, len) = parse_number_prefix(text)?;
    (len == text.len()).then_some(value)
}
