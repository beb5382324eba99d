use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format.
///
/// This function accepts three or six hexadecimal digits, optionally preceded
/// by a `#`, in either case. Before parsing, it trims leading and trailing
/// white space. If successful, this function returns the three coordinates as
/// unsigned bytes. It transparently handles single-digit coordinates.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        // from_str_radix tolerates a leading sign, hex colors do not.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 24-bit color in hashed hexadecimal format with uppercase digits.
pub(crate) fn format_hex(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
}

/// Format the 24-bit color as comma-separated decimal numbers.
pub(crate) fn format_decimal(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    write!(f, "{}, {}, {}", r, g, b)
}

/// Format the floating point coordinates separated by commas.
///
/// This function respects the formatter's precision, defaulting to 3 digits
/// past the decimal.
pub(crate) fn format_coordinates(
    coordinates: &[crate::Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(3);
    let [c1, c2, c3] = *coordinates;
    write!(
        f,
        "{:.*}, {:.*}, {:.*}",
        precision, c1, precision, c2, precision, c3
    )
}

#[cfg(test)]
mod test {
    use super::parse_hex;
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#4ea6ff"), Ok([0x4e, 0xa6, 0xff]));
        assert_eq!(parse_hex("#4EA6FF"), Ok([0x4e, 0xa6, 0xff]));
        assert_eq!(parse_hex("4ea6ff"), Ok([0x4e, 0xa6, 0xff]));
        assert_eq!(parse_hex("  #4ea6ff\n"), Ok([0x4e, 0xa6, 0xff]));
        assert_eq!(parse_hex("#abc"), Ok([0xaa, 0xbb, 0xcc]));
        assert_eq!(parse_hex("fff"), Ok([0xff, 0xff, 0xff]));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex("#00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#0000"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex(""), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("##abc"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#efg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+1ffff"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#💩0"), Err(ColorFormatError::UnexpectedCharacters));
    }
}
