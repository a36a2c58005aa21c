use crate::error::Error;

pub const DEFAULT_LIMIT: i64 = 20;
pub const DEFAULT_PAGE: i64 = 1;

/// Coerces a raw paging parameter to a positive integer. Absent, malformed
/// and non-positive values fall back to the default.
pub fn parse_paging(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(default)
}

/// Decodes the first 8 bytes as an unsigned little-endian 64 bit integer.
/// Trailing bytes are ignored.
pub fn decode_u64_le(bytes: &[u8]) -> Result<u64, Error> {
    let bytes: [u8; 8] = bytes
        .get(..8)
        .ok_or_else(|| {
            Error::Validation(format!(
                "expected at least 8 bytes, got {}",
                bytes.len()
            ))
        })?
        .try_into()
        .map_err(|_| Error::Validation(String::from("invalid u64 buffer")))?;

    Ok(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::{decode_u64_le, parse_paging};

    #[test]
    fn paging_defaults_when_absent_or_malformed() {
        assert_eq!(parse_paging(None, 20), 20);
        assert_eq!(parse_paging(Some("abc"), 20), 20);
        assert_eq!(parse_paging(Some(""), 1), 1);
        assert_eq!(parse_paging(Some("-5"), 1), 1);
        assert_eq!(parse_paging(Some("0"), 1), 1);
    }

    #[test]
    fn paging_accepts_positive_integers() {
        assert_eq!(parse_paging(Some("3"), 1), 3);
        assert_eq!(parse_paging(Some(" 50 "), 20), 50);
    }

    #[test]
    fn decode_single_byte_value() {
        assert_eq!(decode_u64_le(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 1);
    }

    #[test]
    fn decode_multi_byte_value() {
        assert_eq!(decode_u64_le(&[255, 1, 0, 0, 0, 0, 0, 0]).unwrap(), 511);
    }

    #[test]
    fn decode_zero() {
        assert_eq!(decode_u64_le(&[0; 8]).unwrap(), 0);
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        assert_eq!(
            decode_u64_le(&[2, 0, 0, 0, 0, 0, 0, 0, 255, 255]).unwrap(),
            2
        );
    }

    #[test]
    fn decode_rejects_short_buffer() {
        assert!(decode_u64_le(&[1, 2, 3]).is_err());
    }
}
