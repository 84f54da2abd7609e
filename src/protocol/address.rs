//! Byte-order transform between display-order hex strings and wire order.
//!
//! Addresses and most 16-bit identifiers are shown most-significant byte
//! first (`"1122334455667788"`) but travel least-significant byte first.
//! Reversing the byte pairs of the hex string converts between the two,
//! and applying it twice returns the original string.

use crate::error::{Error, Result};

/// Width of a short (network) address in bytes.
pub const ADDR16_LEN: usize = 2;

/// Width of an extended (IEEE) address in bytes.
pub const ADDR64_LEN: usize = 8;

/// Reverses the order of the 2-character groups of a hex string.
///
/// ```
/// assert_eq!(zdo::reverse_byte_pairs("12345678").unwrap(), "78563412");
/// ```
///
/// # Errors
///
/// Returns [`Error::OddHexLength`] if the string does not split into pairs,
/// or [`Error::InvalidHex`] naming the first non-ASCII character.
pub fn reverse_byte_pairs(hex: &str) -> Result<String> {
    if hex.len() % 2 != 0 {
        return Err(Error::OddHexLength { len: hex.len() });
    }
    if let Some((index, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(Error::InvalidHex(hex::FromHexError::InvalidHexCharacter {
            c,
            index,
        }));
    }

    let mut out = String::with_capacity(hex.len());
    for pair in hex.as_bytes().chunks_exact(2).rev() {
        out.push(char::from(pair[0]));
        out.push(char::from(pair[1]));
    }
    Ok(out)
}

/// Converts a display-order hex field to its wire bytes.
///
/// `width` is the exact number of bytes the field occupies on the wire.
pub(crate) fn to_wire(field: &'static str, value: &str, width: usize) -> Result<Vec<u8>> {
    let bytes = hex::decode(reverse_byte_pairs(value)?)?;
    if bytes.len() != width {
        return Err(Error::InvalidField {
            field,
            reason: format!("expected {width} bytes, got {}", bytes.len()),
        });
    }
    Ok(bytes)
}

/// Converts wire bytes to a lowercase display-order hex string.
pub(crate) fn from_wire(bytes: &[u8]) -> String {
    let mut reversed = bytes.to_vec();
    reversed.reverse();
    hex::encode(reversed)
}

/// Formats a 16-bit identifier in its 4-digit display form.
#[must_use]
pub fn hex16(value: u16) -> String {
    format!("{value:04x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_byte_pairs() {
        assert_eq!(reverse_byte_pairs("12345678").unwrap(), "78563412");
        assert_eq!(reverse_byte_pairs("abcd").unwrap(), "cdab");
        assert_eq!(reverse_byte_pairs("").unwrap(), "");
    }

    #[test]
    fn test_reverse_byte_pairs_is_self_inverse() {
        let addr = "1122334455667788";
        let wire = reverse_byte_pairs(addr).unwrap();
        assert_eq!(wire, "8877665544332211");
        assert_eq!(reverse_byte_pairs(&wire).unwrap(), addr);
    }

    #[test]
    fn test_reverse_byte_pairs_odd_length() {
        assert!(matches!(
            reverse_byte_pairs("123"),
            Err(Error::OddHexLength { len: 3 })
        ));
    }

    #[test]
    fn test_reverse_byte_pairs_non_ascii() {
        assert!(matches!(
            reverse_byte_pairs("12é"),
            Err(Error::InvalidHex(hex::FromHexError::InvalidHexCharacter {
                c: 'é',
                index: 2
            }))
        ));
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(to_wire("addr16", "99aa", 2).unwrap(), vec![0xaa, 0x99]);
        assert!(matches!(
            to_wire("addr16", "99aabb", 2),
            Err(Error::InvalidField { field: "addr16", .. })
        ));
        assert!(matches!(
            to_wire("addr16", "zzzz", 2),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_wire() {
        assert_eq!(
            from_wire(&[0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]),
            "1122334455667788"
        );
        assert_eq!(from_wire(&[0xAA, 0x99]), "99aa");
    }

    #[test]
    fn test_hex16() {
        assert_eq!(hex16(0x21), "0021");
        assert_eq!(hex16(0x8031), "8031");
    }
}
