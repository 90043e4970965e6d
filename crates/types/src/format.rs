//! Hex formatting for trace action fields.
//!
//! The `trace_*` RPC namespace uses two hex encodings:
//!
//! - **Quantities** (`gas`, `value`, `balance`) are minimal-width, `0x`
//!   prefixed, lowercase, with zero rendered as `0x0`.
//! - **Data** (addresses, `init`, `input`) are full-width, `0x` prefixed and
//!   lowercase. Addresses are never checksum-cased.

use crate::MemoryDumpError;
use alloy::primitives::{Address, B256, U256, hex};

/// Number of hex digits in one 32-byte memory word.
const WORD_HEX_LEN: usize = 64;

/// Format an unsigned integer as a minimal-width hex quantity.
///
/// ```
/// # use alloy::primitives::U256;
/// # use signet_trace_types::quantity;
/// assert_eq!(quantity(U256::ZERO), "0x0");
/// assert_eq!(quantity(U256::from(0x5208u64)), "0x5208");
/// ```
pub fn quantity(value: U256) -> String {
    format!("0x{value:x}")
}

/// Format a balance in short hex form. This is the same encoding as
/// [`quantity`]: no leading zero digits beyond a single `0`.
pub fn short_hex(balance: U256) -> String {
    quantity(balance)
}

/// Format an address as a full-width lowercase hex string.
///
/// ```
/// # use alloy::primitives::address;
/// # use signet_trace_types::format_address;
/// let addr = address!("0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
/// assert_eq!(format_address(addr), "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
/// ```
pub fn format_address(address: Address) -> String {
    hex::encode_prefixed(address.as_slice())
}

/// Format arbitrary bytes (e.g. contract init code) as `0x` prefixed hex.
pub fn format_bytes(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_prefixed(bytes)
}

/// Dump a frame's memory as the `input` of a call action.
///
/// Absent memory produces an empty string. Otherwise the result is `0x`
/// followed by each word's unprefixed hex, in order, with no separators.
pub fn dump_memory(memory: Option<&[B256]>) -> String {
    let Some(words) = memory else {
        return String::new();
    };

    let mut out = String::with_capacity(2 + words.len() * WORD_HEX_LEN);
    out.push_str("0x");
    for word in words {
        out.push_str(&hex::encode(word.as_slice()));
    }
    out
}

/// Decode a string produced by [`dump_memory`] back into memory words.
///
/// The empty string decodes to `None`.
pub fn parse_memory(dump: &str) -> Result<Option<Vec<B256>>, MemoryDumpError> {
    if dump.is_empty() {
        return Ok(None);
    }

    let body = dump.strip_prefix("0x").ok_or(MemoryDumpError::MissingPrefix)?;
    if body.len() % WORD_HEX_LEN != 0 {
        return Err(MemoryDumpError::PartialWord { len: body.len() });
    }

    let bytes = hex::decode(body)?;
    Ok(Some(bytes.chunks_exact(32).map(B256::from_slice).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    #[test]
    fn quantity_is_minimal() {
        assert_eq!(quantity(U256::ZERO), "0x0");
        assert_eq!(quantity(U256::from(1u64)), "0x1");
        assert_eq!(quantity(U256::from(0x0100u64)), "0x100");
        assert_eq!(quantity(U256::from(u64::MAX)), "0xffffffffffffffff");
        assert_eq!(quantity(U256::MAX), format!("0x{}", "f".repeat(64)));
    }

    #[test]
    fn short_hex_matches_quantity() {
        let balance = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(short_hex(balance), "0xde0b6b3a7640000");
        assert_eq!(short_hex(U256::ZERO), "0x0");
    }

    #[test]
    fn address_is_full_width_lowercase() {
        assert_eq!(format_address(Address::ZERO), format!("0x{}", "0".repeat(40)));

        let addr = address!("0x00000000000000000000000000000000000000Ab");
        let formatted = format_address(addr);
        assert_eq!(formatted.len(), 42);
        assert_eq!(formatted, "0x00000000000000000000000000000000000000ab");
    }

    #[test]
    fn bytes_are_prefixed() {
        assert_eq!(format_bytes([0x60u8, 0x80, 0x60, 0x40]), "0x60806040");
        assert_eq!(format_bytes([0u8; 0]), "0x");
    }

    #[test]
    fn dump_absent_memory() {
        assert_eq!(dump_memory(None), "");
    }

    #[test]
    fn dump_empty_memory() {
        assert_eq!(dump_memory(Some(Vec::<B256>::new().as_slice())), "0x");
    }

    #[test]
    fn dump_concatenates_words() {
        let w1 = b256!("0x00000000000000000000000000000000000000000000000000000000000000aa");
        let w2 = b256!("0xbb00000000000000000000000000000000000000000000000000000000000000");
        let dump = dump_memory(Some([w1, w2].as_slice()));

        assert_eq!(dump.len(), 2 + 2 * WORD_HEX_LEN);
        assert_eq!(dump, format!("0x{}aa{}{}", "0".repeat(62), "bb", "0".repeat(62)));
    }

    #[test]
    fn parse_reverses_dump() {
        let words = vec![B256::repeat_byte(0x11), B256::ZERO, B256::repeat_byte(0xfe)];
        let dump = dump_memory(Some(words.as_slice()));

        let parsed = parse_memory(&dump).unwrap();
        assert_eq!(parsed.as_deref(), Some(words.as_slice()));
        assert_eq!(dump_memory(parsed.as_deref()), dump);

        assert_eq!(parse_memory("").unwrap(), None);
        assert_eq!(parse_memory("0x").unwrap(), Some(vec![]));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_memory("00").unwrap_err(), MemoryDumpError::MissingPrefix);
        assert_eq!(parse_memory("0xabcd").unwrap_err(), MemoryDumpError::PartialWord { len: 4 });
        assert!(matches!(
            parse_memory(&format!("0x{}", "zz".repeat(32))).unwrap_err(),
            MemoryDumpError::InvalidHex(_)
        ));
    }
}
