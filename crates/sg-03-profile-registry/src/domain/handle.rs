//! Handle validation.
//!
//! A handle is 1..=max bytes of `[a-z0-9._-]` and does not start with one of
//! `.`, `_` or `-`.

use shared_types::{keccak256, Hash, ProtocolError, ProtocolResult};

pub fn validate_handle(handle: &str, max_length: usize) -> ProtocolResult<()> {
    let bytes = handle.as_bytes();
    if bytes.is_empty() {
        return Err(ProtocolError::HandleInvalid("handle is empty"));
    }
    if bytes.len() > max_length {
        return Err(ProtocolError::HandleInvalid("handle is too long"));
    }
    if matches!(bytes[0], b'.' | b'_' | b'-') {
        return Err(ProtocolError::HandleInvalid(
            "handle must not start with '.', '_' or '-'",
        ));
    }
    if !bytes.iter().all(|b| is_handle_byte(*b)) {
        return Err(ProtocolError::HandleInvalid(
            "handle may only contain a-z, 0-9, '.', '_' and '-'",
        ));
    }
    Ok(())
}

fn is_handle_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'.' | b'_' | b'-')
}

/// Key of the handle uniqueness index.
pub fn handle_hash(handle: &str) -> Hash {
    keccak256(handle.as_bytes())
}
