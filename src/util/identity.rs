//! Content-addressed identifiers for derived rows.
//!
//! Every derived entity (events, actions, hardware rows, resource rows) is keyed by a hash of
//! its semantic key so that independent, stateless runs resolve the same logical record to the
//! same primary key without a shared sequence.
//!
//! | Entity          | Key parts                                  |
//! |-----------------|--------------------------------------------|
//! | Event           | series id, reservation id, space key       |
//! | Action          | event id, action type, sub type/start time |
//! | Other hardware  | event id, item name                        |
//! | Event resource  | event id, item name, line index            |

use sha2::{Digest, Sha256};

use crate::error::ingest::IngestError;

/// Delimiter placed between key parts before hashing.
pub const ID_DELIMITER: &str = "|";

/// Number of leading hex digits of the digest kept in the identifier.
///
/// 13 hex digits are 52 bits, which stays inside the 53-bit range that floating-point backed
/// numeric types represent exactly while still fitting a signed 64-bit column.
pub const ID_HEX_DIGITS: u32 = 13;

/// Derives a stable numeric identifier from an ordered list of key parts.
///
/// The parts are joined with [`ID_DELIMITER`], hashed with SHA-256 and truncated to the first
/// [`ID_HEX_DIGITS`] hex digits of the digest.
///
/// # Returns
/// - `Ok(i64)` - Identifier in `0..2^52`, identical for identical input across processes
/// - `Err(IngestError::EmptyIdentity)` - No parts were provided, or every part is empty
pub fn stable_id<S: AsRef<str>>(parts: &[S]) -> Result<i64, IngestError> {
    if parts.iter().all(|part| part.as_ref().is_empty()) {
        return Err(IngestError::EmptyIdentity);
    }

    let joined = parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<_>>()
        .join(ID_DELIMITER);
    let digest = Sha256::digest(joined.as_bytes());

    // 7 bytes hold 14 hex digits; drop the last nibble to keep 13.
    let leading = digest[..7]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    let truncated = leading >> (56 - ID_HEX_DIGITS * 4);

    Ok(truncated as i64)
}
