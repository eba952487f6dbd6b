use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::LnbError;
use crate::result::SearchResult;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, LnbError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}

/// SHA-256 of raw text, used to fingerprint transcripts and side files.
pub fn text_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Canonical hash of a search result.
pub fn canonical_result_hash(result: &SearchResult) -> Result<String, LnbError> {
    stable_hash_string(result)
}
