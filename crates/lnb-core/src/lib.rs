#![deny(missing_docs)]
#![doc = "Value types for interpreting LatNet Builder search output: sizes, generators, generating matrices and search results."]

pub mod errors;
pub mod family;
/// Generating vectors and digital generator rows.
pub mod generator;
/// Canonical hashing helpers for results and input texts.
pub mod hash;
/// Generating matrices read from the side file.
pub mod matrix;
pub mod result;
/// JSON serialization of search results.
pub mod serde;
pub mod size;

pub use errors::{ErrorInfo, LnbError};
pub use family::{ConstructionKind, SearchFamily};
pub use generator::GenParam;
pub use hash::{canonical_result_hash, stable_hash_string, text_hash};
pub use matrix::GeneratingMatrix;
pub use result::{LatNet, SearchResult};
pub use crate::serde::{from_json, from_json_slice, to_canonical_json_bytes, to_json};
pub use size::{SizeBase, SizeParam};
