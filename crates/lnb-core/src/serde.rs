use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, LnbError};
use crate::result::SearchResult;

/// Schema version written alongside serialized results.
pub const RESULT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableResult {
    schema_version: u32,
    result: SearchResult,
}

fn serde_error(code: &str, err: impl ToString) -> LnbError {
    LnbError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, LnbError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, LnbError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-deserialize", err))
}

fn ensure_finite(field: &str, value: f64) -> Result<(), LnbError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(LnbError::Serde(
        ErrorInfo::new("non-finite", "JSON cannot carry a non-finite number")
            .with_context("field", field)
            .with_context("value", value.to_string()),
    ))
}

/// Serializes a search result to a pretty JSON document.
///
/// Non-finite merit or time values are rejected since JSON would write them
/// as `null` and the document could not be read back.
pub fn to_json(result: &SearchResult) -> Result<String, LnbError> {
    ensure_finite("merit", result.merit)?;
    ensure_finite("seconds", result.seconds)?;
    let payload = SerializableResult {
        schema_version: RESULT_SCHEMA_VERSION,
        result: result.clone(),
    };
    serde_json::to_string_pretty(&payload).map_err(|err| serde_error("json-serialize", err))
}

/// Restores a search result written by [`to_json`].
pub fn from_json(data: &str) -> Result<SearchResult, LnbError> {
    let payload: SerializableResult =
        serde_json::from_str(data).map_err(|err| serde_error("json-deserialize", err))?;
    if payload.schema_version != RESULT_SCHEMA_VERSION {
        return Err(LnbError::Serde(
            ErrorInfo::new("schema-version", "unsupported result schema version")
                .with_context("found", payload.schema_version.to_string())
                .with_context("expected", RESULT_SCHEMA_VERSION.to_string()),
        ));
    }
    Ok(payload.result)
}
