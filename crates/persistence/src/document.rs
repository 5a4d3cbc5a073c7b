// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON encoding of the snapshot document.
//!
//! Stored documents may predate collections added later. Decoding overlays
//! the stored top-level keys onto the default snapshot, so a collection the
//! document lacks comes from the defaults and unknown keys are dropped.

use fixture_desk::{Snapshot, default_snapshot};
use serde_json::{Map, Value};

use crate::error::PersistenceError;

/// Serializes the whole snapshot.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Decodes a stored body, filling absent collections from the defaults.
///
/// # Errors
///
/// Returns an error if `body` is not JSON, is not a JSON object, or if a
/// stored collection does not decode.
pub fn decode_snapshot(body: &str) -> Result<Snapshot, PersistenceError> {
    let stored: Map<String, Value> = match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => map,
        other => {
            return Err(PersistenceError::MalformedDocument(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )));
        }
    };

    let Value::Object(mut merged) = serde_json::to_value(default_snapshot())? else {
        return Err(PersistenceError::SerializationError(String::from(
            "default snapshot did not serialize to an object",
        )));
    };

    for (key, value) in stored {
        if let Some(slot) = merged.get_mut(&key) {
            *slot = value;
        }
    }

    Ok(serde_json::from_value(Value::Object(merged))?)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
