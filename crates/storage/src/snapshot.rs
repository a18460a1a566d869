//! Versioned text encoding for favorites and progress blobs.
//!
//! Current writes use `{"version":1,"saved_at":...,"data":...}`. Reads also
//! accept the bare legacy form (`[1,2]` / `{"1":{"completed":[0],"percent":25}}`).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::repository::{StorageError, StorageKey};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("snapshot is empty")]
    Empty,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u64),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    version: u32,
    saved_at: DateTime<Utc>,
    data: &'a T,
}

#[derive(Deserialize)]
struct EnvelopeIn {
    version: u64,
    data: Value,
}

/// Encode `data` inside a versioned envelope.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if `data` cannot be serialized.
pub fn encode<T: Serialize>(data: &T, saved_at: DateTime<Utc>) -> Result<String, StorageError> {
    serde_json::to_string(&EnvelopeOut {
        version: SNAPSHOT_VERSION,
        saved_at,
        data,
    })
    .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode an enveloped or legacy blob.
///
/// # Errors
///
/// Returns `SnapshotError` for empty input, unknown versions, or payloads that
/// do not match `T`.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, SnapshotError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SnapshotError::Empty);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

    let payload = if is_envelope(&value) {
        let envelope: EnvelopeIn =
            serde_json::from_value(value).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        if envelope.version != u64::from(SNAPSHOT_VERSION) {
            return Err(SnapshotError::UnsupportedVersion(envelope.version));
        }
        envelope.data
    } else {
        value
    };

    serde_json::from_value(payload).map_err(|e| SnapshotError::Malformed(e.to_string()))
}

/// Decode a stored value, falling back to `T::default()` when it is missing or unusable.
///
/// Failures are logged and never returned.
#[must_use]
pub fn decode_or_default<T: DeserializeOwned + Default>(key: StorageKey, raw: Option<&str>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match decode(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = %key, error = %err, "discarding unreadable stored value");
            T::default()
        }
    }
}

fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("version") && obj.contains_key("data"))
}
