//! Whole-collection JSON codec over a [`KeyValueStore`].
//!
//! Every read deserializes the full array and every write re-serializes it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DbError;
use crate::store::KeyValueStore;

/// Load the collection under `key`; `None` when nothing was ever stored.
pub async fn load<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<T>>, DbError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    serde_json::from_str(&raw).map(Some).map_err(|source| {
        tracing::error!(key, error = %source, "Stored collection failed to deserialize");
        DbError::Corrupt {
            key: key.to_string(),
            source,
        }
    })
}

/// Replace the collection under `key` with `items`.
pub async fn save<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), DbError> {
    let raw = serde_json::to_string(items).map_err(|source| DbError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw).await
}
