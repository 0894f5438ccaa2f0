use storage::{KeyValueStore, StorageError};

/// `window.localStorage` behind the [`KeyValueStore`] seam.
///
/// Every failure the browser can raise (storage disabled, quota, a sandboxed
/// frame) comes back as a `StorageError`; nothing here panics. Off the web
/// the store is always unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".into())),
        Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Browsers only report a DOMException here; the quota is the usual cause.
        local_storage()?.set_item(key, value).map_err(|err| {
            tracing::debug!(?err, key, "localStorage rejected write");
            StorageError::QuotaExceeded
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(unavailable())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable("localStorage exists only in the browser".into())
}
