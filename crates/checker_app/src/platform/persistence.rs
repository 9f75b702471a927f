use checker_core::{MemoryStore, PreferenceStore, StoreError};
use checker_logging::checker_warn;
use web_sys::{Storage, Window};

/// `localStorage`-backed preference store.
pub(crate) struct LocalStorageStore {
    storage: Storage,
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Opens `localStorage`, falling back to a page-lifetime memory store when
/// the browser denies access (private mode, disabled cookies).
pub(crate) fn open_preference_store(window: &Window) -> Box<dyn PreferenceStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStorageStore { storage }),
        Ok(None) | Err(_) => {
            checker_warn!("localStorage unavailable; theme choice will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
