// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use api::prefs::favorites::KeyValueStore;
    use api::prefs::favorites::MemoryStore;
    use api::prefs::favorites::StorageError;
    use dioxus_logger::tracing::warn;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// `window.localStorage`.
    pub struct BrowserStorage(web_sys::Storage);

    impl KeyValueStore for BrowserStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.0.get_item(key).ok().flatten()
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
        }
    }

    /// Backend for the favorites set. Falls back to memory when the page
    /// has no usable `localStorage` (e.g. storage disabled by the user).
    pub fn favorites_backend() -> Box<dyn KeyValueStore> {
        match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
            Some(storage) => Box::new(BrowserStorage(storage)),
            None => {
                warn!("localStorage unavailable, favorites will not persist");
                Box::new(MemoryStore::default())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use api::prefs::favorites::KeyValueStore;
    use api::prefs::file_store::FileStore;
    use dioxus_logger::tracing::info;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Desktop builds keep favorites in a JSON file in the user's data
    /// directory (see [`FileStore::in_default_location`]).
    pub fn favorites_backend() -> Box<dyn KeyValueStore> {
        let store = FileStore::in_default_location();
        info!("favorites stored in {}", store.path().display());
        Box::new(store)
    }
}
