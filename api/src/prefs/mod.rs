pub mod favorites;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
pub mod widget_prefs;
