//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so the session store never
//! touches web-sys directly. Every helper is a no-op during server render.

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `raw` under `key`. Quota and privacy-mode failures are ignored.
pub fn write_item(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, raw).is_err() {
            log::warn!("localStorage write failed for key {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}

pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
