use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to write '{0}' to storage")]
    Write(String),
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::Unavailable)
}

/// Full page navigation; a no-op outside the browser.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.pathname().ok().as_deref() == Some(path) {
        return;
    }
    if let Err(err) = location.set_href(path) {
        log::warn!("navigation to {} failed: {:?}", path, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    log::debug!("navigate_to({}) skipped outside the browser", path);
}
