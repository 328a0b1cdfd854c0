//! Browser navigation.

use std::sync::Arc;

use crate::state::session::Navigate;

/// Navigate by full page load, so the next view mounts fresh and re-reads
/// the persisted token. No-op outside the browser.
pub fn browser_navigate() -> Navigate {
    Arc::new(|path: &str| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::warn!("navigation to {path} failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    })
}
