//! Clipboard access for the reply "Copy" action.
//!
//! Browser-only: SSR paths no-op and report failure.

/// Write `text` to the system clipboard. Returns `true` when the browser
/// exposed a clipboard and the write was requested.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(clipboard) = window.navigator().clipboard() {
            let _ = clipboard.write_text(text);
            return true;
        }
        log::warn!("clipboard unavailable");
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
