//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `dark-theme` class to `<body>`. Toggle writes back to `localStorage` and
//! updates that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native test
//! builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "floorplan_dark";

/// Class toggled on `<body>` while the dark theme is active.
pub const BODY_CLASS: &str = "dark-theme";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        matches!(window.match_media("(prefers-color-scheme: dark)"), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove the dark theme class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if enabled { classes.add_1(BODY_CLASS) } else { classes.remove_1(BODY_CLASS) };
        if let Err(err) = result {
            log::warn!("dark mode: class update failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("dark mode: preference not saved: {err:?}");
            }
        }
    }
    next
}
