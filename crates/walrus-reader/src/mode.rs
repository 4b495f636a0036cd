//! Persisted display mode.

use walrus_config::DisplayMode;
use walrus_storage::PreferenceStore;

/// Preference key holding the display mode.
pub const DISPLAY_MODE_KEY: &str = "display_mode";

/// Read the persisted display mode, seeding the store with `default` when
/// the key is absent or holds an unrecognized value.
pub fn load_mode(prefs: &dyn PreferenceStore, default: DisplayMode) -> DisplayMode {
    if let Some(stored) = prefs.get(DISPLAY_MODE_KEY) {
        match stored.parse() {
            Ok(mode) => return mode,
            Err(e) => tracing::warn!("ignoring stored display mode: {e}"),
        }
    }
    prefs.set(DISPLAY_MODE_KEY, default.as_str());
    default
}

/// Persist a display mode.
pub fn save_mode(prefs: &dyn PreferenceStore, mode: DisplayMode) {
    prefs.set(DISPLAY_MODE_KEY, mode.as_str());
}
