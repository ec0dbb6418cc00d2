//! Shell constants generated from `shell.toml` at build time.

use crate::{apps::AppId, model::WindowPosition};

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

/// Position used when a template carries no default position.
pub const fn fallback_window_position() -> WindowPosition {
    WindowPosition::new(FALLBACK_WINDOW_X, FALLBACK_WINDOW_Y)
}

/// The app opened by the first-login welcome latch.
pub fn welcome_app_id() -> Option<AppId> {
    WELCOME_APP_ID.parse().ok()
}
