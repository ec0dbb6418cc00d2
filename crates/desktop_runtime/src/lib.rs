pub mod apps;
pub mod components;
pub mod config;
pub mod content;
mod effect_executor;
pub mod gesture;
pub mod host;
pub mod mail;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use apps::{AppId, ApplicationCatalog, ApplicationTemplate};
pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, reduce_desktop_with_catalog, DesktopAction, RuntimeEffect};
