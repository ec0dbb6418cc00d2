//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches the browser or an injected
//! [`platform_host`] service goes through [`DesktopHostContext`].

mod effects;
mod pointer_listeners;

use std::rc::Rc;

use platform_host::{AudioCueService, HostServices, HostStrategy, MailService};

pub use self::pointer_listeners::PointerListenerSet;
use crate::{model::WindowSize, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Viewport assumed when no browser window is available.
pub const FALLBACK_VIEWPORT: WindowSize = WindowSize::new(1024, 768);

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    mail: Rc<dyn MailService>,
    audio: Rc<dyn AudioCueService>,
    host_strategy: HostStrategy,
    pointer_listeners: PointerListenerSet,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl DesktopHostContext {
    /// Builds a host context from an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            mail: services.mail,
            audio: services.audio,
            host_strategy: services.host_strategy,
            pointer_listeners: PointerListenerSet::default(),
        }
    }

    /// Returns the configured outbound mail service.
    pub fn mail_service(&self) -> Rc<dyn MailService> {
        self.mail.clone()
    }

    /// Returns the configured audio cue service.
    pub fn audio_service(&self) -> Rc<dyn AudioCueService> {
        self.audio.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Document-scoped listeners owned by the current pointer gesture.
    pub fn pointer_listeners(&self) -> &PointerListenerSet {
        &self.pointer_listeners
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Current browser viewport size, including the taskbar strip.
    pub fn viewport_size(&self) -> WindowSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                    value.ok().and_then(|v| v.as_f64()).map(|v| v as i32)
                };
                return WindowSize::new(
                    read(window.inner_width()).unwrap_or(FALLBACK_VIEWPORT.w),
                    read(window.inner_height()).unwrap_or(FALLBACK_VIEWPORT.h),
                );
            }
        }

        FALLBACK_VIEWPORT
    }
}
