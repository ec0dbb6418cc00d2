//! Host-bundle model injected into the desktop runtime.

use std::rc::Rc;

use crate::{AudioCueService, MailService, NoopAudioCueService, UnconfiguredMailService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Inert adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected service bundle.
///
/// Adapter selection happens before this bundle crosses into `desktop_runtime`, which keeps the
/// runtime free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// Outbound mail collaborator.
    pub mail: Rc<dyn MailService>,
    /// Audio cue collaborator.
    pub audio: Rc<dyn AudioCueService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of inert adapters: mail reports "not configured", audio is silent.
    pub fn headless() -> Self {
        Self {
            mail: Rc::new(UnconfiguredMailService),
            audio: Rc::new(NoopAudioCueService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}
