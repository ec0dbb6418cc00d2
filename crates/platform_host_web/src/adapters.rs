use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, NoopAudioCueService, UnconfiguredMailService};

use crate::{MailEndpointConfig, WebAudioCueService, WebMailService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(any(feature = "headless", not(target_arch = "wasm32")))]
    {
        HostStrategy::Headless
    }

    #[cfg(all(not(feature = "headless"), target_arch = "wasm32"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the service bundle injected into `desktop_runtime::DesktopProvider`.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            mail: Rc::new(WebMailService::new(MailEndpointConfig::from_build_env())),
            audio: Rc::new(WebAudioCueService),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            mail: Rc::new(UnconfiguredMailService),
            audio: Rc::new(NoopAudioCueService),
            host_strategy: HostStrategy::Headless,
        },
    }
}
