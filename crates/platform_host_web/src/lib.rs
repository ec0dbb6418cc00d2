//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring for the two collaborators the desktop shell
//! talks to: the transactional-mail endpoint and HTML audio playback. On native targets the
//! adapters compile to inert fallbacks so the runtime can be tested without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and service bundle assembly.
pub mod adapters;
pub mod audio;
pub mod mail;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use audio::WebAudioCueService;
pub use mail::{MailEndpointConfig, WebMailService};
