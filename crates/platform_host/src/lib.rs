//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! The runtime only ever talks to the outside world through the traits defined here: outbound
//! mail delivery and audio cue playback. Concrete browser adapters live in `platform_host_web`;
//! this crate also ships no-op and recording adapters for tests and unsupported targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod host;
pub mod mail;
pub mod time;

pub use audio::{
    AudioCueService, AudioFuture, NoopAudioCueService, RecordingAudioCueService, SoundCue,
};
pub use host::{HostServices, HostStrategy};
pub use mail::{
    MailError, MailFuture, MailMessage, MailService, RecordingMailService, UnconfiguredMailService,
};
pub use time::{unix_time_ms_now, ClockSnapshot};
