//! Audio cue contracts. Playback is fire-and-forget; callers log failures and move on.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`AudioCueService`].
pub type AudioFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Playback volume applied to every cue.
pub const CUE_VOLUME: f64 = 0.5;

/// Named system sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Played when the visitor logs in.
    Startup,
    /// Played on "Turn Off".
    Shutdown,
    /// Generic UI click.
    Click,
    /// Error chime.
    Error,
}

impl SoundCue {
    /// Stable lowercase name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Shutdown => "shutdown",
            Self::Click => "click",
            Self::Error => "error",
        }
    }

    /// Site-relative asset path of the cue.
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Startup => "/sounds/startup.mp3",
            Self::Shutdown => "/sounds/shutdown.mp3",
            Self::Click => "/sounds/click.mp3",
            Self::Error => "/sounds/error.mp3",
        }
    }
}

/// Host service that plays a named cue.
pub trait AudioCueService {
    /// Starts playback of `cue`.
    fn play<'a>(&'a self, cue: SoundCue) -> AudioFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent audio service for targets without an audio device.
pub struct NoopAudioCueService;

impl AudioCueService for NoopAudioCueService {
    fn play<'a>(&'a self, _cue: SoundCue) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Audio service that records requested cues instead of playing them.
pub struct RecordingAudioCueService {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingAudioCueService {
    /// Cues requested so far, oldest first.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }
}

impl AudioCueService for RecordingAudioCueService {
    fn play<'a>(&'a self, cue: SoundCue) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.played.borrow_mut().push(cue);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cue_assets_live_under_sounds() {
        for cue in [
            SoundCue::Startup,
            SoundCue::Shutdown,
            SoundCue::Click,
            SoundCue::Error,
        ] {
            assert_eq!(cue.asset_path(), format!("/sounds/{}.mp3", cue.name()));
        }
    }

    #[test]
    fn recording_service_tracks_cue_order() {
        let recorder = RecordingAudioCueService::default();
        let service: &dyn AudioCueService = &recorder;
        block_on(service.play(SoundCue::Startup)).expect("startup");
        block_on(service.play(SoundCue::Shutdown)).expect("shutdown");
        assert_eq!(
            recorder.played(),
            vec![SoundCue::Startup, SoundCue::Shutdown]
        );
        block_on(NoopAudioCueService.play(SoundCue::Click)).expect("noop");
    }
}
