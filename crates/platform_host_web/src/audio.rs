//! HTML audio adapter for system sound cues.

#[cfg(target_arch = "wasm32")]
use platform_host::audio::CUE_VOLUME;
use platform_host::{AudioCueService, AudioFuture, SoundCue};

#[derive(Debug, Clone, Copy, Default)]
/// Plays cues through a fresh `HtmlAudioElement` per request.
///
/// Browsers refuse playback before the first user gesture; that rejection surfaces as an `Err`
/// which the runtime logs and ignores.
pub struct WebAudioCueService;

impl AudioCueService for WebAudioCueService {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn play<'a>(&'a self, cue: SoundCue) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let audio = web_sys::HtmlAudioElement::new_with_src(cue.asset_path()).map_err(
                    |err| format!("audio element for `{}` unavailable: {err:?}", cue.name()),
                )?;
                audio.set_volume(CUE_VOLUME);
                let promise = audio
                    .play()
                    .map_err(|err| format!("audio play for `{}` rejected: {err:?}", cue.name()))?;
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("audio play for `{}` failed: {err:?}", cue.name()))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(())
            }
        })
    }
}
