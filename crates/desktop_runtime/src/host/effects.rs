//! Runtime-effect dispatch for the desktop host boundary.

use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local};

use crate::{
    host::DesktopHostContext,
    mail::MailAction,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::AttachPointerListeners => {
            host.pointer_listeners()
                .attach(move |action| runtime.dispatch_action(action));
        }
        RuntimeEffect::DetachPointerListeners => host.pointer_listeners().detach(),
        RuntimeEffect::PlaySound(cue) => {
            let audio = host.audio_service();
            spawn_local(async move {
                if let Err(err) = audio.play(cue).await {
                    logging::warn!("audio cue `{}` failed: {err}", cue.name());
                }
            });
        }
        RuntimeEffect::SendMail(message) => {
            let mail = host.mail_service();
            spawn_local(async move {
                let result = mail.send(&message).await.map_err(|err| err.to_string());
                if let Err(err) = &result {
                    logging::warn!("mail send to `{}` failed: {err}", message.to);
                }
                runtime.dispatch_action(DesktopAction::Mail(MailAction::SendFinished(result)));
            });
        }
        RuntimeEffect::ScheduleAction { delay_ms, action } => {
            set_timeout(
                move || runtime.dispatch_action(*action),
                Duration::from_millis(u64::from(delay_ms)),
            );
        }
        RuntimeEffect::ReloadSession => reload_session(),
    }
}

fn reload_session() {
    #[cfg(target_arch = "wasm32")]
    {
        let reloaded = web_sys::window().map(|window| window.location().reload());
        if !matches!(reloaded, Some(Ok(()))) {
            logging::warn!("session reload failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::log!("session reload requested outside the browser; ignoring");
}
