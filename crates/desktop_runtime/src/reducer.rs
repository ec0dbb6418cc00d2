//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{MailMessage, SoundCue};

use crate::{
    apps::{AppId, ApplicationCatalog},
    config,
    gesture::GestureTransition,
    mail::{ComposeStatus, MailAction, MailEffect},
    model::{DesktopState, InteractionState, PointerPosition, SystemPhase},
    window_manager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// The shell mounted; start the boot timer.
    PowerOn,
    /// The boot timer elapsed.
    BootComplete,
    /// The visitor clicked the user tile on the login screen.
    LogIn,
    /// Start menu "Turn Off Computer".
    ShutDown,
    /// The shutdown screen timer elapsed.
    RebootComplete,
    /// Start menu "Log Off".
    LogOff,
    /// Open (or re-open) an application window.
    OpenApp {
        /// Application to open.
        app_id: AppId,
    },
    /// Window close button.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Window minimize button.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Maximize/restore button or title-bar double-click.
    ToggleMaximize {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Pointer-down anywhere on a window.
    FocusWindow {
        /// Window to focus.
        app_id: AppId,
    },
    /// Taskbar button click (restore, minimize, or focus). Also closes the start menu.
    TaskbarClick {
        /// Window associated with the taskbar button.
        app_id: AppId,
    },
    /// Start button.
    ToggleStartMenu,
    /// Click on the desktop surface.
    CloseStartMenu,
    /// A start-menu entry was clicked. Inert entries carry no target.
    StartMenuSelect {
        /// Application to open, if any.
        target: Option<AppId>,
    },
    /// Primary pointer-down on a title bar.
    BeginDrag {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-down on a resize grip.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Document-level pointer move during a gesture.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer release or cancel.
    PointerUp,
    /// Mail compose form input.
    Mail(MailAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A gesture started; install document-scoped pointer move/up listeners.
    AttachPointerListeners,
    /// The gesture ended; remove every listener installed by [`Self::AttachPointerListeners`].
    DetachPointerListeners,
    /// Play a UI sound cue.
    PlaySound(SoundCue),
    /// Deliver a composed message and report back with [`MailAction::SendFinished`].
    SendMail(MailMessage),
    /// Dispatch `action` after `delay_ms`.
    ScheduleAction {
        /// Delay before dispatch.
        delay_ms: u32,
        /// Action to dispatch.
        action: Box<DesktopAction>,
    },
    /// Reload the page, starting a fresh session.
    ReloadSession,
}

fn schedule(delay_ms: u32, action: DesktopAction) -> RuntimeEffect {
    RuntimeEffect::ScheduleAction {
        delay_ms,
        action: Box::new(action),
    }
}

/// Applies a [`DesktopAction`] using the built-in application catalog.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    reduce_desktop_with_catalog(ApplicationCatalog::builtin(), state, interaction, action)
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is total. Actions that reference unknown windows, or phase transitions that
/// arrive in the wrong phase, leave the state untouched and produce no effects.
pub fn reduce_desktop_with_catalog(
    catalog: ApplicationCatalog<'_>,
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::PowerOn => {
            if state.phase == SystemPhase::Boot {
                effects.push(schedule(
                    config::BOOT_DURATION_MS,
                    DesktopAction::BootComplete,
                ));
            }
        }
        DesktopAction::BootComplete => {
            if state.phase == SystemPhase::Boot {
                state.phase = SystemPhase::Login;
            }
        }
        DesktopAction::LogIn => {
            if state.phase == SystemPhase::Login {
                state.phase = SystemPhase::Desktop;
                effects.push(RuntimeEffect::PlaySound(SoundCue::Startup));
                if !state.welcome_opened {
                    if let Some(welcome) = config::welcome_app_id() {
                        window_manager::open_window(state, catalog, welcome);
                    }
                    state.welcome_opened = true;
                }
            }
        }
        DesktopAction::ShutDown => {
            if state.phase == SystemPhase::Desktop {
                end_gestures(interaction, None, &mut effects);
                state.start_menu_open = false;
                state.phase = SystemPhase::ShutDown;
                effects.push(RuntimeEffect::PlaySound(SoundCue::Shutdown));
                effects.push(schedule(
                    config::SHUTDOWN_DURATION_MS,
                    DesktopAction::RebootComplete,
                ));
            }
        }
        DesktopAction::RebootComplete => {
            if state.phase == SystemPhase::ShutDown {
                state.phase = SystemPhase::Boot;
                effects.push(schedule(
                    config::BOOT_DURATION_MS,
                    DesktopAction::BootComplete,
                ));
            }
        }
        DesktopAction::LogOff => {
            if state.phase == SystemPhase::Desktop {
                end_gestures(interaction, None, &mut effects);
                state.start_menu_open = false;
                effects.push(RuntimeEffect::ReloadSession);
            }
        }
        DesktopAction::OpenApp { app_id } => {
            window_manager::open_window(state, catalog, app_id);
        }
        DesktopAction::CloseWindow { app_id } => {
            if window_manager::close_window(state, app_id) {
                end_gestures(interaction, Some(app_id), &mut effects);
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            if window_manager::minimize_window(state, app_id) {
                end_gestures(interaction, Some(app_id), &mut effects);
            }
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if window_manager::toggle_maximize_window(state, app_id) {
                end_gestures(interaction, Some(app_id), &mut effects);
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::TaskbarClick { app_id } => {
            state.start_menu_open = false;
            if window_manager::taskbar_click(state, catalog, app_id)
                == window_manager::TaskbarClickOutcome::Minimized
            {
                end_gestures(interaction, Some(app_id), &mut effects);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::StartMenuSelect { target } => {
            if let Some(app_id) = target {
                window_manager::open_window(state, catalog, app_id);
            }
            state.start_menu_open = false;
        }
        DesktopAction::BeginDrag { app_id, pointer } => {
            if interaction.is_idle() {
                let transition = interaction.drag.pointer_down(state, app_id, pointer);
                push_listener_effect(transition, &mut effects);
            }
        }
        DesktopAction::BeginResize { app_id, pointer } => {
            if interaction.is_idle() {
                let transition = interaction.resize.pointer_down(state, app_id, pointer);
                push_listener_effect(transition, &mut effects);
            }
        }
        DesktopAction::PointerMove { pointer } => {
            interaction.drag.pointer_move(state, pointer);
            interaction.resize.pointer_move(state, pointer);
        }
        DesktopAction::PointerUp => {
            let drag = interaction.drag.pointer_up();
            let resize = interaction.resize.pointer_up();
            if drag == GestureTransition::Exited || resize == GestureTransition::Exited {
                effects.push(RuntimeEffect::DetachPointerListeners);
            }
        }
        DesktopAction::Mail(mail_action) => {
            let delivery_failed = state.mail.status == ComposeStatus::Sending
                && matches!(mail_action, MailAction::SendFinished(Err(_)));
            match state.mail.apply(mail_action) {
                Some(MailEffect::Send(message)) => effects.push(RuntimeEffect::SendMail(message)),
                Some(MailEffect::ScheduleReset) => effects.push(schedule(
                    config::COMPOSE_RESET_MS,
                    DesktopAction::Mail(MailAction::ResetAfterSend),
                )),
                None if delivery_failed => effects.push(RuntimeEffect::PlaySound(SoundCue::Error)),
                None => {}
            }
        }
    }

    effects
}

fn push_listener_effect(transition: GestureTransition, effects: &mut Vec<RuntimeEffect>) {
    match transition {
        GestureTransition::Entered => effects.push(RuntimeEffect::AttachPointerListeners),
        GestureTransition::Exited => effects.push(RuntimeEffect::DetachPointerListeners),
        GestureTransition::Updated | GestureTransition::Ignored => {}
    }
}

/// Ends any gesture targeting `window` (or every gesture when `None`) and queues the detach.
fn end_gestures(
    interaction: &mut InteractionState,
    window: Option<AppId>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let targets = |id: Option<AppId>| id.is_some() && (window.is_none() || id == window);
    let mut exited = false;
    if targets(interaction.drag.window_id()) {
        exited |= interaction.drag.end() == GestureTransition::Exited;
    }
    if targets(interaction.resize.window_id()) {
        exited |= interaction.resize.end() == GestureTransition::Exited;
    }
    if exited {
        effects.push(RuntimeEffect::DetachPointerListeners);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{LifecycleState, WindowPosition, WindowSize};

    fn on_desktop() -> (DesktopState, InteractionState) {
        let mut state = DesktopState {
            phase: SystemPhase::Login,
            ..DesktopState::default()
        };
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::LogIn);
        (state, interaction)
    }

    #[test]
    fn power_on_schedules_boot_completion() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::PowerOn);
        assert_eq!(effects, vec![schedule(4000, DesktopAction::BootComplete)]);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::BootComplete);
        assert_eq!(state.phase, SystemPhase::Login);
    }

    #[test]
    fn login_plays_startup_and_opens_welcome_once() {
        let (state, _) = on_desktop();
        assert_eq!(state.phase, SystemPhase::Desktop);
        assert_eq!(state.active, Some(AppId::Welcome));
        assert!(state.welcome_opened);

        let mut state = DesktopState {
            phase: SystemPhase::Login,
            ..DesktopState::default()
        };
        let effects = reduce_desktop(
            &mut state,
            &mut InteractionState::default(),
            DesktopAction::LogIn,
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Startup)]);
    }

    #[test]
    fn welcome_latch_survives_shutdown_cycle() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Welcome,
            },
        );

        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::ShutDown);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PlaySound(SoundCue::Shutdown),
                schedule(5000, DesktopAction::RebootComplete),
            ]
        );
        for action in [
            DesktopAction::RebootComplete,
            DesktopAction::BootComplete,
            DesktopAction::LogIn,
        ] {
            reduce_desktop(&mut state, &mut interaction, action);
        }
        assert_eq!(state.phase, SystemPhase::Desktop);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn phase_transitions_out_of_order_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for action in [
            DesktopAction::LogIn,
            DesktopAction::RebootComplete,
            DesktopAction::ShutDown,
            DesktopAction::LogOff,
        ] {
            assert_eq!(reduce_desktop(&mut state, &mut interaction, action), vec![]);
        }
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn log_off_requests_session_reload() {
        let (mut state, mut interaction) = on_desktop();
        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::LogOff);
        assert_eq!(effects, vec![RuntimeEffect::ReloadSession]);
    }

    #[test]
    fn start_menu_selection_opens_target_and_closes_menu() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::StartMenuSelect {
                target: Some(AppId::Winamp),
            },
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.active, Some(AppId::Winamp));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::StartMenuSelect { target: None },
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn drag_attaches_and_detaches_listeners_once() {
        let (mut state, mut interaction) = on_desktop();
        let begin = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Welcome,
                pointer: PointerPosition::new(110, 90),
            },
        );
        assert_eq!(begin, vec![RuntimeEffect::AttachPointerListeners]);

        let resize = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Welcome,
                pointer: PointerPosition::new(700, 530),
            },
        );
        assert_eq!(resize, vec![]);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(210, 140),
            },
        );
        assert_eq!(
            state.window(AppId::Welcome).map(|w| (w.position, w.size)),
            Some((WindowPosition::new(200, 130), WindowSize::new(600, 450)))
        );

        let up = reduce_desktop(&mut state, &mut interaction, DesktopAction::PointerUp);
        assert_eq!(up, vec![RuntimeEffect::DetachPointerListeners]);
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::PointerUp),
            vec![]
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn closing_window_mid_gesture_detaches_listeners() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Welcome,
                pointer: PointerPosition::new(700, 530),
            },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Welcome,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::DetachPointerListeners]);
        assert!(interaction.is_idle());
    }

    #[test]
    fn closing_other_window_keeps_gesture_running() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp { app_id: AppId::Cv },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Cv,
                pointer: PointerPosition::new(160, 60),
            },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Welcome,
            },
        );
        assert_eq!(effects, vec![]);
        assert_eq!(interaction.drag.window_id(), Some(AppId::Cv));
    }

    #[test]
    fn shutdown_mid_drag_detaches_first() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Welcome,
                pointer: PointerPosition::new(110, 90),
            },
        );
        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::ShutDown);
        assert_eq!(effects.first(), Some(&RuntimeEffect::DetachPointerListeners));
        assert!(interaction.is_idle());
    }

    #[test]
    fn taskbar_click_routes_through_tri_state_policy() {
        let (mut state, mut interaction) = on_desktop();
        let click = DesktopAction::TaskbarClick {
            app_id: AppId::Welcome,
        };
        reduce_desktop(&mut state, &mut interaction, click.clone());
        assert_eq!(
            state.window(AppId::Welcome).map(|w| w.lifecycle),
            Some(LifecycleState::Minimized)
        );
        reduce_desktop(&mut state, &mut interaction, click);
        assert_eq!(
            state.window(AppId::Welcome).map(|w| w.lifecycle),
            Some(LifecycleState::Open)
        );
        assert_eq!(state.active, Some(AppId::Welcome));
    }

    #[test]
    fn taskbar_click_closes_start_menu() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::TaskbarClick {
                app_id: AppId::Welcome,
            },
        );
        assert!(!state.start_menu_open);
        assert_eq!(
            state.window(AppId::Welcome).map(|w| w.lifecycle),
            Some(LifecycleState::Minimized)
        );
    }

    #[test]
    fn taskbar_minimize_mid_drag_ends_gesture_and_freezes_position() {
        let (mut state, mut interaction) = on_desktop();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Welcome,
                pointer: PointerPosition::new(110, 90),
            },
        );
        let before = state.window(AppId::Welcome).map(|w| w.position);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::TaskbarClick {
                app_id: AppId::Welcome,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::DetachPointerListeners]);
        assert!(interaction.is_idle());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(300, 300),
            },
        );
        assert_eq!(state.window(AppId::Welcome).map(|w| w.position), before);
        assert_eq!(
            state.window(AppId::Welcome).map(|w| w.lifecycle),
            Some(LifecycleState::Minimized)
        );
    }

    #[test]
    fn mail_send_round_trip_emits_delivery_and_reset() {
        let (mut state, mut interaction) = on_desktop();
        for action in [
            MailAction::OpenCompose,
            MailAction::SetSubject("Hi".to_string()),
            MailAction::SetBody("Hello there".to_string()),
        ] {
            reduce_desktop(&mut state, &mut interaction, DesktopAction::Mail(action));
        }

        let send = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Mail(MailAction::Send),
        );
        assert_eq!(
            send,
            vec![RuntimeEffect::SendMail(MailMessage::new(
                "affanlodhi2004@gmail.com",
                "Hi",
                "Hello there"
            ))]
        );

        let done = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Mail(MailAction::SendFinished(Ok(()))),
        );
        assert_eq!(
            done,
            vec![schedule(
                2000,
                DesktopAction::Mail(MailAction::ResetAfterSend)
            )]
        );
    }

    #[test]
    fn mail_failure_plays_error_cue() {
        let (mut state, mut interaction) = on_desktop();
        for action in [
            MailAction::OpenCompose,
            MailAction::SetSubject("Hi".to_string()),
            MailAction::SetBody("Hello".to_string()),
            MailAction::Send,
        ] {
            reduce_desktop(&mut state, &mut interaction, DesktopAction::Mail(action));
        }
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Mail(MailAction::SendFinished(Err("offline".to_string()))),
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Error)]);
        assert_eq!(state.mail.status, ComposeStatus::Editing);
    }
}
