use desktop_runtime::{
    mail::{ComposeStatus, MailAction},
    reduce_desktop, window_manager, AppId, DesktopAction, DesktopState, InteractionState,
    LifecycleState, PointerPosition, RuntimeEffect, SystemPhase, WindowPosition, WindowSize,
};
use futures::executor::block_on;
use platform_host::{MailService, RecordingMailService, SoundCue, UnconfiguredMailService};
use pretty_assertions::assert_eq;

struct Session {
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn on_desktop() -> Self {
        Self {
            state: DesktopState {
                phase: SystemPhase::Desktop,
                ..DesktopState::default()
            },
            interaction: InteractionState::default(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn record(&self, app_id: AppId) -> (LifecycleState, WindowPosition, WindowSize) {
        let record = self.state.window(app_id).expect("window is open");
        (record.lifecycle, record.position, record.size)
    }

    fn taskbar_order(&self) -> Vec<AppId> {
        self.state.windows.iter().map(|w| w.app_id).collect()
    }
}

fn scheduled(effect: &RuntimeEffect) -> Option<(u32, DesktopAction)> {
    match effect {
        RuntimeEffect::ScheduleAction { delay_ms, action } => Some((*delay_ms, (**action).clone())),
        _ => None,
    }
}

#[test]
fn work_opens_maximizes_and_closes() {
    let mut session = Session::on_desktop();

    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Work });
    assert_eq!(session.taskbar_order(), vec![AppId::Work]);
    assert_eq!(session.state.active, Some(AppId::Work));
    assert_eq!(
        session.record(AppId::Work),
        (
            LifecycleState::Open,
            WindowPosition::new(50, 50),
            WindowSize::new(700, 500)
        )
    );

    session.dispatch(DesktopAction::ToggleMaximize { app_id: AppId::Work });
    assert_eq!(
        session.record(AppId::Work),
        (
            LifecycleState::Maximized,
            WindowPosition::new(50, 50),
            WindowSize::new(700, 500)
        )
    );

    session.dispatch(DesktopAction::CloseWindow { app_id: AppId::Work });
    assert!(session.state.windows.is_empty());
    assert_eq!(session.state.active, None);
}

#[test]
fn taskbar_click_on_inactive_window_focuses_without_minimizing_others() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Gallery });
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Outlook });
    assert_eq!(session.taskbar_order(), vec![AppId::Gallery, AppId::Outlook]);

    session.dispatch(DesktopAction::FocusWindow { app_id: AppId::Gallery });
    session.dispatch(DesktopAction::TaskbarClick { app_id: AppId::Outlook });

    assert_eq!(session.state.active, Some(AppId::Outlook));
    assert_eq!(session.record(AppId::Gallery).0, LifecycleState::Open);
    assert_eq!(session.taskbar_order(), vec![AppId::Gallery, AppId::Outlook]);
}

#[test]
fn taskbar_click_cycles_minimize_and_restore() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Winamp });
    let before = session.record(AppId::Winamp);

    session.dispatch(DesktopAction::TaskbarClick { app_id: AppId::Winamp });
    assert_eq!(session.record(AppId::Winamp).0, LifecycleState::Minimized);
    assert_eq!(session.state.active, None);
    assert!(!window_manager::taskbar_button_pressed(&session.state, AppId::Winamp));

    session.dispatch(DesktopAction::TaskbarClick { app_id: AppId::Winamp });
    assert_eq!(session.record(AppId::Winamp), before);
    assert_eq!(session.state.active, Some(AppId::Winamp));
}

#[test]
fn drag_follows_pointer_delta_and_releases_listeners() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Gallery });
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Outlook });

    let effects = session.dispatch(DesktopAction::BeginDrag {
        app_id: AppId::Gallery,
        pointer: PointerPosition::new(400, 62),
    });
    assert_eq!(effects, vec![RuntimeEffect::AttachPointerListeners]);
    assert_eq!(session.state.active, Some(AppId::Gallery));

    for pointer in [PointerPosition::new(410, 70), PointerPosition::new(520, 20)] {
        let effects = session.dispatch(DesktopAction::PointerMove { pointer });
        assert!(effects.is_empty());
    }
    assert_eq!(session.record(AppId::Gallery).1, WindowPosition::new(170, 8));

    assert_eq!(
        session.dispatch(DesktopAction::PointerUp),
        vec![RuntimeEffect::DetachPointerListeners]
    );
    assert!(session.interaction.is_idle());

    session.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(0, 0),
    });
    assert_eq!(session.record(AppId::Gallery).1, WindowPosition::new(170, 8));
}

#[test]
fn resize_is_floored_and_keeps_origin() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Cv });

    let effects = session.dispatch(DesktopAction::BeginResize {
        app_id: AppId::Cv,
        pointer: PointerPosition::new(700, 700),
    });
    assert_eq!(effects, vec![RuntimeEffect::AttachPointerListeners]);

    session.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(780, 760),
    });
    assert_eq!(
        session.record(AppId::Cv),
        (
            LifecycleState::Open,
            WindowPosition::new(150, 50),
            WindowSize::new(630, 710)
        )
    );

    session.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(-2000, -2000),
    });
    assert_eq!(
        session.record(AppId::Cv),
        (
            LifecycleState::Open,
            WindowPosition::new(150, 50),
            WindowSize::new(300, 200)
        )
    );
    session.dispatch(DesktopAction::PointerUp);
}

#[test]
fn closing_a_window_mid_drag_ends_the_gesture() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Work });
    session.dispatch(DesktopAction::BeginDrag {
        app_id: AppId::Work,
        pointer: PointerPosition::new(60, 60),
    });

    let effects = session.dispatch(DesktopAction::CloseWindow { app_id: AppId::Work });
    assert_eq!(effects, vec![RuntimeEffect::DetachPointerListeners]);
    assert!(session.interaction.is_idle());
    assert_eq!(session.dispatch(DesktopAction::PointerUp), vec![]);
}

#[test]
fn second_gesture_waits_for_the_first_to_finish() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Work });
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Cv });
    session.dispatch(DesktopAction::BeginDrag {
        app_id: AppId::Cv,
        pointer: PointerPosition::new(200, 60),
    });

    let effects = session.dispatch(DesktopAction::BeginResize {
        app_id: AppId::Work,
        pointer: PointerPosition::new(740, 540),
    });
    assert!(effects.is_empty());
    assert_eq!(session.interaction.resize.window_id(), None);
}

#[test]
fn boot_login_shutdown_cycle_keeps_welcome_latch() {
    let mut session = Session {
        state: DesktopState::default(),
        interaction: InteractionState::default(),
    };

    let effects = session.dispatch(DesktopAction::PowerOn);
    assert_eq!(
        effects.iter().filter_map(scheduled).collect::<Vec<_>>(),
        vec![(4000, DesktopAction::BootComplete)]
    );
    session.dispatch(DesktopAction::BootComplete);
    assert_eq!(session.state.phase, SystemPhase::Login);

    let effects = session.dispatch(DesktopAction::LogIn);
    assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Startup)]);
    assert_eq!(session.taskbar_order(), vec![AppId::Welcome]);
    session.dispatch(DesktopAction::CloseWindow { app_id: AppId::Welcome });

    session.dispatch(DesktopAction::ToggleStartMenu);
    let effects = session.dispatch(DesktopAction::ShutDown);
    assert_eq!(session.state.phase, SystemPhase::ShutDown);
    assert!(!session.state.start_menu_open);
    assert_eq!(effects[0], RuntimeEffect::PlaySound(SoundCue::Shutdown));
    assert_eq!(
        effects.iter().filter_map(scheduled).collect::<Vec<_>>(),
        vec![(5000, DesktopAction::RebootComplete)]
    );

    session.dispatch(DesktopAction::RebootComplete);
    session.dispatch(DesktopAction::BootComplete);
    session.dispatch(DesktopAction::LogIn);
    assert_eq!(session.state.phase, SystemPhase::Desktop);
    assert!(session.state.windows.is_empty());
}

#[test]
fn compose_sends_through_mail_service_and_resets() {
    let mut session = Session::on_desktop();
    session.dispatch(DesktopAction::OpenApp { app_id: AppId::Outlook });
    for action in [
        MailAction::OpenCompose,
        MailAction::SetSubject("Hello".to_string()),
        MailAction::SetBody("Are you available?".to_string()),
    ] {
        session.dispatch(DesktopAction::Mail(action));
    }

    let effects = session.dispatch(DesktopAction::Mail(MailAction::Send));
    let [RuntimeEffect::SendMail(message)] = effects.as_slice() else {
        panic!("expected a single send effect, got {effects:?}");
    };

    let service = RecordingMailService::default();
    let result = block_on(service.send(message)).map_err(|err| err.to_string());
    assert_eq!(service.sent(), vec![message.clone()]);

    let effects = session.dispatch(DesktopAction::Mail(MailAction::SendFinished(result)));
    assert_eq!(session.state.mail.status, ComposeStatus::Sent);
    let reset = effects.iter().filter_map(scheduled).collect::<Vec<_>>();
    assert_eq!(
        reset,
        vec![(2000, DesktopAction::Mail(MailAction::ResetAfterSend))]
    );

    session.dispatch(reset[0].1.clone());
    assert_eq!(session.state.mail.status, ComposeStatus::Closed);
    assert!(session.state.mail.subject.is_empty());
}

#[test]
fn failed_delivery_plays_error_cue_and_keeps_draft() {
    let mut session = Session::on_desktop();
    for action in [
        MailAction::OpenCompose,
        MailAction::SetSubject("Hello".to_string()),
        MailAction::SetBody("Body".to_string()),
    ] {
        session.dispatch(DesktopAction::Mail(action));
    }
    let effects = session.dispatch(DesktopAction::Mail(MailAction::Send));
    let [RuntimeEffect::SendMail(message)] = effects.as_slice() else {
        panic!("expected a single send effect, got {effects:?}");
    };

    let result = block_on(UnconfiguredMailService.send(message)).map_err(|err| err.to_string());
    let effects = session.dispatch(DesktopAction::Mail(MailAction::SendFinished(result)));

    assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Error)]);
    assert_eq!(session.state.mail.status, ComposeStatus::Editing);
    assert_eq!(session.state.mail.subject, "Hello");
    assert!(session.state.mail.notice.as_ref().is_some_and(|n| n.is_error()));
}
