use super::*;

fn windows_flag() -> impl IntoView {
    view! {
        <div class="xp-flag" aria-hidden="true">
            <span class="xp-flag-red"></span>
            <span class="xp-flag-green"></span>
            <span class="xp-flag-blue"></span>
            <span class="xp-flag-yellow"></span>
        </div>
    }
}

#[component]
/// Black splash with a marquee progress bar. The transition to login is scheduled by the reducer.
pub(super) fn BootScreen() -> impl IntoView {
    view! {
        <div class="boot-screen" aria-busy="true">
            <div class="boot-logo">
                {windows_flag()}
                <h1 class="boot-title">
                    "Microsoft " <span class="boot-title-windows">"Windows"</span>
                    <sup class="boot-title-xp">"XP"</sup>
                </h1>
            </div>
            <div class="boot-progress" role="progressbar">
                <div class="boot-progress-marquee">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="login-screen">
            <div class="login-band top"></div>
            <div class="login-body">
                <div class="login-brand">
                    {windows_flag()}
                    <span class="login-brand-title">"Windows" <sup>"xp"</sup></span>
                    <p class="login-hint">"To begin, click your user name"</p>
                </div>
                <div class="login-divider" aria-hidden="true"></div>
                <div class="login-users">
                    <button
                        class="login-user"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::LogIn)
                    >
                        <img class="login-avatar" src=PROFILE.avatar_url alt="" />
                        <span class="login-user-text">
                            <span class="login-user-name">{PROFILE.name}</span>
                            <span class="login-user-hint">"Type your password"</span>
                        </span>
                    </button>
                    <div class="login-user disabled" aria-disabled="true">
                        <span class="login-avatar guest" aria-hidden="true"></span>
                        <span class="login-user-name">"Guest"</span>
                    </div>
                </div>
            </div>
            <div class="login-band bottom">
                <span class="login-power">
                    <span class="power-glyph" aria-hidden="true"></span>
                    "Turn off computer"
                </span>
            </div>
        </div>
    }
}

#[component]
pub(super) fn ShutDownScreen() -> impl IntoView {
    view! {
        <div class="shutdown-screen">
            <p>"It is now safe to turn off your computer."</p>
        </div>
    }
}
