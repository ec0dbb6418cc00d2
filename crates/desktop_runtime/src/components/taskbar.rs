use std::time::Duration;

use platform_host::ClockSnapshot;

use super::*;
use crate::config::CLOCK_TICK_MS;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_millis(u64::from(CLOCK_TICK_MS)),
    ) {
        on_cleanup(move || interval.clear());
    }

    let window_ids = create_memo(move |_| {
        state
            .get()
            .windows
            .iter()
            .map(|w| w.app_id)
            .collect::<Vec<_>>()
    });

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            style=format!("height:{TASKBAR_HEIGHT_PX}px;")
        >
            <button
                class=move || {
                    if state.get().start_menu_open { "start-button pressed" } else { "start-button" }
                }
                aria-label="Start"
                aria-haspopup="menu"
                aria-expanded=move || state.get().start_menu_open
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span class="start-button-flag" aria-hidden="true"></span>
                <span class="start-button-label">"start"</span>
            </button>

            <div class="taskbar-running" role="group" aria-label="Running windows">
                <For each=move || window_ids.get() key=|app_id| *app_id let:app_id>
                    <button
                        class=move || {
                            if window_manager::taskbar_button_pressed(&state.get(), app_id) {
                                "taskbar-button pressed"
                            } else {
                                "taskbar-button"
                            }
                        }
                        aria-pressed=move || window_manager::taskbar_button_pressed(&state.get(), app_id)
                        title=apps::app_title(app_id)
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::TaskbarClick { app_id });
                        }
                    >
                        <AppGlyph icon=app_icon(app_id) />
                        <span class="taskbar-button-label">{apps::app_title(app_id)}</span>
                    </button>
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="tray-icon tray-volume" aria-hidden="true"></span>
                <span class="tray-icon tray-network" aria-hidden="true"></span>
                <time class="taskbar-clock">{move || clock_now.get().format_12h()}</time>
            </div>
        </footer>
    }
}
