use super::*;
use crate::apps::{template_for, ApplicationTemplate};
use panels::WindowBody;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const MENU_BAR_ITEMS: [&str; 6] = ["File", "Edit", "View", "Favorites", "Tools", "Help"];
const TOOLBAR_ITEMS: [&str; 4] = ["Back", "Forward", "Search", "Folders"];

// Touch panning on a gesture surface turns the drag into `pointercancel`.
const TITLEBAR_STYLE: &str = "touch-action:none;user-select:none;";
const RESIZE_GRIP_STYLE: &str = "touch-action:none;cursor:nwse-resize;";

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(template) = template_for(app_id) else {
        return ().into_view();
    };

    let record = create_memo(move |_| runtime.state.get().window(app_id).cloned());
    let visible = create_memo(move |_| {
        record
            .get()
            .map(|w| !w.is_minimized())
            .unwrap_or(false)
    });
    let maximized = create_memo(move |_| record.get().map(|w| w.is_maximized()).unwrap_or(false));
    let active = create_memo(move |_| runtime.state.get().is_active(app_id));
    let style = Signal::derive(move || window_style(runtime, app_id).unwrap_or_default());

    let focus = move |_: web_sys::PointerEvent| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
        if !active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if is_secondary_pointer(&ev) || maximized.get_untracked() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
    };
    // Chrome buttons must never start a drag from the title bar underneath them.
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <section
                class=move || {
                    format!(
                        "xp-window{}{}",
                        if active.get() { " active" } else { "" },
                        if maximized.get() { " maximized" } else { "" },
                    )
                }
                style=move || style.get()
                on:pointerdown=focus
                role="dialog"
                aria-label=template.title
            >
                <header
                    class="xp-titlebar"
                    style=TITLEBAR_STYLE
                    on:pointerdown=begin_move
                    on:dblclick=titlebar_double_click
                >
                    <div class="xp-titlebar-title">
                        <AppGlyph icon=template.icon />
                        <span>{template.title}</span>
                    </div>
                    <div class="xp-titlebar-controls" on:pointerdown=swallow_pointer>
                        <button
                            class="xp-control minimize"
                            aria-label="Minimize window"
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id });
                            }
                        ></button>
                        <button
                            class=move || {
                                if maximized.get() { "xp-control restore" } else { "xp-control maximize" }
                            }
                            aria-label=move || {
                                if maximized.get() { "Restore window" } else { "Maximize window" }
                            }
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
                            }
                        ></button>
                        <button
                            class="xp-control close"
                            aria-label="Close window"
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::CloseWindow { app_id });
                            }
                        ></button>
                    </div>
                </header>
                <WindowChromeBars template=template />
                <div class="xp-window-body">
                    <WindowBody content=template.content />
                </div>
                <footer class="xp-statusbar">
                    <span class="xp-status-text">{template.status_text}</span>
                    <span class="xp-status-zone">"My Computer"</span>
                    <Show when=move || !maximized.get() fallback=|| ()>
                        <ResizeGrip app_id=app_id />
                    </Show>
                </footer>
            </section>
        </Show>
    }
    .into_view()
}

#[component]
fn WindowChromeBars(template: &'static ApplicationTemplate) -> impl IntoView {
    view! {
        {template.chrome.has_menu_bar.then(|| view! {
            <nav class="xp-menubar">
                {MENU_BAR_ITEMS
                    .iter()
                    .map(|item| view! { <span class="xp-menubar-item">{*item}</span> })
                    .collect_view()}
            </nav>
        })}
        {template.chrome.has_toolbar.then(|| view! {
            <div class="xp-toolbar">
                {TOOLBAR_ITEMS
                    .iter()
                    .map(|item| view! { <span class="xp-toolbar-item">{*item}</span> })
                    .collect_view()}
            </div>
        })}
    }
}

#[component]
fn ResizeGrip(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if is_secondary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class="xp-resize-grip"
            style=RESIZE_GRIP_STYLE
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
