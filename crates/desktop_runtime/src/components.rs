//! Desktop shell UI composition and interaction surfaces.

mod panels;
mod screens;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{
    screens::{BootScreen, LoginScreen, ShutDownScreen},
    start_menu::StartMenu,
    taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{
    apps::{self, AppIcon, AppId},
    config::TASKBAR_HEIGHT_PX,
    content::PROFILE,
    model::{PointerPosition, SystemPhase},
    reducer::DesktopAction,
    window_manager,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the screen for the current [`SystemPhase`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let phase = create_memo(move |_| runtime.state.get().phase);

    view! {
        <div class="xp-root" data-phase=move || format!("{:?}", phase.get()).to_lowercase()>
            {move || match phase.get() {
                SystemPhase::Boot => view! { <BootScreen /> }.into_view(),
                SystemPhase::Login => view! { <LoginScreen /> }.into_view(),
                SystemPhase::Desktop => view! { <Desktop /> }.into_view(),
                SystemPhase::ShutDown => view! { <ShutDownScreen /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Desktop() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_ids = create_memo(move |_| {
        state
            .get()
            .windows
            .iter()
            .map(|w| w.app_id)
            .collect::<Vec<_>>()
    });
    let start_menu_open = create_memo(move |_| state.get().start_menu_open);

    view! {
        <div
            class="desktop"
            style=format!("background-image:url('{}');", PROFILE.wallpaper_url)
        >
            <div
                class="desktop-surface"
                style=format!("bottom:{TASKBAR_HEIGHT_PX}px;")
                on:mousedown=move |_| {
                    if state.get_untracked().start_menu_open {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                <div class="desktop-icons">
                    {apps::desktop_icons()
                        .iter()
                        .map(|icon| {
                            let target = icon.target;
                            view! {
                                <div
                                    class="desktop-icon"
                                    on:dblclick=move |_| {
                                        if let Some(app_id) = target {
                                            runtime.dispatch_action(DesktopAction::OpenApp { app_id });
                                        }
                                    }
                                >
                                    <AppGlyph icon=icon.icon large=true />
                                    <span class="desktop-icon-label">{icon.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="window-layer">
                <For each=move || window_ids.get() key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id=app_id />
                </For>
            </div>

            <Show when=move || start_menu_open.get() fallback=|| ()>
                <StartMenu />
            </Show>

            <Taskbar />
        </div>
    }
}

#[component]
/// Small icon tile used by desktop icons, title bars, the taskbar, and the start menu.
pub(crate) fn AppGlyph(icon: AppIcon, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "app-glyph-lg" } else { "app-glyph-sm" };
    view! { <span class=format!("app-glyph {} {}", size, icon.css_class()) aria-hidden="true"></span> }
}

fn app_icon(app_id: AppId) -> AppIcon {
    apps::template_for(app_id)
        .map(|t| t.icon)
        .unwrap_or(AppIcon::Folder)
}

/// `true` for mouse presses other than the primary button and for secondary touch points.
fn is_secondary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() != 0
    } else {
        !ev.is_primary()
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn window_style(runtime: DesktopRuntimeContext, app_id: AppId) -> Option<String> {
    let desktop = runtime.state.get();
    let record = desktop.window(app_id)?;
    let z_index = window_manager::z_index_for(&desktop, app_id)?;
    let rect = window_manager::window_frame_rect(record, runtime.viewport.get());
    Some(format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    ))
}
