use super::*;
use crate::apps::StartMenuEntry;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="start-menu"
            role="menu"
            aria-label="Start menu"
            style=format!("bottom:{TASKBAR_HEIGHT_PX}px;")
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <header class="start-menu-header">
                <img class="start-menu-avatar" src=PROFILE.avatar_url alt="" />
                <span class="start-menu-user">{PROFILE.name}</span>
            </header>

            <div class="start-menu-columns">
                <ul class="start-menu-column programs">
                    {entries(apps::start_menu_programs())}
                </ul>
                <ul class="start-menu-column places">
                    {entries(apps::start_menu_places())}
                </ul>
            </div>

            <footer class="start-menu-footer">
                <button
                    class="start-menu-power logoff"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::LogOff)
                >
                    <span class="power-glyph" aria-hidden="true"></span>
                    "Log Off"
                </button>
                <button
                    class="start-menu-power turnoff"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ShutDown)
                >
                    <span class="power-glyph" aria-hidden="true"></span>
                    "Turn Off Computer"
                </button>
            </footer>
        </div>
    }
}

fn entries(items: &'static [StartMenuEntry]) -> View {
    items.iter().map(|entry| view! { <StartMenuItem entry=*entry /> }).collect_view()
}

#[component]
fn StartMenuItem(entry: StartMenuEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();

    match entry {
        StartMenuEntry::Separator => {
            view! { <li class="start-menu-separator" role="separator"></li> }.into_view()
        }
        StartMenuEntry::Launch {
            label,
            subtitle,
            icon,
            bold,
            target,
        } => view! {
            <li
                class=if bold { "start-menu-item bold" } else { "start-menu-item" }
                class:inert=target.is_none()
                role="menuitem"
                on:click=move |_| runtime.dispatch_action(DesktopAction::StartMenuSelect { target })
            >
                <AppGlyph icon=icon />
                <span class="start-menu-item-text">
                    <span class="start-menu-item-label">{label}</span>
                    {subtitle.map(|text| view! { <span class="start-menu-item-subtitle">{text}</span> })}
                </span>
            </li>
        }
        .into_view(),
    }
}
