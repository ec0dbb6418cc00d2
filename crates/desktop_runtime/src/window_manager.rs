//! Window registry operations used by the desktop reducer and gesture controllers.
//!
//! Every operation is total: unknown ids and requests that do not apply to the current lifecycle
//! state are no-ops that return `false`.

use crate::{
    apps::{AppId, ApplicationCatalog},
    config,
    model::{DesktopState, LifecycleState, WindowPosition, WindowRecord, WindowRect, WindowSize},
};

/// Minimum allowed window width after a resize.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed window height after a resize.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// z-index of the bottom-most rendered window.
pub const BASE_WINDOW_Z_INDEX: u32 = 10;

/// Opens `app_id`, reusing the existing record when one is present.
///
/// An existing minimized window is restored to [`LifecycleState::Open`]; a maximized one stays
/// maximized. Either way the window becomes active.
pub fn open_window(state: &mut DesktopState, catalog: ApplicationCatalog<'_>, app_id: AppId) -> bool {
    if let Some(record) = state.window_mut(app_id) {
        if record.is_minimized() {
            record.lifecycle = LifecycleState::Open;
        }
        state.active = Some(app_id);
        return true;
    }

    let Some(template) = catalog.template_for(app_id) else {
        return false;
    };
    state.windows.push(WindowRecord {
        app_id,
        lifecycle: LifecycleState::Open,
        position: template
            .default_position
            .unwrap_or_else(config::fallback_window_position),
        size: template.default_size,
    });
    state.active = Some(app_id);
    true
}

pub fn close_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.app_id != app_id);
    if state.windows.len() == before {
        return false;
    }
    if state.is_active(app_id) {
        state.active = None;
    }
    true
}

pub fn minimize_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(record) = state.window_mut(app_id) else {
        return false;
    };
    record.lifecycle = LifecycleState::Minimized;
    if state.is_active(app_id) {
        state.active = None;
    }
    true
}

/// Flips between maximized and open. Position and size are left untouched for the restore.
pub fn toggle_maximize_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(record) = state.window_mut(app_id) else {
        return false;
    };
    record.lifecycle = match record.lifecycle {
        LifecycleState::Maximized => LifecycleState::Open,
        LifecycleState::Open | LifecycleState::Minimized => LifecycleState::Maximized,
    };
    state.active = Some(app_id);
    true
}

/// Makes `app_id` active without touching its lifecycle state.
///
/// Minimized windows are ignored so the active window is always visible; route those through
/// [`open_window`] instead.
pub fn focus_window(state: &mut DesktopState, app_id: AppId) -> bool {
    match state.window(app_id) {
        Some(record) if !record.is_minimized() => {
            state.active = Some(app_id);
            true
        }
        _ => false,
    }
}

/// Moves an open window. Maximized and minimized records keep their stored position.
pub fn move_window(state: &mut DesktopState, app_id: AppId, position: WindowPosition) -> bool {
    match state.window_mut(app_id) {
        Some(record) if record.lifecycle == LifecycleState::Open => {
            record.position = position;
            true
        }
        _ => false,
    }
}

/// Applies `size` clamped to the window floor. Position is never changed.
pub fn resize_window(state: &mut DesktopState, app_id: AppId, size: WindowSize) -> bool {
    match state.window_mut(app_id) {
        Some(record) if record.lifecycle == LifecycleState::Open => {
            record.size = clamp_window_size(size);
            true
        }
        _ => false,
    }
}

pub fn clamp_window_size(size: WindowSize) -> WindowSize {
    size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a taskbar button click did to its window.
pub enum TaskbarClickOutcome {
    Restored,
    Minimized,
    Focused,
    Ignored,
}

/// Taskbar button policy: restore a minimized window, minimize the active one, focus any other.
pub fn taskbar_click(
    state: &mut DesktopState,
    catalog: ApplicationCatalog<'_>,
    app_id: AppId,
) -> TaskbarClickOutcome {
    let Some(minimized) = state.window(app_id).map(WindowRecord::is_minimized) else {
        return TaskbarClickOutcome::Ignored;
    };

    if minimized {
        open_window(state, catalog, app_id);
        TaskbarClickOutcome::Restored
    } else if state.is_active(app_id) {
        minimize_window(state, app_id);
        TaskbarClickOutcome::Minimized
    } else {
        focus_window(state, app_id);
        TaskbarClickOutcome::Focused
    }
}

/// Windows to render, bottom to top: registry order with the active window lifted last.
pub fn visible_windows(state: &DesktopState) -> Vec<&WindowRecord> {
    let (active, mut rest): (Vec<_>, Vec<_>) = state
        .windows
        .iter()
        .filter(|w| !w.is_minimized())
        .partition(|w| state.is_active(w.app_id));
    rest.extend(active);
    rest
}

/// Render z-index for `app_id`, or `None` when the window is minimized or absent.
pub fn z_index_for(state: &DesktopState, app_id: AppId) -> Option<u32> {
    visible_windows(state)
        .iter()
        .position(|w| w.app_id == app_id)
        .map(|idx| BASE_WINDOW_Z_INDEX + idx as u32)
}

/// Area a maximized window fills: the viewport minus the taskbar strip.
pub fn maximized_rect(viewport: WindowSize) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.w,
        h: (viewport.h - config::TASKBAR_HEIGHT_PX).max(0),
    }
}

/// On-screen frame for a window record.
pub fn window_frame_rect(record: &WindowRecord, viewport: WindowSize) -> WindowRect {
    if record.is_maximized() {
        maximized_rect(viewport)
    } else {
        WindowRect::from_parts(record.position, record.size)
    }
}

/// Whether the taskbar button for `app_id` shows its pressed look.
pub fn taskbar_button_pressed(state: &DesktopState, app_id: AppId) -> bool {
    state.is_active(app_id)
        && state
            .window(app_id)
            .map(|w| !w.is_minimized())
            .unwrap_or(false)
}
