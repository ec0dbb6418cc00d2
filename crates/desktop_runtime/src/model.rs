use serde::{Deserialize, Serialize};

use crate::{
    apps::AppId,
    gesture::{DragController, ResizeController},
    mail::MailCompose,
};

/// Top-left corner of a window in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window width/height in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
        }
    }
}

/// Viewport-relative rectangle used when rendering a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: WindowPosition, size: WindowSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.w,
            h: size.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Visibility state of an open window. Closing removes the record instead of tagging it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    Open,
    Minimized,
    Maximized,
}

/// One open application instance. At most one record exists per [`AppId`].
///
/// `position` and `size` keep their last restored values while the window is maximized so a
/// restore lands exactly where the window was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub lifecycle: LifecycleState,
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowRecord {
    pub fn is_minimized(&self) -> bool {
        self.lifecycle == LifecycleState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.lifecycle == LifecycleState::Maximized
    }
}

/// Which full-screen surface the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemPhase {
    #[default]
    Boot,
    Login,
    Desktop,
    ShutDown,
}

/// Session-wide desktop state: the window registry plus the shell's own flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub phase: SystemPhase,
    /// Open windows in launch order; this is also the taskbar order.
    pub windows: Vec<WindowRecord>,
    /// Focused window. Never points at a minimized or missing record.
    pub active: Option<AppId>,
    pub start_menu_open: bool,
    /// One-shot latch for auto-opening the welcome window on first desktop entry.
    pub welcome_opened: bool,
    pub mail: MailCompose,
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub(crate) fn window_mut(&mut self, app_id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.app_id == app_id)
    }

    pub fn is_active(&self, app_id: AppId) -> bool {
        self.active == Some(app_id)
    }
}

/// Transient pointer-gesture state. Only one gesture (drag or resize) runs at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: DragController,
    pub resize: ResizeController,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        !self.drag.is_active() && !self.resize.is_active()
    }
}
