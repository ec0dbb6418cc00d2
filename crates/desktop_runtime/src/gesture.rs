//! Pointer drag and resize controllers.
//!
//! Each controller is an explicit `Idle`/active state machine. Entering and leaving the active
//! state is reported as a [`GestureTransition`] so the host can attach and detach its
//! document-scoped pointer listeners exactly once per gesture.

use crate::{
    apps::AppId,
    model::{DesktopState, PointerPosition, WindowPosition, WindowSize},
    window_manager::{self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of feeding one pointer event into a controller.
pub enum GestureTransition {
    /// Idle -> active; global move/up listeners must be attached.
    Entered,
    /// Still active; the registry was updated.
    Updated,
    /// Active -> idle; global listeners must be removed.
    Exited,
    /// The event did not apply to the controller's current state.
    Ignored,
}

impl GestureTransition {
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Entered | Self::Exited)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: AppId,
    /// Pointer position minus window position at gesture start.
    pub pointer_offset: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragController {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragController {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn window_id(&self) -> Option<AppId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.window_id),
        }
    }

    /// Title-bar pointer-down. Focuses the window and captures the pointer offset.
    pub fn pointer_down(
        &mut self,
        state: &mut DesktopState,
        window_id: AppId,
        pointer: PointerPosition,
    ) -> GestureTransition {
        if self.is_active() {
            return GestureTransition::Ignored;
        }
        let Some(position) = state
            .window(window_id)
            .filter(|w| !w.is_maximized() && !w.is_minimized())
            .map(|w| w.position)
        else {
            return GestureTransition::Ignored;
        };

        window_manager::focus_window(state, window_id);
        *self = Self::Dragging(DragSession {
            window_id,
            pointer_offset: PointerPosition::new(pointer.x - position.x, pointer.y - position.y),
        });
        GestureTransition::Entered
    }

    pub fn pointer_move(
        &mut self,
        state: &mut DesktopState,
        pointer: PointerPosition,
    ) -> GestureTransition {
        let Self::Dragging(session) = *self else {
            return GestureTransition::Ignored;
        };
        let position = WindowPosition::new(
            pointer.x - session.pointer_offset.x,
            pointer.y - session.pointer_offset.y,
        );
        window_manager::move_window(state, session.window_id, position);
        GestureTransition::Updated
    }

    pub fn pointer_up(&mut self) -> GestureTransition {
        self.end()
    }

    /// Ends the gesture regardless of which pointer event arrived. Used on pointer-up, on window
    /// close, and on teardown.
    pub fn end(&mut self) -> GestureTransition {
        match std::mem::take(self) {
            Self::Idle => GestureTransition::Ignored,
            Self::Dragging(_) => GestureTransition::Exited,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub anchor_size: WindowSize,
    pub anchor_pointer: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeController {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

impl ResizeController {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    pub fn window_id(&self) -> Option<AppId> {
        match self {
            Self::Idle => None,
            Self::Resizing(session) => Some(session.window_id),
        }
    }

    /// Grip pointer-down. Captures the anchor size and pointer; focus is left alone.
    pub fn pointer_down(
        &mut self,
        state: &DesktopState,
        window_id: AppId,
        pointer: PointerPosition,
    ) -> GestureTransition {
        if self.is_active() {
            return GestureTransition::Ignored;
        }
        let Some(size) = state
            .window(window_id)
            .filter(|w| !w.is_maximized() && !w.is_minimized())
            .map(|w| w.size)
        else {
            return GestureTransition::Ignored;
        };

        *self = Self::Resizing(ResizeSession {
            window_id,
            anchor_size: size,
            anchor_pointer: pointer,
        });
        GestureTransition::Entered
    }

    /// Grows or shrinks from the top-left anchor; the window origin never moves.
    pub fn pointer_move(
        &mut self,
        state: &mut DesktopState,
        pointer: PointerPosition,
    ) -> GestureTransition {
        let Self::Resizing(session) = *self else {
            return GestureTransition::Ignored;
        };
        let dx = pointer.x - session.anchor_pointer.x;
        let dy = pointer.y - session.anchor_pointer.y;
        let size = WindowSize::new(
            (session.anchor_size.w + dx).max(MIN_WINDOW_WIDTH),
            (session.anchor_size.h + dy).max(MIN_WINDOW_HEIGHT),
        );
        window_manager::resize_window(state, session.window_id, size);
        GestureTransition::Updated
    }

    pub fn pointer_up(&mut self) -> GestureTransition {
        self.end()
    }

    pub fn end(&mut self) -> GestureTransition {
        match std::mem::take(self) {
            Self::Idle => GestureTransition::Ignored,
            Self::Resizing(_) => GestureTransition::Exited,
        }
    }
}
