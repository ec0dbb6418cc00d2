//! Document-scoped pointer listeners that live exactly as long as one drag or resize gesture.

use std::{cell::RefCell, rc::Rc};

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, window_event_listener};

use crate::{model::PointerPosition, reducer::DesktopAction};

#[derive(Clone, Default)]
/// Listener handles installed on gesture entry and removed on every exit path.
pub struct PointerListenerSet {
    handles: Rc<RefCell<Vec<WindowListenerHandle>>>,
}

impl PointerListenerSet {
    pub fn is_attached(&self) -> bool {
        !self.handles.borrow().is_empty()
    }

    /// Installs move/up/cancel listeners on the window. A second attach while attached is a no-op.
    pub fn attach<F>(&self, dispatch: F)
    where
        F: Fn(DesktopAction) + Clone + 'static,
    {
        if self.is_attached() {
            return;
        }

        let on_move = dispatch.clone();
        let on_up = dispatch.clone();
        let on_cancel = dispatch;
        let handles = vec![
            window_event_listener(ev::pointermove, move |ev| {
                // Touch drags would otherwise scroll the page.
                if ev.pointer_type() != "mouse" {
                    ev.prevent_default();
                }
                on_move(DesktopAction::PointerMove {
                    pointer: PointerPosition::new(ev.client_x(), ev.client_y()),
                });
            }),
            window_event_listener(ev::pointerup, move |_| on_up(DesktopAction::PointerUp)),
            window_event_listener(ev::pointercancel, move |_| {
                on_cancel(DesktopAction::PointerUp)
            }),
        ];
        *self.handles.borrow_mut() = handles;
    }

    /// Removes every installed listener. Safe to call when nothing is attached.
    pub fn detach(&self) {
        for handle in self.handles.borrow_mut().drain(..) {
            handle.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_idempotent_and_detach_clears() {
        let listeners = PointerListenerSet::default();
        assert!(!listeners.is_attached());

        listeners.attach(|_| {});
        assert!(listeners.is_attached());
        assert_eq!(listeners.handles.borrow().len(), 3);

        listeners.attach(|_| {});
        assert_eq!(listeners.handles.borrow().len(), 3);

        listeners.detach();
        assert!(!listeners.is_attached());
        listeners.detach();
        assert!(!listeners.is_attached());
    }

    #[test]
    fn clones_share_one_listener_set() {
        let listeners = PointerListenerSet::default();
        let shared = listeners.clone();
        listeners.attach(|_| {});
        assert!(shared.is_attached());
        shared.detach();
        assert!(!listeners.is_attached());
    }
}
