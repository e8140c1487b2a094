//! Process-wide pointer press monitoring.
//!
//! Widgets that need to react to presses *outside* themselves (dismissing a
//! dropdown, for example) subscribe here with their bounding region. A
//! subscription is a guard: dropping it detaches the listener, so a widget
//! that is closed or destroyed can never leak one.
//!
//! # Example
//!
//! ```rust,ignore
//! let monitor = PointerMonitor::new();
//! let sub = monitor.subscribe(bounds, Action::DismissDropdown);
//!
//! // In the mouse handler:
//! for action in monitor.press(x, y) {
//!     app.dispatch(action);
//! }
//!
//! drop(sub); // listener detached
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::events::Action;
use crate::tui::interaction::ClickRegion;

#[derive(Debug)]
struct Listener {
    id: u64,
    bounds: ClickRegion,
    on_outside: Action,
}

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    active: Vec<Listener>,
}

/// Registry of outside-press listeners.
#[derive(Debug, Default)]
pub struct PointerMonitor {
    inner: Rc<RefCell<Listeners>>,
}

impl PointerMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener that fires `on_outside` for presses outside `bounds`.
    pub fn subscribe(&self, bounds: ClickRegion, on_outside: Action) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.push(Listener {
            id,
            bounds,
            on_outside,
        });

        Subscription {
            id,
            listeners: Rc::downgrade(&self.inner),
        }
    }

    /// Offer a pointer press at (x, y) to every listener.
    ///
    /// Returns the actions of listeners whose region does not contain the point.
    pub fn press(&self, x: u16, y: u16) -> Vec<Action> {
        self.inner
            .borrow()
            .active
            .iter()
            .filter(|l| !l.bounds.contains(x, y))
            .map(|l| l.on_outside.clone())
            .collect()
    }

    /// Number of attached listeners.
    #[allow(dead_code)]
    pub fn active(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

/// Guard for an attached listener. Detaches on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Replace the region this listener treats as "inside".
    pub fn set_bounds(&self, bounds: ClickRegion) {
        if let Some(inner) = self.listeners.upgrade() {
            if let Some(listener) = inner.borrow_mut().active.iter_mut().find(|l| l.id == self.id) {
                listener.bounds = bounds;
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.listeners.upgrade() {
            inner.borrow_mut().active.retain(|l| l.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_outside_fires() {
        let monitor = PointerMonitor::new();
        let _sub = monitor.subscribe(ClickRegion::new(10, 10, 20, 5), Action::DismissDropdown);

        let actions = monitor.press(0, 0);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::DismissDropdown));
    }

    #[test]
    fn test_press_inside_is_ignored() {
        let monitor = PointerMonitor::new();
        let _sub = monitor.subscribe(ClickRegion::new(10, 10, 20, 5), Action::DismissDropdown);

        assert!(monitor.press(15, 12).is_empty());
        assert!(monitor.press(29, 14).is_empty()); // bottom-right cell
    }

    #[test]
    fn test_drop_detaches() {
        let monitor = PointerMonitor::new();
        let sub = monitor.subscribe(ClickRegion::new(0, 0, 1, 1), Action::DismissDropdown);
        assert_eq!(monitor.active(), 1);

        drop(sub);
        assert_eq!(monitor.active(), 0);
        assert!(monitor.press(50, 50).is_empty());
    }

    #[test]
    fn test_set_bounds_moves_inside_region() {
        let monitor = PointerMonitor::new();
        let sub = monitor.subscribe(ClickRegion::new(0, 0, 5, 1), Action::DismissDropdown);
        assert_eq!(monitor.press(2, 3).len(), 1);

        sub.set_bounds(ClickRegion::new(0, 0, 5, 6));
        assert!(monitor.press(2, 3).is_empty());
    }

    #[test]
    fn test_subscription_outlives_monitor() {
        let monitor = PointerMonitor::new();
        let sub = monitor.subscribe(ClickRegion::new(0, 0, 1, 1), Action::DismissDropdown);
        drop(monitor);
        sub.set_bounds(ClickRegion::new(0, 0, 2, 2));
        drop(sub);
    }

    #[test]
    fn test_only_own_listener_removed() {
        let monitor = PointerMonitor::new();
        let first = monitor.subscribe(ClickRegion::new(0, 0, 1, 1), Action::DismissDropdown);
        let _second = monitor.subscribe(ClickRegion::new(5, 5, 1, 1), Action::Quit);

        drop(first);
        let actions = monitor.press(0, 0);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Quit));
    }
}
