//! Component-level mouse interactivity.
//!
//! Components register their clickable regions during render, and left
//! presses are routed to the highest-priority region containing the point.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(InteractiveRegion::clickable(
//!     "dropdown_option",
//!     ClickRegion::new(x, y, width, 1),
//!     Action::SelectItem(idx),
//! ));
//!
//! // In the mouse handler:
//! let action = registry.handle_click(mouse.column, mouse.row);
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// A rectangular hit area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that responds to left clicks.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    #[allow(dead_code)]
    pub id: &'static str,

    pub bounds: ClickRegion,

    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the
    /// point; earlier registrations win ties.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .fold(None::<&InteractiveRegion>, |best, r| match best {
                Some(b) if b.priority >= r.priority => Some(b),
                _ => Some(r),
            })
            .map(|r| r.on_click.clone())
            .unwrap_or(Action::None)
    }
}
