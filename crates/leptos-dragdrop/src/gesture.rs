//! Gesture State Machine
//!
//! DOM-free reorder decision for sortable lists. The Leptos bindings in the
//! crate root feed pointer positions and target geometry into a [`Gesture`].

/// Type tag for draggable items. Targets only react to matching kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKind(pub &'static str);

/// Opaque identity of a registered drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u32);

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Payload carried by a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Current index of the dragged item in its list
    pub index: usize,
}

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertical extent of a target element in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A drop target as seen by one hover event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub accepts: ItemKind,
    pub index: usize,
    pub bounds: Bounds,
}

/// Reorder request issued when a hover crosses a target's midpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragItem),
}

/// Capability interface between a drag engine and the reorder logic
pub trait Gesture {
    /// Pick up an item. Replaces any gesture already in progress.
    fn begin_gesture(&mut self, item: DragItem);

    /// Pointer moved over a target. Returns the reorder to apply, if any.
    fn on_hover(&mut self, pointer: Point, target: HoverTarget) -> Option<Reorder>;

    /// Drop or cancel. Returns the item that was being dragged.
    fn end_gesture(&mut self) -> Option<DragItem>;
}

/// Returns true once `pointer_y` has passed the midpoint of `bounds` in the
/// direction of travel from `drag_index` to `hover_index`.
///
/// Dragging down only crosses at or below the midpoint, dragging up only at
/// or above it. Self-hover never crosses.
pub fn crossed_midpoint(drag_index: usize, hover_index: usize, pointer_y: f64, bounds: Bounds) -> bool {
    if drag_index == hover_index {
        return false;
    }

    let middle_y = bounds.height() / 2.0;
    let offset_y = pointer_y - bounds.top;

    if drag_index < hover_index && offset_y < middle_y {
        return false;
    }
    if drag_index > hover_index && offset_y > middle_y {
        return false;
    }
    true
}

/// Returns true once the pointer has moved more than `threshold` pixels
/// from `start` on either axis.
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold: i32) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold || dy > threshold
}

/// Sortable-list gesture: tracks the dragged item's index across reorders
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SortGesture {
    state: GestureState,
}

impl SortGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Id of the item being dragged, if any
    pub fn dragging_id(&self) -> Option<u32> {
        match self.state {
            GestureState::Dragging(item) => Some(item.id),
            GestureState::Idle => None,
        }
    }

    pub fn item(&self) -> Option<DragItem> {
        match self.state {
            GestureState::Dragging(item) => Some(item),
            GestureState::Idle => None,
        }
    }
}

impl Gesture for SortGesture {
    fn begin_gesture(&mut self, item: DragItem) {
        self.state = GestureState::Dragging(item);
    }

    fn on_hover(&mut self, pointer: Point, target: HoverTarget) -> Option<Reorder> {
        let GestureState::Dragging(item) = &mut self.state else {
            return None;
        };
        if item.kind != target.accepts {
            return None;
        }
        if !crossed_midpoint(item.index, target.index, pointer.y, target.bounds) {
            return None;
        }

        let reorder = Reorder { from: item.index, to: target.index };
        // Follow the item to its new slot so the same crossing is not re-issued
        item.index = target.index;
        Some(reorder)
    }

    fn end_gesture(&mut self) -> Option<DragItem> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(item) => Some(item),
            GestureState::Idle => None,
        }
    }
}
