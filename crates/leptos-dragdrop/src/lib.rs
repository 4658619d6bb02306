//! Leptos DragDrop Utilities
//!
//! Sortable-list drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The reorder decision itself lives in [`gesture`] and has no DOM
//! dependency; this module only adapts browser events to it.

pub mod gesture;

pub use gesture::{
    crossed_midpoint, exceeds_threshold, Bounds, DragItem, Gesture, GestureState, HandlerId, HoverTarget, ItemKind,
    Point, Reorder, SortGesture,
};

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target registration: who it is and what it accepts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropSpec {
    pub handler: HandlerId,
    pub accepts: ItemKind,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub gesture_read: ReadSignal<SortGesture>,
    pub gesture_write: WriteSignal<SortGesture>,
    /// Drop target currently under the pointer
    pub over_read: ReadSignal<Option<HandlerId>>,
    pub over_write: WriteSignal<Option<HandlerId>>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragItem>>,
    pub pending_write: WriteSignal<Option<DragItem>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    next_handler: StoredValue<u32>,
}

impl DndSignals {
    /// Id of the item being dragged (tracked)
    pub fn dragging_id(&self) -> Option<u32> {
        self.gesture_read.with(|g| g.dragging_id())
    }

    pub fn is_dragging_untracked(&self) -> bool {
        self.gesture_read.with_untracked(|g| g.is_dragging())
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (gesture_read, gesture_write) = signal(SortGesture::new());
    let (over_read, over_write) = signal(None::<HandlerId>);
    let (pending_read, pending_write) = signal(None::<DragItem>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        gesture_read,
        gesture_write,
        over_read,
        over_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        next_handler: StoredValue::new(0),
    }
}

/// Allocate a handler id for a new drop target
pub fn register_target(dnd: &DndSignals) -> HandlerId {
    let mut id = 0;
    dnd.next_handler.update_value(|next| {
        *next += 1;
        id = *next;
    });
    HandlerId(id)
}

/// End drag operation, returning the item that was being dragged
pub fn end_drag(dnd: &DndSignals) -> Option<DragItem> {
    let mut ended = None;
    dnd.gesture_write.update(|g| ended = g.end_gesture());
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    ended
}

/// Create mousedown handler for drag handles
/// Records pending drag with start position
pub fn make_on_mousedown<S>(dnd: DndSignals, source: S) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    S: Fn() -> Option<DragItem> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            let Some(item) = source() else { return };
            // Keep text selection from hijacking the gesture
            ev.prevent_default();
            dnd.pending_write.set(Some(item));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Start the pending gesture if the pointer has moved far enough.
/// Returns true when a gesture began.
pub fn promote_pending(dnd: &DndSignals, x: i32, y: i32) -> bool {
    let Some(pending) = dnd.pending_read.get_untracked() else { return false };
    if dnd.is_dragging_untracked() {
        return false;
    }

    let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
    if !exceeds_threshold(start, (x, y), DRAG_THRESHOLD_PX) {
        return false;
    }

    tracing::debug!(id = pending.id, index = pending.index, "drag started");
    dnd.gesture_write.update(|g| g.begin_gesture(pending));
    true
}

/// Bind mousemove handler on document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        promote_pending(&dnd, ev.client_x(), ev.client_y());
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create continuous hover handler for a drop target.
///
/// `index` is the target's current position in the list (`None` while the
/// target is not in it); `node` must be bound to the target element so its
/// bounding rect can be measured.
pub fn make_on_hover<F>(
    dnd: DndSignals,
    spec: DropSpec,
    index: Signal<Option<usize>>,
    node: NodeRef<Div>,
    on_reorder: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(Reorder) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if !dnd.is_dragging_untracked() {
            return;
        }
        if dnd.over_read.get_untracked() != Some(spec.handler) {
            dnd.over_write.set(Some(spec.handler));
        }

        let Some(index) = index.get_untracked() else {
            tracing::warn!(handler = %spec.handler, "hover over target missing from list");
            return;
        };
        let Some(el) = node.get_untracked() else { return };
        let rect = el.get_bounding_client_rect();
        let target = HoverTarget {
            accepts: spec.accepts,
            index,
            bounds: Bounds::new(rect.top(), rect.bottom()),
        };
        let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);

        let mut issued = None;
        dnd.gesture_write.update(|g| issued = g.on_hover(pointer, target));
        if let Some(reorder) = issued {
            tracing::trace!(from = reorder.from, to = reorder.to, handler = %spec.handler, "hover crossed midpoint");
            on_reorder(reorder);
        }
    }
}

/// Create mouseleave handler for a drop target
pub fn make_on_mouseleave(dnd: DndSignals, handler: HandlerId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.over_read.get_untracked() == Some(handler) {
            dnd.over_write.set(None);
        }
    }
}

/// Cancel the gesture on Escape, without a drop. Returns the cancelled item.
pub fn cancel_on_key(dnd: &DndSignals, key: &str) -> Option<DragItem> {
    if key != "Escape" || !dnd.is_dragging_untracked() {
        return None;
    }
    let item = end_drag(dnd)?;
    tracing::debug!(id = item.id, index = item.index, "drag cancelled");
    Some(item)
}

/// Finish the gesture on mouseup, calling `on_drop` if one was active.
/// Without a gesture this just clears the pending press.
pub fn finish_drop<F>(dnd: &DndSignals, on_drop: &F) -> Option<DragItem>
where
    F: Fn(DragItem),
{
    let item = end_drag(dnd)?;
    tracing::debug!(id = item.id, index = item.index, "drag dropped");
    on_drop(item);
    Some(item)
}

/// Bind global keydown handler - Escape cancels the gesture
pub fn bind_global_keydown(dnd: DndSignals) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        cancel_on_key(&dnd, &ev.key());
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragItem) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        finish_drop(&dnd, &on_drop);
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove and keydown
    bind_global_mousemove(dnd);
    bind_global_keydown(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const CARD: ItemKind = ItemKind("card");

    fn item(index: usize) -> DragItem {
        DragItem { id: 9, kind: CARD, index }
    }

    fn pressed_at(dnd: &DndSignals, x: i32, y: i32) {
        dnd.pending_write.set(Some(item(1)));
        dnd.start_x_write.set(x);
        dnd.start_y_write.set(y);
    }

    #[test]
    fn test_press_becomes_drag_past_threshold() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals();

        // No press: nothing to promote
        assert!(!promote_pending(&dnd, 50, 50));

        pressed_at(&dnd, 100, 100);
        assert!(!promote_pending(&dnd, 105, 95));
        assert!(!dnd.is_dragging_untracked());

        assert!(promote_pending(&dnd, 106, 100));
        assert_eq!(dnd.gesture_read.get_untracked().item(), Some(item(1)));

        // Already dragging
        assert!(!promote_pending(&dnd, 200, 200));
    }

    #[test]
    fn test_end_drag_clears_state() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals();

        pressed_at(&dnd, 0, 0);
        promote_pending(&dnd, 0, 20);
        dnd.over_write.set(Some(register_target(&dnd)));

        assert_eq!(end_drag(&dnd), Some(item(1)));
        assert_eq!(dnd.pending_read.get_untracked(), None);
        assert_eq!(dnd.over_read.get_untracked(), None);
        assert!(!dnd.is_dragging_untracked());
        assert_eq!(end_drag(&dnd), None);
    }

    #[test]
    fn test_escape_cancels_without_drop() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals();
        let dropped = RefCell::new(Vec::new());
        let on_drop = |item: DragItem| dropped.borrow_mut().push(item);

        pressed_at(&dnd, 0, 0);
        promote_pending(&dnd, 10, 0);

        assert_eq!(cancel_on_key(&dnd, "Enter"), None);
        assert!(dnd.is_dragging_untracked());

        assert_eq!(cancel_on_key(&dnd, "Escape"), Some(item(1)));
        assert!(!dnd.is_dragging_untracked());

        // The mouseup that follows finds no gesture
        assert_eq!(finish_drop(&dnd, &on_drop), None);
        assert!(dropped.borrow().is_empty());
    }

    #[test]
    fn test_mouseup_drops_active_gesture() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals();
        let dropped = RefCell::new(Vec::new());
        let on_drop = |item: DragItem| dropped.borrow_mut().push(item);

        // Click without movement: press cleared, no drop
        pressed_at(&dnd, 0, 0);
        assert_eq!(finish_drop(&dnd, &on_drop), None);
        assert_eq!(dnd.pending_read.get_untracked(), None);

        pressed_at(&dnd, 0, 0);
        promote_pending(&dnd, 0, -8);
        assert_eq!(finish_drop(&dnd, &on_drop), Some(item(1)));
        assert_eq!(*dropped.borrow(), vec![item(1)]);
    }

    #[test]
    fn test_register_target_allocates_distinct_ids() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals();
        assert_eq!(register_target(&dnd), HandlerId(1));
        assert_eq!(register_target(&dnd), HandlerId(2));
    }
}
