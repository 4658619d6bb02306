//! UI Components
//!
//! Leptos components for the sortable card list.

mod container;
mod drag_handle;
mod draggable_card;

pub use container::Container;
pub use drag_handle::DragHandleIcon;
pub use draggable_card::DraggableCard;
