//! Draggable Card Component
//!
//! One row of the sortable list: a grip handle that starts the gesture and
//! a body that acts as the drop target.

use leptos::html::Div;
use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::DragHandleIcon;
use crate::config::AppConfig;
use crate::models::Card;

/// Drag type shared by every card
pub const CARD_KIND: ItemKind = ItemKind("card");

const WRAPPER_STYLE: &str = "display: flex; justify-content: space-between; align-items: center;";
const HANDLE_STYLE: &str = "display: inline-block; margin-right: 0.75rem; cursor: move;";
const BODY_STYLE: &str = "border: 1px dashed gray; padding: 0.5rem 1rem; margin-bottom: .5rem; \
    background-color: white; width: 200px; height: 50px; display: flex; \
    justify-content: space-between; align-items: center;";

/// A card that reorders itself while dragged over its siblings
#[component]
pub fn DraggableCard(
    card: Card,
    /// Current position in the list
    index: Signal<Option<usize>>,
    /// Splice callback: (from, to)
    move_card: Callback<(usize, usize)>,
    dnd: DndSignals,
) -> impl IntoView {
    let dragging_opacity = use_context::<AppConfig>()
        .map(|c| c.dragging_opacity)
        .unwrap_or_default();

    let id = card.id;
    let node = NodeRef::<Div>::new();
    let handler = register_target(&dnd);
    let spec = DropSpec { handler, accepts: CARD_KIND };

    let on_mousedown = make_on_mousedown(dnd, move || {
        index.get_untracked().map(|index| DragItem { id: id.0, kind: CARD_KIND, index })
    });
    let on_hover = make_on_hover(dnd, spec, index, node, move |reorder: Reorder| {
        move_card.run((reorder.from, reorder.to));
    });
    let on_mouseleave = make_on_mouseleave(dnd, handler);

    // Visual state
    let is_dragging = move || dnd.dragging_id() == Some(id.0);
    let is_drop_target = move || dnd.over_read.get() == Some(handler) && !is_dragging();

    let wrapper_class = move || {
        let mut c = String::from("card-wrapper");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };
    let wrapper_style = move || {
        let opacity = if is_dragging() { dragging_opacity } else { 1.0 };
        format!("{} opacity: {};", WRAPPER_STYLE, opacity)
    };

    view! {
        <div
            node_ref=node
            class=wrapper_class
            style=wrapper_style
            data-handler-id=handler.to_string()
            on:mousemove=on_hover
            on:mouseleave=on_mouseleave
        >
            <div class="card-handle" style=HANDLE_STYLE on:mousedown=on_mousedown>
                <DragHandleIcon />
            </div>
            <div class="card-body" style=BODY_STYLE>
                {card.text}
            </div>
        </div>
    }
}
