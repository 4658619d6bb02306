//! Card Container Component
//!
//! Renders the board's cards in order and owns the drag engine bindings.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::DraggableCard;
use crate::store::{store_index_of, store_move_card, use_board_store, BoardStateStoreFields};

const CONTAINER_STYLE: &str = "width: 100%; display: flex; flex-wrap: wrap; max-height: 100vh; \
    flex-direction: column; align-content: flex-start; gap: 15px;";

/// Sortable card list
#[component]
pub fn Container() -> impl IntoView {
    let store = use_board_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Cards are reordered live while hovering; the drop only ends the gesture
    bind_global_mouseup(dnd, move |item: DragItem| {
        let order = store.cards().with_untracked(|cards| cards.ids());
        tracing::info!(id = item.id, index = item.index, ?order, "card dropped");
    });

    let move_card = Callback::new(move |(from, to): (usize, usize)| {
        if let Err(err) = store_move_card(&store, from, to) {
            tracing::error!(%err, from, to, "rejected card move");
        }
    });

    let cards = move || store.cards().with(|cards| cards.iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card-container" style=CONTAINER_STYLE>
            <Show when=move || store.cards().with(|cards| cards.is_empty())>
                <p class="empty-hint">"No cards"</p>
            </Show>
            <For
                each=cards
                key=|card| card.id
                children=move |card| {
                    let id = card.id;
                    let index = Signal::derive(move || store_index_of(&store, id));
                    view! {
                        <DraggableCard card=card index=index move_card=move_card dnd=dnd />
                    }
                }
            />
        </div>
    }
}
