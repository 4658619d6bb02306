//! Sortable Cards App
//!
//! Root component: provides config and board store to the card list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Container;
use crate::config::AppConfig;
use crate::store::BoardState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Fresh list on every load
    let store = Store::new(BoardState::new(config.card_count));
    provide_context(store);
    provide_context(config);

    view! {
        <main class="app-layout">
            <Container />
        </main>
    }
}
