//! Value Ranking App
//!
//! Main application component: restores the saved list, provides context,
//! and lays out the toolbar, list and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ToastStack, Toolbar, ValueList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::ToastKind;
use crate::session::{LoadOutcome, RankingSession};
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let store = Store::new(AppState::default());
    provide_context(store);

    let (session, outcome) = RankingSession::open(BrowserStorage::new(), &config);
    let ctx = AppContext::new(session, config, store);
    provide_context(ctx);

    if let LoadOutcome::Restored(_) = outcome {
        ctx.notify("Wczytano zapisane wartości", ToastKind::Success);
    }

    view! {
        <div class="container">
            <header class="header">
                <h1>"Eliminacja wartości"</h1>
                <p class="subtitle">"Przeciągnij wartości, aby ułożyć je od najważniejszej"</p>
            </header>

            <Toolbar />

            <ValueList />

            <ToastStack />
        </div>
    }
}
