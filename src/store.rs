//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! render snapshot; the authoritative list lives in the `RankingSession`
//! held by `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::notifications::ToastQueue;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current ranking, in display order
    pub values: Vec<Item>,
    /// Visible toasts
    pub toasts: ToastQueue,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered list
pub fn store_set_values(store: &AppStore, items: Vec<Item>) {
    *store.values().write() = items;
}
