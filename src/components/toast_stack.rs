//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Transient notifications, newest at the bottom
#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For
                each=move || store.toasts().with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.kind.css_class()>
                            <i class=toast.kind.icon_class()></i>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
