//! Toolbar Component
//!
//! Import/export, clipboard copy, shuffle and reset actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_import = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        spawn_local(async move {
            ctx.import_from_input(&input).await;
        });
    };

    let on_copy = move |_| {
        spawn_local(async move {
            ctx.copy_to_clipboard().await;
        });
    };

    let on_copy_log = move |_| {
        spawn_local(async move {
            ctx.copy_log().await;
        });
    };

    view! {
        <div class="toolbar">
            <button class="btn btn-primary" on:click=move |_| ctx.export_csv()>
                <i class="fas fa-file-export"></i>
                " Eksportuj CSV"
            </button>
            <label class="btn btn-secondary import-btn">
                <i class="fas fa-file-import"></i>
                " Importuj CSV"
                <input type="file" accept=".csv" style="display: none" on:change=on_import />
            </label>
            <button class="btn btn-secondary" on:click=on_copy>
                <i class="fas fa-copy"></i>
                " Kopiuj listę"
            </button>
            <button class="btn btn-warning" on:click=move |_| ctx.shuffle()>
                <i class="fas fa-random"></i>
                " Losuj"
            </button>
            <button class="btn btn-danger" on:click=move |_| ctx.reset()>
                <i class="fas fa-undo"></i>
                " Resetuj"
            </button>
        </div>
        <button class="btn btn-link log-btn" on:click=on_copy_log>
            <i class="fas fa-bug"></i>
            " Kopiuj dziennik"
        </button>
        <p class="item-count">{move || format!("{} wartości", store.values().with(|items| items.len()))}</p>
    }
}
