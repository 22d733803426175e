//! Value List Component
//!
//! The ranked list with drag-and-drop reordering.
//! Uses leptos-dragdrop: press on a row, move past the threshold, release over
//! another row to move it there.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Ranked list with DnD support
#[component]
pub fn ValueList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |from, to| {
        log::debug!("[DND] Drop: from={}, to={}", from, to);
        ctx.move_item(from, to);
    });

    // Shift/drag-over classes for every row, keyed by item id
    let feedback = Memo::new(move |_| {
        let ids: Vec<String> = store.values().with(|items| items.iter().map(|i| i.id.clone()).collect());
        compute_drag_feedback(&ids, dnd.dragging(), dnd.target())
    });

    let rows = move || store.values().get().into_iter().enumerate().collect::<Vec<_>>();

    let list_class = move || {
        if dnd.dragging().is_some() { "values-list dragging" } else { "values-list" }
    };

    view! {
        <ol class=list_class on:mouseleave=make_on_mouseleave(dnd)>
            <For
                each=rows
                // Index is part of the key so handlers are rebuilt after a move
                key=|(index, item)| (*index, item.id.clone())
                children=move |(index, item)| {
                    let id = item.id.clone();
                    let row_class = move || {
                        let mut c = String::from("value-item");
                        if dnd.dragging() == Some(index) { c.push_str(" is-dragging"); }
                        let state = feedback.with(|map| map.get(&id).copied().unwrap_or_default());
                        if state != DragFeedback::None {
                            c.push(' ');
                            c.push_str(state.css_class());
                        }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=make_on_mousedown(dnd, index)
                            on:mouseenter=make_on_item_mouseenter(dnd, index)
                        >
                            <span class="value-position">{index + 1}</span>
                            <span class="value-name">{item.name.clone()}</span>
                            <i class="fas fa-grip-vertical drag-handle"></i>
                        </li>
                    }
                }
            />
        </ol>
    }
}
