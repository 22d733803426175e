//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering of a flat list for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

mod feedback;

pub use feedback::{compute_drag_feedback, DragFeedback};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals, keyed by list index
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    /// Index the pointer is currently over
    pub target_index_read: ReadSignal<Option<usize>>,
    pub target_index_write: WriteSignal<Option<usize>>,
    /// Pending index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (target_index_read, target_index_write) = signal(None::<usize>);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_index_read,
        dragging_index_write,
        target_index_read,
        target_index_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    /// Index being dragged, if a drag is in progress
    pub fn dragging(&self) -> Option<usize> {
        self.dragging_index_read.get()
    }

    /// Index currently hovered during a drag
    pub fn target(&self) -> Option<usize> {
        self.target_index_read.get()
    }
}

/// Drop target after the pointer enters row `index`.
///
/// Re-entering the dragged row clears the target so releasing there cancels.
pub fn hover_target(dragging: Option<usize>, index: usize, current: Option<usize>) -> Option<usize> {
    match dragging {
        Some(from) if from == index => None,
        Some(_) => Some(index),
        None => current,
    }
}

/// Move to perform on release, if any
pub fn drop_move(dragging: Option<usize>, target: Option<usize>) -> Option<(usize, usize)> {
    match (dragging, target) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_index_write.set(None);
    dnd.target_index_write.set(None);
    dnd.pending_index_write.set(None);
}

/// Create mousedown handler for a draggable row
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ev.prevent_default();
            dnd.pending_index_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_index_read.get_untracked();

        if pending.is_some() && dnd.dragging_index_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_index_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_item_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_index_read.get_untracked();
        if dragging.is_some() {
            let current = dnd.target_index_read.get_untracked();
            dnd.target_index_write.set(hover_target(dragging, index, current));
        }
    }
}

/// Create mouseleave handler for the list container
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.target_index_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop(from, to)` fires only for a real drag onto a different row.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_index_read.get_untracked();
        let target = dnd.target_index_read.get_untracked();

        dnd.pending_index_write.set(None);

        end_drag(&dnd);
        if let Some((from, to)) = drop_move(dragging, target) {
            on_drop(from, to);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
