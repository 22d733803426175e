//! Toast Queue
//!
//! Ordered list of transient notifications. Ids come from a counter owned by
//! the queue, so two toasts pushed in the same millisecond never collide.

use crate::models::{Toast, ToastKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Remove by id; false if it already expired
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
