//! Drag Feedback
//!
//! Pure computation of per-row visual state while a row is being dragged.

use std::collections::HashMap;
use std::hash::Hash;

/// Visual state of a single row during a drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragFeedback {
    #[default]
    None,
    /// Row slides up to fill the gap left by the dragged row
    ShiftUp,
    /// Row slides down to make room for the dragged row
    ShiftDown,
    /// Row under the pointer
    DragOver,
}

impl DragFeedback {
    /// CSS class applied by the list view (empty for `None`)
    pub fn css_class(&self) -> &'static str {
        match self {
            DragFeedback::None => "",
            DragFeedback::ShiftUp => "shift-up",
            DragFeedback::ShiftDown => "shift-down",
            DragFeedback::DragOver => "drag-over",
        }
    }
}

/// Map every row key to its feedback for a drag from `dragging` onto `target`.
///
/// With no drag in progress, or when hovering the dragged row itself,
/// every row is `None`.
pub fn compute_drag_feedback<K>(
    keys: &[K],
    dragging: Option<usize>,
    target: Option<usize>,
) -> HashMap<K, DragFeedback>
where
    K: Clone + Eq + Hash,
{
    let active = match (dragging, target) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    };

    keys.iter()
        .enumerate()
        .map(|(index, key)| {
            let feedback = match active {
                None => DragFeedback::None,
                Some((_, to)) if index == to => DragFeedback::DragOver,
                Some((from, to)) if from < to && index > from && index <= to => DragFeedback::ShiftUp,
                Some((from, to)) if from > to && index < from && index >= to => DragFeedback::ShiftDown,
                Some(_) => DragFeedback::None,
            };
            (key.clone(), feedback)
        })
        .collect()
}
