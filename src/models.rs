//! Frontend Models
//!
//! Data structures for ranked items and notifications.

use serde::{Deserialize, Serialize};

/// A single ranked value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier (`value_<n>` or `imported_<line>`)
    pub id: String,
    pub name: String,
    /// Position at creation time, never changes
    #[serde(rename = "originalIndex")]
    pub original_index: usize,
}

impl Item {
    /// Item created from the seed list
    pub fn seeded(position: usize, name: impl Into<String>) -> Self {
        Self {
            id: format!("value_{}", position),
            name: name.into(),
            original_index: position,
        }
    }

    /// Item created from an imported CSV line (`line` is the 0-based line index, header = 0)
    pub fn imported(line: usize, name: impl Into<String>) -> Self {
        Self {
            id: format!("imported_{}", line),
            name: name.into(),
            original_index: line.saturating_sub(1),
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_item() {
        let item = Item::seeded(3, "Harmonia");
        assert_eq!(item.id, "value_3");
        assert_eq!(item.original_index, 3);
    }

    #[test]
    fn test_imported_item() {
        let item = Item::imported(1, "Miłość");
        assert_eq!(item.id, "imported_1");
        assert_eq!(item.original_index, 0);
    }

    #[test]
    fn test_item_json_keys() {
        let json = serde_json::to_string(&Item::seeded(0, "Balans")).unwrap();
        assert_eq!(json, r#"{"id":"value_0","name":"Balans","originalIndex":0}"#);
    }
}
