//! Ranking List Operations
//!
//! Pure operations on the ordered list of items. Nothing here touches the
//! DOM or storage; `session` layers persistence on top.

use std::collections::HashSet;

use rand::Rng;
use serde::Deserialize;

use crate::error::{RankingError, RankingResult};
use crate::models::Item;

/// Build a fresh list from seed names
pub fn initialize<S: AsRef<str>>(seed: &[S]) -> Vec<Item> {
    seed.iter()
        .enumerate()
        .map(|(position, name)| Item::seeded(position, name.as_ref()))
        .collect()
}

/// Move the item at `from` so it ends up at `to`.
///
/// `to` is an index into the list after removal (splice-remove, then
/// splice-insert). Panics if either index is out of bounds.
pub fn move_item(items: &mut Vec<Item>, from: usize, to: usize) {
    let len = items.len();
    assert!(from < len && to < len, "move_item({}, {}) out of bounds for length {}", from, to, len);
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Fisher-Yates shuffle driven by an injected random source
pub fn shuffle<R: Rng + ?Sized>(items: &mut [Item], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Serialize the list for storage (JSON array of items)
pub fn serialize(items: &[Item]) -> String {
    // Item only has string and integer fields
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Persisted item shape; `originalIndex` is optional on read
#[derive(Deserialize)]
struct StoredItem {
    id: String,
    name: String,
    #[serde(rename = "originalIndex")]
    original_index: Option<usize>,
}

/// Parse a previously persisted list
pub fn load(text: &str) -> RankingResult<Vec<Item>> {
    let stored: Vec<StoredItem> =
        serde_json::from_str(text).map_err(|e| RankingError::MalformedState(e.to_string()))?;

    if stored.is_empty() {
        return Err(RankingError::MalformedState("empty list".to_string()));
    }

    let mut seen = HashSet::with_capacity(stored.len());
    let mut items = Vec::with_capacity(stored.len());
    for (position, entry) in stored.into_iter().enumerate() {
        if !seen.insert(entry.id.clone()) {
            return Err(RankingError::MalformedState(format!("duplicate id {}", entry.id)));
        }
        items.push(Item {
            id: entry.id,
            name: entry.name,
            original_index: entry.original_index.unwrap_or(position),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn ids(items: &[Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn sorted_ids(items: &[Item]) -> Vec<String> {
        let mut v = ids(items);
        v.sort();
        v
    }

    fn sample() -> Vec<Item> {
        initialize(&["A", "B", "C", "D", "E"])
    }

    #[test]
    fn test_initialize() {
        let items = initialize(&["Miłość", "Balans", "Energia"]);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].id, "value_1");
        assert_eq!(items[1].name, "Balans");
        assert_eq!(items[2].original_index, 2);
    }

    #[test]
    fn test_initialize_idempotent() {
        assert_eq!(sample(), sample());
    }

    #[test]
    fn test_move_forward() {
        let mut items = sample();
        move_item(&mut items, 1, 3);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D", "B", "E"]);
    }

    #[test]
    fn test_move_backward() {
        let mut items = sample();
        move_item(&mut items, 4, 0);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["E", "A", "B", "C", "D"]);
    }

    #[test]
    fn test_move_all_pairs_keep_ids() {
        let original = sample();
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut items = original.clone();
                move_item(&mut items, from, to);
                assert_eq!(items.len(), original.len());
                assert_eq!(sorted_ids(&items), sorted_ids(&original));
                assert_eq!(items[to], original[from]);
            }
        }
    }

    #[test]
    fn test_move_same_index_noop() {
        let mut items = sample();
        move_item(&mut items, 2, 2);
        assert_eq!(items, sample());
    }

    #[test]
    #[should_panic]
    fn test_move_out_of_bounds_panics() {
        let mut items = sample();
        move_item(&mut items, 0, 5);
    }

    #[test]
    fn test_shuffle_preserves_items() {
        let mut items = sample();
        let mut rng = SmallRng::seed_from_u64(7);
        shuffle(&mut items, &mut rng);
        assert_eq!(sorted_ids(&items), sorted_ids(&sample()));
        for item in &items {
            assert!(sample().contains(item));
        }
    }

    #[test]
    fn test_shuffle_uniform() {
        let base = initialize(&["A", "B", "C"]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        let trials = 60_000;
        for _ in 0..trials {
            let mut items = base.clone();
            shuffle(&mut items, &mut rng);
            *counts.entry(ids(&items)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = trials as f64 / 6.0;
        for count in counts.values() {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "permutation frequency off by {:.3}", deviation);
        }
    }

    #[test]
    fn test_shuffle_small_lists() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut empty: Vec<Item> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = initialize(&["only"]);
        shuffle(&mut single, &mut rng);
        assert_eq!(single, initialize(&["only"]));
    }

    #[test]
    fn test_serialize_load_roundtrip() {
        let mut items = sample();
        move_item(&mut items, 0, 3);
        let mut rng = SmallRng::seed_from_u64(3);
        shuffle(&mut items, &mut rng);

        let loaded = load(&serialize(&items)).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_load_rejects_malformed() {
        assert!(matches!(load("not json"), Err(RankingError::MalformedState(_))));
        assert!(matches!(load("{}"), Err(RankingError::MalformedState(_))));
        assert!(matches!(load("[]"), Err(RankingError::MalformedState(_))));
        assert!(matches!(load(r#"[{"id":1,"name":"A"}]"#), Err(RankingError::MalformedState(_))));
        assert!(matches!(load(r#"[{"id":"x"}]"#), Err(RankingError::MalformedState(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let text = r#"[{"id":"a","name":"A"},{"id":"a","name":"B"}]"#;
        assert!(matches!(load(text), Err(RankingError::MalformedState(_))));
    }

    #[test]
    fn test_load_defaults_original_index() {
        let items = load(r#"[{"id":"a","name":"A"},{"id":"b","name":"B"}]"#).unwrap();
        assert_eq!(items[1].original_index, 1);
    }
}
