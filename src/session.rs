//! Ranking Session
//!
//! Owns the authoritative list and its storage. Every mutation writes the new
//! state through; a failed write is returned to the caller while the
//! in-memory list keeps the change.

use rand::Rng;

use crate::config::AppConfig;
use crate::error::{RankingError, RankingResult};
use crate::models::Item;
use crate::ranking;
use crate::storage::KeyValueStore;

/// How the initial list was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Saved list restored with this many items
    Restored(usize),
    /// Nothing saved, started from the seed
    Seeded,
    /// Saved data was unreadable, started from the seed
    Recovered(RankingError),
}

pub struct RankingSession<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    seed: Vec<String>,
    items: Vec<Item>,
}

impl<S: KeyValueStore> RankingSession<S> {
    /// Restore the saved list, falling back to the seed
    pub fn open(storage: S, config: &AppConfig) -> (Self, LoadOutcome) {
        let (items, outcome) = match storage.get(&config.storage_key) {
            None => (ranking::initialize(&config.seed), LoadOutcome::Seeded),
            Some(text) => match ranking::load(&text) {
                Ok(items) => {
                    let count = items.len();
                    (items, LoadOutcome::Restored(count))
                }
                Err(e) => {
                    log::warn!("Discarding saved list: {}", e);
                    (ranking::initialize(&config.seed), LoadOutcome::Recovered(e))
                }
            },
        };
        log::info!("Session opened with {} items ({:?})", items.len(), outcome);

        let session = Self {
            storage,
            storage_key: config.storage_key.clone(),
            seed: config.seed.clone(),
            items,
        };
        (session, outcome)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reorder; see `ranking::move_item` for index semantics
    pub fn move_item(&mut self, from: usize, to: usize) -> RankingResult<()> {
        if from == to {
            return Ok(());
        }
        ranking::move_item(&mut self.items, from, to);
        self.persist()
    }

    /// Back to the seed list (confirmation is the caller's job)
    pub fn reset(&mut self) -> RankingResult<()> {
        self.items = ranking::initialize(&self.seed);
        self.persist()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RankingResult<()> {
        ranking::shuffle(&mut self.items, rng);
        self.persist()
    }

    /// Replace the whole list, e.g. after a CSV import
    pub fn replace(&mut self, items: Vec<Item>) -> RankingResult<()> {
        self.items = items;
        self.persist()
    }

    fn persist(&self) -> RankingResult<()> {
        self.storage
            .set(&self.storage_key, &ranking::serialize(&self.items))
            .map_err(|e| {
                log::error!("Failed to save list: {}", e);
                RankingError::from(e)
            })
    }
}
