//! App Configuration

use crate::seed::SEED_VALUES;

/// localStorage key holding the serialized list
pub const STORAGE_KEY: &str = "eliminacja-wartosci";

/// How long a toast stays on screen
pub const TOAST_TTL_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub toast_ttl_ms: u32,
    /// Prefix of exported CSV file names (`<prefix>-YYYY-MM-DD.csv`)
    pub export_prefix: String,
    pub seed: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            toast_ttl_ms: TOAST_TTL_MS,
            export_prefix: STORAGE_KEY.to_string(),
            seed: SEED_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// Config with a custom seed list, everything else default
    pub fn with_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seed: seed.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
