use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Per-function token counts for one chat session, in insertion order.
///
/// A `None` count means the function reported no usage at all; it is
/// treated as zero everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UsageRecord {
    entries: IndexMap<String, Option<u64>>,
}

impl UsageRecord {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        let record: Self =
            serde_json::from_str(json).context("Failed to parse token usage record")?;
        record.validate()?;
        Ok(record)
    }

    /// Rejects records whose counts do not fit in a `u64` total.
    pub fn validate(&self) -> Result<()> {
        self.checked_total()
            .map(|_| ())
            .ok_or_else(|| anyhow!("Token usage total exceeds {}", u64::MAX))
    }

    pub fn insert(&mut self, key: impl Into<String>, count: Option<u64>) {
        self.entries.insert(key.into(), count);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u64>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every defined count, `None` on overflow.
    pub fn checked_total(&self) -> Option<u64> {
        self.entries
            .values()
            .flatten()
            .try_fold(0u64, |total, &count| total.checked_add(count))
    }

    /// Sum of every defined count, saturating at `u64::MAX`.
    pub fn defined_total(&self) -> u64 {
        self.entries
            .values()
            .flatten()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<u64>)> for UsageRecord {
    fn from_iter<I: IntoIterator<Item = (K, Option<u64>)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, count) in iter {
            record.insert(key, count);
        }
        record
    }
}
