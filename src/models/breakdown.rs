use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    ResponseGeneration,
    MemoryExtraction,
}

impl Category {
    /// Keys naming memory work go to memory extraction, everything else is
    /// part of generating the response.
    pub fn of_key(key: &str) -> Self {
        if key.to_uppercase().contains("MEMORY") {
            Category::MemoryExtraction
        } else {
            Category::ResponseGeneration
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::ResponseGeneration => write!(f, "Response Generation"),
            Category::MemoryExtraction => write!(f, "Memory Extraction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry {
    pub usage_count: u64,
    pub legend_label: String,
    pub color: Color,
}

/// Entries of one category, keyed by function name in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewGroup {
    entries: IndexMap<String, ViewEntry>,
}

impl ViewGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ViewEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&ViewEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classified, colored and summed view of a usage record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub response: ViewGroup,
    pub memory: ViewGroup,
    pub response_total: u64,
    pub memory_total: u64,
    pub response_legend_color: Option<Color>,
    /// `None` when no memory entry was colored.
    pub memory_legend_color: Option<Color>,
}

impl Breakdown {
    /// Saturates at `u64::MAX`.
    pub fn grand_total(&self) -> u64 {
        self.response_total.saturating_add(self.memory_total)
    }

    pub fn total(&self, category: Category) -> u64 {
        match category {
            Category::ResponseGeneration => self.response_total,
            Category::MemoryExtraction => self.memory_total,
        }
    }

    pub fn legend_color(&self, category: Category) -> Option<Color> {
        match category {
            Category::ResponseGeneration => self.response_legend_color,
            Category::MemoryExtraction => self.memory_legend_color,
        }
    }

    /// Bar order: every response entry, then every memory entry.
    pub fn bars(&self) -> impl Iterator<Item = (Category, &str, &ViewEntry)> {
        self.response
            .iter()
            .map(|(k, e)| (Category::ResponseGeneration, k, e))
            .chain(
                self.memory
                    .iter()
                    .map(|(k, e)| (Category::MemoryExtraction, k, e)),
            )
    }

    /// Share of the grand total, 0.0 when nothing was used.
    pub fn proportion(&self, entry: &ViewEntry) -> f64 {
        let total = self.grand_total();
        if total == 0 {
            0.0
        } else {
            entry.usage_count as f64 / total as f64
        }
    }
}
