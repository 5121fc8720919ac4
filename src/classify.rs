use crate::config::GraphConfig;
use crate::models::{Breakdown, Category, Color, UsageRecord, ViewEntry, ViewGroup};

pub const BRAND_START: u16 = 120;
pub const BRAND_STEP: u16 = 20;
pub const BRAND_WRAP: u16 = 160;
pub const BRAND_FLOOR: u16 = 0;

/// Walks the brand ramp downward from 120 in steps of 20, wrapping to 160
/// instead of going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandCursor {
    index: u16,
}

impl Default for BrandCursor {
    fn default() -> Self {
        Self { index: BRAND_START }
    }
}

impl BrandCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(self) -> u16 {
        self.index
    }

    pub fn advance(self) -> Self {
        let index = if self.index < BRAND_STEP {
            BRAND_WRAP
        } else {
            self.index - BRAND_STEP
        };
        Self { index }
    }

    /// One step back up the ramp: the shade the legend uses. After a wrap
    /// this is the shade the wrap started from.
    pub fn legend_index(self) -> u16 {
        if self.index == BRAND_WRAP {
            BRAND_FLOOR
        } else {
            self.index + BRAND_STEP
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContrastCursor {
    index: usize,
}

impl ContrastCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advance(self) -> Self {
        Self {
            index: self.index + 1,
        }
    }
}

struct Accumulator {
    response: ViewGroup,
    memory: ViewGroup,
    response_total: u64,
    memory_total: u64,
    brand: BrandCursor,
    contrast: ContrastCursor,
    last_contrast: Option<Color>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            response: ViewGroup::new(),
            memory: ViewGroup::new(),
            response_total: 0,
            memory_total: 0,
            brand: BrandCursor::new(),
            contrast: ContrastCursor::new(),
            last_contrast: None,
        }
    }

    fn push(mut self, key: &str, count: Option<u64>, config: &GraphConfig) -> Self {
        let usage_count = count.unwrap_or(0);
        let legend_label = config.label_for(key).to_string();

        match Category::of_key(key) {
            Category::MemoryExtraction => {
                let color = config.contrast.color_at(self.contrast.index());
                self.contrast = self.contrast.advance();
                self.last_contrast = Some(color);
                self.memory_total = self.memory_total.saturating_add(usage_count);
                self.memory.insert(
                    key,
                    ViewEntry {
                        usage_count,
                        legend_label,
                        color,
                    },
                );
            }
            Category::ResponseGeneration => {
                let color = config.brand_ramp.color_at(self.brand.index());
                self.brand = self.brand.advance();
                self.response_total = self.response_total.saturating_add(usage_count);
                self.response.insert(
                    key,
                    ViewEntry {
                        usage_count,
                        legend_label,
                        color,
                    },
                );
            }
        }
        self
    }

    fn finish(self, config: &GraphConfig) -> Breakdown {
        Breakdown {
            response: self.response,
            memory: self.memory,
            response_total: self.response_total,
            memory_total: self.memory_total,
            response_legend_color: Some(config.brand_ramp.color_at(self.brand.legend_index())),
            memory_legend_color: self.last_contrast,
        }
    }
}

/// Splits a usage record into response generation and memory extraction
/// entries, coloring each one and summing both categories.
///
/// Colors depend on the order entries are visited, so the record's
/// iteration order is preserved in both groups. Totals saturate at
/// `u64::MAX`; records parsed with `UsageRecord::from_json` never get there.
pub fn classify(record: &UsageRecord, config: &GraphConfig) -> Breakdown {
    record
        .iter()
        .fold(Accumulator::new(), |acc, (key, count)| {
            acc.push(key, count, config)
        })
        .finish(config)
}

