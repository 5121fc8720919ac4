use anyhow::Result;

use crate::classify::classify;
use crate::config::GraphConfig;
use crate::formatters::{render, DisplayMode, RenderOptions, Writer};
use crate::models::{Breakdown, OutputFormat, UsageRecord};

/// Holds the current inputs and their breakdown, recomputing only when
/// `update` is handed something new.
pub struct TokenUsageGraph {
    config: GraphConfig,
    record: UsageRecord,
    loading: bool,
    prompt_view: bool,
    breakdown: Breakdown,
}

impl TokenUsageGraph {
    pub fn new(config: GraphConfig) -> Self {
        let record = UsageRecord::new();
        let breakdown = classify(&record, &config);
        Self {
            config,
            record,
            loading: false,
            prompt_view: false,
            breakdown,
        }
    }

    /// Replaces the inputs. Returns whether anything changed.
    pub fn update(&mut self, record: UsageRecord, loading: bool, prompt_view: bool) -> bool {
        if record == self.record && loading == self.loading && prompt_view == self.prompt_view {
            return false;
        }

        self.breakdown = classify(&record, &self.config);
        self.record = record;
        self.loading = loading;
        self.prompt_view = prompt_view;
        tracing::debug!(
            entries = self.record.len(),
            loading,
            prompt_view,
            "token usage inputs changed"
        );
        true
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::select(self.loading, &self.breakdown, self.prompt_view)
    }

    pub fn render(
        &self,
        writer: &mut Writer,
        options: &RenderOptions,
        format: OutputFormat,
    ) -> Result<()> {
        let options = RenderOptions {
            prompt_view: self.prompt_view,
            ..options.clone()
        };
        render(writer, &self.breakdown, self.loading, &options, format)
    }
}
