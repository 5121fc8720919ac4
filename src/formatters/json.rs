use anyhow::Result;
use serde::Serialize;

use super::{DisplayMode, Writer};
use crate::models::{Breakdown, Category, Color};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BarView<'a> {
    key: &'a str,
    label: &'a str,
    category: Category,
    usage_count: u64,
    proportion: f64,
    color: Color,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegendView {
    name: String,
    usage_count: u64,
    color: Option<Color>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphView<'a> {
    mode: DisplayMode,
    prompt_view: bool,
    response_total: u64,
    memory_total: u64,
    grand_total: u64,
    bars: Vec<BarView<'a>>,
    legend: Vec<LegendView>,
}

pub fn render_json(
    writer: &mut Writer,
    breakdown: &Breakdown,
    loading: bool,
    prompt_view: bool,
) -> Result<()> {
    let mode = DisplayMode::select(loading, breakdown, prompt_view);

    let (bars, legend) = if mode == DisplayMode::Chart {
        let bars = breakdown
            .bars()
            .map(|(category, key, entry)| BarView {
                key,
                label: &entry.legend_label,
                category,
                usage_count: entry.usage_count,
                proportion: breakdown.proportion(entry),
                color: entry.color,
            })
            .collect();
        let legend = [Category::ResponseGeneration, Category::MemoryExtraction]
            .into_iter()
            .map(|category| LegendView {
                name: category.to_string(),
                usage_count: breakdown.total(category),
                color: breakdown.legend_color(category),
            })
            .collect();
        (bars, legend)
    } else {
        (Vec::new(), Vec::new())
    };

    let view = GraphView {
        mode,
        prompt_view,
        response_total: breakdown.response_total,
        memory_total: breakdown.memory_total,
        grand_total: breakdown.grand_total(),
        bars,
        legend,
    };

    writer.write(&serde_json::to_string_pretty(&view)?)
}
