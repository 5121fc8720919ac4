use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use thousands::Separable;

use super::bars::{fill_glyph, render_bar};
use super::{DisplayMode, Writer};
use crate::config::{TOKEN_USAGE_INFO, TOKEN_USAGE_INFO_LINK};
use crate::models::{Breakdown, Category, Color};

pub const DEFAULT_WIDTH: usize = 48;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub prompt_view: bool,
    /// Bar width in terminal cells.
    pub width: usize,
    pub color: bool,
    pub verbose: bool,
    pub explain: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prompt_view: false,
            width: DEFAULT_WIDTH,
            color: false,
            verbose: false,
            explain: false,
        }
    }
}

fn swatch(color: Option<Color>, enabled: bool) -> String {
    match color {
        Some(c) if enabled => "■".truecolor(c.r, c.g, c.b).to_string(),
        Some(_) => "■".to_string(),
        None => "□".to_string(),
    }
}

fn write_header(writer: &mut Writer, options: &RenderOptions) -> Result<()> {
    let title = if options.color {
        "Token Usage".bold().to_string()
    } else {
        "Token Usage".to_string()
    };
    writer.write(&format!("{} (i)", title))?;

    if options.explain {
        writer.write(&format!("  {}", TOKEN_USAGE_INFO))?;
        writer.write(&format!("  For more details about token usage, see: {}", TOKEN_USAGE_INFO_LINK))?;
    }
    Ok(())
}

fn write_legend(writer: &mut Writer, breakdown: &Breakdown, options: &RenderOptions) -> Result<()> {
    let items: Vec<String> = [Category::ResponseGeneration, Category::MemoryExtraction]
        .iter()
        .map(|&category| {
            format!(
                "{} {}: {}",
                swatch(breakdown.legend_color(category), options.color),
                category,
                breakdown.total(category).separate_with_commas()
            )
        })
        .collect();
    writer.write(&items.join("   "))
}

fn write_details(writer: &mut Writer, breakdown: &Breakdown, options: &RenderOptions) -> Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if options.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(vec!["", "Category", "Function", "Tokens", "Share"]);

    for (position, (category, _, entry)) in breakdown.bars().enumerate() {
        let marker = if options.color {
            let c = entry.color;
            Cell::new("■").fg(comfy_table::Color::Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            })
        } else {
            Cell::new(fill_glyph(position))
        };
        table.add_row(vec![
            marker,
            Cell::new(category),
            Cell::new(&entry.legend_label),
            Cell::new(entry.usage_count.separate_with_commas()),
            Cell::new(format!("{:.1}%", breakdown.proportion(entry) * 100.0)),
        ]);
    }

    table.add_row(vec![
        Cell::new(""),
        Cell::new("TOTAL"),
        Cell::new(""),
        Cell::new(breakdown.grand_total().separate_with_commas()),
        Cell::new("100.0%"),
    ]);

    writer.write(&table.to_string())
}

/// Renders the graph for a terminal: header, then the pending indicator, an
/// empty-state message, or the bars with their legend.
pub fn render_text(
    writer: &mut Writer,
    breakdown: &Breakdown,
    loading: bool,
    options: &RenderOptions,
) -> Result<()> {
    write_header(writer, options)?;

    let mode = DisplayMode::select(loading, breakdown, options.prompt_view);
    tracing::debug!(?mode, grand_total = breakdown.grand_total(), "rendering token usage");

    match mode {
        DisplayMode::Pending => {
            writer.write(&format!("{} ...", mode.message().unwrap_or_default()))?;
        }
        DisplayMode::HardcodedResponse | DisplayMode::NoUsageYet => {
            writer.write(mode.message().unwrap_or_default())?;
        }
        DisplayMode::Chart => {
            if !options.prompt_view {
                writer.write("Total token usage for current session")?;
            }
            writer.write(&render_bar(breakdown, options.width, options.color))?;
            write_legend(writer, breakdown, options)?;
            if options.verbose {
                write_details(writer, breakdown, options)?;
            }
        }
    }

    Ok(())
}
