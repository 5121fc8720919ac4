mod bars;
mod json;
mod mode;
mod text;
mod writer;

pub use bars::{allocate_cells, render_bar};
pub use json::render_json;
pub use mode::DisplayMode;
pub use text::{render_text, RenderOptions};
pub use writer::Writer;

use anyhow::Result;

use crate::models::{Breakdown, OutputFormat};

pub fn render(
    writer: &mut Writer,
    breakdown: &Breakdown,
    loading: bool,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Default => render_text(writer, breakdown, loading, options),
        OutputFormat::Json => render_json(writer, breakdown, loading, options.prompt_view),
    }
}
