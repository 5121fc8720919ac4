use clap::Parser;
use std::path::PathBuf;

use crate::formatters::RenderOptions;
use crate::models::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tokengraph",
    about = "Show how a chat session's tokens split between response generation and memory extraction",
    version
)]
pub struct Cli {
    /// JSON usage record mapping function names to token counts ("-" reads stdin)
    #[arg(required = false, conflicts_with = "session_file")]
    pub usage_file: Option<PathBuf>,

    /// Conversation state file; usage and loading state come from the selected conversation
    #[arg(short = 's', long = "session-file")]
    pub session_file: Option<PathBuf>,

    /// Conversation to show instead of the file's selectedId
    #[arg(long = "session", requires = "session_file")]
    pub session_id: Option<String>,

    /// Show the pending state as if a bot response were being generated
    #[arg(long = "loading")]
    pub loading: bool,

    /// Prompt view: no session header, hardcoded-response wording when empty
    #[arg(long = "prompt-view")]
    pub prompt_view: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Default
    )]
    pub format: OutputFormat,

    /// Bar width in terminal cells
    #[arg(
        short = 'w',
        long = "width",
        default_value = "48",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: u16,

    /// Show per-function token counts
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Explain how token counts are computed
    #[arg(long = "explain")]
    pub explain: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Config file with label and palette overrides
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Output to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Re-render whenever the input file changes
    #[arg(long = "watch")]
    pub watch: bool,

    /// Polling interval for --watch, in milliseconds
    #[arg(long = "interval", default_value = "500")]
    pub interval_ms: u64,
}

impl Cli {
    /// The file watch mode polls, if any.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.session_file
            .as_ref()
            .or(self.usage_file.as_ref())
            .filter(|p| p.as_os_str() != "-")
    }

    pub fn render_options(&self, color: bool) -> RenderOptions {
        RenderOptions {
            prompt_view: self.prompt_view,
            width: self.width as usize,
            color,
            verbose: self.verbose,
            explain: self.explain,
        }
    }
}
