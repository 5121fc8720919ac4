use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored bars and legend
    Default,
    /// Machine-readable view model
    Json,
}
