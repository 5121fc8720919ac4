use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod classify;
pub mod cli;
pub mod config;
pub mod formatters;
pub mod graph;
pub mod models;
pub mod utils;

use crate::config::GraphConfig;
use crate::formatters::{DisplayMode, RenderOptions, Writer};
use crate::graph::TokenUsageGraph;
use crate::models::{OutputFormat, SessionStore, UsageRecord};
use crate::utils::{modified_time, read_input, resolve_config_path};

/// What one render pass needs from the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub record: UsageRecord,
    pub loading: bool,
}

pub fn load_inputs(cli: &cli::Cli) -> Result<Inputs> {
    if let Some(path) = &cli.session_file {
        let json = read_input(Some(path.as_path()))?;
        let mut store = SessionStore::from_json(&json)
            .with_context(|| format!("Invalid session file {}", path.display()))?;
        if let Some(id) = &cli.session_id {
            store.select(id.clone());
        }

        let conversation = store.active()?;
        tracing::debug!(
            session = %store.selected_id,
            status = ?conversation.bot_response_status,
            "loaded conversation"
        );
        return Ok(Inputs {
            record: conversation.token_usage.clone(),
            loading: cli.loading || conversation.is_loading(),
        });
    }

    let json = read_input(cli.usage_file.as_deref())?;
    Ok(Inputs {
        record: UsageRecord::from_json(&json)?,
        loading: cli.loading,
    })
}

/// Color only goes to an interactive stdout, and never when NO_COLOR is set.
pub fn use_color(cli: &cli::Cli, writer: &Writer) -> bool {
    !cli.no_color
        && writer.is_stdout()
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

pub fn run(cli: &cli::Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.clone());
    let config = GraphConfig::load(config_path.as_deref())?;

    let mut writer = Writer::new(cli.output_file.clone())?;
    let options = cli.render_options(use_color(cli, &writer));

    let inputs = load_inputs(cli)?;
    let mut graph = TokenUsageGraph::new(config);
    graph.update(inputs.record, inputs.loading, cli.prompt_view);

    if cli.watch {
        watch(cli, &mut graph, &mut writer, &options)
    } else {
        graph.render(&mut writer, &options, cli.format)
    }
}

fn pending_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(DisplayMode::Pending.message().unwrap_or_default());
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}

fn present(
    graph: &TokenUsageGraph,
    writer: &mut Writer,
    options: &RenderOptions,
    format: OutputFormat,
    spinner: &mut Option<ProgressBar>,
    animate: bool,
) -> Result<()> {
    if animate && graph.is_loading() {
        if spinner.is_none() {
            *spinner = Some(pending_spinner()?);
        }
        return Ok(());
    }

    if let Some(s) = spinner.take() {
        s.finish_and_clear();
    }
    // An output file always holds just the latest render
    writer.reset()?;
    graph.render(writer, options, format)
}

/// Polls the input file and re-renders whenever its contents change what
/// the graph shows. Runs until interrupted.
pub fn watch(
    cli: &cli::Cli,
    graph: &mut TokenUsageGraph,
    writer: &mut Writer,
    options: &RenderOptions,
) -> Result<()> {
    let path = cli
        .input_path()
        .cloned()
        .ok_or_else(|| anyhow!("--watch needs a usage file or --session-file"))?;
    let interval = Duration::from_millis(cli.interval_ms);
    let animate = cli.format == OutputFormat::Default
        && writer.is_stdout()
        && atty::is(atty::Stream::Stdout);

    let mut spinner = None;
    let mut last_modified = modified_time(&path)?;
    present(graph, writer, options, cli.format, &mut spinner, animate)?;

    tracing::info!(path = %path.display(), interval_ms = cli.interval_ms, "watching for token usage changes");
    loop {
        std::thread::sleep(interval);

        let modified = match modified_time(&path) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("{:#}", e);
                continue;
            }
        };
        if modified == last_modified {
            continue;
        }
        last_modified = modified;

        // A half-written file fails to parse; the next write will fix it
        let inputs = match load_inputs(cli) {
            Ok(inputs) => inputs,
            Err(e) => {
                tracing::warn!("skipping update: {:#}", e);
                continue;
            }
        };

        if graph.update(inputs.record, inputs.loading, cli.prompt_view) {
            tracing::info!(mode = ?graph.mode(), "token usage changed");
            present(graph, writer, options, cli.format, &mut spinner, animate)?;
        }
    }
}
