use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;

/// Reads `path`, or stdin when `path` is `None` or `-`. An interactive
/// stdin yields an empty string rather than blocking.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            // Check if stdin is a terminal - if it is, don't try to read from it
            if atty::is(atty::Stream::Stdin) {
                tracing::debug!("stdin is a terminal, using an empty usage record");
                return Ok(String::new());
            }

            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            String::from_utf8(buffer).context("stdin is not valid UTF-8")
        }
    }
}

pub fn modified_time(path: &Path) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to stat {}", path.display()))
}
