use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

enum Sink {
    Stdout,
    File(File),
    Buffer(String),
}

/// Line-oriented output sink: stdout, a file, or an in-memory buffer.
pub struct Writer {
    sink: Sink,
}

impl Writer {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let sink = match path {
            Some(p) => Sink::File(
                File::create(&p)
                    .with_context(|| format!("Failed to create output file {}", p.display()))?,
            ),
            None => Sink::Stdout,
        };
        Ok(Self { sink })
    }

    pub fn buffer() -> Self {
        Self {
            sink: Sink::Buffer(String::new()),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self.sink, Sink::Stdout)
    }

    pub fn write(&mut self, content: &str) -> Result<()> {
        match &mut self.sink {
            Sink::File(f) => {
                writeln!(f, "{}", content)?;
                Ok(())
            }
            Sink::Stdout => {
                println!("{}", content);
                Ok(())
            }
            Sink::Buffer(buf) => {
                buf.push_str(content);
                buf.push('\n');
                Ok(())
            }
        }
    }

    /// Discards earlier output so the next write starts a fresh document.
    /// Stdout cannot be rewound and is left alone.
    pub fn reset(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::File(f) => {
                f.set_len(0).context("Failed to truncate output file")?;
                f.seek(SeekFrom::Start(0))?;
                Ok(())
            }
            Sink::Buffer(buf) => {
                buf.clear();
                Ok(())
            }
            Sink::Stdout => Ok(()),
        }
    }

    /// Everything written so far, for buffer sinks.
    pub fn contents(&self) -> Option<&str> {
        match &self.sink {
            Sink::Buffer(buf) => Some(buf),
            _ => None,
        }
    }
}
