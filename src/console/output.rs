//! Console output in text or JSON-lines form.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{PlaylistError, Result};
use crate::playlist::PlayEntry;

/// A single JSON output line.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Event<'a> {
    Playing(&'a PlayEntry<'a>),
    Track {
        position: usize,
        #[serde(flatten)]
        entry: &'a PlayEntry<'a>,
    },
    Message {
        text: &'a str,
    },
    Prompt {
        text: &'a str,
    },
    Error {
        code: &'a str,
        description: &'a str,
        message: &'a str,
        noop: bool,
    },
}

/// Writes session output in the configured format.
pub struct Output<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Announces a song being played.
    pub fn playing(&mut self, entry: &PlayEntry<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", entry)?,
            OutputFormat::Json => self.event(&Event::Playing(entry))?,
        }
        Ok(())
    }

    /// Lists a song with its 1-based position.
    pub fn track(&mut self, position: usize, entry: &PlayEntry<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{:>3}. '{}' by '{}' ({})",
                position,
                entry.title,
                entry.artist,
                entry.genre.name()
            )?,
            OutputFormat::Json => self.event(&Event::Track { position, entry })?,
        }
        Ok(())
    }

    /// Writes an informational message.
    pub fn message(&mut self, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", text)?,
            OutputFormat::Json => self.event(&Event::Message { text })?,
        }
        Ok(())
    }

    /// Asks a question; the answer is read by the caller.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => write!(self.writer, "{}", text)?,
            OutputFormat::Json => self.event(&Event::Prompt { text: text.trim_end() })?,
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Reports a recoverable playlist condition.
    pub fn error(&mut self, err: &PlaylistError) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{}. {}.",
                err.message,
                err.code.recovery_hint()
            )?,
            OutputFormat::Json => self.event(&Event::Error {
                code: err.code.as_str(),
                description: err.code.description(),
                message: &err.message,
                noop: err.code.is_noop(),
            })?,
        }
        Ok(())
    }

    fn event(&mut self, event: &Event<'_>) -> Result<()> {
        let json = serde_json::to_string(event).map_err(std::io::Error::from)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
