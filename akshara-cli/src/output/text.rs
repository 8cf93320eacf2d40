//! Plain text output formatter

use super::{Envelope, OutputFormatter, SegmentedLine};
use anyhow::Result;
use serde_json::Value;
use std::io::{self, Write};

/// Plain text formatter - bare results, one segmented line per line
pub struct TextFormatter<W: Write> {
    writer: W,
    delimiter: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, delimiter: impl Into<String>) -> Self {
        Self {
            writer,
            delimiter: delimiter.into(),
        }
    }

    fn render(&self, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(items) if items.iter().any(Value::is_array) => items
                .iter()
                .map(|item| self.render(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Value::Array(items) => items
                .iter()
                .map(|item| self.render(item))
                .collect::<Vec<_>>()
                .join(&self.delimiter),
            Value::Object(_) => serde_json::to_string_pretty(value).unwrap_or_default(),
            other => other.to_string(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(delimiter: impl Into<String>) -> Self {
        Self::new(io::stdout(), delimiter)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_envelope(&mut self, envelope: &Envelope) -> Result<()> {
        if envelope.is_success() {
            let rendered = self.render(&envelope.data);
            writeln!(self.writer, "{rendered}")?;
        } else {
            eprintln!("{}: {}", envelope.response_code, envelope.message);
        }
        Ok(())
    }

    fn format_line(&mut self, line: &SegmentedLine) -> Result<()> {
        writeln!(self.writer, "{}", line.logical_chars.join(&self.delimiter))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
