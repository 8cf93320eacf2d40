//! JSON output formatter

use super::{Envelope, OutputFormatter, SegmentedLine};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - envelopes as objects, segmented lines as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<SegmentedLine>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_envelope(&mut self, envelope: &Envelope) -> Result<()> {
        self.write_value(envelope)
    }

    fn format_line(&mut self, line: &SegmentedLine) -> Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.lines.is_empty() {
            let lines = std::mem::take(&mut self.lines);
            self.write_value(&lines)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
