//! Line-oriented output for reports.
//!
//! Report functions never print directly: they emit lines into a
//! [`ReportSink`]. The binary uses [`ConsoleSink`]; tests use
//! [`BufferSink`] and inspect the captured lines.

pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Writes every line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole captured output, one line per emitted entry.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl ReportSink for BufferSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
