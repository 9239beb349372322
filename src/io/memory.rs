use std::collections::VecDeque;
use std::io;

use super::{InputSource, OutputSink};

/// Input served from a fixed list of lines; closes when the list runs out.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Number of reads attempted so far, including the one that hit the end.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        Ok(self.lines.pop_front())
    }
}

/// Output captured in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Vec<String>,
    prompts: Vec<String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written, in order. Prompts are not included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Prompts written, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl OutputSink for MemoryOutput {
    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    async fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.prompts.push(prompt.to_string());
        Ok(())
    }
}
