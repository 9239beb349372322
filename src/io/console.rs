#![allow(async_fn_in_trait)]

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// A source of input lines.
pub trait InputSource {
    /// Read the next line without its terminator.
    /// Returns `Ok(None)` once the stream is closed.
    async fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A sink for program output.
pub trait OutputSink {
    /// Write a full line.
    async fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write a prompt that stays on the current line.
    async fn prompt(&mut self, prompt: &str) -> io::Result<()>;
}

/// Lines read from the process's standard input.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinSource {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// Output written to the process's standard output, flushed after every write.
pub struct StdoutSink {
    stdout: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.stdout.write_all(line.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await
    }

    async fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.stdout.write_all(prompt.as_bytes()).await?;
        self.stdout.flush().await
    }
}
