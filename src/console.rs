use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

/// Line and token reader over a console-like pair of streams.
///
/// Tokens are whitespace delimited and may span several lines, the way
/// `scanf("%d")` skips newlines between numbers.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write `msg` without a newline and flush so it shows before the read.
    pub fn prompt(&mut self, msg: &str) -> Result<()> {
        self.output
            .write_all(msg.as_bytes())
            .and_then(|_| self.output.flush())
            .context("failed to write prompt")
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.output
            .write_all(bytes)
            .context("failed to write output")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush().context("failed to flush output")
    }

    /// Read one line as raw bytes with the `\n` (or `\r\n`) removed.
    ///
    /// End of stream acts as a terminator: whatever was read is returned,
    /// possibly empty.
    pub fn read_line_bytes(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read line")?;
        log::trace!("read {read} bytes");

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| anyhow!("invalid input '{token}'"))
    }

    /// Like [`Console::next`], but a token that does not parse is consumed
    /// and reported as `None` instead of an error.
    pub fn try_next<T: FromStr>(&mut self) -> Result<Option<T>> {
        let token = self.next_token()?;
        match token.parse() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                log::debug!("discarding unparsable token '{token}'");
                Ok(None)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
