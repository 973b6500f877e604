use crate::ports::outbound::Console;
use crate::shared::Result;
use anyhow::Context;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// TerminalConsole adapter for line-based interaction
///
/// Generic over its reader and writer so sessions can be replayed from
/// in-memory buffers; `TerminalConsole::stdio()` is the real terminal.
pub struct TerminalConsole<In, Out> {
    input: RefCell<In>,
    output: RefCell<Out>,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<In: BufRead, Out: Write> TerminalConsole<In, Out> {
    pub fn new(input: In, output: Out) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> Out {
        self.output.into_inner()
    }
}

impl<In: BufRead, Out: Write> Console for TerminalConsole<In, Out> {
    fn print_line(&self, line: &str) {
        let mut out = self.output.borrow_mut();
        let _ = writeln!(out, "{}", line);
    }

    fn prompt(&self, message: &str) -> Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{}", message).context("Failed to write prompt")?;
            out.flush().context("Failed to flush prompt")?;
        }

        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .context("Failed to read from standard input")?;

        if read == 0 {
            let _ = writeln!(self.output.borrow_mut());
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
