//! Line-oriented text I/O between the turn loop and the players.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::{instrument, trace};

/// Where the turn loop reads moves from and writes text to.
pub trait Console {
    /// Writes `text` exactly as given and flushes it.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line without its terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted. An empty line is
    /// `Ok(Some(""))`, not an error.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<BufReader<Stdin>, Stdout> {
    /// Creates a console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    #[instrument(skip(self))]
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("input exhausted");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        trace!(%line, "line read");
        Ok(Some(line))
    }
}
