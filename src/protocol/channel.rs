//! Blocking line channel to the arbiter

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use tracing::trace;

use super::Response;
use crate::error::{EngineError, EngineResult};

/// Reads arbiter lines and writes our replies, one line at a time.
pub struct ProtocolChannel<R, W> {
    reader: R,
    writer: W,
    buf: Vec<u8>,
    lines_read: usize,
}

impl ProtocolChannel<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ProtocolChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: Vec::new(),
            lines_read: 0,
        }
    }

    /// Block until a full line arrives. `None` once the arbiter closes the stream.
    ///
    /// A line that is not UTF-8 is a protocol error carrying the lossy text.
    pub fn read_line(&mut self) -> EngineResult<Option<&str>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        self.lines_read += 1;
        let text = match std::str::from_utf8(&self.buf) {
            Ok(text) => text,
            Err(_) => {
                let lossy = String::from_utf8_lossy(&self.buf);
                return Err(EngineError::protocol(
                    lossy.trim_end_matches(['\n', '\r']),
                    "line is not valid UTF-8",
                ));
            }
        };

        let line = text.trim_end_matches(['\n', '\r']);
        trace!(line, n = self.lines_read, "received");
        Ok(Some(line))
    }

    /// Write one line and flush it so the arbiter sees it before we block again.
    pub fn send(&mut self, response: &Response) -> EngineResult<()> {
        writeln!(self.writer, "{}", response)?;
        self.writer.flush()?;
        trace!(%response, "sent");
        Ok(())
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
