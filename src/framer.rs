//! # Line Framing
//!
//! Cuts the byte stream of a receiver into lines.
//!
//! Lines end at `\n`; a `\r` right before it is dropped as well. The framer
//! keeps at most `N` bytes of one line. A longer line is reported once as
//! [`FramingError::LineTooLong`] and the rest of it, up to the next `\n`, is
//! discarded, so the following line starts at a sentence boundary again.

use std::{io::Read, mem, ops::Deref, str::Utf8Error};

use crate::{FramingError, MAX_LINE_PAYLOAD};

/// The bytes of one line, without its terminator.
///
/// An owned copy: it does not borrow from the framer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<const N: usize = MAX_LINE_PAYLOAD>(heapless::Vec<u8, N>);

impl<const N: usize> RawLine<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The line as text. NMEA is ASCII, so this only fails on line noise.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> Deref for RawLine<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for RawLine<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Accumulates bytes into [`RawLine`]s of at most `N` bytes.
///
/// ```rust
/// use nmea0183_reader::{FramingError, LineFramer};
///
/// let mut source: &[u8] = b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n";
/// let mut framer = LineFramer::new();
///
/// let line = framer.read_line(&mut source).unwrap();
/// assert_eq!(line.as_str(), Ok("$GPZDA,201530.00,04,07,2002,00,00*60"));
/// assert!(matches!(framer.read_line(&mut source), Err(FramingError::EndOfStream)));
/// ```
#[derive(Debug)]
pub struct LineFramer<const N: usize = MAX_LINE_PAYLOAD> {
    buffer: heapless::Vec<u8, N>,
    /// A `\r` was read and not yet known to end the line.
    pending_cr: bool,
    /// Dropping bytes up to the next `\n`.
    discarding: bool,
}

impl LineFramer {
    /// A framer for lines of up to [`MAX_LINE_PAYLOAD`] bytes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const N: usize> Default for LineFramer<N> {
    fn default() -> Self {
        LineFramer {
            buffer: heapless::Vec::new(),
            pending_cr: false,
            discarding: false,
        }
    }
}

impl<const N: usize> LineFramer<N> {
    /// Longest line kept, terminator excluded.
    pub const CAPACITY: usize = N;

    /// Reads from `source` one byte at a time until a line is complete.
    ///
    /// Interrupted reads are retried. Any other I/O error, `WouldBlock` and
    /// `TimedOut` included, is returned and the bytes read so far are kept, so
    /// the next call continues the same line. A source returning `Ok(0)` ends
    /// the stream: the partial line is dropped and [`FramingError::EndOfStream`]
    /// returned.
    pub fn read_line<R: Read + ?Sized>(
        &mut self,
        source: &mut R,
    ) -> Result<RawLine<N>, FramingError> {
        let mut byte = [0u8; 1];

        loop {
            match source.read(&mut byte) {
                Ok(0) => {
                    self.resynchronize();
                    return Err(FramingError::EndOfStream);
                }
                Ok(_) => {
                    if let Some(result) = self.feed(byte[0]) {
                        return result;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(FramingError::Io(e)),
            }
        }
    }

    /// Adds one byte. Returns a completed line, or the overflow error for a
    /// line that outgrew the buffer.
    pub fn feed(&mut self, byte: u8) -> Option<Result<RawLine<N>, FramingError>> {
        if self.discarding {
            if byte == b'\n' {
                self.discarding = false;
            }
            return None;
        }

        if byte == b'\n' {
            self.pending_cr = false;
            return Some(Ok(RawLine(mem::take(&mut self.buffer))));
        }

        // A `\r` inside the line is data.
        if mem::take(&mut self.pending_cr)
            && let Err(e) = self.push(b'\r')
        {
            return Some(Err(e));
        }

        if byte == b'\r' {
            self.pending_cr = true;
            return None;
        }

        self.push(byte).err().map(Err)
    }

    fn push(&mut self, byte: u8) -> Result<(), FramingError> {
        self.buffer.push(byte).map_err(|_| self.overflow())
    }

    fn overflow(&mut self) -> FramingError {
        self.buffer.clear();
        self.pending_cr = false;
        self.discarding = true;

        FramingError::LineTooLong { capacity: N }
    }

    /// Drops a partial line and skips the rest of it.
    ///
    /// Does nothing between lines, so no complete line is lost.
    pub fn resynchronize(&mut self) {
        if self.is_mid_line() {
            self.buffer.clear();
            self.pending_cr = false;
            self.discarding = true;
        }
    }

    /// `true` when bytes of an unfinished line are held or being skipped.
    pub fn is_mid_line(&self) -> bool {
        !self.buffer.is_empty() || self.pending_cr || self.discarding
    }
}
