//! # Reader Loop
//!
//! [`NmeaReader`] owns the byte source and the [`LineFramer`] and feeds each
//! line to a [`Dispatcher`]. One reader per source; lines are dispatched in
//! the order their terminators arrive.

use std::{
    io::{ErrorKind, Read},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{Dispatcher, FramingError, LineFramer, MAX_LINE_PAYLOAD, Outcome};

/// Reads lines from a byte source and dispatches them.
///
/// ```rust
/// use std::sync::atomic::AtomicBool;
///
/// use nmea0183_reader::{Config, Dispatcher, NmeaReader, ZDA};
///
/// let input: &[u8] = b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n";
/// let mut years = Vec::new();
///
/// let mut dispatcher = Dispatcher::new(Config::default())
///     .on::<ZDA>(|zda| years.extend(zda.date.map(|date| date.full_year())));
/// NmeaReader::new(input)
///     .run(&mut dispatcher, &AtomicBool::new(false))
///     .unwrap();
///
/// drop(dispatcher);
/// assert_eq!(years, [2002]);
/// ```
#[derive(Debug)]
pub struct NmeaReader<R, const N: usize = MAX_LINE_PAYLOAD> {
    source: R,
    framer: LineFramer<N>,
}

impl<R: Read> NmeaReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_framer(source, LineFramer::new())
    }
}

impl<R: Read, const N: usize> NmeaReader<R, N> {
    /// A reader using `framer`, for a line capacity other than the default.
    pub fn with_framer(source: R, framer: LineFramer<N>) -> Self {
        NmeaReader { source, framer }
    }

    pub fn framer(&self) -> &LineFramer<N> {
        &self.framer
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads and dispatches one line.
    ///
    /// An overlong line is logged and reported to the dispatcher's unhandled
    /// handler; the framer has already skipped to the next line. Other framing
    /// errors are returned to the caller.
    pub fn step(&mut self, dispatcher: &mut Dispatcher<'_>) -> Result<Outcome, FramingError> {
        match self.framer.read_line(&mut self.source) {
            Ok(line) => {
                tracing::trace!(target: "nmea", "{}", String::from_utf8_lossy(&line));
                Ok(dispatcher.dispatch_line(&line))
            }
            Err(e @ FramingError::LineTooLong { .. }) => {
                tracing::warn!(target: "nmea", "Discarding line: {}", e);
                Ok(dispatcher.dispatch_error(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Dispatches lines until the source ends or `stop` is set.
    ///
    /// `stop` is checked between lines. `WouldBlock` and `TimedOut` from the
    /// source only give the loop a chance to check it. When stopped in the
    /// middle of a line, the framer resynchronizes so that a later call
    /// starts at the next line.
    ///
    /// Returns `Ok(())` at end of stream or when stopped, and the error of a
    /// failing source.
    pub fn run(
        &mut self,
        dispatcher: &mut Dispatcher<'_>,
        stop: &AtomicBool,
    ) -> Result<(), FramingError> {
        while !stop.load(Ordering::Relaxed) {
            match self.step(dispatcher) {
                Ok(_) => {}
                Err(FramingError::EndOfStream) => {
                    tracing::debug!(target: "nmea", "End of stream");
                    return Ok(());
                }
                Err(FramingError::Io(e))
                    if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
                Err(e) => {
                    tracing::warn!(target: "nmea", "Byte source failed: {}", e);
                    return Err(e);
                }
            }
        }

        if self.framer.is_mid_line() {
            tracing::debug!(target: "nmea", "Stopped mid-line, resynchronizing");
            self.framer.resynchronize();
        }

        Ok(())
    }
}
