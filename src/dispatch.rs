//! # Dispatch
//!
//! Runs one line through the pipeline (frame and checksum, classification,
//! field decoding) and hands the record to the handler registered for its
//! kind. Everything else goes to the unhandled handler:
//!
//! - lines that are not sentences, or whose checksum fails,
//! - sentences of an unknown kind,
//! - sentences whose fields do not decode,
//! - framing errors passed in with [`Dispatcher::dispatch_error`],
//! - decoded sentences of a kind with no handler.

use std::{borrow::Cow, collections::HashMap};

use nom::Parser;

use crate::{
    ChecksumError, ClassifyError, Config, Error, Fields, FramingError, ParsedSentence, RawLine,
    Record, SentenceError, SentenceKind, decode, parse::FieldError, sentence,
};

type Handler<'h> = Box<dyn FnMut(&ParsedSentence) + 'h>;
type UnhandledHandler<'h> = Box<dyn FnMut(&Unhandled<'_>) + 'h>;

/// What became of one line.
#[derive(Debug)]
pub enum Outcome {
    /// Decoded and passed to the handler for its kind.
    Dispatched(SentenceKind),
    /// Decoded, but no handler is registered for its kind.
    Unhandled(SentenceKind),
    /// Stopped at the first failing stage.
    Rejected {
        kind: SentenceKind,
        error: SentenceError,
    },
}

impl Outcome {
    pub fn kind(&self) -> SentenceKind {
        match self {
            Outcome::Dispatched(kind) | Outcome::Unhandled(kind) => *kind,
            Outcome::Rejected { kind, .. } => *kind,
        }
    }
}

/// A line that reached no record handler.
#[derive(Debug)]
pub struct Unhandled<'a> {
    pub kind: SentenceKind,
    /// The line without its terminator; empty for framing errors.
    pub line: &'a [u8],
    /// Why the line was rejected, `None` when it decoded but had no handler.
    pub error: Option<&'a SentenceError>,
}

impl<'a> Unhandled<'a> {
    /// The line as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.line)
    }
}

/// Routes decoded sentences to handlers registered per record type.
///
/// ```rust
/// use nmea0183_reader::{Config, Dispatcher, GGA, Outcome, SentenceKind};
///
/// let mut satellites = None;
/// let mut dispatcher = Dispatcher::new(Config::default())
///     .on::<GGA>(|gga| satellites = gga.satellite_count);
///
/// let outcome =
///     dispatcher.dispatch("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
/// assert!(matches!(outcome, Outcome::Dispatched(SentenceKind::GGA)));
///
/// drop(dispatcher);
/// assert_eq!(satellites, Some(8));
/// ```
pub struct Dispatcher<'h> {
    config: Config,
    handlers: HashMap<SentenceKind, Handler<'h>>,
    unhandled: UnhandledHandler<'h>,
}

impl<'h> Dispatcher<'h> {
    /// A dispatcher with no record handlers. Unhandled lines are logged at
    /// `debug` level until [`Dispatcher::on_unhandled`] replaces that.
    pub fn new(config: Config) -> Self {
        Dispatcher {
            config,
            handlers: HashMap::new(),
            unhandled: Box::new(log_unhandled),
        }
    }

    /// Registers the handler for records of type `R`, replacing any earlier one.
    pub fn on<R>(mut self, mut handler: impl FnMut(&R) + 'h) -> Self
    where
        R: Record + 'static,
    {
        self.handlers.insert(
            R::KIND,
            Box::new(move |sentence: &ParsedSentence| {
                if let Some(record) = R::extract(sentence) {
                    handler(record);
                }
            }),
        );
        self
    }

    /// Replaces the unhandled handler.
    pub fn on_unhandled(mut self, handler: impl FnMut(&Unhandled<'_>) + 'h) -> Self {
        self.unhandled = Box::new(handler);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `true` when a handler is registered for `kind`.
    pub fn handles(&self, kind: SentenceKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Dispatches one line. A trailing `\r\n` is ignored.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let line = line.trim_end_matches(['\r', '\n']);

        let frame = match sentence(self.config.checksum_mode).parse(line) {
            Ok((_, frame)) => frame,
            Err(e) => return self.reject(line.as_bytes(), SentenceKind::Invalid, frame_error(e)),
        };

        let kind = frame.kind();
        if kind == SentenceKind::Unknown {
            return self.reject(line.as_bytes(), kind, ClassifyError::Unknown.into());
        }

        let fields = match frame.fields {
            Some(body) => Fields::split(kind, body),
            None => Ok(Fields::empty(kind)),
        };

        let decoded = fields
            .map(|fields| fields.with_century(self.config.century))
            .and_then(|fields| decode(&fields));

        let parsed = match decoded {
            Ok(parsed) => parsed,
            Err(e) => return self.reject(line.as_bytes(), kind, e.into()),
        };

        match self.handlers.get_mut(&kind) {
            Some(handler) => {
                handler(&parsed);
                Outcome::Dispatched(kind)
            }
            None => {
                (self.unhandled)(&Unhandled {
                    kind,
                    line: line.as_bytes(),
                    error: None,
                });
                Outcome::Unhandled(kind)
            }
        }
    }

    /// Dispatches a line from the framer. Bytes that are not UTF-8 make the
    /// line [`SentenceKind::Invalid`].
    pub fn dispatch_line<const N: usize>(&mut self, line: &RawLine<N>) -> Outcome {
        match line.as_str() {
            Ok(text) => self.dispatch(text),
            Err(_) => self.reject(
                line.as_bytes(),
                SentenceKind::Invalid,
                ClassifyError::Invalid.into(),
            ),
        }
    }

    /// Reports a framing error to the unhandled handler.
    pub fn dispatch_error(&mut self, error: FramingError) -> Outcome {
        self.reject(&[], SentenceKind::Invalid, error.into())
    }

    fn reject(&mut self, line: &[u8], kind: SentenceKind, error: SentenceError) -> Outcome {
        (self.unhandled)(&Unhandled {
            kind,
            line,
            error: Some(&error),
        });

        Outcome::Rejected { kind, error }
    }
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Maps a failed frame parse to the stage that failed.
fn frame_error(e: nom::Err<FieldError<'_>>) -> SentenceError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => match e {
            Error::ChecksumMismatch { expected, found } => {
                ChecksumError::Mismatch { expected, found }.into()
            }
            Error::MissingChecksum => ChecksumError::Missing.into(),
            _ => ClassifyError::Invalid.into(),
        },
        nom::Err::Incomplete(_) => ClassifyError::Invalid.into(),
    }
}

fn log_unhandled(unhandled: &Unhandled<'_>) {
    match unhandled.error {
        Some(error) => tracing::debug!(target: "nmea",
            "{} sentence is not valid: {}: {:?}",
            unhandled.kind,
            error,
            unhandled.text()
        ),
        None => tracing::debug!(target: "nmea",
            "no handler for {} sentence: {:?}",
            unhandled.kind,
            unhandled.text()
        ),
    }
}
