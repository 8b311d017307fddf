//! # Error Types
//!
//! This module defines the error types used throughout the pipeline.
//!
//! Two layers live here:
//! - [`Error`] and [`IResult`], the error plumbing of the `nom` combinators that
//!   parse the sentence frame and the individual fields.
//! - The stage taxonomy ([`FramingError`], [`ChecksumError`], [`ClassifyError`],
//!   [`DecodeError`]) that the framer, classifier, decoder and dispatcher hand to
//!   consumers. [`SentenceError`] groups them for the unhandled-sentence path.

use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::SentenceKind;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Errors produced by the `nom` layer while parsing a sentence frame or a field.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,

    /// The checksum of the sentence was corrupt or incorrect.
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// A checksum was required but the sentence carries no `*HH` field.
    MissingChecksum,

    /// A field was syntactically readable but its value cannot be represented,
    /// such as a number with more fractional digits than [`Fraction`](crate::Fraction)
    /// keeps.
    InvalidField(I),

    /// The input could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    ParsingError(E),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Failure to cut the byte stream into a line.
#[derive(Debug, thiserror::Error)]
pub enum FramingError {
    /// More than `capacity` payload bytes arrived without a line feed.
    ///
    /// The framer discards everything up to the next line feed before it
    /// starts accumulating again.
    #[error("line exceeds {capacity} bytes before a terminator")]
    LineTooLong { capacity: usize },

    /// The byte source reported end of stream.
    #[error("byte source reached end of stream")]
    EndOfStream,

    /// The byte source failed.
    #[error("byte source error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checksum verification failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumError {
    /// The transmitted checksum does not match the calculated one.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    Mismatch { expected: u8, found: u8 },

    /// No `*HH` checksum field is present.
    #[error("checksum field missing")]
    Missing,

    /// The line has no start marker, or the checksum field is not two hex digits.
    #[error("malformed sentence or checksum field")]
    Malformed,
}

/// Why a line could not be assigned a concrete [`SentenceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Well-formed sentence with an identifier this crate does not decode.
    #[error("unknown sentence identifier")]
    Unknown,

    /// Not a well-formed NMEA sentence.
    #[error("invalid sentence")]
    Invalid,
}

/// What went wrong in a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorReason {
    /// A required field is missing, or the sentence carries more fields than
    /// the record has. `found` is the number of fields in the sentence.
    #[error("unexpected field count ({found} fields)")]
    FieldCountMismatch { found: usize },

    /// The field text is not valid for its type.
    #[error("malformed field")]
    FieldFormat,

    /// There is no decoder for this kind (`Unknown` or `Invalid`).
    #[error("no decoder for this sentence kind")]
    Unsupported,
}

/// A sentence body that could not be turned into a record.
///
/// `field_index` is 1-based and counts from the first field after the address,
/// matching the field numbers in the sentence layout diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} field {field_index}: {reason}")]
pub struct DecodeError {
    pub kind: SentenceKind,
    pub field_index: usize,
    pub reason: DecodeErrorReason,
}

impl DecodeError {
    pub fn new(kind: SentenceKind, field_index: usize, reason: DecodeErrorReason) -> Self {
        Self {
            kind,
            field_index,
            reason,
        }
    }
}

/// Any failure between a byte stream and a decoded record.
#[derive(Debug, thiserror::Error)]
pub enum SentenceError {
    #[error(transparent)]
    Framing(#[from] FramingError),
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
