//! # Sentence Framing and Checksums
//!
//! This module parses the frame of a single NMEA 0183 line:
//! `$TTSSS,D1,D2,...,Dn*CC`
//!
//! - `$` (or `!` for encapsulated sentences) starts the sentence,
//! - `TT` is the talker and `SSS` the sentence identifier,
//! - `*CC` is the optional checksum: two hex digits holding the XOR of every
//!   byte between the start marker and the `*`.
//!
//! Lines handed to these functions carry no line terminator; the framer has
//! already stripped it. [`verify_checksum`] and [`validate`] also tolerate a
//! trailing `\r\n` so they can be used on raw log lines.

use nom::{
    AsBytes, Err, Input, Parser,
    branch::alt,
    bytes::complete::{take, take_until, take_while1},
    character::complete::{char, hex_digit0, one_of},
    combinator::{opt, rest, rest_len, verify},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
    sequence::terminated,
};

use crate::{ChecksumError, Error, IResult, SentenceKind};

/// Defines how the sentence parser handles the `*CC` checksum field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// A sentence without a `*CC` field is rejected with
    /// [`Error::MissingChecksum`]. A present checksum is validated.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// - If no checksum is present, parsing continues normally
    /// - If a checksum is present, it must be valid or parsing fails
    ///
    /// Receivers that always send checksums work the same in both modes; this
    /// one also accepts hand-typed sentences and replayed logs that lost theirs.
    #[default]
    Optional,
}

impl ChecksumMode {
    /// `Required` when `strict`, `Optional` otherwise.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ChecksumMode::Required
        } else {
            ChecksumMode::Optional
        }
    }
}

/// The frame of one sentence, borrowed from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// `$` for ordinary sentences, `!` for encapsulated ones.
    pub marker: char,
    /// Two-character talker identifier (`GP`, `GN`, `GL`, ...).
    pub talker: &'a str,
    /// Three-character sentence identifier (`RMC`, `GGA`, ...).
    pub sentence_id: &'a str,
    /// Everything after the first comma, up to the checksum field.
    /// `None` when the address is not followed by a comma.
    pub fields: Option<&'a str>,
    /// The transmitted checksum, when the line has one.
    pub checksum: Option<u8>,
}

impl Sentence<'_> {
    /// The kind selected by the sentence identifier. The talker is ignored.
    pub fn kind(&self) -> SentenceKind {
        SentenceKind::from_sentence_id(self.sentence_id)
    }
}

/// Creates a parser for the frame of one NMEA 0183 sentence.
///
/// The returned parser:
/// * Validates that the input is ASCII-only
/// * Expects the sentence to start with `$` or `!`
/// * Splits off the `*CC` checksum field and checks it against `mode`
/// * Verifies a present checksum against the calculated one
/// * Reads an address of at least five upper-case alphanumerics
///
/// # Examples
///
/// ```rust
/// use nmea0183_reader::{ChecksumMode, IResult, Sentence, sentence};
/// use nom::Parser;
///
/// let result: IResult<_, _> = sentence(ChecksumMode::Required).parse("$GPGGA,data*6A");
/// let (_, frame) = result.unwrap();
/// assert_eq!(frame.talker, "GP");
/// assert_eq!(frame.sentence_id, "GGA");
/// assert_eq!(frame.fields, Some("data"));
///
/// let mut lenient = sentence(ChecksumMode::Optional);
/// assert!(lenient.parse("$GPGGA,data").is_ok()); // (without checksum)
/// assert!(lenient.parse("$GPGGA,data*99").is_err()); // (invalid checksum)
/// assert!(sentence(ChecksumMode::Required).parse("$GPGGA,data").is_err()); // (missing checksum)
/// ```
pub fn sentence<'a>(mode: ChecksumMode) -> impl FnMut(&'a str) -> IResult<&'a str, Sentence<'a>> {
    move |i: &'a str| {
        if !i.is_ascii() {
            return Err(Err::Error(Error::NonAscii));
        }

        let (i, marker) = one_of("$!").parse(i)?;
        let (cc, data) = alt((take_until("*"), rest)).parse(i)?;
        let (_, cc) = checksum_field(mode).parse(cc)?;
        let (data, calc_cc) = checksum(data);

        if let Some(cc) = cc
            && cc != calc_cc
        {
            return Err(Err::Error(Error::ChecksumMismatch {
                expected: calc_cc,
                found: cc,
            }));
        }

        let (body, address) =
            take_while1(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit()).parse(data)?;
        if address.len() < 5 {
            return Err(Err::Error(Error::from_error_kind(address, ErrorKind::Verify)));
        }

        let fields = if body.is_empty() {
            None
        } else {
            let (body, _) = char(',').parse(body)?;
            Some(body)
        };

        let (talker, sentence_id) = address.split_at(2);

        Ok((
            "",
            Sentence {
                marker,
                talker,
                sentence_id: &sentence_id[..3],
                fields,
                checksum: cc,
            },
        ))
    }
}

/// Parses the checksum field that follows the sentence data.
///
/// The input is either empty or starts at the `*`. Returns the transmitted
/// checksum, or [`None`] when the field is absent and `mode` allows it.
pub(crate) fn checksum_field<'a>(
    mode: ChecksumMode,
) -> impl FnMut(&'a str) -> IResult<&'a str, Option<u8>> {
    move |i: &'a str| {
        let (cc, asterisk) = opt(char('*')).parse(i)?;

        match (asterisk, mode) {
            (Some(_), _) => {
                let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
                let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

                hex_u32.map(|cc| Some(cc as u8)).parse(cc)
            }
            (None, ChecksumMode::Required) => Err(Err::Error(Error::MissingChecksum)),
            (None, ChecksumMode::Optional) if cc.is_empty() => Ok((cc, None)),
            (None, ChecksumMode::Optional) => {
                Err(Err::Error(Error::from_error_kind(cc, ErrorKind::Count)))
            }
        }
    }
}

/// Calculates the NMEA 0183 checksum for the given sentence data.
///
/// The checksum is the XOR of every byte between the start marker and the `*`
/// delimiter, excluding both.
///
/// Returns the input unchanged together with the calculated value.
///
/// ```rust
/// use nmea0183_reader::checksum;
///
/// assert_eq!(checksum("GPGGA,data"), ("GPGGA,data", 0x6A));
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum the way it is transmitted: two upper-case hex digits.
pub fn format_checksum(checksum: u8) -> heapless::String<2> {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = heapless::String::new();
    for nibble in [checksum >> 4, checksum & 0x0F] {
        // Two pushes into a two-byte string always fit.
        let _ = out.push(HEX[usize::from(nibble)] as char);
    }
    out
}

/// Checks the `*CC` field of a line against the calculated checksum.
///
/// Returns the checksum on success. The hex digits are compared
/// case-insensitively. A trailing `\r\n` is ignored.
///
/// ```rust
/// use nmea0183_reader::{ChecksumError, verify_checksum};
///
/// assert_eq!(verify_checksum("$GPGGA,data*6A"), Ok(0x6A));
/// assert_eq!(verify_checksum("$GPGGA,data*6a\r\n"), Ok(0x6A));
/// assert_eq!(verify_checksum("$GPGGA,data"), Err(ChecksumError::Missing));
/// assert_eq!(
///     verify_checksum("$GPGGA,data*00"),
///     Err(ChecksumError::Mismatch { expected: 0x6A, found: 0x00 })
/// );
/// ```
pub fn verify_checksum(line: &str) -> Result<u8, ChecksumError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let framed: IResult<_, _> = (one_of("$!"), alt((take_until("*"), rest))).parse(line);
    let (cc, (_, data)) = framed.map_err(|_| ChecksumError::Malformed)?;

    match checksum_field(ChecksumMode::Required).parse(cc) {
        Ok((_, Some(found))) => {
            let (_, expected) = checksum(data);
            if expected == found {
                Ok(found)
            } else {
                Err(ChecksumError::Mismatch { expected, found })
            }
        }
        Ok((_, None)) | Err(Err::Error(Error::MissingChecksum)) => Err(ChecksumError::Missing),
        Err(_) => Err(ChecksumError::Malformed),
    }
}

/// `true` when the line carries a `*CC` field matching its content.
pub fn validate(line: &str) -> bool {
    verify_checksum(line).is_ok()
}

/// Ensures that the parser consumes all input.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
pub(crate) fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}
