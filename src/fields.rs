//! Splitting a sentence body into fields and walking them in order.

use nom::{Parser, error::ErrorKind};

use crate::{
    DEFAULT_CENTURY, DecodeError, DecodeErrorReason, NmeaParse, SentenceKind, nmea0183::consumed,
    parse::FieldError,
};

/// Most fields a sentence body may hold. The longest supported record (GSV)
/// has 20.
pub const MAX_FIELDS: usize = 32;

/// The comma-separated fields of one sentence body.
///
/// Empty fields are kept, so field positions never shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    kind: SentenceKind,
    century: u16,
    fields: heapless::Vec<&'a str, MAX_FIELDS>,
}

impl<'a> Fields<'a> {
    /// Splits `body` on `,`.
    ///
    /// ```rust
    /// use nmea0183_reader::{Fields, SentenceKind};
    ///
    /// let fields = Fields::split(SentenceKind::GLL, "4916.45,N,12311.12,W,225444,A").unwrap();
    /// assert_eq!(fields.len(), 6);
    /// assert_eq!(fields.get(3), Some("12311.12"));
    /// ```
    pub fn split(kind: SentenceKind, body: &'a str) -> Result<Self, DecodeError> {
        let mut fields: heapless::Vec<&'a str, MAX_FIELDS> = heapless::Vec::new();

        for field in body.split(',') {
            if fields.push(field).is_err() {
                let found = body.split(',').count();
                return Err(DecodeError::new(
                    kind,
                    MAX_FIELDS + 1,
                    DecodeErrorReason::FieldCountMismatch { found },
                ));
            }
        }

        Ok(Fields {
            kind,
            century: DEFAULT_CENTURY,
            fields,
        })
    }

    /// A sentence with nothing after its address.
    pub fn empty(kind: SentenceKind) -> Self {
        Fields {
            kind,
            century: DEFAULT_CENTURY,
            fields: heapless::Vec::new(),
        }
    }

    /// Sets the century added to two-digit years.
    pub fn with_century(mut self, century: u16) -> Self {
        self.century = century;
        self
    }

    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    pub fn century(&self) -> u16 {
        self.century
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at a 1-based position.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        index
            .checked_sub(1)
            .and_then(|index| self.fields.get(index))
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().copied()
    }

    /// A cursor positioned at the first field.
    pub fn cursor(&self) -> FieldCursor<'_, 'a> {
        FieldCursor {
            fields: self,
            position: 0,
        }
    }
}

/// Reads the fields of a sentence in order.
///
/// A field that is past the end of the sentence decodes as absent when the
/// target type allows it (see [`NmeaParse::absent`]), so trailing fields added
/// by later NMEA versions are optional.
#[derive(Debug)]
pub struct FieldCursor<'f, 'a> {
    fields: &'f Fields<'a>,
    position: usize,
}

impl<'a> FieldCursor<'_, 'a> {
    pub fn kind(&self) -> SentenceKind {
        self.fields.kind
    }

    pub fn century(&self) -> u16 {
        self.fields.century
    }

    /// 1-based position of the next field.
    pub fn position(&self) -> usize {
        self.position + 1
    }

    /// Number of fields not read yet.
    pub fn remaining(&self) -> usize {
        self.fields.len().saturating_sub(self.position)
    }

    /// Takes the next field without decoding it.
    ///
    /// Returns its 1-based index and its text, `None` past the end of the sentence.
    pub fn next_text(&mut self) -> (usize, Option<&'a str>) {
        let index = self.position;
        self.position += 1;
        (index + 1, self.fields.fields.get(index).copied())
    }

    /// Decodes the next field as `T`.
    pub fn next<T: NmeaParse>(&mut self) -> Result<T, DecodeError> {
        let (index, text) = self.next_text();
        self.decode(index, text)
    }

    /// Decodes a value field followed by a unit field holding `unit`.
    ///
    /// An empty unit field is accepted; any other unit is a format error.
    pub fn next_with_unit<T: NmeaParse>(&mut self, unit: char) -> Result<Option<T>, DecodeError> {
        let value = self.next::<Option<T>>()?;
        let (index, text) = self.next_text();

        match self.decode::<Option<char>>(index, text)? {
            Some(found) if found != unit => Err(self.error(index, DecodeErrorReason::FieldFormat)),
            _ => Ok(value),
        }
    }

    /// Skips `count` fields.
    pub fn skip(&mut self, count: usize) {
        self.position += count;
    }

    /// Decodes the text of the field at `index` as `T`.
    ///
    /// `text` is `None` when the field is past the end of the sentence.
    pub fn decode<T: NmeaParse>(&self, index: usize, text: Option<&str>) -> Result<T, DecodeError> {
        match text {
            Some(text) => {
                decode_field(text).map_err(|_| self.error(index, DecodeErrorReason::FieldFormat))
            }
            None => T::absent().ok_or_else(|| self.count_error(index)),
        }
    }

    pub fn error(&self, field_index: usize, reason: DecodeErrorReason) -> DecodeError {
        DecodeError::new(self.fields.kind, field_index, reason)
    }

    fn count_error(&self, field_index: usize) -> DecodeError {
        self.error(
            field_index,
            DecodeErrorReason::FieldCountMismatch {
                found: self.fields.len(),
            },
        )
    }

    /// Fails when fields are left over.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.position < self.fields.len() {
            Err(self.count_error(self.position + 1))
        } else {
            Ok(())
        }
    }
}

/// Decodes the whole text of one field as `T`.
///
/// ```rust
/// use nmea0183_reader::decode_field;
///
/// assert_eq!(decode_field::<u8>("08"), Ok(8));
/// assert_eq!(decode_field::<Option<u8>>(""), Ok(None));
/// assert!(decode_field::<u8>("08x").is_err());
/// ```
pub fn decode_field<T: NmeaParse>(field: &str) -> Result<T, nom::Err<FieldError<'_>>> {
    consumed(T::parse, ErrorKind::Eof)
        .parse(field)
        .map(|(_, value)| value)
}
