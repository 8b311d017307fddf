//! Decoders for values that span more than one field.
//!
//! Each takes the [`FieldCursor`] and consumes every field it covers, even
//! when the value turns out to be absent, so the fields after it stay in place.

use nom::{Err, Parser, error::ErrorKind, error::ParseError};

use crate::{
    CalendarDate, Coordinate, DecodeError, DecodeErrorReason, Error, FieldCursor, Fraction,
    Hemisphere, IResult, NmeaParse, parse::digits,
};

/// The `ddmm.mmmm` text of a coordinate: whole degrees and minutes.
struct DegreesMinutes<const WIDTH: usize> {
    degrees: u16,
    minutes: Fraction,
}

impl<const WIDTH: usize> NmeaParse for DegreesMinutes<WIDTH> {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (rest, (degrees, minutes)) = (digits(WIDTH), Fraction::parse).parse(i)?;

        if minutes.value() < 0 {
            return Err(Err::Error(Error::from_error_kind(i, ErrorKind::Verify)));
        }

        Ok((rest, DegreesMinutes { degrees, minutes }))
    }
}

fn coordinate<const WIDTH: usize>(
    cursor: &mut FieldCursor<'_, '_>,
    latitude: bool,
) -> Result<Option<Coordinate>, DecodeError> {
    let value: Option<DegreesMinutes<WIDTH>> = cursor.next()?;
    let (index, text) = cursor.next_text();
    let hemisphere: Option<Hemisphere> = cursor.decode(index, text)?;

    match (value, hemisphere) {
        (None, _) => Ok(None),
        (Some(value), Some(hemisphere)) if hemisphere.is_latitude() == latitude => {
            Ok(Some(Coordinate {
                degrees: value.degrees,
                minutes: value.minutes,
                hemisphere,
            }))
        }
        (Some(_), _) => Err(cursor.error(index, DecodeErrorReason::FieldFormat)),
    }
}

/// Latitude: `ddmm.mmmm` followed by `N` or `S`.
///
/// Absent when the value field is empty. A value without a valid hemisphere
/// is a format error on the hemisphere field.
pub fn latitude(cursor: &mut FieldCursor<'_, '_>) -> Result<Option<Coordinate>, DecodeError> {
    coordinate::<2>(cursor, true)
}

/// Longitude: `dddmm.mmmm` followed by `E` or `W`.
pub fn longitude(cursor: &mut FieldCursor<'_, '_>) -> Result<Option<Coordinate>, DecodeError> {
    coordinate::<3>(cursor, false)
}

/// A `ddmmyy` date, placed in the cursor's century.
pub fn date(cursor: &mut FieldCursor<'_, '_>) -> Result<Option<CalendarDate>, DecodeError> {
    let century = cursor.century();
    let date: Option<CalendarDate> = cursor.next()?;

    Ok(date.map(|date| date.in_century(century)))
}

/// Separate day, month and four-digit year fields, as sent by ZDA.
///
/// Absent when all three are empty; partly empty is a format error.
pub fn split_date(cursor: &mut FieldCursor<'_, '_>) -> Result<Option<CalendarDate>, DecodeError> {
    let start = cursor.position();
    let day: Option<u8> = cursor.next()?;
    let month: Option<u8> = cursor.next()?;
    let year: Option<u16> = cursor.next()?;

    match (day, month, year) {
        (None, None, None) => Ok(None),
        (Some(day), Some(month), Some(year)) => Ok(Some(CalendarDate {
            day,
            month,
            year: (year % 100) as u8,
            century: year - year % 100,
        })),
        (day, month, _) => {
            let missing = [day.is_none(), month.is_none(), true]
                .iter()
                .position(|missing| *missing)
                .unwrap_or_default();
            Err(cursor.error(start + missing, DecodeErrorReason::FieldFormat))
        }
    }
}

/// Magnetic variation: a value followed by `E` or `W`. West is negative.
///
/// A value with an empty direction field is kept unsigned.
pub fn magnetic_variation(
    cursor: &mut FieldCursor<'_, '_>,
) -> Result<Option<Fraction>, DecodeError> {
    let value: Option<Fraction> = cursor.next()?;
    let (index, text) = cursor.next_text();
    let direction: Option<Hemisphere> = cursor.decode(index, text)?;

    match (value, direction) {
        (None, _) => Ok(None),
        (Some(value), None | Some(Hemisphere::East)) => Ok(Some(value)),
        (Some(value), Some(Hemisphere::West)) => Ok(Some(-value)),
        (Some(_), Some(_)) => Err(cursor.error(index, DecodeErrorReason::FieldFormat)),
    }
}
