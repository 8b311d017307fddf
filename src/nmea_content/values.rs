//! Numeric, time and position values carried in sentence fields.

use std::fmt;

use nom::{
    Err, Parser,
    character::complete::{digit0, one_of},
    combinator::opt,
    error::{ErrorKind, ParseError},
};

use super::Hemisphere;
use crate::{
    DEFAULT_CENTURY, Error, IResult, NmeaParse,
    parse::{decimals, digits},
};

/// An exact decimal number as transmitted: `value / scale`.
///
/// `scale` is a power of ten; `123.40` is `Fraction { value: 12340, scale: 100 }`.
/// Trailing zeros are kept, so the precision of the wire is preserved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    value: i64,
    scale: u32,
}

impl Fraction {
    /// Most fractional digits a field may carry.
    pub const MAX_DECIMALS: usize = 9;

    /// Creates a fraction. Returns `None` when `scale` is zero.
    pub fn new(value: i64, scale: u32) -> Option<Self> {
        (scale != 0).then_some(Fraction { value, scale })
    }

    /// A whole number.
    pub fn from_int(value: i64) -> Self {
        Fraction { value, scale: 1 }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn to_f64(&self) -> f64 {
        self.value as f64 / f64::from(self.scale)
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// The value as an integer at a different scale.
    ///
    /// Scaling down rounds half away from zero: `1.25` at scale 10 is `13`.
    /// Results saturate at the `i64` range.
    pub fn rescale(&self, new_scale: u32) -> i64 {
        if new_scale == 0 {
            return 0;
        }

        let (scale, new_scale) = (i64::from(self.scale), i64::from(new_scale));
        if scale == new_scale {
            self.value
        } else if scale > new_scale {
            let divisor = scale / new_scale;
            let (quotient, remainder) = (self.value / divisor, self.value % divisor);
            if remainder.abs() * 2 >= divisor {
                quotient + self.value.signum()
            } else {
                quotient
            }
        } else {
            self.value.saturating_mul(new_scale / scale)
        }
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction {
            value: self.value.saturating_neg(),
            scale: self.scale,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = match self.scale.checked_ilog10() {
            Some(decimals) if 10u32.pow(decimals) == self.scale => decimals,
            _ => return write!(f, "{}", self.to_f64()),
        };

        let sign = if self.value < 0 { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        let scale = u64::from(self.scale);

        if decimals == 0 {
            write!(f, "{sign}{magnitude}")
        } else {
            write!(
                f,
                "{sign}{}.{:0width$}",
                magnitude / scale,
                magnitude % scale,
                width = decimals as usize
            )
        }
    }
}

impl NmeaParse for Fraction {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (rest, (sign, whole, fraction)) = (opt(one_of("+-")), digit0, decimals()).parse(i)?;

        if whole.is_empty() && fraction.is_none_or(str::is_empty) {
            return Err(Err::Error(Error::from_error_kind(i, ErrorKind::Digit)));
        }

        let fraction = fraction.unwrap_or_default();
        if fraction.len() > Fraction::MAX_DECIMALS {
            return Err(Err::Error(Error::InvalidField(i)));
        }

        let value = whole
            .bytes()
            .chain(fraction.bytes())
            .try_fold(0i64, |acc, digit| {
                acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
            })
            .ok_or(Err::Error(Error::InvalidField(i)))?;

        let value = if sign == Some('-') { -value } else { value };

        Ok((
            rest,
            Fraction {
                value,
                scale: 10u32.pow(fraction.len() as u32),
            },
        ))
    }
}

/// A latitude or longitude as transmitted: whole degrees, minutes and hemisphere.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub degrees: u16,
    pub minutes: Fraction,
    pub hemisphere: Hemisphere,
}

impl Coordinate {
    /// Signed decimal degrees; south and west are negative.
    ///
    /// ```rust
    /// use nmea0183_reader::{Coordinate, Fraction, Hemisphere};
    ///
    /// let latitude = Coordinate {
    ///     degrees: 48,
    ///     minutes: Fraction::new(7038, 1000).unwrap(),
    ///     hemisphere: Hemisphere::North,
    /// };
    /// assert!((latitude.to_degrees() - 48.1173).abs() < 1e-9);
    /// ```
    pub fn to_degrees(&self) -> f64 {
        let magnitude = f64::from(self.degrees) + self.minutes.to_f64() / 60.0;
        f64::from(self.hemisphere.sign()) * magnitude
    }

    /// The unsigned `dddmm.mmmm` value as it appears on the wire.
    pub fn raw(&self) -> Fraction {
        let scale = i64::from(self.minutes.scale);
        Fraction {
            value: i64::from(self.degrees)
                .saturating_mul(100)
                .saturating_mul(scale)
                .saturating_add(self.minutes.value),
            scale: self.minutes.scale,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_degrees())
    }
}

/// UTC time of day, `hhmmss[.sss]`. Values are not range checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub microseconds: u32,
}

impl TimeOfDay {
    /// Converts to [`time::Time`], or `None` when a component is out of range.
    pub fn to_time(&self) -> Option<time::Time> {
        time::Time::from_hms_micro(self.hours, self.minutes, self.seconds, self.microseconds).ok()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)?;
        if self.microseconds != 0 {
            write!(f, ".{:06}", self.microseconds)?;
        }
        Ok(())
    }
}

impl NmeaParse for TimeOfDay {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (i, (hours, minutes, seconds, fraction)) =
            (digits(2), digits(2), digits(2), decimals()).parse(i)?;

        // Digits past microseconds are dropped.
        let microseconds = fraction
            .unwrap_or_default()
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(6)
            .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));

        Ok((
            i,
            TimeOfDay {
                hours,
                minutes,
                seconds,
                microseconds,
            },
        ))
    }
}

/// A `ddmmyy` date. `year` holds the two transmitted digits; `century` is
/// added to get the full year. Values are not calendar checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub day: u8,
    pub month: u8,
    pub year: u8,
    pub century: u16,
}

impl CalendarDate {
    /// The same date with a different century.
    pub fn in_century(self, century: u16) -> Self {
        CalendarDate { century, ..self }
    }

    pub fn full_year(&self) -> u16 {
        self.century + u16::from(self.year)
    }

    /// Converts to [`time::Date`], or `None` when the date does not exist.
    pub fn to_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;
        time::Date::from_calendar_date(i32::from(self.full_year()), month, self.day).ok()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{}", self.day, self.month, self.full_year())
    }
}

impl NmeaParse for CalendarDate {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (i, (day, month, year)) = (digits(2), digits(2), digits(2)).parse(i)?;

        Ok((
            i,
            CalendarDate {
                day,
                month,
                year,
                century: DEFAULT_CENTURY,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(value: i64, scale: u32) -> Fraction {
        Fraction { value, scale }
    }

    #[test]
    fn test_fraction_parse() {
        let cases = [
            ("022.4", fraction(224, 10)),
            ("0.9", fraction(9, 10)),
            ("545.4", fraction(5454, 10)),
            ("-22.0", fraction(-220, 10)),
            ("+3", fraction(3, 1)),
            ("08", fraction(8, 1)),
            (".5", fraction(5, 10)),
            ("7.", fraction(7, 1)),
            ("0.146", fraction(146, 1000)),
            ("1.000000001", fraction(1_000_000_001, 1_000_000_000)),
        ];

        for (input, expected) in cases {
            let res: IResult<_, _> = Fraction::parse(input);
            assert_eq!(res, Ok(("", expected)), "input {input:?}");
        }
    }

    #[test]
    fn test_fraction_parse_rejects() {
        for input in ["", "-", ".", "A", "-.", "1.0000000001", "99999999999999999999"] {
            let res: IResult<_, _> = Fraction::parse(input);
            assert!(res.is_err(), "input {input:?}");
        }
    }

    #[test]
    fn test_fraction_conversions() {
        let speed = fraction(224, 10);
        assert!((speed.to_f64() - 22.4).abs() < 1e-12);
        assert!((speed.to_f32() - 22.4).abs() < 1e-5);

        assert_eq!(fraction(125, 100).rescale(10), 13);
        assert_eq!(fraction(-125, 100).rescale(10), -13);
        assert_eq!(fraction(124, 100).rescale(10), 12);
        assert_eq!(fraction(12, 10).rescale(1000), 1200);
        assert_eq!(fraction(12, 10).rescale(10), 12);
        assert_eq!(fraction(12, 10).rescale(0), 0);

        assert_eq!(Fraction::new(1, 0), None);
        assert_eq!(-fraction(31, 10), fraction(-31, 10));
    }

    #[test]
    fn test_fraction_extremes() {
        let res: IResult<_, _> = Fraction::parse("922337203685477580.7");
        let (_, largest) = res.unwrap();
        assert_eq!(largest, fraction(i64::MAX, 10));

        assert_eq!(largest.rescale(1), 922_337_203_685_477_581);
        assert_eq!((-largest).rescale(1), -922_337_203_685_477_581);
        assert_eq!(largest.rescale(100), i64::MAX);
        assert_eq!((-fraction(i64::MIN, 1)).value, i64::MAX);

        let coordinate = Coordinate {
            degrees: 48,
            minutes: largest,
            hemisphere: Hemisphere::North,
        };
        assert_eq!(coordinate.raw(), fraction(i64::MAX, 10));
    }

    #[test]
    fn test_fraction_display() {
        let cases = [
            (fraction(5454, 10), "545.4"),
            (fraction(-220, 10), "-22.0"),
            (fraction(-5, 100), "-0.05"),
            (fraction(8, 1), "8"),
            (fraction(1, 4), "0.25"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn test_coordinate() {
        let latitude = Coordinate {
            degrees: 48,
            minutes: fraction(7038, 1000),
            hemisphere: Hemisphere::North,
        };
        assert!((latitude.to_degrees() - 48.1173).abs() < 1e-9);
        assert_eq!(latitude.raw(), fraction(4_807_038, 1000));

        let longitude = Coordinate {
            degrees: 123,
            minutes: fraction(1112, 100),
            hemisphere: Hemisphere::West,
        };
        assert!((longitude.to_degrees() + 123.185_333_333).abs() < 1e-6);
        assert_eq!(longitude.raw(), fraction(1_231_112, 100));
    }

    #[test]
    fn test_time_of_day() {
        let cases = [
            ("123519", TimeOfDay { hours: 12, minutes: 35, seconds: 19, microseconds: 0 }),
            ("201530.00", TimeOfDay { hours: 20, minutes: 15, seconds: 30, microseconds: 0 }),
            ("001031.5", TimeOfDay { hours: 0, minutes: 10, seconds: 31, microseconds: 500_000 }),
            ("235959.1234567", TimeOfDay { hours: 23, minutes: 59, seconds: 59, microseconds: 123_456 }),
        ];

        for (input, expected) in cases {
            let res: IResult<_, _> = TimeOfDay::parse(input);
            assert_eq!(res, Ok(("", expected)), "input {input:?}");
        }

        for input in ["", "1235", "12a519", "12:35:19"] {
            let res: IResult<_, _> = TimeOfDay::parse(input);
            assert!(res.is_err(), "input {input:?}");
        }

        let time = TimeOfDay { hours: 12, minutes: 35, seconds: 19, microseconds: 250_000 };
        assert_eq!(time.to_time(), time::Time::from_hms_micro(12, 35, 19, 250_000).ok());
        assert_eq!(time.to_string(), "12:35:19.250000");
        assert_eq!(TimeOfDay { hours: 24, ..time }.to_time(), None);
    }

    #[test]
    fn test_calendar_date() {
        let res: IResult<_, _> = CalendarDate::parse("230394");
        let (_, date) = res.unwrap();
        assert_eq!(date, CalendarDate { day: 23, month: 3, year: 94, century: 2000 });
        assert_eq!(date.full_year(), 2094);

        let date = date.in_century(1900);
        assert_eq!(date.full_year(), 1994);
        assert_eq!(
            date.to_date(),
            time::Date::from_calendar_date(1994, time::Month::March, 23).ok()
        );
        assert_eq!(date.to_string(), "23.03.1994");

        let date = CalendarDate { day: 31, month: 2, year: 17, century: 2000 };
        assert_eq!(date.to_date(), None);
        let date = CalendarDate { day: 1, month: 13, year: 17, century: 2000 };
        assert_eq!(date.to_date(), None);
    }
}
