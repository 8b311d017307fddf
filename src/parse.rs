use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{anychar, char, digit0},
    combinator::opt,
    sequence::preceded,
};

use crate::{Error, IResult};

/// The error type produced by field parsers.
pub type FieldError<'a> = Error<&'a str, nom::error::Error<&'a str>>;

/// Trait for parsing a value out of the text of one NMEA 0183 field.
///
/// The input is a single field: the text between two commas, without the
/// commas. Implementations are provided for the integer types, `char`,
/// `Option<T>`, and the value types in [`nmea_content`](crate::nmea_content),
/// and you can implement it for your own types to use them in records.
///
/// # Examples
///
/// ```rust
/// use nmea0183_reader::{IResult, NmeaParse};
///
/// // Parsing a single integer field
/// let result: IResult<_, _> = u8::parse("42");
/// assert_eq!(result, Ok(("", 42)));
///
/// // Parsing an optional field (empty string yields None)
/// let result: IResult<_, _> = Option::<u8>::parse("");
/// assert_eq!(result, Ok(("", None)));
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_reader::{IResult, NmeaParse};
/// use nom::{Parser, character::complete::char};
///
/// struct Heading {
///     degrees: u16,
///     relative: bool,
/// }
///
/// impl NmeaParse for Heading {
///     fn parse(i: &str) -> IResult<&str, Self> {
///         let (i, degrees) = u16::parse(i)?;
///         let (i, relative) = nom::combinator::opt(char('R')).parse(i)?;
///
///         Ok((i, Heading { degrees, relative: relative.is_some() }))
///     }
/// }
/// ```
pub trait NmeaParse: Sized {
    /// Parses a value from the start of the field text.
    ///
    /// The caller checks that the whole field was consumed.
    fn parse(i: &str) -> IResult<&str, Self>;

    /// The value of a field that is missing from the end of the sentence.
    ///
    /// `None` means a missing field is an error. `Option<T>` overrides this so
    /// that trailing optional fields decode as absent.
    fn absent() -> Option<Self> {
        None
    }
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl NmeaParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

impl_ints_type!(u8, u16, u32, i8, i16, i32);

impl NmeaParse for char {
    fn parse(i: &str) -> IResult<&str, Self> {
        anychar(i)
    }
}

impl<T> NmeaParse for Option<T>
where
    T: NmeaParse,
{
    fn parse(i: &str) -> IResult<&str, Self> {
        if i.is_empty() {
            Ok((i, None))
        } else {
            T::parse(i).map(|(i, value)| (i, Some(value)))
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

/// Parses exactly `count` ASCII digits into `T`.
pub(crate) fn digits<'a, T>(count: usize) -> impl Parser<&'a str, Output = T, Error = FieldError<'a>>
where
    T: std::str::FromStr,
{
    take_while_m_n(count, count, |c: char| c.is_ascii_digit()).map_res(str::parse::<T>)
}

/// Parses an optional `.` followed by the digits after it.
pub(crate) fn decimals<'a>() -> impl Parser<&'a str, Output = Option<&'a str>, Error = FieldError<'a>>
{
    opt(preceded(char('.'), digit0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints() {
        let res: IResult<_, _> = u8::parse("08");
        assert_eq!(res, Ok(("", 8)));

        let res: IResult<_, _> = i8::parse("-03");
        assert_eq!(res, Ok(("", -3)));

        let res: IResult<_, _> = u16::parse("344,");
        assert_eq!(res, Ok((",", 344)));

        assert!(u8::parse("256").is_err());
        assert!(u8::parse("").is_err());
        assert!(u8::parse("x1").is_err());
    }

    #[test]
    fn test_option() {
        let res: IResult<_, _> = Option::<u8>::parse("");
        assert_eq!(res, Ok(("", None)));

        let res: IResult<_, _> = Option::<u8>::parse("12");
        assert_eq!(res, Ok(("", Some(12))));

        assert!(Option::<u8>::parse("A").is_err());
        assert_eq!(Option::<u8>::absent(), Some(None));
        assert_eq!(u8::absent(), None);
    }

    #[test]
    fn test_digits() {
        let res: IResult<_, u8> = digits(2).parse("4807.038");
        assert_eq!(res, Ok(("07.038", 48)));

        let res: IResult<_, u16> = digits(3).parse("01131.000");
        assert_eq!(res, Ok(("31.000", 11)));

        let res: IResult<_, u8> = digits(2).parse("4");
        assert!(res.is_err());
    }

    #[test]
    fn test_decimals() {
        let res: IResult<_, _> = decimals().parse(".038");
        assert_eq!(res, Ok(("", Some("038"))));

        let res: IResult<_, _> = decimals().parse(".");
        assert_eq!(res, Ok(("", Some(""))));

        let res: IResult<_, _> = decimals().parse("");
        assert_eq!(res, Ok(("", None)));
    }
}
