#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{CalendarDate, TimeOfDay, parse::split_date},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(ZDA))]
pub struct ZDA {
    /// Time in UTC
    pub time: Option<TimeOfDay>,
    #[nmea(with(split_date))]
    /// Date in UTC, sent with a four-digit year
    pub date: Option<CalendarDate>,
    /// Local zone hours, -13 to 13
    pub hour_offset: Option<i8>,
    /// Local zone minutes, same sign as the hours
    pub minute_offset: Option<i8>,
}

impl ZDA {
    /// The local zone as an offset from UTC.
    ///
    /// The minutes take the sign of the hours, or their own sign when the
    /// hours are zero. A missing minutes field counts as zero; a missing hours
    /// field, minutes past 59, or an offset out of range give `None`.
    pub fn utc_offset(&self) -> Option<time::UtcOffset> {
        let hours = self.hour_offset?;
        let minute_offset = self.minute_offset.unwrap_or_default();
        let minutes = minute_offset.unsigned_abs();
        if minutes > 59 {
            return None;
        }

        let minutes = minutes as i8;
        let negative = hours < 0 || (hours == 0 && minute_offset < 0);
        let minutes = if negative { -minutes } else { minutes };

        time::UtcOffset::from_hms(hours, minutes, 0).ok()
    }

    /// Date and time in the local zone.
    pub fn to_offset_datetime(&self) -> Option<time::OffsetDateTime> {
        let date = self.date?.to_date()?;
        let time = self.time?.to_time()?;
        let offset = self.utc_offset()?;

        // Shifting into the zone must stay inside the supported years.
        if !(1..9999).contains(&date.year()) {
            return None;
        }

        Some(
            time::PrimitiveDateTime::new(date, time)
                .assume_utc()
                .to_offset(offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, DecodeErrorReason, Fields, SentenceKind};

    fn decode(body: &str) -> Result<ZDA, DecodeError> {
        ZDA::decode(&Fields::split(SentenceKind::ZDA, body).unwrap())
    }

    #[test]
    fn test_zda_parsing() {
        let zda = decode("201530.00,04,07,2002,00,00").unwrap();

        assert_eq!(
            zda,
            ZDA {
                time: Some(TimeOfDay { hours: 20, minutes: 15, seconds: 30, microseconds: 0 }),
                date: Some(CalendarDate { day: 4, month: 7, year: 2, century: 2000 }),
                hour_offset: Some(0),
                minute_offset: Some(0),
            }
        );
        assert_eq!(zda.utc_offset(), Some(time::UtcOffset::UTC));

        let expected = time::Date::from_calendar_date(2002, time::Month::July, 4)
            .and_then(|date| date.with_hms(20, 15, 30))
            .map(|datetime| datetime.assume_utc())
            .ok();
        assert_eq!(zda.to_offset_datetime(), expected);
    }

    #[test]
    fn test_zda_offsets() {
        let cases = [
            ("201530.00,04,07,2002,00,00", Some((0, 0))),
            ("201530.00,04,07,2002,05,30", Some((5, 30))),
            ("201530.00,04,07,2002,-03,30", Some((-3, -30))),
            ("201530.00,04,07,2002,-03,", Some((-3, 0))),
            ("201530.00,04,07,2002,,", None),
            ("201530.00,04,07,2002", None),
            ("201530.00,04,07,2002,30,00", None),
            ("201530.00,04,07,2002,00,-30", Some((0, -30))),
            ("201530.00,04,07,2002,05,75", None),
            ("201530.00,04,07,2002,-05,-128", None),
            ("201530.00,04,07,2002,05,-128", None),
        ];

        for (body, expected) in cases {
            let zda = decode(body).unwrap_or_else(|e| panic!("{body:?}: {e}"));
            assert_eq!(
                zda.utc_offset().map(|offset| (offset.whole_hours(), offset.minutes_past_hour())),
                expected,
                "{body:?}"
            );
        }
    }

    #[test]
    fn test_zda_local_time() {
        let zda = decode("201530.00,04,07,2002,-05,00").unwrap();
        let local = zda.to_offset_datetime().unwrap();

        assert_eq!(local.hour(), 15);
        assert_eq!(local.offset().whole_hours(), -5);
        assert_eq!(local.unix_timestamp(), 1_025_813_730);

        let zda = decode("201530.00,04,07,2002,-05,-128").unwrap();
        assert_eq!(zda.minute_offset, Some(-128));
        assert_eq!(zda.to_offset_datetime(), None);
    }

    #[test]
    fn test_zda_empty() {
        let zda = decode(",,,,,").unwrap();

        assert_eq!(zda.time, None);
        assert_eq!(zda.date, None);
        assert_eq!(zda.to_offset_datetime(), None);
    }

    #[test]
    fn test_zda_errors() {
        let cases = [
            ("201530.00,04,,2002,00,00", 3),
            ("201530.00,04,07,02x2,00,00", 4),
            ("201530.00,04,07,2002,+0x,00", 5),
        ];

        for (body, field_index) in cases {
            assert_eq!(
                decode(body),
                Err(DecodeError::new(
                    SentenceKind::ZDA,
                    field_index,
                    DecodeErrorReason::FieldFormat
                )),
                "{body:?}"
            );
        }
    }
}
