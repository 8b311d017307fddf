#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{
        CalendarDate, Coordinate, FaaMode, Fraction, NavStatus, Status, TimeOfDay,
        parse::{date, latitude, longitude, magnetic_variation},
    },
};

/// Kilometres per hour in one knot.
pub(crate) const KPH_PER_KNOT: f32 = 1.852;

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 adds the FAA mode (12), NMEA 4.1 the navigational status (13):
/// ```text
///         1         2 3       4 5        6  7   8   9    10 111213
///         |         | |       | |        |  |   |   |    |  | | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(RMC))]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Option<TimeOfDay>,
    /// Status Mode Indicator
    pub status: Option<Status>,
    #[nmea(with(latitude))]
    pub latitude: Option<Coordinate>,
    #[nmea(with(longitude))]
    pub longitude: Option<Coordinate>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<Fraction>,
    /// Course over ground in degrees true
    pub course_over_ground: Option<Fraction>,
    #[nmea(with(date))]
    /// Fix date in UTC
    pub fix_date: Option<CalendarDate>,
    #[nmea(with(magnetic_variation))]
    /// Magnetic variation in degrees, west is negative
    pub magnetic_variation: Option<Fraction>,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
    /// Navigational status
    pub nav_status: Option<NavStatus>,
}

impl RMC {
    /// `true` when the receiver flagged the fix as valid.
    pub fn is_valid(&self) -> bool {
        self.status == Some(Status::Valid)
    }

    /// Speed over ground in kilometres per hour.
    pub fn speed_kph(&self) -> Option<f32> {
        self.speed_over_ground
            .map(|knots| knots.to_f32() * KPH_PER_KNOT)
    }

    /// Fix date and time, when both are present and in range.
    pub fn to_datetime(&self) -> Option<time::PrimitiveDateTime> {
        let date = self.fix_date?.to_date()?;
        let time = self.fix_time?.to_time()?;

        Some(time::PrimitiveDateTime::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, DecodeErrorReason, Fields, Hemisphere, SentenceKind};

    fn decode(body: &str) -> Result<RMC, DecodeError> {
        RMC::decode(&Fields::split(SentenceKind::RMC, body).unwrap())
    }

    #[test]
    fn test_rmc_truncated_after_date() {
        let rmc = decode("123519,A,4807.038,N,01131.000,E,022.4,084.4,230394").unwrap();
        assert_eq!(rmc.magnetic_variation, None);
        assert_eq!(rmc.faa_mode, None);
    }

    #[test]
    fn test_rmc_parsing() {
        let rmc = decode("123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W").unwrap();

        assert_eq!(
            rmc.fix_time,
            Some(TimeOfDay { hours: 12, minutes: 35, seconds: 19, microseconds: 0 })
        );
        assert!(rmc.is_valid());
        assert!((rmc.latitude.unwrap().to_degrees() - 48.1173).abs() < 1e-9);
        assert!((rmc.longitude.unwrap().to_degrees() - 11.516_666_666).abs() < 1e-6);
        assert_eq!(rmc.longitude.unwrap().hemisphere, Hemisphere::East);
        assert_eq!(rmc.speed_over_ground, Fraction::new(224, 10));
        assert_eq!(rmc.course_over_ground, Fraction::new(844, 10));
        assert_eq!(rmc.fix_date.map(|date| (date.day, date.month, date.year)), Some((23, 3, 94)));
        assert_eq!(rmc.magnetic_variation, Fraction::new(-31, 10));
        assert_eq!(rmc.faa_mode, None);
        assert_eq!(rmc.nav_status, None);
        assert!((rmc.speed_kph().unwrap() - 41.4848).abs() < 1e-3);
    }

    #[test]
    fn test_rmc_versions() {
        let cases = [
            ("001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,", None, None),
            ("001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A", Some(FaaMode::Autonomous), None),
            (
                "001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,D,S",
                Some(FaaMode::Differential),
                Some(NavStatus::Simulator),
            ),
        ];

        for (body, faa_mode, nav_status) in cases {
            let rmc = decode(body).unwrap_or_else(|e| panic!("{body:?}: {e}"));
            assert_eq!(rmc.faa_mode, faa_mode, "{body:?}");
            assert_eq!(rmc.nav_status, nav_status, "{body:?}");
            assert_eq!(rmc.course_over_ground, None);
            assert_eq!(rmc.magnetic_variation, None);
            assert_eq!(rmc.fix_date.map(|date| date.full_year()), Some(2017));
            assert_eq!(
                rmc.to_datetime(),
                time::Date::from_calendar_date(2017, time::Month::January, 10)
                    .and_then(|date| date.with_hms(0, 10, 31))
                    .ok()
            );
        }
    }

    #[test]
    fn test_rmc_empty_fields_not_shifted() {
        let rmc = decode(",V,,,,,,,,,,N").unwrap();

        assert_eq!(
            rmc,
            RMC {
                fix_time: None,
                status: Some(Status::Invalid),
                latitude: None,
                longitude: None,
                speed_over_ground: None,
                course_over_ground: None,
                fix_date: None,
                magnetic_variation: None,
                faa_mode: Some(FaaMode::DataNotValid),
                nav_status: None,
            }
        );
        assert!(!rmc.is_valid());
        assert_eq!(rmc.speed_kph(), None);
        assert_eq!(rmc.to_datetime(), None);
    }

    #[test]
    fn test_rmc_errors() {
        let cases = [
            ("12351,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W", 1, DecodeErrorReason::FieldFormat),
            ("123519,X,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W", 2, DecodeErrorReason::FieldFormat),
            ("123519,A,4807.038,N,01131.000,E,fast,084.4,230394,003.1,W", 7, DecodeErrorReason::FieldFormat),
            ("123519,A,4807.038,N,01131.000,E,022.4,084.4,2303,003.1,W", 9, DecodeErrorReason::FieldFormat),
            (
                "123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A,V,extra",
                14,
                DecodeErrorReason::FieldCountMismatch { found: 14 },
            ),
        ];

        for (body, field_index, reason) in cases {
            assert_eq!(
                decode(body),
                Err(DecodeError::new(SentenceKind::RMC, field_index, reason)),
                "{body:?}"
            );
        }
    }
}
