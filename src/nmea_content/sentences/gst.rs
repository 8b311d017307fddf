#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{Fraction, TimeOfDay},
};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(GST))]
pub struct GST {
    /// Time of the associated fix in UTC
    pub time: Option<TimeOfDay>,
    /// RMS value of the standard deviation of the range inputs
    pub rms_deviation: Option<Fraction>,
    /// Standard deviation of the semi-major axis of the error ellipse, meters
    pub semi_major_deviation: Option<Fraction>,
    /// Standard deviation of the semi-minor axis of the error ellipse, meters
    pub semi_minor_deviation: Option<Fraction>,
    /// Orientation of the semi-major axis, degrees from true north
    pub semi_major_orientation: Option<Fraction>,
    /// Standard deviation of the latitude error, meters
    pub latitude_error: Option<Fraction>,
    /// Standard deviation of the longitude error, meters
    pub longitude_error: Option<Fraction>,
    /// Standard deviation of the altitude error, meters
    pub altitude_error: Option<Fraction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, DecodeErrorReason, Fields, SentenceKind};

    fn decode(body: &str) -> Result<GST, DecodeError> {
        GST::decode(&Fields::split(SentenceKind::GST, body).unwrap())
    }

    #[test]
    fn test_gst_parsing() {
        let gst = decode("024603.00,3.2,6.6,4.7,47.3,5.8,5.6,22.0").unwrap();

        assert_eq!(
            gst.time,
            Some(TimeOfDay { hours: 2, minutes: 46, seconds: 3, microseconds: 0 })
        );
        assert_eq!(gst.rms_deviation, Fraction::new(32, 10));
        assert_eq!(gst.semi_major_deviation, Fraction::new(66, 10));
        assert_eq!(gst.semi_minor_deviation, Fraction::new(47, 10));
        assert_eq!(gst.semi_major_orientation, Fraction::new(473, 10));
        assert_eq!(gst.latitude_error, Fraction::new(58, 10));
        assert_eq!(gst.longitude_error, Fraction::new(56, 10));
        assert_eq!(gst.altitude_error, Fraction::new(220, 10));
    }

    #[test]
    fn test_gst_partial() {
        let gst = decode("172814.0,0.006,0.023,0.020,273.6,,,").unwrap();

        assert_eq!(gst.rms_deviation, Fraction::new(6, 1000));
        assert_eq!(gst.latitude_error, None);
        assert_eq!(gst.altitude_error, None);
    }

    #[test]
    fn test_gst_errors() {
        let cases = [
            ("024603.00,3.2,6.6,4.7,47.3,5.8,5.6,2x", 8, DecodeErrorReason::FieldFormat),
            (
                "024603.00,3.2,6.6,4.7,47.3,5.8,5.6,22.0,1",
                9,
                DecodeErrorReason::FieldCountMismatch { found: 9 },
            ),
        ];

        for (body, field_index, reason) in cases {
            assert_eq!(
                decode(body),
                Err(DecodeError::new(SentenceKind::GST, field_index, reason)),
                "{body:?}"
            );
        }
    }
}
