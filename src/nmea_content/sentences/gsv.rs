#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, DecodeErrorReason, DecodeRecord, FieldCursor, Fields, SentenceKind};

/// Most satellites one GSV sentence describes.
pub const MAX_SATELLITES: usize = 4;

/// Fields per satellite: PRN, elevation, azimuth and SNR.
const SATELLITE_FIELDS: usize = 4;

/// GSV - Satellites in view
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,h*hh<CR><LF>
/// ```
///
/// A full view is split over `total_messages` sentences, each describing up
/// to four satellites. NMEA 4.1 adds a signal ID after the last satellite.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Number of sentences in this cycle
    pub total_messages: u8,
    /// Number of this sentence, starting at 1
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellites described by this sentence
    pub satellites: heapless::Vec<SatelliteInView, MAX_SATELLITES>,
    /// GNSS signal ID
    pub signal_id: Option<u8>,
}

/// One satellite of a [`GSV`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteInView {
    /// Satellite ID (PRN)
    pub prn: u8,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north, 000 to 359
    pub azimuth: Option<u16>,
    /// Signal to noise ratio in dB-Hz, empty when not tracking
    pub snr: Option<u8>,
}

impl GSV {
    /// `true` for the last sentence of a cycle.
    pub fn is_last(&self) -> bool {
        self.message_number == self.total_messages
    }
}

/// A group with every field empty is padding and skipped.
fn satellite(cursor: &mut FieldCursor<'_, '_>) -> Result<Option<SatelliteInView>, DecodeError> {
    let (index, text) = cursor.next_text();
    let prn: Option<u8> = cursor.decode(index, text)?;
    let elevation = cursor.next()?;
    let azimuth = cursor.next()?;
    let snr = cursor.next()?;

    match prn {
        Some(prn) => Ok(Some(SatelliteInView {
            prn,
            elevation,
            azimuth,
            snr,
        })),
        None if elevation.is_none() && azimuth.is_none() && snr.is_none() => Ok(None),
        None => Err(cursor.error(index, DecodeErrorReason::FieldFormat)),
    }
}

impl DecodeRecord for GSV {
    const KIND: SentenceKind = SentenceKind::GSV;

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let mut cursor = fields.cursor();

        let total_messages = cursor.next()?;
        let message_number = cursor.next()?;
        let satellites_in_view = cursor.next()?;

        // Whole satellite groups, then at most the signal ID.
        let remaining = cursor.remaining();
        let groups = (remaining / SATELLITE_FIELDS).min(MAX_SATELLITES);
        if remaining - groups * SATELLITE_FIELDS > 1 {
            return Err(cursor.error(
                cursor.position() + groups * SATELLITE_FIELDS + 1,
                DecodeErrorReason::FieldCountMismatch {
                    found: fields.len(),
                },
            ));
        }

        let satellites = (0..groups)
            .map(|_| satellite(&mut cursor))
            .collect::<Result<heapless::Vec<_, MAX_SATELLITES>, _>>()?
            .into_iter()
            .flatten()
            .collect();

        let signal_id = cursor.next()?;
        cursor.finish()?;

        Ok(GSV {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
            signal_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<GSV, DecodeError> {
        GSV::decode(&Fields::split(SentenceKind::GSV, body).unwrap())
    }

    fn sat(prn: u8, elevation: u8, azimuth: u16, snr: Option<u8>) -> SatelliteInView {
        SatelliteInView {
            prn,
            elevation: Some(elevation),
            azimuth: Some(azimuth),
            snr,
        }
    }

    #[test]
    fn test_gsv_parsing() {
        let gsv = decode("2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45").unwrap();

        assert_eq!(gsv.total_messages, 2);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 8);
        assert!(!gsv.is_last());
        assert_eq!(
            gsv.satellites.as_slice(),
            &[
                sat(1, 40, 83, Some(46)),
                sat(2, 17, 308, Some(41)),
                sat(12, 7, 344, Some(39)),
                sat(14, 22, 228, Some(45)),
            ]
        );
        assert_eq!(gsv.signal_id, None);

        let gsv = decode("2,2,08,15,30,050,47,18,45,120,,19,12,180,30,20,05,270,").unwrap();

        assert!(gsv.is_last());
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(gsv.satellites[1], sat(18, 45, 120, None));
        assert_eq!(gsv.satellites[3], sat(20, 5, 270, None));
    }

    #[test]
    fn test_gsv_group_counts() {
        let cases = [
            ("1,1,00", 0, None),
            ("1,1,00,1", 0, Some(1)),
            ("3,3,09,32,11,062,", 1, None),
            ("3,3,09,32,11,062,,7", 1, Some(7)),
            ("2,2,06,26,12,226,40,29,,,", 2, None),
            ("2,2,06,26,12,226,40,,,,", 1, None),
            ("2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,1", 4, Some(1)),
        ];

        for (body, count, signal_id) in cases {
            let gsv = decode(body).unwrap_or_else(|e| panic!("{body:?}: {e}"));
            assert_eq!(gsv.satellites.len(), count, "{body:?}");
            assert_eq!(gsv.signal_id, signal_id, "{body:?}");
        }
    }

    #[test]
    fn test_gsv_errors() {
        let cases = [
            ("2,1", 3, DecodeErrorReason::FieldCountMismatch { found: 2 }),
            ("x,1,08", 1, DecodeErrorReason::FieldFormat),
            ("1,1,01,32,11", 5, DecodeErrorReason::FieldCountMismatch { found: 5 }),
            ("1,1,01,,11,062,30", 4, DecodeErrorReason::FieldFormat),
            ("1,1,01,32,x,062,30", 5, DecodeErrorReason::FieldFormat),
            (
                "2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,1,0",
                21,
                DecodeErrorReason::FieldCountMismatch { found: 21 },
            ),
            (
                "3,1,12,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,15,30,050,47",
                21,
                DecodeErrorReason::FieldCountMismatch { found: 23 },
            ),
        ];

        for (body, field_index, reason) in cases {
            assert_eq!(
                decode(body),
                Err(DecodeError::new(SentenceKind::GSV, field_index, reason)),
                "{body:?}"
            );
        }
    }
}
