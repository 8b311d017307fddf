#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, DecodeRecord, Fields, SentenceKind,
    nmea_content::{FixType, Fraction, SelectionMode},
};

/// Number of satellite ID fields in a GSA sentence.
pub const SATELLITE_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17  18
///         | | |                         |  |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,h*hh<CR><LF>
/// ```
///
/// Fields 3 to 14 hold the IDs of the satellites used in the fix, empty slots
/// are skipped. The system ID (18) is only sent from NMEA 4.1 on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode, manual or automatic 2D/3D
    pub selection_mode: Option<SelectionMode>,
    /// Fix type
    pub fix_type: Option<FixType>,
    /// IDs of the satellites used in the fix
    pub satellites: heapless::Vec<u8, SATELLITE_SLOTS>,
    /// Position dilution of precision
    pub pdop: Option<Fraction>,
    /// Horizontal dilution of precision
    pub hdop: Option<Fraction>,
    /// Vertical dilution of precision
    pub vdop: Option<Fraction>,
    /// GNSS system ID
    pub system_id: Option<u8>,
}

impl DecodeRecord for GSA {
    const KIND: SentenceKind = SentenceKind::GSA;

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let mut cursor = fields.cursor();

        let selection_mode = cursor.next()?;
        let fix_type = cursor.next()?;

        let mut slots: [Option<u8>; SATELLITE_SLOTS] = [None; SATELLITE_SLOTS];
        for slot in &mut slots {
            *slot = cursor.next()?;
        }

        let pdop = cursor.next()?;
        let hdop = cursor.next()?;
        let vdop = cursor.next()?;
        let system_id = cursor.next()?;
        cursor.finish()?;

        Ok(GSA {
            selection_mode,
            fix_type,
            satellites: slots.into_iter().flatten().collect(),
            pdop,
            hdop,
            vdop,
            system_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeErrorReason;

    fn decode(body: &str) -> Result<GSA, DecodeError> {
        GSA::decode(&Fields::split(SentenceKind::GSA, body).unwrap())
    }

    #[test]
    fn test_gsa_parsing() {
        let gsa = decode("A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1").unwrap();

        assert_eq!(gsa.selection_mode, Some(SelectionMode::Automatic));
        assert_eq!(gsa.fix_type, Some(FixType::Fix3D));
        assert_eq!(gsa.satellites.as_slice(), &[4, 5, 9, 12, 24]);
        assert_eq!(gsa.pdop, Fraction::new(25, 10));
        assert_eq!(gsa.hdop, Fraction::new(13, 10));
        assert_eq!(gsa.vdop, Fraction::new(21, 10));
        assert_eq!(gsa.system_id, None);
    }

    #[test]
    fn test_gsa_versions() {
        let cases = [
            ("A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", None),
            ("A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,1", Some(1)),
            ("M,3,65,66,67,,,,,,,,,,1.2,0.8,0.9,2", Some(2)),
        ];

        for (body, system_id) in cases {
            let gsa = decode(body).unwrap_or_else(|e| panic!("{body:?}: {e}"));
            assert_eq!(gsa.system_id, system_id, "{body:?}");
        }
    }

    #[test]
    fn test_gsa_no_fix() {
        let gsa = decode("A,1,,,,,,,,,,,,,,,").unwrap();

        assert_eq!(gsa.fix_type, Some(FixType::NoFix));
        assert!(gsa.satellites.is_empty());
        assert_eq!(gsa.pdop, None);
    }

    #[test]
    fn test_gsa_errors() {
        let cases = [
            ("X,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", 1, DecodeErrorReason::FieldFormat),
            ("A,4,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", 2, DecodeErrorReason::FieldFormat),
            ("A,3,04,05,,09,312,,,24,,,,,2.5,1.3,2.1", 7, DecodeErrorReason::FieldFormat),
            (
                "A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,1,0",
                19,
                DecodeErrorReason::FieldCountMismatch { found: 19 },
            ),
        ];

        for (body, field_index, reason) in cases {
            assert_eq!(
                decode(body),
                Err(DecodeError::new(SentenceKind::GSA, field_index, reason)),
                "{body:?}"
            );
        }
    }
}
