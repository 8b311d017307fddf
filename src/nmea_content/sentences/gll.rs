#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{
        Coordinate, FaaMode, Status, TimeOfDay,
        parse::{latitude, longitude},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// The FAA mode (7) is only sent from NMEA 2.3 on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(GLL))]
pub struct GLL {
    #[nmea(with(latitude))]
    pub latitude: Option<Coordinate>,
    #[nmea(with(longitude))]
    pub longitude: Option<Coordinate>,
    /// Fix time in UTC
    pub fix_time: Option<TimeOfDay>,
    /// Status Mode Indicator
    pub status: Option<Status>,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl GLL {
    pub fn is_valid(&self) -> bool {
        self.status == Some(Status::Valid)
    }
}
