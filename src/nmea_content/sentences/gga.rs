#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{
        Coordinate, FixQuality, Fraction, TimeOfDay,
        parse::{latitude, longitude},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(GGA))]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<TimeOfDay>,
    #[nmea(with(latitude))]
    pub latitude: Option<Coordinate>,
    #[nmea(with(longitude))]
    pub longitude: Option<Coordinate>,
    /// GPS Quality Indicator
    pub fix_quality: Option<FixQuality>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<Fraction>,
    #[nmea(unit('M'))]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<Fraction>,
    #[nmea(unit('M'))]
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: Option<Fraction>,
    /// Age of Differential GPS data in seconds, null field when DGPS is not used
    pub age_of_dgps: Option<Fraction>,
    /// Differential reference station ID
    pub ref_station_id: Option<u16>,
}

impl GGA {
    /// `true` when the fix quality reports a position fix.
    pub fn has_fix(&self) -> bool {
        self.fix_quality.is_some_and(|quality| quality.has_fix())
    }
}
