#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::rmc::KPH_PER_KNOT;
use crate::{
    self as nmea0183_reader, DecodeRecord,
    nmea_content::{FaaMode, Fraction},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// Every value is followed by its unit letter. The FAA mode (9) is only sent
/// from NMEA 2.3 on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeRecord)]
#[nmea(kind(VTG))]
pub struct VTG {
    #[nmea(unit('T'))]
    /// Course over ground in degrees true
    pub true_track: Option<Fraction>,
    #[nmea(unit('M'))]
    /// Course over ground in degrees magnetic
    pub magnetic_track: Option<Fraction>,
    #[nmea(unit('N'))]
    /// Speed over ground in knots
    pub speed_knots: Option<Fraction>,
    #[nmea(unit('K'))]
    /// Speed over ground in kilometres per hour
    pub speed_kph: Option<Fraction>,
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl VTG {
    /// Speed in knots, converted from km/h when only that was sent.
    pub fn knots(&self) -> Option<f32> {
        self.speed_knots
            .map(|knots| knots.to_f32())
            .or_else(|| self.speed_kph.map(|kph| kph.to_f32() / KPH_PER_KNOT))
    }

    /// Speed in km/h, converted from knots when only that was sent.
    pub fn kph(&self) -> Option<f32> {
        self.speed_kph
            .map(|kph| kph.to_f32())
            .or_else(|| self.speed_knots.map(|knots| knots.to_f32() * KPH_PER_KNOT))
    }
}
