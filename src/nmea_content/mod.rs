//! # NMEA Content
//!
//! Typed values and per-sentence records decoded from the comma-separated
//! fields of a sentence.
//!
//! - [`values`]: exact decimals ([`Fraction`]), positions ([`Coordinate`]),
//!   [`TimeOfDay`] and [`CalendarDate`].
//! - single-character codes ([`Status`], [`FaaMode`], [`FixQuality`], ...)
//!   defined below.
//! - [`sentences`]: one record per supported sentence and the
//!   [`ParsedSentence`] enum over them.

use nom::Parser;

use crate::{IResult, NmeaParse};

pub mod parse;
pub mod sentences;
pub mod values;

pub use sentences::*;
pub use values::*;

macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The character this value is transmitted as.
            pub fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl NmeaParse for $name {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::branch::alt(($(
                    #[allow(unused_doc_comments)]
                    $(#[$variant_meta])*
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

parsable_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

parsable_enum! {
    /// FAA Mode Indicator, added in NMEA 2.3
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

parsable_enum! {
    /// Navigational Status, RMC field 13 since NMEA 4.1
    pub enum NavStatus {
        /// A - Autonomous
        'A' => Autonomous,
        /// D - Differential
        'D' => Differential,
        /// E - Estimated (dead reckoning)
        'E' => Estimated,
        /// M - Manual input
        'M' => Manual,
        /// N - Not valid
        'N' => NotValid,
        /// S - Simulator
        'S' => Simulator,
        /// V - Valid
        'V' => Valid,
    }
}

parsable_enum! {
    /// GGA fix quality
    pub enum FixQuality {
        /// 0 - Fix not available
        '0' => Invalid,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DGpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

impl FixQuality {
    /// The numeric code as transmitted, `0..=8`.
    pub fn value(&self) -> u8 {
        self.as_char() as u8 - b'0'
    }

    pub fn has_fix(&self) -> bool {
        *self != FixQuality::Invalid
    }
}

parsable_enum! {
    /// GSA selection mode
    pub enum SelectionMode {
        /// M - Manually forced to operate in 2D or 3D
        'M' => Manual,
        /// A - Automatic switching between 2D and 3D
        'A' => Automatic,
    }
}

parsable_enum! {
    /// GSA fix type
    pub enum FixType {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D fix
        '2' => Fix2D,
        /// 3 - 3D fix
        '3' => Fix3D,
    }
}

parsable_enum! {
    /// Hemisphere of a latitude or longitude
    pub enum Hemisphere {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

impl Hemisphere {
    /// `-1` for south and west, `1` otherwise.
    pub fn sign(&self) -> i8 {
        match self {
            Hemisphere::North | Hemisphere::East => 1,
            Hemisphere::South | Hemisphere::West => -1,
        }
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }
}
