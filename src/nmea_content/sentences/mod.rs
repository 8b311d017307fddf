//! # Sentence Records
//!
//! One record type per supported sentence, each implementing [`DecodeRecord`],
//! and the [`ParsedSentence`] enum over all of them.
//!
//! Records are decoded from the [`Fields`] of a sentence whose frame and
//! checksum were already checked:
//!
//! ```rust
//! use nmea0183_reader::{Fields, ParsedSentence, SentenceKind, decode};
//!
//! let fields = Fields::split(SentenceKind::ZDA, "201530.00,04,07,2002,00,00").unwrap();
//! match decode(&fields) {
//!     Ok(ParsedSentence::ZDA(zda)) => {
//!         assert_eq!(zda.date.map(|date| date.full_year()), Some(2002));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Supported Sentence Types
//!
//! | Variant      | Sentence Type                                           |
//! |--------------|---------------------------------------------------------|
//! | RMC([`RMC`]) | Recommended Minimum Specific GNSS Data                  |
//! | ZDA([`ZDA`]) | Time & Date - UTC, day, month, year and local time zone |
//! | GGA([`GGA`]) | Global Positioning System Fix Data                      |
//! | VTG([`VTG`]) | Course Over Ground & Ground Speed                       |
//! | GSV([`GSV`]) | GNSS Satellites in View                                 |
//! | GST([`GST`]) | GNSS Pseudorange Error Statistics                       |
//! | GLL([`GLL`]) | Geographic Position - Latitude/Longitude                |
//! | GSA([`GSA`]) | GNSS DOP and Active Satellites                          |

use crate::{DecodeError, DecodeErrorReason, Fields, SentenceKind};

mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::{GSA, SATELLITE_SLOTS};
pub use gst::GST;
pub use gsv::{GSV, MAX_SATELLITES, SatelliteInView};
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

/// A record decoded from the fields of one sentence.
///
/// Usually derived with `#[derive(DecodeRecord)]`; see the derive's
/// documentation for the field attributes.
pub trait DecodeRecord: Sized {
    /// The sentence this record is decoded from.
    const KIND: SentenceKind;

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError>;
}

/// A record that is one of the [`ParsedSentence`] variants.
pub trait Record: DecodeRecord {
    /// Borrows the record out of a sentence of the same kind.
    fn extract(sentence: &ParsedSentence) -> Option<&Self>;
}

macro_rules! sentences {
    ($( $(#[$meta:meta])* $variant:ident ),* $(,)?) => {
        /// A decoded sentence of any supported kind.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum ParsedSentence {
            $(
                $(#[$meta])*
                $variant($variant),
            )*
        }

        impl ParsedSentence {
            pub fn kind(&self) -> SentenceKind {
                match self {
                    $(ParsedSentence::$variant(_) => SentenceKind::$variant,)*
                }
            }
        }

        /// Decodes the fields with the record type their kind selects.
        ///
        /// `Unknown` and `Invalid` fail with [`DecodeErrorReason::Unsupported`].
        pub fn decode(fields: &Fields<'_>) -> Result<ParsedSentence, DecodeError> {
            match fields.kind() {
                $(SentenceKind::$variant => $variant::decode(fields).map(ParsedSentence::$variant),)*
                kind => Err(DecodeError::new(kind, 0, DecodeErrorReason::Unsupported)),
            }
        }

        $(
            impl Record for $variant {
                fn extract(sentence: &ParsedSentence) -> Option<&Self> {
                    match sentence {
                        ParsedSentence::$variant(record) => Some(record),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for ParsedSentence {
                fn from(record: $variant) -> Self {
                    ParsedSentence::$variant(record)
                }
            }
        )*
    };
}

sentences! {
    /// Recommended Minimum Specific GNSS Data
    RMC,
    /// Time & Date
    ZDA,
    /// Global Positioning System Fix Data
    GGA,
    /// Course Over Ground & Ground Speed
    VTG,
    /// GNSS Satellites in View
    GSV,
    /// GNSS Pseudorange Error Statistics
    GST,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GNSS DOP and Active Satellites
    GSA,
}
