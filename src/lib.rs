//! # NMEA 0183 Reader
//!
//! This library turns the byte stream of a serial GPS receiver into typed
//! NMEA 0183 records and routes them to handlers:
//!
//! ```text
//! bytes -> LineFramer -> RawLine -> frame + checksum -> SentenceKind
//!       -> Fields -> record (RMC, GGA, ...) -> Dispatcher -> handler
//! ```
//!
//! - [`LineFramer`] cuts the stream into bounded lines and resynchronizes
//!   after an overlong one.
//! - [`sentence`] and [`classify`] check the `$`/`!` frame, the `*CC`
//!   checksum and the address, and pick the [`SentenceKind`].
//! - [`decode`] splits the fields and decodes them into a [`ParsedSentence`].
//!   Numbers are kept exact as [`Fraction`]s and empty fields are `None`.
//! - [`Dispatcher`] calls the handler registered for each record type, and an
//!   unhandled handler for everything else.
//! - [`NmeaReader`] runs the loop over any [`std::io::Read`] source.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::atomic::AtomicBool;
//!
//! use nmea0183_reader::{Config, Dispatcher, GGA, NmeaReader, RMC};
//!
//! let input: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
//!                      $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//!
//! let mut positions = Vec::new();
//! let mut fix_quality = None;
//!
//! let mut dispatcher = Dispatcher::new(Config::default())
//!     .on::<RMC>(|rmc| positions.extend(rmc.latitude.zip(rmc.longitude)))
//!     .on::<GGA>(|gga| fix_quality = gga.fix_quality);
//!
//! NmeaReader::new(input)
//!     .run(&mut dispatcher, &AtomicBool::new(false))
//!     .unwrap();
//! drop(dispatcher);
//!
//! let (latitude, longitude) = positions[0];
//! assert!((latitude.to_degrees() - 48.1173).abs() < 1e-6);
//! assert!((longitude.to_degrees() - 11.5167).abs() < 1e-4);
//! assert_eq!(fix_quality.map(|quality| quality.value()), Some(1));
//! ```

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod framer;
pub mod logging;
mod nmea0183;
pub mod nmea_content;
pub mod parse;
pub mod reader;

pub use classify::{SentenceKind, classify};
pub use config::{Config, DEFAULT_CENTURY, MAX_LINE_LEN, MAX_LINE_PAYLOAD};
pub use dispatch::{Dispatcher, Outcome, Unhandled};
pub use error::{
    ChecksumError, ClassifyError, DecodeError, DecodeErrorReason, Error, FramingError, IResult,
    SentenceError,
};
pub use fields::{FieldCursor, Fields, MAX_FIELDS, decode_field};
pub use framer::{LineFramer, RawLine};
pub use nmea0183::*;
pub use nmea0183_reader_derive::DecodeRecord;
pub use nmea_content::{
    CalendarDate, Coordinate, DecodeRecord, FaaMode, FixQuality, FixType, Fraction, GGA, GLL,
    GSA, GST, GSV, Hemisphere, NavStatus, ParsedSentence, RMC, Record, SatelliteInView,
    SelectionMode, Status, TimeOfDay, VTG, ZDA, decode,
};
pub use parse::NmeaParse;
pub use reader::NmeaReader;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
