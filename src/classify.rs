//! Sentence classification: which decoder, if any, a line belongs to.

use nom::Parser;

use crate::{ChecksumMode, sentence};

macro_rules! sentence_kinds {
    ($( $(#[$meta:meta])* $id:literal => $variant:ident ),* $(,)?) => {
        /// The kind of a sentence, chosen from its three-letter identifier.
        ///
        /// The talker prefix is ignored: `$GPGGA` and `$GNGGA` are both [`SentenceKind::GGA`].
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SentenceKind {
            $(
                $(#[$meta])*
                $variant,
            )*
            /// A well-formed sentence whose identifier has no decoder.
            Unknown,
            /// Not a well-formed sentence, or its checksum failed.
            Invalid,
        }

        impl SentenceKind {
            /// Every kind that has a decoder.
            pub const DECODABLE: &'static [SentenceKind] = &[$(SentenceKind::$variant),*];

            /// Maps a three-letter sentence identifier to its kind.
            pub fn from_sentence_id(id: &str) -> Self {
                match id {
                    $($id => SentenceKind::$variant,)*
                    _ => SentenceKind::Unknown,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(SentenceKind::$variant => $id,)*
                    SentenceKind::Unknown => "unknown",
                    SentenceKind::Invalid => "invalid",
                }
            }

            /// `true` for every kind except `Unknown` and `Invalid`.
            pub fn is_decodable(&self) -> bool {
                !matches!(self, SentenceKind::Unknown | SentenceKind::Invalid)
            }
        }
    };
}

sentence_kinds! {
    /// Recommended Minimum Specific GNSS Data
    "RMC" => RMC,
    /// Time & Date
    "ZDA" => ZDA,
    /// Global Positioning System Fix Data
    "GGA" => GGA,
    /// Course Over Ground & Ground Speed
    "VTG" => VTG,
    /// GNSS Satellites in View
    "GSV" => GSV,
    /// GNSS Pseudorange Error Statistics
    "GST" => GST,
    /// Geographic Position - Latitude/Longitude
    "GLL" => GLL,
    /// GNSS DOP and Active Satellites
    "GSA" => GSA,
}

impl std::fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the kind of a line.
///
/// The line must start with `$` or `!` followed by an address of at least five
/// upper-case alphanumerics. Anything else, including non-ASCII input, is
/// [`SentenceKind::Invalid`].
///
/// With `strict`, the checksum must be present and correct. Otherwise a
/// missing checksum is accepted, but a present one must still match.
/// A trailing `\r\n` is ignored.
///
/// ```rust
/// use nmea0183_reader::{SentenceKind, classify};
///
/// assert_eq!(classify("$GPGGA,data*6A", true), SentenceKind::GGA);
/// assert_eq!(classify("$GPGGA,data", true), SentenceKind::Invalid);
/// assert_eq!(classify("$GPGGA,data", false), SentenceKind::GGA);
/// assert_eq!(classify("$GPGGA,data*00", false), SentenceKind::Invalid);
/// assert_eq!(classify("$GPXYZ,data", false), SentenceKind::Unknown);
/// ```
pub fn classify(line: &str, strict: bool) -> SentenceKind {
    let line = line.trim_end_matches(['\r', '\n']);

    match sentence(ChecksumMode::from_strict(strict)).parse(line) {
        Ok((_, frame)) => frame.kind(),
        Err(_) => SentenceKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let cases = [
            (
                "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
                SentenceKind::RMC,
                SentenceKind::RMC,
            ),
            (
                "$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A*7B",
                SentenceKind::RMC,
                SentenceKind::RMC,
            ),
            (
                "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
                SentenceKind::GGA,
                SentenceKind::GGA,
            ),
            ("$GPZDA,201530.00,04,07,2002,00,00*60", SentenceKind::ZDA, SentenceKind::ZDA),
            ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", SentenceKind::VTG, SentenceKind::VTG),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A*31", SentenceKind::GLL, SentenceKind::GLL),
            (
                "$GPGST,024603.00,3.2,6.6,4.7,47.3,5.8,5.6,22.0*58",
                SentenceKind::GST,
                SentenceKind::GST,
            ),
            (
                "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
                SentenceKind::GSA,
                SentenceKind::GSA,
            ),
            ("$GPGSV,2,1,08", SentenceKind::GSV, SentenceKind::Invalid),
            ("$GPXXX,bad*00", SentenceKind::Invalid, SentenceKind::Invalid),
            ("$GPXXX,bad*04", SentenceKind::Unknown, SentenceKind::Unknown),
            ("$GPXXX,bad", SentenceKind::Unknown, SentenceKind::Invalid),
            ("$GPGG", SentenceKind::Invalid, SentenceKind::Invalid),
            ("GPGGA,data*6A", SentenceKind::Invalid, SentenceKind::Invalid),
            ("$gpgga,data*6A", SentenceKind::Invalid, SentenceKind::Invalid),
            ("$GPGGA,dätä", SentenceKind::Invalid, SentenceKind::Invalid),
            ("", SentenceKind::Invalid, SentenceKind::Invalid),
            ("$", SentenceKind::Invalid, SentenceKind::Invalid),
        ];

        for (line, lenient, strict) in cases {
            assert_eq!(classify(line, false), lenient, "lenient {line:?}");
            assert_eq!(classify(line, true), strict, "strict {line:?}");
        }
    }

    #[test]
    fn test_classify_ignores_line_terminator() {
        assert_eq!(classify("$GPGGA,data*6A\r\n", true), SentenceKind::GGA);
        assert_eq!(classify("$GPGGA,data\n", false), SentenceKind::GGA);
    }

    #[test]
    fn test_classify_talker_ignored() {
        for talker in ["GP", "GN", "GL", "GA", "BD", "P1"] {
            let line = format!("${talker}GSV,1,1,00");
            assert_eq!(classify(&line, false), SentenceKind::GSV, "{line}");
        }
    }

    #[test]
    fn test_sentence_kind_names() {
        for kind in SentenceKind::DECODABLE {
            assert_eq!(SentenceKind::from_sentence_id(kind.as_str()), *kind);
            assert!(kind.is_decodable());
        }
        assert_eq!(SentenceKind::from_sentence_id("DBT"), SentenceKind::Unknown);
        assert_eq!(SentenceKind::Unknown.to_string(), "unknown");
        assert!(!SentenceKind::Invalid.is_decodable());
    }
}
