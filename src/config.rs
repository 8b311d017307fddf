//! # Pipeline Configuration
//!
//! Limits shared by the framer and the decoder, and the [`Config`] handed to
//! the [`Dispatcher`](crate::Dispatcher).

use crate::ChecksumMode;

/// Longest line the receiver may send, terminator included.
pub const MAX_LINE_LEN: usize = 255;

/// Bytes of one line kept by the framer: [`MAX_LINE_LEN`] less the terminator.
pub const MAX_LINE_PAYLOAD: usize = MAX_LINE_LEN - 1;

/// Century added to the two-digit years of `ddmmyy` dates.
pub const DEFAULT_CENTURY: u16 = 2000;

/// How sentences are checked and decoded.
///
/// The default accepts sentences without a checksum field, still rejects a
/// checksum that does not match, and places two-digit years in
/// [`DEFAULT_CENTURY`].
///
/// ```rust
/// use nmea0183_reader::{ChecksumMode, Config};
///
/// let config = Config::new().strict(true).with_century(1900);
/// assert_eq!(config.checksum_mode, ChecksumMode::Required);
/// assert_eq!(config.century, 1900);
/// assert!(!Config::default().is_strict());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether a `*CC` checksum field is required.
    pub checksum_mode: ChecksumMode,
    /// Century for two-digit years.
    pub century: u16,
}

impl Config {
    pub fn new() -> Self {
        Config {
            checksum_mode: ChecksumMode::default(),
            century: DEFAULT_CENTURY,
        }
    }

    /// Strict mode requires every sentence to carry a valid checksum.
    pub fn strict(self, strict: bool) -> Self {
        self.with_checksum_mode(ChecksumMode::from_strict(strict))
    }

    pub fn with_checksum_mode(mut self, checksum_mode: ChecksumMode) -> Self {
        self.checksum_mode = checksum_mode;
        self
    }

    pub fn with_century(mut self, century: u16) -> Self {
        self.century = century;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.checksum_mode == ChecksumMode::Required
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let cases = [
            (Config::new(), ChecksumMode::Optional, DEFAULT_CENTURY),
            (Config::new().strict(true), ChecksumMode::Required, DEFAULT_CENTURY),
            (Config::new().strict(true).strict(false), ChecksumMode::Optional, DEFAULT_CENTURY),
            (
                Config::new().with_checksum_mode(ChecksumMode::Required).with_century(1900),
                ChecksumMode::Required,
                1900,
            ),
        ];

        for (config, checksum_mode, century) in cases {
            assert_eq!(config.checksum_mode, checksum_mode);
            assert_eq!(config.century, century);
            assert_eq!(config.is_strict(), checksum_mode == ChecksumMode::Required);
        }
    }

    #[test]
    fn test_line_limits() {
        assert_eq!(MAX_LINE_PAYLOAD, 254);
        assert_eq!(Config::default(), Config::new());
    }
}
