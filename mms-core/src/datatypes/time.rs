//! MMS time representations
//!
//! MMS carries time as `UtcTime` (8 octets: seconds, binary fraction, quality)
//! or `BinaryTime` (TimeOfDay, 4 or 6 octets counted from 1984-01-01).
//! Both are printed as generalized time, `YYYYMMDDhhmmss.fffZ`.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use time::macros::format_description;

/// Unix time of the MMS epoch, 1984-01-01T00:00:00Z
const MMS_EPOCH_UNIX_SECS: i64 = 441_763_200;

const MS_PER_DAY: i64 = 86_400_000;

/// Fraction-of-second resolution of `UtcTime` (24 bits)
const FRACTION_SCALE: u64 = 1 << 24;

/// Format a Unix millisecond timestamp as generalized time.
///
/// Timestamps outside the range `time` can represent fall back to the raw
/// millisecond count.
pub fn generalized_time_from_unix_ms(unix_ms: i64) -> String {
    let format = format_description!("[year][month][day][hour][minute][second].[subsecond digits:3]Z");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(unix_ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| unix_ms.to_string())
}

/// MMS UtcTime value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtcTime {
    bytes: [u8; 8],
}

impl UtcTime {
    /// Create from the 8 raw octets
    pub fn from_raw(bytes: [u8; 8]) -> Self {
        Self { bytes }
    }

    /// Create from a Unix millisecond timestamp with quality octet `0`
    pub fn from_unix_ms(unix_ms: u64) -> Self {
        let secs = (unix_ms / 1000) as u32;
        let fraction = ((unix_ms % 1000) * FRACTION_SCALE).div_ceil(1000) as u32;
        let [s0, s1, s2, s3] = secs.to_be_bytes();
        let [_, f0, f1, f2] = fraction.to_be_bytes();
        Self {
            bytes: [s0, s1, s2, s3, f0, f1, f2, 0],
        }
    }

    /// Raw octets
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.bytes
    }

    /// Seconds since the Unix epoch
    pub fn seconds(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Milliseconds part of the binary fraction
    pub fn fraction_ms(&self) -> u32 {
        let fraction = u64::from(u32::from_be_bytes([0, self.bytes[4], self.bytes[5], self.bytes[6]]));
        ((fraction * 1000) / FRACTION_SCALE) as u32
    }

    /// Time quality octet
    pub fn quality(&self) -> u8 {
        self.bytes[7]
    }

    /// Milliseconds since the Unix epoch
    pub fn to_unix_ms(&self) -> i64 {
        i64::from(self.seconds()) * 1000 + i64::from(self.fraction_ms())
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generalized_time_from_unix_ms(self.to_unix_ms()))
    }
}

/// MMS BinaryTime (TimeOfDay) value
///
/// The 4-octet form carries only the time of day; its date is taken as the
/// MMS epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryTime {
    ms_of_day: u32,
    days: Option<u16>,
}

impl BinaryTime {
    /// 4-octet form: milliseconds since midnight
    pub fn time_of_day(ms_of_day: u32) -> Self {
        Self { ms_of_day, days: None }
    }

    /// 6-octet form: milliseconds since midnight and days since 1984-01-01
    pub fn with_date(ms_of_day: u32, days: u16) -> Self {
        Self {
            ms_of_day,
            days: Some(days),
        }
    }

    /// Milliseconds since midnight
    pub fn ms_of_day(&self) -> u32 {
        self.ms_of_day
    }

    /// Days since 1984-01-01, if the date is present
    pub fn days(&self) -> Option<u16> {
        self.days
    }

    /// Milliseconds since the Unix epoch
    pub fn to_unix_ms(&self) -> i64 {
        let days = i64::from(self.days.unwrap_or(0));
        MMS_EPOCH_UNIX_SECS * 1000 + days * MS_PER_DAY + i64::from(self.ms_of_day)
    }
}

impl fmt::Display for BinaryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generalized_time_from_unix_ms(self.to_unix_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generalized_time_format() {
        assert_eq!(generalized_time_from_unix_ms(0), "19700101000000.000Z");
        assert_eq!(
            generalized_time_from_unix_ms(1_700_000_000_123),
            "20231114221320.123Z"
        );
    }

    #[test]
    fn test_utc_time_millis_survive_fraction_encoding() {
        let t = UtcTime::from_unix_ms(1_700_000_000_123);
        assert_eq!(t.seconds(), 1_700_000_000);
        assert_eq!(t.fraction_ms(), 123);
        assert_eq!(t.to_string(), "20231114221320.123Z");
    }

    #[test]
    fn test_binary_time_epoch() {
        assert_eq!(BinaryTime::time_of_day(0).to_string(), "19840101000000.000Z");
        let t = BinaryTime::with_date(3_600_000, 1);
        assert_eq!(t.to_string(), "19840102010000.000Z");
    }
}
