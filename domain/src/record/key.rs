//! Storage key for saved debate records

use crate::core::error::DomainError;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

const PREFIX: &str = "debate_";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const STAMP_LEN: usize = 15;

/// Timestamp-derived key of a saved record, e.g. `debate_20261019_143005`.
///
/// Keys have one-second resolution. A second save within the same second
/// gets a sequence suffix (`debate_20261019_143005_1`) instead of
/// overwriting. Ordering is chronological, then by sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    stamp: NaiveDateTime,
    sequence: u32,
}

impl RecordKey {
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        let naive = timestamp.naive_utc();
        Self {
            stamp: naive.with_nanosecond(0).unwrap_or(naive),
            sequence: 0,
        }
    }

    /// The key to try when this one is already taken.
    pub fn next(&self) -> Self {
        Self {
            stamp: self.stamp,
            sequence: self.sequence + 1,
        }
    }

    pub fn stamp(&self) -> NaiveDateTime {
        self.stamp
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", PREFIX, self.stamp.format(STAMP_FORMAT))?;
        if self.sequence > 0 {
            write!(f, "_{}", self.sequence)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RecordKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidRecordKey(s.to_string());

        let rest = s.strip_prefix(PREFIX).ok_or_else(invalid)?;
        if rest.len() < STAMP_LEN || !rest.is_char_boundary(STAMP_LEN) {
            return Err(invalid());
        }
        let (stamp, suffix) = rest.split_at(STAMP_LEN);
        let stamp = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).map_err(|_| invalid())?;

        let sequence = match suffix.strip_prefix('_') {
            None if suffix.is_empty() => 0,
            Some(n) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
                n.parse().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        Ok(Self { stamp, sequence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_display() {
        let key = RecordKey::from_timestamp(ts());
        assert_eq!(key.to_string(), "debate_20261019_143005");
        assert_eq!(key.next().to_string(), "debate_20261019_143005_1");
    }

    #[test]
    fn test_parse_roundtrip() {
        let key = RecordKey::from_timestamp(ts()).next().next();
        let parsed: RecordKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
        assert_eq!(parsed.sequence(), 2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "",
            "debate_",
            "record_20261019_143005",
            "debate_20261319_143005",
            "debate_20261019_143005_",
            "debate_20261019_143005x",
            "debate_20261019_143005_a",
        ] {
            assert!(bad.parse::<RecordKey>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_ordering_is_chronological_then_sequence() {
        let early = RecordKey::from_timestamp(ts());
        let later = RecordKey::from_timestamp(ts() + chrono::Duration::seconds(1));
        assert!(early < early.next());
        assert!(early.next() < later);
    }

    #[test]
    fn test_subsecond_precision_dropped() {
        let with_millis = ts() + chrono::Duration::milliseconds(750);
        assert_eq!(
            RecordKey::from_timestamp(with_millis),
            RecordKey::from_timestamp(ts())
        );
    }
}
