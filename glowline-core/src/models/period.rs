//! Aggregation periods.
//!
//! The API serves readings summarized into time buckets. Each bucket size
//! has an ISO-8601 wire code and a maximum span that a single query at that
//! granularity may cover; longer ranges have to be split into multiple
//! queries (see [`crate::range::TimeRange::windows`]).

use std::fmt;
use std::str::FromStr;

/// Seconds in one day.
const DAY_SECS: i64 = 86_400;

// ============================================================================
// Period
// ============================================================================

/// Aggregation granularity for readings queries.
///
/// Each enumerated period carries the wire code the API expects and the
/// maximum number of seconds one query at that granularity may span. The
/// [`Period::Custom`] variant passes an arbitrary wire code through with no
/// span limit, so the whole requested range is fetched as a single window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Period {
    /// Minute level (electricity only).
    Minute,
    /// Half-hour level.
    HalfHour,
    /// Hour level.
    Hour,
    /// Day level.
    Day,
    /// Week level, weeks starting Monday.
    Week,
    /// Month level.
    Month,
    /// Year level.
    Year,
    /// Caller-supplied wire code with no span limit.
    Custom(String),
}

impl Period {
    /// Returns the wire-format period code sent to the API.
    pub fn code(&self) -> &str {
        match self {
            Self::Minute => "PT1M",
            Self::HalfHour => "PT30M",
            Self::Hour => "PT1H",
            Self::Day => "P1D",
            Self::Week => "P1W",
            Self::Month => "P1M",
            Self::Year => "P1Y",
            Self::Custom(code) => code,
        }
    }

    /// Returns the maximum seconds a single query at this granularity may
    /// cover, or `None` for [`Period::Custom`].
    pub fn max_span_secs(&self) -> Option<i64> {
        let span = match self {
            Self::Minute => 2 * DAY_SECS,
            Self::HalfHour => 10 * DAY_SECS,
            Self::Hour | Self::Day => 31 * DAY_SECS,
            Self::Week => 42 * DAY_SECS,
            Self::Month | Self::Year => 366 * DAY_SECS,
            Self::Custom(_) => return None,
        };
        Some(span)
    }

    /// Returns all enumerated periods (excludes [`Period::Custom`]).
    pub fn all() -> &'static [Period] {
        &[
            Self::Minute,
            Self::HalfHour,
            Self::Hour,
            Self::Day,
            Self::Week,
            Self::Month,
            Self::Year,
        ]
    }

    /// Resolves a wire code to its enumerated period, falling back to
    /// [`Period::Custom`] for codes this crate does not know about.
    pub fn from_code(code: &str) -> Self {
        match code {
            "PT1M" => Self::Minute,
            "PT30M" => Self::HalfHour,
            "PT1H" => Self::Hour,
            "P1D" => Self::Day,
            "P1W" => Self::Week,
            "P1M" => Self::Month,
            "P1Y" => Self::Year,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(Period::Minute.code(), "PT1M");
        assert_eq!(Period::HalfHour.code(), "PT30M");
        assert_eq!(Period::Hour.code(), "PT1H");
        assert_eq!(Period::Day.code(), "P1D");
        assert_eq!(Period::Week.code(), "P1W");
        assert_eq!(Period::Month.code(), "P1M");
        assert_eq!(Period::Year.code(), "P1Y");
        assert_eq!(Period::Custom("P2D".to_string()).code(), "P2D");
    }

    #[test]
    fn test_half_hour_span_is_ten_days() {
        assert_eq!(Period::HalfHour.max_span_secs(), Some(864_000));
    }

    #[test]
    fn test_every_enumerated_period_has_a_span() {
        for period in Period::all() {
            assert!(
                period.max_span_secs().is_some(),
                "{period} has no max span"
            );
        }
    }

    #[test]
    fn test_custom_has_no_span() {
        let period = Period::Custom("PT15M".to_string());
        assert_eq!(period.max_span_secs(), None);
    }

    #[test]
    fn test_from_code_roundtrip() {
        for period in Period::all() {
            assert_eq!(&Period::from_code(period.code()), period);
        }
    }

    #[test]
    fn test_unknown_code_becomes_custom() {
        let period = Period::from_code("PT5M");
        assert_eq!(period, Period::Custom("PT5M".to_string()));
    }

    #[test]
    fn test_parse_via_fromstr() {
        let period: Period = "P1D".parse().unwrap();
        assert_eq!(period, Period::Day);
    }
}
