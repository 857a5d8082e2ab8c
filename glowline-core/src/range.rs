//! Time ranges and query windowing.
//!
//! The API caps how much time one readings query may cover, and the cap
//! depends on the aggregation period. [`TimeRange::windows`] splits a
//! requested range into consecutive sub-ranges that respect the cap, so a
//! caller can ask for an arbitrary span and issue one query per window.

use chrono::{TimeZone, Utc};

use crate::error::CoreError;
use crate::models::Period;

// ============================================================================
// Time Range
// ============================================================================

/// Half-open `[start, end)` range of UTC epoch seconds.
///
/// Construction enforces `start < end`, so every value of this type is a
/// non-empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: i64,
    end: i64,
}

impl TimeRange {
    /// Creates a range covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyRange`] when `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self, CoreError> {
        if start >= end {
            return Err(CoreError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Internal constructor for sub-ranges already known to be non-empty.
    fn unchecked(start: i64, end: i64) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Range start (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Range end (exclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Covered duration in seconds.
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }

    /// Splits this range into consecutive windows no longer than the
    /// period's maximum query span.
    ///
    /// Window `k` covers `[start + k*W, min(start + (k+1)*W, end))`, so
    /// windows are contiguous, never overlap, and the last one is clipped to
    /// the range end. A period with no span limit ([`Period::Custom`])
    /// produces exactly one window covering the whole range.
    pub fn windows(&self, period: &Period) -> Windows {
        let span = period
            .max_span_secs()
            .unwrap_or_else(|| self.duration_secs());
        Windows {
            cursor: self.start,
            end: self.end,
            span,
        }
    }
}

// ============================================================================
// Windows Iterator
// ============================================================================

/// Iterator over the query windows of a [`TimeRange`].
#[derive(Debug, Clone)]
pub struct Windows {
    cursor: i64,
    end: i64,
    span: i64,
}

impl Iterator for Windows {
    type Item = TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let start = self.cursor;
        let end = start.saturating_add(self.span).min(self.end);
        self.cursor = end;
        Some(TimeRange::unchecked(start, end))
    }
}

// ============================================================================
// Timestamp Formatting
// ============================================================================

/// Formats an epoch timestamp the way the readings endpoint expects its
/// `from`/`to` parameters: ISO-8601 in UTC with no offset suffix, e.g.
/// `2020-01-17T10:24:38`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimestamp`] for values chrono cannot
/// represent.
pub fn format_utc(ts: i64) -> Result<String, CoreError> {
    let datetime = Utc
        .timestamp_opt(ts, 0)
        .single()
        .ok_or(CoreError::InvalidTimestamp(ts))?;
    Ok(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(range: TimeRange, period: &Period) -> Vec<(i64, i64)> {
        range
            .windows(period)
            .map(|w| (w.start(), w.end()))
            .collect()
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(matches!(
            TimeRange::new(100, 100),
            Err(CoreError::EmptyRange { start: 100, end: 100 })
        ));
        assert!(TimeRange::new(200, 100).is_err());
    }

    #[test]
    fn test_single_window_when_range_fits() {
        let range = TimeRange::new(0, 3600).unwrap();
        let windows = collect(range, &Period::Day);
        assert_eq!(windows, vec![(0, 3600)]);
    }

    #[test]
    fn test_half_hour_splits_at_ten_days() {
        // 2.5x the 10-day cap: expect three windows, the last clipped.
        let range = TimeRange::new(0, 864_000 * 5 / 2).unwrap();
        let windows = collect(range, &Period::HalfHour);
        assert_eq!(
            windows,
            vec![(0, 864_000), (864_000, 1_728_000), (1_728_000, 2_160_000)]
        );
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_window() {
        let range = TimeRange::new(0, 864_000 * 3).unwrap();
        let windows = collect(range, &Period::HalfHour);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows.last(), Some(&(1_728_000, 2_592_000)));
    }

    #[test]
    fn test_custom_period_is_one_window() {
        let range = TimeRange::new(100, 200).unwrap();
        let period = Period::Custom("PT7M".to_string());
        assert_eq!(collect(range, &period), vec![(100, 200)]);
    }

    #[test]
    fn test_windows_partition_the_range() {
        let range = TimeRange::new(1_579_261_478, 1_579_261_478 + 100 * 86_400).unwrap();
        let period = Period::Hour;
        let span = period.max_span_secs().unwrap();

        let windows = collect(range, &period);
        assert_eq!(windows.first().unwrap().0, range.start());
        assert_eq!(windows.last().unwrap().1, range.end());
        for pair in windows.windows(2) {
            // contiguous, non-overlapping
            assert_eq!(pair[0].1, pair[1].0);
        }
        for (start, end) in &windows {
            assert!(end - start <= span);
            assert!(start < end);
        }
    }

    #[test]
    fn test_nonzero_start_offset() {
        let range = TimeRange::new(500, 500 + 864_000 + 1).unwrap();
        let windows = collect(range, &Period::HalfHour);
        assert_eq!(windows, vec![(500, 500 + 864_000), (500 + 864_000, 500 + 864_000 + 1)]);
    }

    #[test]
    fn test_format_utc() {
        assert_eq!(format_utc(0).unwrap(), "1970-01-01T00:00:00");
        assert_eq!(format_utc(1_579_261_478).unwrap(), "2020-01-17T11:44:38");
    }

    #[test]
    fn test_format_utc_has_no_offset_suffix() {
        let formatted = format_utc(1_579_261_478).unwrap();
        assert!(!formatted.ends_with('Z'));
        assert!(!formatted.contains('+'));
    }
}
