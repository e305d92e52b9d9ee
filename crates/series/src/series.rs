//! Gap-free hourly series covering whole calendar years.

use std::collections::BTreeMap;
use std::ops::{Range, RangeInclusive};

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use smy_calendar::{CalendarMonth, HOURS_PER_DAY, MonthKey, days_in_year};

use crate::channel::Channel;
use crate::error::SeriesError;

/// Multi-channel hourly weather series starting on January 1st 00:00.
///
/// Timestamps are implicit: record `i` is `start + i` hours. A series is
/// therefore chronological, gap-free and duplicate-free by construction.
/// All channels share the same length, which always spans a whole number
/// of calendar years.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    start: NaiveDateTime,
    end_year: i32,
    len: usize,
    channels: BTreeMap<Channel, Vec<f64>>,
}

impl HourlySeries {
    /// Build a series whose first record is `start_year`-01-01 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError`] if there are no channels, channel lengths
    /// differ, or the length is not a whole number of calendar years.
    pub fn new(
        start_year: i32,
        channels: BTreeMap<Channel, Vec<f64>>,
    ) -> Result<Self, SeriesError> {
        let mut iter = channels.iter();
        let Some((_, first)) = iter.next() else {
            return Err(SeriesError::NoChannels);
        };
        let len = first.len();
        for (&channel, values) in iter {
            if values.len() != len {
                return Err(SeriesError::LengthMismatch {
                    channel,
                    expected: len,
                    got: values.len(),
                });
            }
        }

        let start = year_start(start_year)?;
        let end_year = whole_years_end(start_year, len)?;

        Ok(Self {
            start,
            end_year,
            len,
            channels,
        })
    }

    /// Timestamp of the first record.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// First calendar year covered.
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Last calendar year covered.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// All covered calendar years.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year()..=self.end_year
    }

    /// Number of hourly records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a valid series covers at least one year.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values of one channel, if present.
    pub fn channel(&self, channel: Channel) -> Option<&[f64]> {
        self.channels.get(&channel).map(Vec::as_slice)
    }

    /// Mutable values of one channel, if present.
    pub fn channel_mut(&mut self, channel: Channel) -> Option<&mut [f64]> {
        self.channels.get_mut(&channel).map(Vec::as_mut_slice)
    }

    /// Returns true if the channel is present.
    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains_key(&channel)
    }

    /// Channels present, in column order.
    pub fn channel_ids(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.keys().copied()
    }

    /// Iterate over `(channel, values)` in column order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &[f64])> {
        self.channels.iter().map(|(&c, v)| (c, v.as_slice()))
    }

    /// Insert or replace a channel. Returns the previous values, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if `values` does not match
    /// the series length.
    pub fn insert(
        &mut self,
        channel: Channel,
        values: Vec<f64>,
    ) -> Result<Option<Vec<f64>>, SeriesError> {
        if values.len() != self.len {
            return Err(SeriesError::LengthMismatch {
                channel,
                expected: self.len,
                got: values.len(),
            });
        }
        Ok(self.channels.insert(channel, values))
    }

    /// Remove a channel. Returns its values, if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NoChannels`] if it is the last channel.
    pub fn remove(&mut self, channel: Channel) -> Result<Option<Vec<f64>>, SeriesError> {
        if self.channels.len() == 1 && self.channels.contains_key(&channel) {
            return Err(SeriesError::NoChannels);
        }
        Ok(self.channels.remove(&channel))
    }

    /// Timestamp of record `index`, or `None` past the end.
    pub fn timestamp(&self, index: usize) -> Option<NaiveDateTime> {
        if index >= self.len {
            return None;
        }
        let hours = i64::try_from(index).ok()?;
        self.start.checked_add_signed(TimeDelta::hours(hours))
    }

    /// Record index of a timestamp on the hour, or `None` outside the series.
    pub fn index_of(&self, ts: NaiveDateTime) -> Option<usize> {
        if ts.minute() != 0 || ts.second() != 0 || ts.nanosecond() != 0 {
            return None;
        }
        let hours = (ts - self.start).num_hours();
        let index = usize::try_from(hours).ok()?;
        (index < self.len).then_some(index)
    }

    /// Record index of `hour` o'clock on `date`.
    pub fn hour_index(&self, date: NaiveDate, hour: u32) -> Option<usize> {
        self.index_of(date.and_hms_opt(hour, 0, 0)?)
    }

    /// Index range of every hour of a calendar month, leap day included.
    pub fn month_range(&self, key: MonthKey) -> Option<Range<usize>> {
        self.month_prefix(key, key.days())
    }

    /// Index range of a month on the 365-day calendar.
    ///
    /// Identical to [`month_range`](Self::month_range) except for leap-year
    /// February, where February 29th is left out.
    pub fn noleap_month_range(&self, key: MonthKey) -> Option<Range<usize>> {
        self.month_prefix(key, key.month().noleap_days())
    }

    fn month_prefix(&self, key: MonthKey, days: u8) -> Option<Range<usize>> {
        let first = NaiveDate::from_ymd_opt(key.year(), u32::from(key.month().get()), 1)?;
        let start = self.hour_index(first, 0)?;
        let end = start + usize::from(days) * HOURS_PER_DAY;
        (end <= self.len).then_some(start..end)
    }

    /// Every (year, month) of the series with its full index range, in order.
    pub fn month_spans(&self) -> Vec<(MonthKey, Range<usize>)> {
        let mut spans = Vec::with_capacity(self.years().count() * 12);
        let mut start = 0;
        for year in self.years() {
            for month in CalendarMonth::all() {
                let key = MonthKey::new(year, month);
                let end = start + usize::from(key.days()) * HOURS_PER_DAY;
                spans.push((key, start..end));
                start = end;
            }
        }
        spans
    }

    /// Copy of the series restricted to `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError`] if the range is empty or reaches outside
    /// the covered years.
    pub fn slice_years(&self, start: i32, end: i32) -> Result<Self, SeriesError> {
        if start > end {
            return Err(SeriesError::InvalidYearRange { start, end });
        }
        if start < self.start_year() || end > self.end_year {
            return Err(SeriesError::YearsOutOfRange {
                start,
                end,
                first: self.start_year(),
                last: self.end_year,
            });
        }

        let from = hours_between(self.start_year(), start);
        let to = from + hours_between(start, end + 1);
        let channels = self
            .channels
            .iter()
            .map(|(&c, v)| (c, v[from..to].to_vec()))
            .collect();

        Ok(Self {
            start: year_start(start)?,
            end_year: end,
            len: to - from,
            channels,
        })
    }
}

/// Returns true if the timestamp falls on February 29th.
pub fn is_leap_day(ts: NaiveDateTime) -> bool {
    ts.month() == 2 && ts.day() == 29
}

fn year_start(year: i32) -> Result<NaiveDateTime, SeriesError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(SeriesError::UnsupportedYear { year })
}

/// Hours from `from`-01-01 to `to`-01-01.
fn hours_between(from: i32, to: i32) -> usize {
    (from..to)
        .map(|y| usize::from(days_in_year(y)) * HOURS_PER_DAY)
        .sum()
}

/// Last year covered by `len` hours starting at `start_year`.
fn whole_years_end(start_year: i32, len: usize) -> Result<i32, SeriesError> {
    let partial = SeriesError::PartialYear {
        hours: len,
        start_year,
    };
    if len == 0 {
        return Err(partial);
    }
    let mut covered = 0;
    let mut year = start_year;
    while covered < len {
        covered += usize::from(days_in_year(year)) * HOURS_PER_DAY;
        year += 1;
    }
    if covered != len {
        return Err(partial);
    }
    Ok(year - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(start_year: i32, years: i32) -> HourlySeries {
        let len = hours_between(start_year, start_year + years);
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Tmp, (0..len).map(|i| i as f64).collect());
        channels.insert(Channel::Mr, vec![5.0; len]);
        HourlySeries::new(start_year, channels).unwrap()
    }

    #[test]
    fn test_new_single_year() {
        let s = series(2019, 1);
        assert_eq!(s.len(), 8760);
        assert_eq!(s.years(), 2019..=2019);
    }

    #[test]
    fn test_new_leap_year() {
        let s = series(2020, 1);
        assert_eq!(s.len(), 8784);
        assert_eq!(s.end_year(), 2020);
    }

    #[test]
    fn test_new_no_channels() {
        let err = HourlySeries::new(2019, BTreeMap::new()).unwrap_err();
        assert_eq!(err, SeriesError::NoChannels);
    }

    #[test]
    fn test_new_length_mismatch() {
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Tmp, vec![0.0; 8760]);
        channels.insert(Channel::Mr, vec![0.0; 8759]);
        let err = HourlySeries::new(2019, channels).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::LengthMismatch {
                channel: Channel::Mr,
                ..
            }
        ));
    }

    #[test]
    fn test_new_partial_year() {
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Tmp, vec![0.0; 8760 + 24]);
        let err = HourlySeries::new(2019, channels).unwrap_err();
        assert!(matches!(err, SeriesError::PartialYear { .. }));
    }

    #[test]
    fn test_new_leap_length_in_common_year() {
        // 8784 hours starting in 2019 is neither one nor two years.
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Tmp, vec![0.0; 8784]);
        assert!(HourlySeries::new(2019, channels).is_err());
    }

    #[test]
    fn test_timestamp_and_index_of() {
        let s = series(2019, 2);
        let ts = s.timestamp(8760).unwrap();
        assert_eq!(ts.year(), 2020);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.hour(), 0);
        assert_eq!(s.index_of(ts), Some(8760));
        assert!(s.timestamp(s.len()).is_none());
    }

    #[test]
    fn test_index_of_outside() {
        let s = series(2019, 1);
        let before = NaiveDate::from_ymd_opt(2018, 12, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let after = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(s.index_of(before), None);
        assert_eq!(s.index_of(after), None);
    }

    #[test]
    fn test_index_of_rejects_off_hour() {
        let s = series(2019, 1);
        let ts = NaiveDate::from_ymd_opt(2019, 5, 1)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        assert_eq!(s.index_of(ts), None);
    }

    #[test]
    fn test_month_range_leap_february() {
        let s = series(2020, 1);
        let feb = MonthKey::new(2020, CalendarMonth::FEBRUARY);
        assert_eq!(s.month_range(feb), Some(744..744 + 29 * 24));
        assert_eq!(s.noleap_month_range(feb), Some(744..744 + 28 * 24));
    }

    #[test]
    fn test_month_range_outside() {
        let s = series(2019, 1);
        let key = MonthKey::new(2021, CalendarMonth::JANUARY);
        assert!(s.month_range(key).is_none());
    }

    #[test]
    fn test_month_spans_cover_series() {
        let s = series(2019, 2);
        let spans = s.month_spans();
        assert_eq!(spans.len(), 24);
        assert_eq!(spans[0].1.start, 0);
        assert_eq!(spans[23].1.end, s.len());
        for pair in spans.windows(2) {
            assert_eq!(pair[0].1.end, pair[1].1.start);
        }
    }

    #[test]
    fn test_insert_length_checked() {
        let mut s = series(2019, 1);
        assert!(s.insert(Channel::Ugrd, vec![1.0; 10]).is_err());
        assert!(s.insert(Channel::Ugrd, vec![1.0; 8760]).unwrap().is_none());
        assert!(s.contains(Channel::Ugrd));
    }

    #[test]
    fn test_remove_last_channel_refused() {
        let mut s = series(2019, 1);
        assert!(s.remove(Channel::Mr).unwrap().is_some());
        assert_eq!(s.remove(Channel::Tmp), Err(SeriesError::NoChannels));
        assert!(s.contains(Channel::Tmp));
    }

    #[test]
    fn test_is_leap_day() {
        let ts = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(is_leap_day(ts));
        let ts = NaiveDate::from_ymd_opt(2020, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(!is_leap_day(ts));
    }
}
