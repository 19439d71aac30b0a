//! Time-bucketed tonnage series for the bar chart
//!
//! Three granularities, each producing a fixed number of buckets ending at
//! the reference date, oldest first:
//!
//! - Daily: 7 buckets, one per calendar day, exact-date match
//! - Weekly: 8 contiguous 7-day tiles anchored to the reference date
//! - Monthly: 6 buckets, one per calendar month
//!
//! Weekly tiles are rolling windows anchored to "today", not ISO calendar
//! weeks, and the daily match is an exact date comparison, not a range.

use crate::store::types::Workout;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Bucket width for a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

/// One chart bar: a label and the summed tonnage of its bucket
#[derive(Debug, Clone, PartialEq)]
pub struct BucketPoint {
    pub label: String,
    pub value: f64,
}

/// Compute the chart series for a granularity, ending at `today`
pub fn time_bucket_series(
    workouts: &[Workout],
    granularity: Granularity,
    today: NaiveDate,
) -> Vec<BucketPoint> {
    match granularity {
        Granularity::Daily => daily_series(workouts, today),
        Granularity::Weekly => weekly_series(workouts, today),
        Granularity::Monthly => monthly_series(workouts, today),
    }
}

/// Last 7 calendar days; a workout counts only on its exact date
fn daily_series(workouts: &[Workout], today: NaiveDate) -> Vec<BucketPoint> {
    (0..7u64)
        .rev()
        .map(|i| {
            let day = today - Days::new(i);
            let value = workouts
                .iter()
                .filter(|w| w.date == day)
                .map(|w| w.total_weight)
                .sum();
            BucketPoint {
                label: day.format("%a").to_string(),
                value,
            }
        })
        .collect()
}

/// Last 8 weeks as contiguous 7-day tiles ending at `today`
fn weekly_series(workouts: &[Workout], today: NaiveDate) -> Vec<BucketPoint> {
    (0..8u64)
        .rev()
        .map(|i| {
            let end = today - Days::new(i * 7);
            let start = end - Days::new(6);
            let value = workouts
                .iter()
                .filter(|w| w.date >= start && w.date <= end)
                .map(|w| w.total_weight)
                .sum();
            BucketPoint {
                label: format!("W{}", 8 - i),
                value,
            }
        })
        .collect()
}

/// Last 6 calendar months; a workout counts in its (year, month) bucket
fn monthly_series(workouts: &[Workout], today: NaiveDate) -> Vec<BucketPoint> {
    (0..6u32)
        .rev()
        .map(|i| {
            let anchor = today - Months::new(i);
            let value = workouts
                .iter()
                .filter(|w| w.date.year() == anchor.year() && w.date.month() == anchor.month())
                .map(|w| w.total_weight)
                .sum();
            BucketPoint {
                label: anchor.format("%b").to_string(),
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::Exercise;

    fn workout(id: i64, date: &str, total_weight: f64) -> Workout {
        Workout {
            id,
            name: format!("Workout {id}"),
            date: date.parse::<NaiveDate>().unwrap(),
            exercises: vec![Exercise::new("Squat", 1.0, 1.0, total_weight)],
            total_weight,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_daily_series_shape() {
        let series = time_bucket_series(&[], Granularity::Daily, date("2024-03-15"));
        assert_eq!(series.len(), 7);
        // 2024-03-09 was a Saturday, 2024-03-15 a Friday
        assert_eq!(series[0].label, "Sat");
        assert_eq!(series[6].label, "Fri");
        assert!(series.iter().all(|b| b.value == 0.0));
    }

    #[test]
    fn test_daily_series_exact_date_match() {
        let workouts = vec![
            workout(1, "2024-03-15", 100.0),
            workout(2, "2024-03-15", 50.0),
            workout(3, "2024-03-09", 30.0),
            workout(4, "2024-03-08", 999.0), // one day out of range
        ];

        let series = time_bucket_series(&workouts, Granularity::Daily, date("2024-03-15"));
        assert_eq!(series[0].value, 30.0);
        assert_eq!(series[6].value, 150.0);
        assert_eq!(series.iter().map(|b| b.value).sum::<f64>(), 180.0);
    }

    #[test]
    fn test_weekly_series_tiles() {
        let today = date("2024-03-15");
        let workouts = vec![
            workout(1, "2024-03-15", 10.0), // current tile
            workout(2, "2024-03-09", 20.0), // current tile start
            workout(3, "2024-03-08", 40.0), // previous tile end
            workout(4, "2024-01-20", 80.0), // oldest tile (ends 56 days back)
        ];

        let series = time_bucket_series(&workouts, Granularity::Weekly, today);
        assert_eq!(series.len(), 8);
        assert_eq!(series[0].label, "W1");
        assert_eq!(series[7].label, "W8");
        assert_eq!(series[7].value, 30.0);
        assert_eq!(series[6].value, 40.0);
        assert_eq!(series[0].value, 80.0);
    }

    #[test]
    fn test_weekly_tiles_cover_56_days_without_overlap() {
        let today = date("2024-03-15");
        // One workout per day over the full span; every day lands in
        // exactly one tile
        let workouts: Vec<Workout> = (0..56u64)
            .map(|i| {
                let d = today - Days::new(i);
                workout(i as i64, &d.to_string(), 1.0)
            })
            .collect();

        let series = time_bucket_series(&workouts, Granularity::Weekly, today);
        assert!(series.iter().all(|b| b.value == 7.0));
    }

    #[test]
    fn test_monthly_series() {
        let today = date("2024-06-20");
        let workouts = vec![
            workout(1, "2024-06-01", 10.0),
            workout(2, "2024-06-30", 20.0), // later in the current month still counts
            workout(3, "2024-01-05", 40.0), // oldest bucket
            workout(4, "2023-12-31", 999.0), // out of range
        ];

        let series = time_bucket_series(&workouts, Granularity::Monthly, today);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].label, "Jan");
        assert_eq!(series[5].label, "Jun");
        assert_eq!(series[0].value, 40.0);
        assert_eq!(series[5].value, 30.0);
        assert_eq!(series[1].value, 0.0);
    }

    #[test]
    fn test_monthly_series_spans_year_boundary() {
        let series = time_bucket_series(
            &[workout(1, "2023-11-15", 5.0)],
            Granularity::Monthly,
            date("2024-03-31"),
        );
        assert_eq!(series[0].label, "Oct");
        assert_eq!(series[1].label, "Nov");
        assert_eq!(series[1].value, 5.0);
    }

    #[test]
    fn test_monthly_anchor_clamps_at_month_end() {
        // Walking back from May 31 passes through shorter months; each of
        // the six buckets must still be a distinct calendar month
        let series = time_bucket_series(&[], Granularity::Monthly, date("2024-05-31"));
        let labels: Vec<&str> = series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec", "Jan", "Feb", "Mar", "Apr", "May"]);
    }
}
