//! Signup Statistics
//!
//! Frequency aggregation over record timestamps: counts per calendar day,
//! counts per hour of day, and the overall total.

use std::collections::BTreeMap;

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

/// Signup count for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub count: u64,
}

/// Signup count for one hour of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourCount {
    /// Hour of day, zero-padded `00`..`23`
    pub hour: String,
    pub count: u64,
}

/// Aggregated signup statistics
#[derive(Debug, Clone, Serialize)]
pub struct SignupStats {
    /// Per-day counts, ascending by date; days with no signups are omitted
    #[serde(rename = "byDay")]
    pub by_day: Vec<DayCount>,

    /// Per-hour counts, always 24 entries in `00`..`23` order
    #[serde(rename = "byHour")]
    pub by_hour: Vec<HourCount>,

    /// Total number of records
    pub total: u64,
}

/// Build statistics from a set of record timestamps.
///
/// One O(n) pass filling two frequency tables. The BTreeMap keeps the
/// per-day entries in ascending date order.
pub fn aggregate(times: &[DateTime<Utc>]) -> SignupStats {
    let mut by_day: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_hour = [0u64; 24];

    for t in times {
        let day = t.format("%Y-%m-%d").to_string();
        *by_day.entry(day).or_insert(0) += 1;

        by_hour[t.hour() as usize] += 1;
    }

    SignupStats {
        by_day: by_day
            .into_iter()
            .map(|(date, count)| DayCount { date, count })
            .collect(),
        by_hour: by_hour
            .iter()
            .enumerate()
            .map(|(h, &count)| HourCount {
                hour: format!("{:02}", h),
                count,
            })
            .collect(),
        total: times.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_stats() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_day.is_empty());
        assert_eq!(stats.by_hour.len(), 24);
        assert!(stats.by_hour.iter().all(|h| h.count == 0));
    }

    #[test]
    fn test_hours_are_zero_padded_and_ordered() {
        let stats = aggregate(&[ts(2024, 1, 1, 9)]);
        assert_eq!(stats.by_hour[0].hour, "00");
        assert_eq!(stats.by_hour[9].hour, "09");
        assert_eq!(stats.by_hour[9].count, 1);
        assert_eq!(stats.by_hour[23].hour, "23");
    }

    #[test]
    fn test_days_sorted_ascending() {
        let stats = aggregate(&[
            ts(2024, 3, 2, 10),
            ts(2024, 3, 1, 11),
            ts(2024, 3, 2, 12),
        ]);
        assert_eq!(stats.total, 3);
        assert_eq!(
            stats.by_day,
            vec![
                DayCount {
                    date: "2024-03-01".into(),
                    count: 1
                },
                DayCount {
                    date: "2024-03-02".into(),
                    count: 2
                },
            ]
        );
        let hour_sum: u64 = stats.by_hour.iter().map(|h| h.count).sum();
        assert_eq!(hour_sum, stats.total);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(aggregate(&[])).unwrap();
        assert!(json.get("byDay").is_some());
        assert!(json.get("byHour").is_some());
        assert!(json.get("total").is_some());
    }
}
