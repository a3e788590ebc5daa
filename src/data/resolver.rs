//! Metric readings for the dashboard view.
//!
//! The dashboard asks a [`MetricResolver`] for the readings and title of the
//! selected group. [`StaticMetricResolver`] answers from a fixed table of mock
//! values; a live backend can implement the same trait without changing the
//! callers.

use std::fmt::Debug;

use serde::Serialize;

use self::ChangeDirection::{Decrease, Increase};
use super::group::DEFAULT_GROUP_ID;

/// Trend of a reading compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Neutral,
}

impl ChangeDirection {
    /// Returns an arrow glyph for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            ChangeDirection::Increase => "▲",
            ChangeDirection::Decrease => "▼",
            ChangeDirection::Neutral => "●",
        }
    }
}

/// A single metric card.
///
/// `value` and `change_magnitude` are preformatted display strings and are
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricReading {
    pub title: String,
    pub value: String,
    pub change_magnitude: String,
    pub change_direction: ChangeDirection,
}

/// An entry of the "Recent Activity" feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub title: String,
    pub detail: String,
    pub age: String,
}

/// Resolves group ids to the metrics shown in the dashboard.
pub trait MetricResolver: Send + Debug {
    /// Ordered readings for a group. Never fails; unknown ids resolve to a
    /// default group.
    fn resolve_metrics(&self, group_id: &str) -> Vec<MetricReading>;

    /// Header title for a group, with the same fallback as
    /// [`resolve_metrics`](Self::resolve_metrics).
    fn resolve_title(&self, group_id: &str) -> String;

    /// Recent events shown below the metric cards.
    fn recent_activity(&self) -> Vec<ActivityEntry> {
        Vec::new()
    }
}

type ReadingRow = (&'static str, &'static str, &'static str, ChangeDirection);

const PERFORMANCE: [ReadingRow; 3] = [
    ("Response Time", "245ms", "-12%", Decrease),
    ("Throughput", "1,247 req/s", "+8%", Increase),
    ("Error Rate", "0.12%", "-23%", Decrease),
];

const USER_ENGAGEMENT: [ReadingRow; 3] = [
    ("Active Users", "12,847", "+15%", Increase),
    ("Session Duration", "4m 32s", "+7%", Increase),
    ("Bounce Rate", "23.4%", "-5%", Decrease),
];

const SYSTEM_HEALTH: [ReadingRow; 3] = [
    ("CPU Usage", "67%", "+3%", Increase),
    ("Memory Usage", "4.2GB", "+12%", Increase),
    ("Disk I/O", "234 MB/s", "-8%", Decrease),
];

const BUSINESS_METRICS: [ReadingRow; 3] = [
    ("Revenue", "$47,892", "+18%", Increase),
    ("Conversion Rate", "3.24%", "+0.8%", Increase),
    ("Customer Acquisition", "1,247", "+22%", Increase),
];

type TableEntry = (&'static str, &'static str, &'static [ReadingRow]);

/// (group id, title, readings)
static TABLE: [TableEntry; 4] = [
    (DEFAULT_GROUP_ID, "Performance Metrics", &PERFORMANCE),
    ("user-engagement", "User Engagement", &USER_ENGAGEMENT),
    ("system-health", "System Health", &SYSTEM_HEALTH),
    ("business-metrics", "Business Metrics", &BUSINESS_METRICS),
];

const ACTIVITY: [(&str, &str, &str); 2] = [
    (
        "Metric threshold exceeded",
        "Response time above 300ms for 5 minutes",
        "2 min ago",
    ),
    (
        "Performance improved",
        "System optimization completed successfully",
        "1 hour ago",
    ),
];

/// Mock resolver backed by a static table.
///
/// Only the four built-in groups have entries; every other id, including
/// groups created at runtime, shows the performance entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMetricResolver;

impl StaticMetricResolver {
    pub fn new() -> Self {
        Self
    }

    fn lookup(group_id: &str) -> &'static TableEntry {
        TABLE.iter().find(|(id, _, _)| *id == group_id).unwrap_or(&TABLE[0])
    }
}

impl MetricResolver for StaticMetricResolver {
    fn resolve_metrics(&self, group_id: &str) -> Vec<MetricReading> {
        let (_, _, rows) = Self::lookup(group_id);
        rows.iter()
            .map(|(title, value, change, direction)| MetricReading {
                title: title.to_string(),
                value: value.to_string(),
                change_magnitude: change.to_string(),
                change_direction: *direction,
            })
            .collect()
    }

    fn resolve_title(&self, group_id: &str) -> String {
        Self::lookup(group_id).1.to_string()
    }

    fn recent_activity(&self) -> Vec<ActivityEntry> {
        ACTIVITY
            .iter()
            .map(|(title, detail, age)| ActivityEntry {
                title: title.to_string(),
                detail: detail.to_string(),
                age: age.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_group_metrics() {
        let resolver = StaticMetricResolver::new();
        let readings = resolver.resolve_metrics("system-health");

        let titles: Vec<&str> = readings.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["CPU Usage", "Memory Usage", "Disk I/O"]);
        assert_eq!(readings[1].value, "4.2GB");
        assert_eq!(readings[1].change_magnitude, "+12%");
        assert_eq!(readings[2].change_direction, ChangeDirection::Decrease);
    }

    #[test]
    fn test_unknown_group_falls_back_to_performance() {
        let resolver = StaticMetricResolver::new();
        assert_eq!(
            resolver.resolve_metrics("unknown-group"),
            resolver.resolve_metrics("performance")
        );
        assert_eq!(resolver.resolve_title("unknown-group"), "Performance Metrics");
        assert_eq!(resolver.resolve_title(""), "Performance Metrics");
    }

    #[test]
    fn test_titles() {
        let resolver = StaticMetricResolver::new();
        assert_eq!(resolver.resolve_title("user-engagement"), "User Engagement");
        assert_eq!(resolver.resolve_title("business-metrics"), "Business Metrics");
    }

    #[test]
    fn test_business_metrics_all_increase() {
        let readings = StaticMetricResolver::new().resolve_metrics("business-metrics");
        assert_eq!(readings.len(), 3);
        assert!(readings.iter().all(|r| r.change_direction == ChangeDirection::Increase));
        assert_eq!(readings[0].value, "$47,892");
    }

    #[test]
    fn test_recent_activity() {
        let activity = StaticMetricResolver::new().recent_activity();
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].title, "Metric threshold exceeded");
        assert_eq!(activity[1].age, "1 hour ago");
    }
}
