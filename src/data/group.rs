//! Measurement group model.
//!
//! A [`MeasurementGroup`] is a named collection of metrics shown together in
//! the dashboard. Groups are built by [`GroupFactory`](super::GroupFactory)
//! and owned by a [`GroupStore`](super::GroupStore); after insertion only the
//! expansion flag ever changes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::GroupError;

/// Symbolic icon attached to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GroupIcon {
    #[default]
    BarChart3,
    Activity,
    TrendingUp,
    Users,
}

impl GroupIcon {
    /// All icons in selector order.
    pub const ALL: [GroupIcon; 4] = [
        GroupIcon::BarChart3,
        GroupIcon::Activity,
        GroupIcon::TrendingUp,
        GroupIcon::Users,
    ];

    /// Returns the tag used in forms and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupIcon::BarChart3 => "BarChart3",
            GroupIcon::Activity => "Activity",
            GroupIcon::TrendingUp => "TrendingUp",
            GroupIcon::Users => "Users",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GroupIcon::BarChart3 => "Bar Chart",
            GroupIcon::Activity => "Activity",
            GroupIcon::TrendingUp => "Trending Up",
            GroupIcon::Users => "Users",
        }
    }

    /// Returns a single-cell glyph for the terminal.
    pub fn symbol(&self) -> &'static str {
        match self {
            GroupIcon::BarChart3 => "▆",
            GroupIcon::Activity => "∿",
            GroupIcon::TrendingUp => "↗",
            GroupIcon::Users => "☺",
        }
    }

    /// Cycle to the next icon.
    pub fn next(self) -> Self {
        match self {
            GroupIcon::BarChart3 => GroupIcon::Activity,
            GroupIcon::Activity => GroupIcon::TrendingUp,
            GroupIcon::TrendingUp => GroupIcon::Users,
            GroupIcon::Users => GroupIcon::BarChart3,
        }
    }

    /// Cycle to the previous icon.
    pub fn prev(self) -> Self {
        match self {
            GroupIcon::BarChart3 => GroupIcon::Users,
            GroupIcon::Activity => GroupIcon::BarChart3,
            GroupIcon::TrendingUp => GroupIcon::Activity,
            GroupIcon::Users => GroupIcon::TrendingUp,
        }
    }
}

impl FromStr for GroupIcon {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        GroupIcon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == tag)
            .ok_or_else(|| GroupError::InvalidIcon(tag.to_string()))
    }
}

impl fmt::Display for GroupIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a group's metrics would be refreshed.
///
/// Serializes as the number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u64")]
pub enum RefreshInterval {
    Secs30,
    #[default]
    Secs60,
    Secs300,
    Secs900,
}

impl RefreshInterval {
    /// All intervals in selector order.
    pub const ALL: [RefreshInterval; 4] = [
        RefreshInterval::Secs30,
        RefreshInterval::Secs60,
        RefreshInterval::Secs300,
        RefreshInterval::Secs900,
    ];

    /// Look up an interval by its length in seconds.
    pub fn from_secs(secs: u64) -> Option<Self> {
        RefreshInterval::ALL.into_iter().find(|i| i.as_secs() == secs)
    }

    pub fn as_secs(&self) -> u64 {
        match self {
            RefreshInterval::Secs30 => 30,
            RefreshInterval::Secs60 => 60,
            RefreshInterval::Secs300 => 300,
            RefreshInterval::Secs900 => 900,
        }
    }

    /// Returns the display label (e.g. "5 minutes").
    pub fn label(&self) -> &'static str {
        match self {
            RefreshInterval::Secs30 => "30 seconds",
            RefreshInterval::Secs60 => "1 minute",
            RefreshInterval::Secs300 => "5 minutes",
            RefreshInterval::Secs900 => "15 minutes",
        }
    }

    /// Cycle to the next interval.
    pub fn next(self) -> Self {
        match self {
            RefreshInterval::Secs30 => RefreshInterval::Secs60,
            RefreshInterval::Secs60 => RefreshInterval::Secs300,
            RefreshInterval::Secs300 => RefreshInterval::Secs900,
            RefreshInterval::Secs900 => RefreshInterval::Secs30,
        }
    }

    /// Cycle to the previous interval.
    pub fn prev(self) -> Self {
        match self {
            RefreshInterval::Secs30 => RefreshInterval::Secs900,
            RefreshInterval::Secs60 => RefreshInterval::Secs30,
            RefreshInterval::Secs300 => RefreshInterval::Secs60,
            RefreshInterval::Secs900 => RefreshInterval::Secs300,
        }
    }
}

impl From<RefreshInterval> for u64 {
    fn from(interval: RefreshInterval) -> Self {
        interval.as_secs()
    }
}

impl FromStr for RefreshInterval {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        raw.parse::<u64>()
            .ok()
            .and_then(RefreshInterval::from_secs)
            .ok_or_else(|| GroupError::InvalidInterval(raw.to_string()))
    }
}

/// A named collection of related metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementGroup {
    id: String,
    name: String,
    description: Option<String>,
    icon: GroupIcon,
    #[serde(rename = "refresh_interval_seconds")]
    refresh_interval: RefreshInterval,
    alert_threshold: Option<String>,
    metrics: Vec<String>,
    expanded: bool,
}

impl MeasurementGroup {
    /// Assemble a group from already-validated parts.
    ///
    /// Only the factory and the seed table construct groups.
    pub(crate) fn from_parts(
        id: String,
        name: String,
        description: Option<String>,
        icon: GroupIcon,
        refresh_interval: RefreshInterval,
        alert_threshold: Option<String>,
        metrics: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            icon,
            refresh_interval,
            alert_threshold,
            metrics,
            expanded: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> GroupIcon {
        self.icon
    }

    pub fn refresh_interval(&self) -> RefreshInterval {
        self.refresh_interval
    }

    pub fn alert_threshold(&self) -> Option<&str> {
        self.alert_threshold.as_deref()
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Whether the group's metric list is visible in the sidebar.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

/// Seed data: (id, name, icon, metrics, expanded).
const SEED_GROUPS: [(&str, &str, GroupIcon, [&str; 3], bool); 4] = [
    (
        "performance",
        "Performance Metrics",
        GroupIcon::TrendingUp,
        ["Response Time", "Throughput", "Error Rate"],
        true,
    ),
    (
        "user-engagement",
        "User Engagement",
        GroupIcon::Users,
        ["Active Users", "Session Duration", "Bounce Rate"],
        false,
    ),
    (
        "system-health",
        "System Health",
        GroupIcon::Activity,
        ["CPU Usage", "Memory Usage", "Disk I/O"],
        false,
    ),
    (
        "business-metrics",
        "Business Metrics",
        GroupIcon::BarChart3,
        ["Revenue", "Conversion Rate", "Customer Acquisition"],
        false,
    ),
];

/// Id of the group selected when a session starts.
pub const DEFAULT_GROUP_ID: &str = "performance";

/// The built-in groups every session starts with.
pub fn seed_groups() -> Vec<MeasurementGroup> {
    SEED_GROUPS
        .iter()
        .map(|(id, name, icon, metrics, expanded)| {
            let mut group = MeasurementGroup::from_parts(
                id.to_string(),
                name.to_string(),
                None,
                *icon,
                RefreshInterval::default(),
                None,
                metrics.iter().map(|m| m.to_string()).collect(),
            );
            group.set_expanded(*expanded);
            group
        })
        .collect()
}
