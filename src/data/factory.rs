//! Validation and normalization of new groups.
//!
//! [`GroupFactory::create`] turns a raw [`GroupForm`] into a
//! [`MeasurementGroup`]. It is a pure transformation; inserting the result
//! into a store is the caller's job.

use serde::Deserialize;

use super::error::GroupError;
use super::group::{GroupIcon, MeasurementGroup, RefreshInterval};

/// Raw, unvalidated fields of a group creation request.
///
/// Every field is kept as typed text, the way it comes out of a form or a
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupForm {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub refresh_interval: String,
    pub alert_threshold: String,
    /// Comma-separated metric names.
    pub metrics: String,
}

impl Default for GroupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            icon: GroupIcon::default().as_str().to_string(),
            refresh_interval: RefreshInterval::default().as_secs().to_string(),
            alert_threshold: String::new(),
            metrics: String::new(),
        }
    }
}

/// Builds validated groups from [`GroupForm`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupFactory;

impl GroupFactory {
    /// Validate `form` and build a new, collapsed group.
    ///
    /// Checks run in field order: name, icon, interval.
    pub fn create(form: &GroupForm) -> Result<MeasurementGroup, GroupError> {
        let name = normalize_name(&form.name);
        let id = derive_id(&name);
        if id.is_empty() {
            return Err(GroupError::InvalidName);
        }

        let icon: GroupIcon = form.icon.parse()?;
        let refresh_interval: RefreshInterval = form.refresh_interval.parse()?;

        Ok(MeasurementGroup::from_parts(
            id,
            name,
            non_blank(&form.description),
            icon,
            refresh_interval,
            non_blank(&form.alert_threshold),
            parse_metrics(&form.metrics),
        ))
    }
}

/// Derive a group id from a display name.
///
/// Lower-cases the name and joins its whitespace-separated words with
/// single hyphens. A blank name yields an empty id.
pub fn derive_id(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Split a comma-separated metric list, dropping blank entries.
///
/// Order and duplicates are preserved.
pub fn parse_metrics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
