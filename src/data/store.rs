//! Ordered in-memory collection of measurement groups.

use tracing::debug;

use super::error::GroupError;
use super::group::{seed_groups, MeasurementGroup};

/// Owns the groups of a session and their expansion state.
///
/// Insertion order is preserved and ids are unique. Selection is not tracked
/// here; callers reference the selected group by id.
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    groups: Vec<MeasurementGroup>,
}

impl GroupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in dashboard groups.
    pub fn with_seed_groups() -> Self {
        Self {
            groups: seed_groups(),
        }
    }

    /// All groups in insertion order.
    pub fn list_groups(&self) -> &[MeasurementGroup] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&MeasurementGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Index of the group with `id` in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id() == id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flip the expansion flag of one group.
    pub fn toggle_expanded(&mut self, id: &str) -> Result<(), GroupError> {
        let group = self.get_mut(id)?;
        let expanded = !group.is_expanded();
        group.set_expanded(expanded);
        debug!(id, expanded, "Toggled group expansion");
        Ok(())
    }

    /// Expand the group a user just picked. Other groups keep their state.
    pub fn select_and_expand(&mut self, id: &str) -> Result<(), GroupError> {
        self.get_mut(id)?.set_expanded(true);
        debug!(id, "Expanded selected group");
        Ok(())
    }

    /// Append a group, rejecting ids that are already present.
    pub fn insert(&mut self, group: MeasurementGroup) -> Result<(), GroupError> {
        if self.get(group.id()).is_some() {
            return Err(GroupError::DuplicateId(group.id().to_string()));
        }
        debug!(id = group.id(), "Inserted group");
        self.groups.push(group);
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut MeasurementGroup, GroupError> {
        self.groups
            .iter_mut()
            .find(|g| g.id() == id)
            .ok_or_else(|| GroupError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GroupFactory, GroupForm};

    fn group(name: &str) -> MeasurementGroup {
        GroupFactory::create(&GroupForm {
            name: name.to_string(),
            ..GroupForm::default()
        })
        .unwrap()
    }

    fn expanded_flags(store: &GroupStore) -> Vec<bool> {
        store.list_groups().iter().map(|g| g.is_expanded()).collect()
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut store = GroupStore::new();
        assert!(store.is_empty());

        store.insert(group("Latency")).unwrap();
        store.insert(group("Queue Depth")).unwrap();
        store.insert(group("Errors")).unwrap();

        let ids: Vec<&str> = store.list_groups().iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec!["latency", "queue-depth", "errors"]);
        assert_eq!(store.position("queue-depth"), Some(1));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = GroupStore::with_seed_groups();
        store.insert(group("API Performance")).unwrap();
        let before = store.list_groups().to_vec();

        let result = store.insert(group("api   PERFORMANCE"));
        assert_eq!(result, Err(GroupError::DuplicateId("api-performance".to_string())));
        assert_eq!(store.list_groups(), before.as_slice());
    }

    #[test]
    fn test_toggle_expanded() {
        let mut store = GroupStore::with_seed_groups();
        assert_eq!(expanded_flags(&store), vec![true, false, false, false]);

        store.toggle_expanded("system-health").unwrap();
        assert_eq!(expanded_flags(&store), vec![true, false, true, false]);

        store.toggle_expanded("system-health").unwrap();
        store.toggle_expanded("performance").unwrap();
        assert_eq!(expanded_flags(&store), vec![false, false, false, false]);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut store = GroupStore::with_seed_groups();
        assert_eq!(
            store.toggle_expanded("nope"),
            Err(GroupError::NotFound("nope".to_string()))
        );
        assert_eq!(expanded_flags(&store), vec![true, false, false, false]);
    }

    #[test]
    fn test_select_and_expand_only_touches_target() {
        let mut store = GroupStore::with_seed_groups();

        store.select_and_expand("business-metrics").unwrap();
        assert_eq!(expanded_flags(&store), vec![true, false, false, true]);

        // Idempotent
        store.select_and_expand("business-metrics").unwrap();
        assert_eq!(expanded_flags(&store), vec![true, false, false, true]);

        // Never collapses
        store.select_and_expand("performance").unwrap();
        assert!(store.get("performance").unwrap().is_expanded());
    }

    #[test]
    fn test_select_and_expand_unknown_id() {
        let mut store = GroupStore::new();
        assert_eq!(
            store.select_and_expand("performance"),
            Err(GroupError::NotFound("performance".to_string()))
        );
    }
}
