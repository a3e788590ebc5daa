//! Application state and session control.
//!
//! [`App`] is the session controller: it owns the [`GroupStore`], tracks the
//! selected group, and turns user commands into store and factory calls. The
//! UI only reads from it and calls its command methods.

use std::time::{Duration, Instant};

use ratatui::layout::{Margin, Position, Rect};
use ratatui::widgets::ListState;
use tracing::{info, warn};

use crate::data::{
    ActivityEntry, GroupError, GroupFactory, GroupForm, GroupIcon, GroupStore, MeasurementGroup,
    MetricReading, MetricResolver, RefreshInterval, DEFAULT_GROUP_ID,
};
use crate::notify::{Notification, Notifier};
use crate::ui::Theme;

/// Default lifetime of a status bar message.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Fields of the create-group form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Icon,
    Description,
    Metrics,
    RefreshInterval,
    AlertThreshold,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Icon,
        FormField::Description,
        FormField::Metrics,
        FormField::RefreshInterval,
        FormField::AlertThreshold,
    ];

    /// Move focus to the next field.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Icon,
            FormField::Icon => FormField::Description,
            FormField::Description => FormField::Metrics,
            FormField::Metrics => FormField::RefreshInterval,
            FormField::RefreshInterval => FormField::AlertThreshold,
            FormField::AlertThreshold => FormField::Name,
        }
    }

    /// Move focus to the previous field.
    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::AlertThreshold,
            FormField::Icon => FormField::Name,
            FormField::Description => FormField::Icon,
            FormField::Metrics => FormField::Description,
            FormField::RefreshInterval => FormField::Metrics,
            FormField::AlertThreshold => FormField::RefreshInterval,
        }
    }

    /// Returns the display label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Group Name",
            FormField::Icon => "Icon",
            FormField::Description => "Description",
            FormField::Metrics => "Metrics (comma-separated)",
            FormField::RefreshInterval => "Refresh Interval",
            FormField::AlertThreshold => "Alert Threshold",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "e.g., API Performance",
            FormField::Description => "Brief description of what this group measures",
            FormField::Metrics => "e.g., Response Time, Throughput, Error Rate",
            FormField::AlertThreshold => "e.g., >500ms, <95%",
            FormField::Icon | FormField::RefreshInterval => "",
        }
    }

    /// Whether the field cycles through fixed options instead of taking text.
    pub fn is_selector(&self) -> bool {
        matches!(self, FormField::Icon | FormField::RefreshInterval)
    }
}

/// One visual line of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// A group header, by index in the store.
    Group(usize),
    /// A metric name under an expanded group.
    Metric { group: usize, metric: usize },
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_create_form: bool,

    // Core state
    store: GroupStore,
    resolver: Box<dyn MetricResolver>,
    notifiers: Vec<Box<dyn Notifier>>,
    selected_group: Option<String>,

    // Navigation state
    pub cursor: usize,
    /// Scroll state of the sidebar list, kept across frames.
    pub sidebar_state: ListState,
    /// Where the sidebar was last drawn, for mouse hit-testing.
    pub sidebar_area: Rect,

    // Create form draft
    pub form: GroupForm,
    pub form_field: FormField,
    pub form_error: Option<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    status_message: Option<(String, Instant)>,
    status_duration: Duration,
}

impl App {
    /// Create a session over the built-in groups with `performance` selected.
    pub fn new(resolver: Box<dyn MetricResolver>, theme: Theme) -> Self {
        let store = GroupStore::with_seed_groups();
        let selected_group = store.get(DEFAULT_GROUP_ID).map(|g| g.id().to_string());

        Self {
            running: true,
            show_help: false,
            show_create_form: false,
            store,
            resolver,
            notifiers: Vec::new(),
            selected_group,
            cursor: 0,
            sidebar_state: ListState::default(),
            sidebar_area: Rect::default(),
            form: GroupForm::default(),
            form_field: FormField::default(),
            form_error: None,
            theme,
            status_message: None,
            status_duration: STATUS_DURATION,
        }
    }

    /// Set how long status messages stay visible.
    pub fn with_status_duration(mut self, duration: Duration) -> Self {
        self.status_duration = duration;
        self
    }

    /// Register a receiver for session notifications.
    pub fn subscribe(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Add predefined groups without announcing them.
    ///
    /// Invalid or duplicate entries are skipped with a warning. Returns the
    /// number of groups added.
    pub fn add_groups(&mut self, forms: &[GroupForm]) -> usize {
        let mut added = 0;
        for form in forms {
            match self.insert_form(form) {
                Ok(group) => {
                    info!(id = %group.id(), "Added configured group");
                    added += 1;
                }
                Err(e) => warn!(name = %form.name, error = %e, "Skipping configured group"),
            }
        }
        added
    }

    // ----- Queries -----

    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    /// All groups in sidebar order.
    pub fn groups(&self) -> &[MeasurementGroup] {
        self.store.list_groups()
    }

    pub fn selected_group_id(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    /// Id whose metrics the dashboard shows.
    fn display_group_id(&self) -> &str {
        self.selected_group.as_deref().unwrap_or(DEFAULT_GROUP_ID)
    }

    /// Header title for any group id.
    pub fn resolve_title(&self, id: &str) -> String {
        self.resolver.resolve_title(id)
    }

    /// Metric cards for any group id.
    pub fn resolve_metrics(&self, id: &str) -> Vec<MetricReading> {
        self.resolver.resolve_metrics(id)
    }

    /// Header title for the selected group.
    pub fn selected_title(&self) -> String {
        self.resolve_title(self.display_group_id())
    }

    /// Metric cards for the selected group.
    pub fn selected_metrics(&self) -> Vec<MetricReading> {
        self.resolve_metrics(self.display_group_id())
    }

    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.resolver.recent_activity()
    }

    /// The group under the sidebar cursor.
    pub fn cursor_group(&self) -> Option<&MeasurementGroup> {
        self.groups().get(self.cursor)
    }

    /// Visual rows of the sidebar: each group followed by its metrics when
    /// expanded.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (group_index, group) in self.groups().iter().enumerate() {
            rows.push(SidebarRow::Group(group_index));
            if group.is_expanded() {
                rows.extend((0..group.metrics().len()).map(|metric| SidebarRow::Metric {
                    group: group_index,
                    metric,
                }));
            }
        }
        rows
    }

    // ----- Commands -----

    /// Make `id` the selected group and expand it.
    ///
    /// On an unknown id the selection is left unchanged.
    pub fn select_group(&mut self, id: &str) -> Result<(), GroupError> {
        self.store.select_and_expand(id)?;
        self.selected_group = Some(id.to_string());
        if let Some(position) = self.store.position(id) {
            self.cursor = position;
        }
        info!(id, "Selected group");
        Ok(())
    }

    /// Select the group a session starts on.
    ///
    /// Unlike [`select_group`](Self::select_group), the built-in default
    /// group is collapsed when another group is chosen, so only the starting
    /// group is expanded.
    pub fn select_initial_group(&mut self, id: &str) -> Result<(), GroupError> {
        self.select_group(id)?;
        if id != DEFAULT_GROUP_ID
            && self.store.get(DEFAULT_GROUP_ID).is_some_and(|g| g.is_expanded())
        {
            self.store.toggle_expanded(DEFAULT_GROUP_ID)?;
        }
        Ok(())
    }

    /// Sidebar row drawn at screen row `row`, if any.
    ///
    /// Accounts for the list's scroll offset from the last frame.
    pub fn sidebar_row_at(&self, column: u16, row: u16) -> Option<SidebarRow> {
        let inner = self.sidebar_area.inner(Margin::new(1, 1));
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.sidebar_state.offset() + usize::from(row - inner.y);
        self.sidebar_rows().get(index).copied()
    }

    /// Flip the expansion of `id` without touching the selection.
    pub fn toggle_group_expansion(&mut self, id: &str) -> Result<(), GroupError> {
        self.store.toggle_expanded(id)
    }

    /// Show the create-group form, keeping any earlier draft.
    pub fn open_create_form(&mut self) {
        self.show_create_form = true;
        self.form_error = None;
    }

    /// Hide the create-group form. The draft is kept for the next open.
    pub fn close_create_form(&mut self) {
        self.show_create_form = false;
        self.form_error = None;
    }

    /// Validate the form draft and add the resulting group.
    ///
    /// On success the draft is reset, the form closes and subscribers are
    /// notified. On failure the form stays open with the error shown.
    pub fn request_create_group(&mut self) -> Result<String, GroupError> {
        let form = self.form.clone();
        match self.insert_form(&form) {
            Ok(group) => {
                let notification = Notification::GroupCreated {
                    id: group.id().to_string(),
                    name: group.name().to_string(),
                };
                info!(id = %group.id(), name = %group.name(), "Created group");
                let id = group.id().to_string();

                self.form = GroupForm::default();
                self.form_field = FormField::default();
                self.close_create_form();
                self.emit(notification);
                Ok(id)
            }
            Err(e) => {
                warn!(error = %e, "Rejected group");
                self.form_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn insert_form(&mut self, form: &GroupForm) -> Result<MeasurementGroup, GroupError> {
        let group = GroupFactory::create(form)?;
        self.store.insert(group.clone())?;
        Ok(group)
    }

    fn emit(&mut self, notification: Notification) {
        self.set_status_message(notification.message());
        for notifier in &mut self.notifiers {
            notifier.notify(&notification);
        }
    }

    // ----- Sidebar navigation -----

    /// Move the cursor down by one group.
    pub fn select_next(&mut self) {
        let max = self.store.len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    /// Move the cursor up by one group.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the first group.
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last group.
    pub fn select_last(&mut self) {
        self.cursor = self.store.len().saturating_sub(1);
    }

    /// Select the group under the cursor.
    pub fn activate_cursor(&mut self) {
        if let Some(id) = self.cursor_group().map(|g| g.id().to_string()) {
            let _ = self.select_group(&id);
        }
    }

    /// Toggle expansion of the group under the cursor.
    pub fn toggle_cursor(&mut self) {
        if let Some(id) = self.cursor_group().map(|g| g.id().to_string()) {
            let _ = self.toggle_group_expansion(&id);
        }
    }

    /// Expand or collapse the group under the cursor.
    pub fn set_cursor_expanded(&mut self, expanded: bool) {
        if self.cursor_group().is_some_and(|g| g.is_expanded() != expanded) {
            self.toggle_cursor();
        }
    }

    // ----- Form editing -----

    /// Current text of a form field.
    pub fn form_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::Icon => &self.form.icon,
            FormField::Description => &self.form.description,
            FormField::Metrics => &self.form.metrics,
            FormField::RefreshInterval => &self.form.refresh_interval,
            FormField::AlertThreshold => &self.form.alert_threshold,
        }
    }

    fn form_text_mut(&mut self) -> Option<&mut String> {
        match self.form_field {
            FormField::Name => Some(&mut self.form.name),
            FormField::Description => Some(&mut self.form.description),
            FormField::Metrics => Some(&mut self.form.metrics),
            FormField::AlertThreshold => Some(&mut self.form.alert_threshold),
            FormField::Icon | FormField::RefreshInterval => None,
        }
    }

    pub fn form_next_field(&mut self) {
        self.form_field = self.form_field.next();
    }

    pub fn form_prev_field(&mut self) {
        self.form_field = self.form_field.prev();
    }

    /// Append a character to the focused text field.
    pub fn form_push(&mut self, c: char) {
        if let Some(text) = self.form_text_mut() {
            text.push(c);
        }
    }

    /// Remove the last character of the focused text field.
    pub fn form_pop(&mut self) {
        if let Some(text) = self.form_text_mut() {
            text.pop();
        }
    }

    /// Cycle the focused selector field forwards or backwards.
    pub fn form_cycle(&mut self, forward: bool) {
        match self.form_field {
            FormField::Icon => {
                let icon = self.form.icon.parse::<GroupIcon>().unwrap_or_default();
                let icon = if forward { icon.next() } else { icon.prev() };
                self.form.icon = icon.as_str().to_string();
            }
            FormField::RefreshInterval => {
                let interval =
                    self.form.refresh_interval.parse::<RefreshInterval>().unwrap_or_default();
                let interval = if forward {
                    interval.next()
                } else {
                    interval.prev()
                };
                self.form.refresh_interval = interval.as_secs().to_string();
            }
            _ => {}
        }
    }

    // ----- General -----

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < self.status_duration {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticMetricResolver;
    use crate::notify::ChannelNotifier;

    fn app() -> App {
        App::new(Box::new(StaticMetricResolver::new()), Theme::dark())
    }

    fn fill_form(app: &mut App, name: &str, metrics: &str) {
        app.form.name = name.to_string();
        app.form.metrics = metrics.to_string();
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.selected_group_id(), Some("performance"));
        assert_eq!(app.selected_title(), "Performance Metrics");
        assert_eq!(app.groups().len(), 4);
        assert_eq!(app.cursor_group().unwrap().id(), "performance");
    }

    #[test]
    fn test_select_group_expands_and_resolves() {
        let mut app = app();
        app.select_group("system-health").unwrap();

        assert_eq!(app.selected_group_id(), Some("system-health"));
        assert_eq!(app.cursor, 2);
        assert!(app.store().get("system-health").unwrap().is_expanded());
        // The previously selected group stays expanded
        assert!(app.store().get("performance").unwrap().is_expanded());
        assert_eq!(app.selected_title(), "System Health");
        assert_eq!(app.selected_metrics()[0].title, "CPU Usage");
    }

    #[test]
    fn test_select_unknown_group_keeps_selection() {
        let mut app = app();
        let result = app.select_group("missing");
        assert_eq!(result, Err(GroupError::NotFound("missing".to_string())));
        assert_eq!(app.selected_group_id(), Some("performance"));
    }

    #[test]
    fn test_initial_group_collapses_default() {
        let mut app = app();
        app.select_initial_group("system-health").unwrap();

        assert_eq!(app.selected_group_id(), Some("system-health"));
        let expanded: Vec<&str> = app
            .groups()
            .iter()
            .filter(|g| g.is_expanded())
            .map(|g| g.id())
            .collect();
        assert_eq!(expanded, vec!["system-health"]);
    }

    #[test]
    fn test_initial_default_group_stays_expanded() {
        let mut app = app();
        app.select_initial_group("performance").unwrap();
        assert!(app.store().get("performance").unwrap().is_expanded());

        assert!(app.select_initial_group("missing").is_err());
        assert!(app.store().get("performance").unwrap().is_expanded());
    }

    #[test]
    fn test_sidebar_row_at_uses_offset() {
        let mut app = app();
        app.sidebar_area = Rect::new(0, 1, 32, 6);
        // Inner rows are 2..=5
        assert_eq!(app.sidebar_row_at(4, 2), Some(SidebarRow::Group(0)));
        assert_eq!(app.sidebar_row_at(4, 1), None);
        assert_eq!(app.sidebar_row_at(4, 6), None);
        assert_eq!(app.sidebar_row_at(31, 2), None);

        *app.sidebar_state.offset_mut() = 4;
        assert_eq!(app.sidebar_row_at(4, 2), Some(SidebarRow::Group(1)));
    }

    #[test]
    fn test_toggle_does_not_change_selection() {
        let mut app = app();
        app.toggle_group_expansion("performance").unwrap();
        assert!(!app.store().get("performance").unwrap().is_expanded());
        assert_eq!(app.selected_group_id(), Some("performance"));
    }

    #[test]
    fn test_create_group_success() {
        let (mut rx, notifier) = ChannelNotifier::create();
        let mut app = app();
        app.subscribe(Box::new(notifier));

        app.open_create_form();
        fill_form(&mut app, "  API   Performance ", "Latency, Errors");
        app.form.icon = "Activity".to_string();
        app.form.refresh_interval = "300".to_string();

        let id = app.request_create_group().unwrap();
        assert_eq!(id, "api-performance");

        let group = app.store().get("api-performance").unwrap();
        assert_eq!(group.name(), "API Performance");
        assert_eq!(group.metrics(), ["Latency", "Errors"]);
        assert!(!group.is_expanded());
        assert_eq!(app.groups().last().unwrap().id(), "api-performance");

        // Form closed and reset, selection unchanged
        assert!(!app.show_create_form);
        assert_eq!(app.form, GroupForm::default());
        assert_eq!(app.selected_group_id(), Some("performance"));

        assert_eq!(
            app.get_status_message(),
            Some("Measurement group \"API Performance\" created successfully!")
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::GroupCreated {
                id: "api-performance".to_string(),
                name: "API Performance".to_string(),
            }
        );
    }

    #[test]
    fn test_create_group_failure_keeps_form_open() {
        let (mut rx, notifier) = ChannelNotifier::create();
        let mut app = app();
        app.subscribe(Box::new(notifier));

        app.open_create_form();
        fill_form(&mut app, "   ", "Latency");
        assert_eq!(app.request_create_group(), Err(GroupError::InvalidName));
        assert!(app.show_create_form);
        assert_eq!(app.form_error.as_deref(), Some("Group name must not be empty"));
        assert_eq!(app.form.metrics, "Latency");
        assert_eq!(app.groups().len(), 4);
        assert!(app.get_status_message().is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_create_duplicate_group() {
        let mut app = app();
        app.open_create_form();
        fill_form(&mut app, "System Health", "");
        assert_eq!(
            app.request_create_group(),
            Err(GroupError::DuplicateId("system-health".to_string()))
        );
        assert_eq!(app.groups().len(), 4);
    }

    #[test]
    fn test_close_form_keeps_draft() {
        let mut app = app();
        app.open_create_form();
        app.form_push('Q');
        app.close_create_form();
        assert!(!app.show_create_form);

        app.open_create_form();
        assert_eq!(app.form.name, "Q");
    }

    #[test]
    fn test_created_group_resolves_to_default_metrics() {
        let mut app = app();
        fill_form(&mut app, "Queues", "Depth");
        app.request_create_group().unwrap();
        app.select_group("queues").unwrap();

        assert_eq!(app.selected_group_id(), Some("queues"));
        assert_eq!(app.selected_title(), "Performance Metrics");
        assert_eq!(app.selected_metrics()[0].title, "Response Time");
    }

    #[test]
    fn test_add_groups_skips_invalid() {
        let mut app = app();
        let forms = vec![
            GroupForm {
                name: "Queues".to_string(),
                ..GroupForm::default()
            },
            GroupForm {
                name: "Bad Icon".to_string(),
                icon: "Rocket".to_string(),
                ..GroupForm::default()
            },
            GroupForm {
                name: "queues".to_string(),
                ..GroupForm::default()
            },
        ];
        assert_eq!(app.add_groups(&forms), 1);
        assert_eq!(app.groups().len(), 5);
        // Startup groups are not announced
        assert!(app.get_status_message().is_none());
    }

    #[test]
    fn test_cursor_navigation() {
        let mut app = app();
        app.select_prev();
        assert_eq!(app.cursor, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.cursor_group().unwrap().id(), "system-health");

        app.select_last();
        app.select_next();
        assert_eq!(app.cursor, 3);

        app.activate_cursor();
        assert_eq!(app.selected_group_id(), Some("business-metrics"));

        app.select_first();
        app.set_cursor_expanded(false);
        assert!(!app.store().get("performance").unwrap().is_expanded());
        app.set_cursor_expanded(false);
        assert!(!app.store().get("performance").unwrap().is_expanded());
    }

    #[test]
    fn test_sidebar_rows_follow_expansion() {
        let mut app = app();
        // performance is expanded with three metrics
        assert_eq!(app.sidebar_rows().len(), 4 + 3);
        assert_eq!(app.sidebar_rows()[1], SidebarRow::Metric { group: 0, metric: 0 });

        app.toggle_group_expansion("performance").unwrap();
        assert_eq!(
            app.sidebar_rows(),
            (0..4).map(SidebarRow::Group).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_form_editing() {
        let mut app = app();
        app.open_create_form();
        for c in "Queues".chars() {
            app.form_push(c);
        }
        app.form_pop();
        assert_eq!(app.form_value(FormField::Name), "Queue");

        app.form_next_field();
        assert_eq!(app.form_field, FormField::Icon);
        // Typing into a selector does nothing
        app.form_push('x');
        assert_eq!(app.form_value(FormField::Icon), "BarChart3");
        app.form_cycle(true);
        assert_eq!(app.form_value(FormField::Icon), "Activity");
        app.form_cycle(false);
        app.form_cycle(false);
        assert_eq!(app.form_value(FormField::Icon), "Users");

        app.form_field = FormField::RefreshInterval;
        app.form_cycle(true);
        assert_eq!(app.form_value(FormField::RefreshInterval), "300");

        app.form_prev_field();
        assert_eq!(app.form_field, FormField::Metrics);
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = app().with_status_duration(Duration::ZERO);
        app.set_status_message("hello".to_string());
        assert!(app.get_status_message().is_none());
    }
}
