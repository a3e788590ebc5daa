//! # groupwatch
//!
//! A terminal dashboard for browsing and defining measurement groups.
//!
//! A measurement group is a named collection of related metrics. The
//! dashboard lists groups in a sidebar, shows metric cards for the selected
//! group, and lets the user define new groups through a form. Metric values
//! come from a static mock table; nothing is persisted.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐ commands ┌──────────┐ snapshots ┌─────────┐     │
//! │  │ events  │─────────▶│   app    │──────────▶│   ui    │     │
//! │  │ (input) │          │(session) │           │(render) │     │
//! │  └─────────┘          └────┬─────┘           └─────────┘     │
//! │                            │                                 │
//! │              ┌─────────────┼──────────────┐                  │
//! │              ▼             ▼              ▼                  │
//! │        ┌──────────┐  ┌──────────┐  ┌────────────┐            │
//! │        │   data   │  │  notify  │  │   config   │            │
//! │        │ (groups) │  │ (events) │  │ (settings) │            │
//! │        └──────────┘  └──────────┘  └────────────┘            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: The group state model: [`GroupFactory`] validates new groups,
//!   [`GroupStore`] holds them with their expansion state, and
//!   [`MetricResolver`] maps a group id to the readings shown for it
//! - **[`app`]**: The session controller ([`App`]) tracking selection, the create
//!   form draft, and toast messages
//! - **[`notify`]**: The [`Notifier`] trait for announcing new groups, with a
//!   channel-backed implementation
//! - **[`config`]**: Layered [`Settings`] from a TOML file and the environment
//! - **[`ui`]** and **[`events`]**: Terminal rendering with ratatui and input handling
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Start the dashboard with system health selected
//! groupwatch --select system-health
//!
//! # Dump groups and their readings as JSON
//! groupwatch --print
//! ```
//!
//! ### As a library
//!
//! ```
//! use groupwatch::{GroupFactory, GroupForm, GroupStore, MetricResolver, StaticMetricResolver};
//!
//! let mut store = GroupStore::with_seed_groups();
//! let group = GroupFactory::create(&GroupForm {
//!     name: "API Performance".into(),
//!     metrics: "Latency, Errors".into(),
//!     ..GroupForm::default()
//! })?;
//! store.insert(group)?;
//! store.select_and_expand("api-performance")?;
//!
//! let readings = StaticMetricResolver::new().resolve_metrics("system-health");
//! assert_eq!(readings[0].title, "CPU Usage");
//! # Ok::<(), groupwatch::GroupError>(())
//! ```
//!
//! ### Receiving notifications
//!
//! ```
//! use groupwatch::{App, ChannelNotifier, StaticMetricResolver, Theme};
//!
//! let (mut rx, notifier) = ChannelNotifier::create();
//! let mut app = App::new(Box::new(StaticMetricResolver::new()), Theme::dark());
//! app.subscribe(Box::new(notifier));
//!
//! app.form.name = "Queues".into();
//! app.request_create_group()?;
//! assert!(rx.try_recv().is_ok());
//! # Ok::<(), groupwatch::GroupError>(())
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod notify;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, FormField, SidebarRow};
pub use config::{Settings, ThemeChoice};
pub use data::{
    ActivityEntry, ChangeDirection, GroupError, GroupFactory, GroupForm, GroupIcon, GroupStore,
    MeasurementGroup, MetricReading, MetricResolver, RefreshInterval, StaticMetricResolver,
};
pub use notify::{ChannelNotifier, Notification, Notifier};
pub use ui::Theme;
