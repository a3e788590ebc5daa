//! Measurement group state model.
//!
//! This module holds everything the dashboard knows about groups, free of
//! any rendering concern.
//!
//! ## Submodules
//!
//! - [`group`]: The [`MeasurementGroup`] record with its icon and refresh interval
//! - [`factory`]: Validation of raw [`GroupForm`]s into groups ([`GroupFactory`])
//! - [`store`]: Ordered collection with expansion state ([`GroupStore`])
//! - [`resolver`]: Group id to displayed metrics ([`MetricResolver`])
//!
//! ## Data Flow
//!
//! ```text
//! GroupForm (raw text)
//!        │
//!        ▼
//! GroupFactory::create() ──▶ GroupError
//!        │
//!        ▼
//! GroupStore::insert() ──▶ GroupError::DuplicateId
//!        │
//!        ▼
//! selection (by id) ──▶ MetricResolver::resolve_metrics()
//! ```

pub mod error;
pub mod factory;
pub mod group;
pub mod resolver;
pub mod store;

pub use error::GroupError;
pub use factory::{derive_id, parse_metrics, GroupFactory, GroupForm};
pub use group::{seed_groups, GroupIcon, MeasurementGroup, RefreshInterval, DEFAULT_GROUP_ID};
pub use resolver::{
    ActivityEntry, ChangeDirection, MetricReading, MetricResolver, StaticMetricResolver,
};
pub use store::GroupStore;
