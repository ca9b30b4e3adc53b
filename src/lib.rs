//! Index list and metric name resolution for a date-partitioned search backend.
//!
//! [`domain::index`] turns a rolling index pattern plus a time range into the
//! comma-joined list of concrete indexes to query. [`domain::metric`] resolves
//! display names for the metrics of a query document.

pub mod app_state;
pub mod core;
pub mod domain;
pub mod errors;

pub use app_state::{build_app_state, build_app_state_with, AppState};
pub use domain::common::model::TimeRange;
pub use domain::index::service::index_list_service::resolve_index_list;
pub use domain::metric::dto::query_model::{MetricSpec, QueryModel};
pub use domain::metric::model::name_lookup::NameLookup;
pub use domain::metric::service::metric_name_service::resolve_metric_names;
pub use errors::ResolveError;
