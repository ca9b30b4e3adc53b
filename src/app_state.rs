use std::sync::Arc;

use crate::core::config::ResolverConfig;
use crate::domain::common::model::TimeRange;
use crate::domain::index::service::index_list_service;
use crate::domain::metric::dto::query_model::QueryModel;
use crate::domain::metric::model::name_lookup::NameLookup;
use crate::domain::metric::service::metric_name_service;

macro_rules! delegate_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                Ok($path($($arg),*)?)
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ResolverConfig>,
    pub index_service: Arc<IndexService>,
    pub metric_service: Arc<MetricService>,
}

/// Build the state from the environment (and `.env`).
pub fn build_app_state() -> anyhow::Result<AppState> {
    Ok(build_app_state_with(ResolverConfig::from_env()?))
}

pub fn build_app_state_with(config: ResolverConfig) -> AppState {
    AppState {
        index_service: Arc::new(IndexService {
            max_index_count: config.max_index_count,
        }),
        metric_service: Arc::new(MetricService),
        config: Arc::new(config),
    }
}

impl AppState {
    pub fn resolve_index_list(
        &self,
        pattern: &str,
        interval_name: &str,
        range: &TimeRange,
    ) -> anyhow::Result<String> {
        self.index_service
            .resolve_index_list(pattern, interval_name, range)
    }

    pub fn resolve_metric_names(&self, query: &QueryModel) -> NameLookup {
        self.metric_service.resolve_metric_names(query)
    }
}

#[derive(Clone)]
pub struct IndexService {
    max_index_count: usize,
}

impl IndexService {
    pub fn max_index_count(&self) -> usize {
        self.max_index_count
    }

    pub fn resolve_index_list(
        &self,
        pattern: &str,
        interval_name: &str,
        range: &TimeRange,
    ) -> anyhow::Result<String> {
        Ok(index_list_service::resolve_index_list(
            pattern,
            interval_name,
            range,
            self.max_index_count,
        )?)
    }
}

#[derive(Clone, Default)]
pub struct MetricService;

impl MetricService {
    delegate_service! {
        fn parse_query(json: &str) -> QueryModel => QueryModel::from_json;
        fn parse_query_value(value: serde_json::Value) -> QueryModel => QueryModel::from_value;
    }

    pub fn resolve_metric_names(&self, query: &QueryModel) -> NameLookup {
        metric_name_service::resolve_metric_names(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResolveError;
    use chrono::{FixedOffset, TimeZone};

    fn state(limit: usize) -> AppState {
        build_app_state_with(ResolverConfig {
            max_index_count: limit,
            ..ResolverConfig::default()
        })
    }

    #[test]
    fn index_list_uses_configured_limit() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2017, 2, 18, 12, 0, 0)
            .unwrap();
        let range = TimeRange::new("48h", "now", now);
        let app = state(2);

        assert_eq!(app.config.max_index_count, 2);
        assert_eq!(app.index_service.max_index_count(), 2);
        assert_eq!(
            app.resolve_index_list("[logstash-]YYYY.MM.DD", "Daily", &range)
                .unwrap(),
            "logstash-2017.02.17,logstash-2017.02.18"
        );
    }

    #[test]
    fn errors_keep_their_domain_type() {
        let app = state(10);
        let range = TimeRange::anchored_now("soon", "now");
        let err = app
            .resolve_index_list("[logs-]YYYY", "Daily", &range)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ResolveError>(),
            Some(&ResolveError::InvalidTimeExpression("soon".into()))
        );
    }

    #[test]
    fn parses_and_resolves_metric_names() {
        let app = state(10);
        let query = app
            .metric_service
            .parse_query(r#"{"metrics":[{"id":"1","type":"avg","field":"value"}]}"#)
            .unwrap();

        assert_eq!(app.resolve_metric_names(&query).get_name("1"), "Average value");
        assert!(app
            .metric_service
            .parse_query_value(serde_json::json!({ "metrics": [{ "id": "1" }] }))
            .is_err());
    }
}
