use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use validator::{Validate, ValidationError};

use crate::errors::{invalid_query, ResolveError};

/// Query document sent by the panel editor.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_unique_metric_ids"))]
pub struct QueryModel {
    #[serde(default)]
    #[validate(nested)]
    pub metrics: Vec<MetricSpec>,

    /// Display name applied to every metric of the query. Empty means unset.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub alias: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MetricSpec {
    #[validate(length(min = 1))]
    pub id: String,

    /// Aggregation type tag, e.g. `avg` or `moving_avg`.
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub agg_type: String,

    /// Aggregated field. `count` has none.
    #[serde(default)]
    pub field: Option<String>,

    /// Id of the metric a pipeline aggregation is computed from.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub pipeline_agg: Option<String>,
}

impl QueryModel {
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        let model: QueryModel = serde_json::from_str(json).map_err(invalid_query)?;
        model.validate().map_err(invalid_query)?;
        Ok(model)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ResolveError> {
        let model: QueryModel = serde_json::from_value(value).map_err(invalid_query)?;
        model.validate().map_err(invalid_query)?;
        Ok(model)
    }
}

impl MetricSpec {
    pub fn new(id: impl Into<String>, agg_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            agg_type: agg_type.into(),
            field: Some(field.into()),
            pipeline_agg: None,
        }
    }

    pub fn with_pipeline_agg(mut self, id: impl Into<String>) -> Self {
        self.pipeline_agg = Some(id.into());
        self
    }
}

fn validate_unique_metric_ids(model: &QueryModel) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for metric in &model.metrics {
        if !seen.insert(metric.id.as_str()) {
            let mut err = ValidationError::new("duplicate_metric_id");
            err.add_param("id".into(), &metric.id);
            return Err(err);
        }
    }
    Ok(())
}
