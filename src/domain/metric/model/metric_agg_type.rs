/// Metric aggregation types known to the query editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricAggType {
    Count,
    Avg,
    Sum,
    Max,
    Min,
    ExtendedStats,
    Percentiles,
    Cardinality,
    MovingAvg,
    Derivative,
    CumulativeSum,
    RawDocument,
}

impl MetricAggType {
    pub fn as_code(&self) -> &'static str {
        match self {
            MetricAggType::Count => "count",
            MetricAggType::Avg => "avg",
            MetricAggType::Sum => "sum",
            MetricAggType::Max => "max",
            MetricAggType::Min => "min",
            MetricAggType::ExtendedStats => "extended_stats",
            MetricAggType::Percentiles => "percentiles",
            MetricAggType::Cardinality => "cardinality",
            MetricAggType::MovingAvg => "moving_avg",
            MetricAggType::Derivative => "derivative",
            MetricAggType::CumulativeSum => "cumulative_sum",
            MetricAggType::RawDocument => "raw_document",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "count" => Some(MetricAggType::Count),
            "avg" => Some(MetricAggType::Avg),
            "sum" => Some(MetricAggType::Sum),
            "max" => Some(MetricAggType::Max),
            "min" => Some(MetricAggType::Min),
            "extended_stats" => Some(MetricAggType::ExtendedStats),
            "percentiles" => Some(MetricAggType::Percentiles),
            "cardinality" => Some(MetricAggType::Cardinality),
            "moving_avg" => Some(MetricAggType::MovingAvg),
            "derivative" => Some(MetricAggType::Derivative),
            "cumulative_sum" => Some(MetricAggType::CumulativeSum),
            "raw_document" => Some(MetricAggType::RawDocument),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricAggType::Count => "Count",
            MetricAggType::Avg => "Average",
            MetricAggType::Sum => "Sum",
            MetricAggType::Max => "Max",
            MetricAggType::Min => "Min",
            MetricAggType::ExtendedStats => "Extended Stats",
            MetricAggType::Percentiles => "Percentiles",
            MetricAggType::Cardinality => "Unique Count",
            MetricAggType::MovingAvg => "Moving Average",
            MetricAggType::Derivative => "Derivative",
            MetricAggType::CumulativeSum => "Cumulative Sum",
            MetricAggType::RawDocument => "Raw Document",
        }
    }

    /// Pipeline aggregations read another metric instead of a document field.
    pub fn is_pipeline(&self) -> bool {
        matches!(
            self,
            MetricAggType::MovingAvg | MetricAggType::Derivative | MetricAggType::CumulativeSum
        )
    }

    /// Display label for a type tag; unknown tags are shown as-is.
    pub fn label_for(code: &str) -> &str {
        Self::from_code(code).map(|t| t.label()).unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_back_to_types() {
        for t in [
            MetricAggType::Count,
            MetricAggType::Avg,
            MetricAggType::ExtendedStats,
            MetricAggType::Cardinality,
            MetricAggType::MovingAvg,
            MetricAggType::RawDocument,
        ] {
            assert_eq!(MetricAggType::from_code(t.as_code()), Some(t));
        }
    }

    #[test]
    fn labels_fall_back_to_raw_code() {
        assert_eq!(MetricAggType::label_for("avg"), "Average");
        assert_eq!(MetricAggType::label_for("moving_avg"), "Moving Average");
        assert_eq!(MetricAggType::label_for("cardinality"), "Unique Count");
        assert_eq!(MetricAggType::label_for("geo_bounds"), "geo_bounds");
    }

    #[test]
    fn pipeline_types() {
        assert!(MetricAggType::MovingAvg.is_pipeline());
        assert!(MetricAggType::Derivative.is_pipeline());
        assert!(!MetricAggType::Avg.is_pipeline());
    }
}
