pub mod metric_agg_type;
pub mod name_lookup;
