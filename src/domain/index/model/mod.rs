pub mod interval_granularity;
