pub mod query_model;
