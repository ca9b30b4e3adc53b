pub mod common;
pub mod index;
pub mod metric;
