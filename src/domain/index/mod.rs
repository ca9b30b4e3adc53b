//! Rolling index resolution: pattern expansion and time range enumeration

pub mod model;
pub mod pattern;
pub mod service;
