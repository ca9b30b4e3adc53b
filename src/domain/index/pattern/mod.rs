//! Index pattern tokenizer and expander

pub mod index_pattern;
pub mod pattern_token;
