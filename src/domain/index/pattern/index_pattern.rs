use chrono::NaiveDateTime;

use crate::domain::index::pattern::pattern_token::{tokenize, PatternToken};
use crate::errors::ResolveError;

/// A parsed rolling index pattern such as `[logstash-]YYYY.MM.DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPattern {
    raw: String,
    tokens: Vec<PatternToken>,
}

impl IndexPattern {
    pub fn parse(pattern: &str) -> Result<Self, ResolveError> {
        Ok(Self {
            raw: pattern.to_string(),
            tokens: tokenize(pattern)?,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn has_date_tokens(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, PatternToken::Date(_)))
    }

    /// Expand the pattern for one instant, expressed in the range's local time.
    pub fn expand(&self, at: &NaiveDateTime) -> String {
        let mut out = String::with_capacity(self.raw.len() + 8);
        for token in &self.tokens {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Date(date) => out.push_str(&date.render(at)),
            }
        }
        out
    }
}
