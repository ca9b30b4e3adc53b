//! Shared domain types (TimeRange)

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use crate::core::util::time_expr_util::TimeExprUtil;
use crate::errors::ResolveError;

/// Requested query window. `from` and `to` are expressions resolved against `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
    pub now: DateTime<FixedOffset>,
}

impl TimeRange {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            now,
        }
    }

    /// Anchor the range to the local wall clock.
    pub fn anchored_now(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, Local::now().fixed_offset())
    }

    pub fn resolve_from(&self) -> Result<DateTime<FixedOffset>, ResolveError> {
        TimeExprUtil::resolve(&self.from, self.now)
    }

    pub fn resolve_to(&self) -> Result<DateTime<FixedOffset>, ResolveError> {
        TimeExprUtil::resolve(&self.to, self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn resolves_both_boundaries() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2017, 2, 18, 12, 0, 0)
            .unwrap();
        let range = TimeRange::new("3h", "now", now);

        assert_eq!(range.resolve_from().unwrap(), now - TimeDelta::hours(3));
        assert_eq!(range.resolve_to().unwrap(), now);
    }

    #[test]
    fn deserializes_from_json() {
        let range: TimeRange = serde_json::from_value(serde_json::json!({
            "from": "48h",
            "to": "now",
            "now": "2017-02-18T12:00:00+01:00"
        }))
        .unwrap();

        assert_eq!(range.now.offset().local_minus_utc(), 3600);
        assert_eq!(range.from, "48h");
    }
}
