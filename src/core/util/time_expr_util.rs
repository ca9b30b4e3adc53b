use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::errors::ResolveError;

pub struct TimeExprUtil;

impl TimeExprUtil {
    /// Resolve a range boundary expression against the anchor instant.
    ///
    /// Accepts `now`, relative offsets such as `48h`, `now-3h` or `1h30m`
    /// (units `s`, `m`, `h`, `d`, `w`), and bare epoch milliseconds.
    pub fn resolve(
        expr: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<DateTime<FixedOffset>, ResolveError> {
        let trimmed = expr.trim();
        let invalid = || ResolveError::InvalidTimeExpression(expr.to_string());

        if trimmed.eq_ignore_ascii_case("now") {
            return Ok(now);
        }

        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let millis: i64 = trimmed.parse().map_err(|_| invalid())?;
            return DateTime::from_timestamp_millis(millis)
                .map(|dt| dt.with_timezone(now.offset()))
                .ok_or_else(invalid);
        }

        let offset = trimmed.strip_prefix("now-").unwrap_or(trimmed);
        let delta = Self::parse_offset(offset).ok_or_else(invalid)?;

        now.checked_sub_signed(delta).ok_or_else(invalid)
    }

    fn parse_offset(text: &str) -> Option<TimeDelta> {
        if text.is_empty() {
            return None;
        }

        let mut total = TimeDelta::zero();
        let mut rest = text;

        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                return None;
            }
            let value: i64 = rest[..digits_end].parse().ok()?;

            let unit_end = rest[digits_end..]
                .find(|c: char| c.is_ascii_digit())
                .map(|i| digits_end + i)
                .unwrap_or(rest.len());

            let component = match &rest[digits_end..unit_end] {
                "s" => TimeDelta::try_seconds(value)?,
                "m" => TimeDelta::try_minutes(value)?,
                "h" => TimeDelta::try_hours(value)?,
                "d" => TimeDelta::try_days(value)?,
                "w" => TimeDelta::try_weeks(value)?,
                _ => return None,
            };

            total = total.checked_add(&component)?;
            rest = &rest[unit_end..];
        }

        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2017, 2, 18, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn now_resolves_to_anchor() {
        assert_eq!(TimeExprUtil::resolve("now", anchor()).unwrap(), anchor());
    }

    #[test]
    fn hour_offset_subtracts_from_anchor() {
        let resolved = TimeExprUtil::resolve("48h", anchor()).unwrap();
        assert_eq!(resolved, anchor() - TimeDelta::hours(48));
    }

    #[test]
    fn now_prefix_and_compound_units() {
        let resolved = TimeExprUtil::resolve("now-1h30m", anchor()).unwrap();
        assert_eq!(resolved, anchor() - TimeDelta::minutes(90));

        let resolved = TimeExprUtil::resolve("2d", anchor()).unwrap();
        assert_eq!(resolved, anchor() - TimeDelta::days(2));
    }

    #[test]
    fn epoch_millis_keep_anchor_offset() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let now = anchor().with_timezone(&tz);
        let resolved = TimeExprUtil::resolve("1487419200000", now).unwrap();
        assert_eq!(resolved, anchor());
        assert_eq!(resolved.offset(), &tz);
    }

    #[test]
    fn malformed_expressions_are_rejected() {
        for expr in ["", "yesterday", "h", "3x", "1h30", "now-", "-3h"] {
            let err = TimeExprUtil::resolve(expr, anchor()).unwrap_err();
            assert_eq!(err, ResolveError::InvalidTimeExpression(expr.to_string()));
        }
    }
}
