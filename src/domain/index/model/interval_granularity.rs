use chrono::{Datelike, Months, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::errors::ResolveError;

/// Calendar unit an index pattern rolls over on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IntervalGranularity {
    #[default]
    None,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl IntervalGranularity {
    /// Parse the interval setting of a datasource. Empty means a static index.
    pub fn from_name(name: &str) -> Result<Self, ResolveError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(IntervalGranularity::None),
            "hourly" => Ok(IntervalGranularity::Hourly),
            "daily" => Ok(IntervalGranularity::Daily),
            "weekly" => Ok(IntervalGranularity::Weekly),
            "monthly" => Ok(IntervalGranularity::Monthly),
            "yearly" => Ok(IntervalGranularity::Yearly),
            _ => Err(ResolveError::UnknownInterval(name.to_string())),
        }
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            IntervalGranularity::None => "",
            IntervalGranularity::Hourly => "Hourly",
            IntervalGranularity::Daily => "Daily",
            IntervalGranularity::Weekly => "Weekly",
            IntervalGranularity::Monthly => "Monthly",
            IntervalGranularity::Yearly => "Yearly",
        }
    }

    pub fn is_rolling(&self) -> bool {
        *self != IntervalGranularity::None
    }

    /// Upper bound on the number of units in one calendar year.
    pub fn units_per_year(&self) -> usize {
        match self {
            IntervalGranularity::None => 0,
            IntervalGranularity::Hourly => 366 * 24,
            IntervalGranularity::Daily => 366,
            IntervalGranularity::Weekly => 53,
            IntervalGranularity::Monthly => 12,
            IntervalGranularity::Yearly => 1,
        }
    }

    /// Start of the unit containing `at`. Weeks start on Monday (ISO 8601).
    pub fn unit_start(&self, at: NaiveDateTime) -> NaiveDateTime {
        let date = at.date();
        let midnight = |d: chrono::NaiveDate| d.and_time(NaiveTime::MIN);

        match self {
            IntervalGranularity::None => at,
            IntervalGranularity::Hourly => midnight(date) + TimeDelta::hours(i64::from(at.hour())),
            IntervalGranularity::Daily => midnight(date),
            IntervalGranularity::Weekly => {
                let back = i64::from(date.weekday().num_days_from_monday());
                midnight(date - TimeDelta::days(back))
            }
            IntervalGranularity::Monthly => midnight(date - TimeDelta::days(i64::from(date.day0()))),
            IntervalGranularity::Yearly => {
                midnight(date - TimeDelta::days(i64::from(date.ordinal0())))
            }
        }
    }

    /// Start of the unit preceding the one starting at `unit_start`.
    pub fn previous_unit(&self, unit_start: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            IntervalGranularity::None => None,
            IntervalGranularity::Hourly => unit_start.checked_sub_signed(TimeDelta::hours(1)),
            IntervalGranularity::Daily => unit_start.checked_sub_signed(TimeDelta::days(1)),
            IntervalGranularity::Weekly => unit_start.checked_sub_signed(TimeDelta::weeks(1)),
            IntervalGranularity::Monthly => unit_start.checked_sub_months(Months::new(1)),
            IntervalGranularity::Yearly => unit_start.checked_sub_months(Months::new(12)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_interval_names() {
        assert_eq!(IntervalGranularity::from_name("").unwrap(), IntervalGranularity::None);
        assert_eq!(IntervalGranularity::from_name("Daily").unwrap(), IntervalGranularity::Daily);
        assert_eq!(IntervalGranularity::from_name("WEEKLY").unwrap(), IntervalGranularity::Weekly);
        assert_eq!(
            IntervalGranularity::from_name("Fortnightly"),
            Err(ResolveError::UnknownInterval("Fortnightly".into()))
        );
    }

    #[test]
    fn names_round_trip_for_rolling_units() {
        for g in [
            IntervalGranularity::Hourly,
            IntervalGranularity::Daily,
            IntervalGranularity::Weekly,
            IntervalGranularity::Monthly,
            IntervalGranularity::Yearly,
        ] {
            assert!(g.is_rolling());
            assert_eq!(IntervalGranularity::from_name(g.as_name()).unwrap(), g);
        }
        assert!(!IntervalGranularity::None.is_rolling());
    }

    #[test]
    fn units_per_year_cover_a_leap_year() {
        assert_eq!(IntervalGranularity::Hourly.units_per_year(), 8784);
        assert_eq!(IntervalGranularity::Daily.units_per_year(), 366);
        assert_eq!(IntervalGranularity::Weekly.units_per_year(), 53);
        assert_eq!(IntervalGranularity::Monthly.units_per_year(), 12);
        assert_eq!(IntervalGranularity::Yearly.units_per_year(), 1);
    }

    #[test]
    fn unit_start_aligns_to_boundaries() {
        let t = at(2017, 2, 18, 12, 34);
        assert_eq!(IntervalGranularity::Hourly.unit_start(t), at(2017, 2, 18, 12, 0));
        assert_eq!(IntervalGranularity::Daily.unit_start(t), at(2017, 2, 18, 0, 0));
        // 2017-02-18 is a Saturday
        assert_eq!(IntervalGranularity::Weekly.unit_start(t), at(2017, 2, 13, 0, 0));
        assert_eq!(IntervalGranularity::Monthly.unit_start(t), at(2017, 2, 1, 0, 0));
        assert_eq!(IntervalGranularity::Yearly.unit_start(t), at(2017, 1, 1, 0, 0));
    }

    #[test]
    fn previous_unit_rolls_over_calendar_boundaries() {
        assert_eq!(
            IntervalGranularity::Hourly.previous_unit(at(2017, 1, 1, 0, 0)),
            Some(at(2016, 12, 31, 23, 0))
        );
        assert_eq!(
            IntervalGranularity::Daily.previous_unit(at(2016, 3, 1, 0, 0)),
            Some(at(2016, 2, 29, 0, 0))
        );
        assert_eq!(
            IntervalGranularity::Monthly.previous_unit(at(2017, 1, 1, 0, 0)),
            Some(at(2016, 12, 1, 0, 0))
        );
        assert_eq!(
            IntervalGranularity::Yearly.previous_unit(at(2017, 1, 1, 0, 0)),
            Some(at(2016, 1, 1, 0, 0))
        );
        assert_eq!(IntervalGranularity::None.previous_unit(at(2017, 1, 1, 0, 0)), None);
    }
}
