use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::common::model::TimeRange;
use crate::domain::index::model::interval_granularity::IntervalGranularity;
use crate::domain::index::pattern::index_pattern::IndexPattern;
use crate::errors::ResolveError;

/// Years walked without a new name before the walk stops. Names built only
/// from month, day, hour or week fields repeat within this window, including
/// leap days (at most 8 years apart) and ISO week 53.
const REPEAT_WINDOW_YEARS: usize = 8;

/// Comma-joined list of indexes covering `range` for a rolling pattern.
pub fn resolve_index_list(
    pattern: &str,
    interval_name: &str,
    range: &TimeRange,
    max_index_count: usize,
) -> Result<String, ResolveError> {
    let granularity = IntervalGranularity::from_name(interval_name)?;
    let names = resolve_index_names(pattern, granularity, range, max_index_count)?;
    Ok(names.join(","))
}

/// Index names covering `range`, oldest first, at most `max_index_count`.
///
/// The walk starts at the unit containing `to` and moves backwards, so the
/// unit containing `to` is always present and the most recent names win when
/// the range holds more than `max_index_count` of them. Patterns without a
/// year field stop once `REPEAT_WINDOW_YEARS` pass with no new name.
pub fn resolve_index_names(
    pattern: &str,
    granularity: IntervalGranularity,
    range: &TimeRange,
    max_index_count: usize,
) -> Result<Vec<String>, ResolveError> {
    if !granularity.is_rolling() {
        return Ok(vec![pattern.to_string()]);
    }

    let index_pattern = IndexPattern::parse(pattern)?;
    let from = range.resolve_from()?.naive_local();
    let to = range.resolve_to()?.naive_local();

    if !index_pattern.has_date_tokens() {
        debug!("Index pattern {:?} has no date tokens", pattern);
        return Ok(vec![index_pattern.expand(&to)]);
    }

    let limit = max_index_count.max(1);
    let first = granularity.unit_start(from);
    let mut cursor = Some(granularity.unit_start(to));
    let mut newest_first: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    let mut truncated = false;
    let repeat_window = granularity.units_per_year() * REPEAT_WINDOW_YEARS;
    let mut steps_since_new = 0;

    while let Some(step) = cursor {
        let name = index_pattern.expand(&step);
        if seen.insert(name.clone()) {
            if newest_first.len() == limit {
                truncated = true;
                break;
            }
            newest_first.push(name);
            steps_since_new = 0;
        } else {
            steps_since_new += 1;
            if steps_since_new >= repeat_window {
                debug!("Index names of {:?} repeat, stopping walk at {}", pattern, step);
                break;
            }
        }

        if step <= first {
            break;
        }
        cursor = granularity.previous_unit(step);
    }

    if truncated {
        warn!(
            pattern,
            interval = granularity.as_name(),
            limit,
            "Index list exceeds limit, dropping oldest indexes"
        );
    }

    newest_first.reverse();
    debug!(
        "Resolved {} {} indexes for {:?}",
        newest_first.len(),
        granularity.as_name(),
        pattern
    );

    Ok(newest_first)
}
