//! Grouping of nearby good dates into power periods.

use chrono::NaiveDate;
use gd_core::responses::{GoodDatesResult, PowerPeriod};

use crate::error::CalendarError;

pub const DEFAULT_MAX_GAP_DAYS: u32 = 3;

/// Group dates whose consecutive gaps are at most `max_gap_days`.
///
/// Input order does not matter. Duplicate dates are collapsed before grouping,
/// so a repeated date never pads a cluster or its `duration`. Only groups of
/// two or more distinct dates are returned, in chronological order.
#[must_use]
pub fn find_clusters(dates: &[NaiveDate], max_gap_days: u32) -> Vec<PowerPeriod> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut clusters = Vec::new();
    let mut current: Vec<NaiveDate> = Vec::new();

    for date in sorted {
        let joins = current
            .last()
            .is_some_and(|prev| (date - *prev).num_days() <= i64::from(max_gap_days));
        if !joins {
            flush(&mut current, &mut clusters);
        }
        current.push(date);
    }
    flush(&mut current, &mut clusters);

    clusters
}

/// Parse the result's dates and cluster them.
pub fn clusters_for(
    result: &GoodDatesResult,
    max_gap_days: u32,
) -> Result<Vec<PowerPeriod>, CalendarError> {
    let dates = result.parsed_dates()?;
    let clusters = find_clusters(&dates, max_gap_days);
    tracing::debug!(
        dates = dates.len(),
        clusters = clusters.len(),
        max_gap_days,
        "clustered good dates"
    );
    Ok(clusters)
}

fn flush(current: &mut Vec<NaiveDate>, clusters: &mut Vec<PowerPeriod>) {
    if current.len() > 1 {
        let dates: Vec<String> = current
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect();
        clusters.push(PowerPeriod {
            start_date: dates[0].clone(),
            end_date: dates[dates.len() - 1].clone(),
            duration: u32::try_from(dates.len()).unwrap_or(u32::MAX),
            dates,
        });
    }
    current.clear();
}
