use crate::models::{Dashboard, MetaResponse, Metric, MetricSeries, SeriesRow, WeeklyRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Synthetic region label for the per-date sum across all real regions.
pub const SWEDEN: &str = "Sweden";

pub fn build_dashboard(records: &[WeeklyRecord]) -> Dashboard {
    Dashboard {
        cases: build_metric_series(records, Metric::Cases),
        icu: build_metric_series(records, Metric::Icu),
        deaths: build_metric_series(records, Metric::Deaths),
    }
}

pub fn build_metric_series(records: &[WeeklyRecord], metric: Metric) -> MetricSeries {
    let mut rows: Vec<SeriesRow> = Vec::with_capacity(records.len());
    for record in records {
        rows.push(SeriesRow {
            date: record.date,
            region: record.region.clone(),
            value: metric.value_of(record),
        });
    }

    // National rows are recomputed from the region rows, never hand-maintained.
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for row in &rows {
        let total = totals.entry(row.date).or_default();
        *total = total.saturating_add(row.value);
    }
    rows.extend(totals.into_iter().map(|(date, value)| SeriesRow {
        date,
        region: SWEDEN.to_string(),
        value,
    }));

    MetricSeries { rows }
}

pub fn sorted_regions(series: &MetricSeries) -> Vec<String> {
    let regions: BTreeSet<&str> = series.rows.iter().map(|row| row.region.as_str()).collect();
    regions.into_iter().map(str::to_string).collect()
}

pub fn date_bounds(series: &MetricSeries) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = series.rows.iter().map(|row| row.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    }))
}

/// Region list and date bounds for the selector controls. The source
/// dashboard populated both from its ICU table; callers here pass whichever
/// table they like since all three cover the same (date, region) keys.
pub fn selector_meta(series: &MetricSeries) -> Option<MetaResponse> {
    let (min_date, max_date) = date_bounds(series)?;
    Some(MetaResponse {
        regions: sorted_regions(series),
        min_date,
        max_date,
    })
}
