use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the upstream weekly sheet, column names as published by
/// Folkhälsomyndigheten ("Veckodata Region").
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeeklyRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "år")]
    pub year: i32,
    #[serde(rename = "veckonummer")]
    pub week: u32,
    #[serde(rename = "Antal_fall_vecka")]
    pub cases: u64,
    #[serde(rename = "Antal_intensivvårdade_vecka")]
    pub icu: u64,
    #[serde(rename = "Antal_avlidna_vecka")]
    pub deaths: u64,
}

/// A raw record with its calendar date attached: the Monday of the ISO
/// (year, week) pair. Computed once at ingest, never recomputed downstream.
#[derive(Debug, Clone)]
pub struct WeeklyRecord {
    pub date: NaiveDate,
    pub region: String,
    pub cases: u64,
    pub icu: u64,
    pub deaths: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cases,
    Icu,
    Deaths,
}

impl Metric {
    pub fn value_of(self, record: &WeeklyRecord) -> u64 {
        match self {
            Metric::Cases => record.cases,
            Metric::Icu => record.icu,
            Metric::Deaths => record.deaths,
        }
    }
}

/// One observation in a tidy metric table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub region: String,
    pub value: u64,
}

/// Tidy table for one metric: one row per (date, region), covering the real
/// regions plus the synthetic "Sweden" rows that hold per-date national sums.
#[derive(Debug, Clone, Default)]
pub struct MetricSeries {
    pub rows: Vec<SeriesRow>,
}

/// The three series tables, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub cases: MetricSeries,
    pub icu: MetricSeries,
    pub deaths: MetricSeries,
}

/// Display bundle for one metric's chart.
#[derive(Debug, Clone)]
pub struct MetricStyle {
    pub name: &'static str,
    pub color: &'static str,
    pub hover_label: &'static str,
    pub value_label: &'static str,
    pub y_title: &'static str,
    pub y_padding: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub region: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub regions: Vec<String>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub value: u64,
}

#[derive(Debug, Serialize)]
pub struct XAxisSpec {
    pub title: String,
    pub show_grid: bool,
    pub line_color: String,
    /// First tick shown on the axis, fixed regardless of the filtered window.
    pub tick0: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct YAxisSpec {
    pub title: String,
    pub show_grid: bool,
    pub grid_color: String,
    pub line_color: String,
    pub range: [u64; 2],
}

/// Everything the page needs to draw one bar chart. Purely descriptive; the
/// browser does the drawing.
#[derive(Debug, Serialize)]
pub struct ChartResult {
    pub region: String,
    pub name: String,
    pub color: String,
    pub hover_label: String,
    pub value_label: String,
    pub background: String,
    pub bars: Vec<Bar>,
    pub x_axis: XAxisSpec,
    pub y_axis: YAxisSpec,
}
