use crate::errors::IngestError;
use crate::models::{RawWeeklyRecord, WeeklyRecord};
use chrono::{NaiveDate, Weekday};
use std::{env, fmt, path::PathBuf, time::Duration};
use tokio::fs;
use tracing::warn;

/// Default on-disk location of the exported "Veckodata Region" sheet.
const DEFAULT_DATA_PATH: &str = "data/veckodata_region.csv";

/// Reporting starts at week 9 of 2020; earlier weeks of that year appear in
/// the sheet with no data behind them and are dropped.
const FIRST_YEAR: i32 = 2020;
const FIRST_WEEK: u32 = 9;

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the weekly sheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

pub fn resolve_source() -> DataSource {
    if let Ok(path) = env::var("COVID_DATA_PATH") {
        return DataSource::File(PathBuf::from(path));
    }
    if let Ok(url) = env::var("COVID_DATA_URL") {
        return DataSource::Url(url);
    }

    DataSource::File(PathBuf::from(DEFAULT_DATA_PATH))
}

pub async fn load_records(source: &DataSource) -> Result<Vec<WeeklyRecord>, IngestError> {
    let text = match source {
        DataSource::File(path) => fs::read_to_string(path)
            .await
            .map_err(|err| IngestError::Fetch(format!("{}: {err}", path.display())))?,
        DataSource::Url(url) => fetch_text(url).await?,
    };

    parse_records(&text)
}

async fn fetch_text(url: &str) -> Result<String, IngestError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| IngestError::Fetch(err.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| IngestError::Fetch(format!("{url}: {err}")))?;

    response
        .text()
        .await
        .map_err(|err| IngestError::Fetch(format!("{url}: {err}")))
}

/// Parse the weekly sheet (CSV with upstream's own column headers) into dated
/// records. Rows before the reporting cutoff are dropped; rows whose
/// (year, week) is not a real ISO week are rejected and logged.
pub fn parse_records(text: &str) -> Result<Vec<WeeklyRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize::<RawWeeklyRecord>() {
        let raw =
            result.map_err(|err| IngestError::Fetch(format!("malformed weekly sheet: {err}")))?;
        if before_reporting_start(raw.year, raw.week) {
            continue;
        }
        match monday_of_iso_week(raw.year, raw.week) {
            Ok(date) => records.push(WeeklyRecord {
                date,
                region: raw.region,
                cases: raw.cases,
                icu: raw.icu,
                deaths: raw.deaths,
            }),
            Err(err) => warn!("skipping row for {}: {err}", raw.region),
        }
    }

    if records.is_empty() {
        return Err(IngestError::Fetch(
            "weekly sheet contained no usable rows".to_string(),
        ));
    }

    Ok(records)
}

/// Monday of the given ISO week, the canonical time-axis value for a record.
pub fn monday_of_iso_week(year: i32, week: u32) -> Result<NaiveDate, IngestError> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(IngestError::InvalidDate { year, week })
}

fn before_reporting_start(year: i32, week: u32) -> bool {
    year == FIRST_YEAR && week < FIRST_WEEK
}
