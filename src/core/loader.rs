use crate::domain::model::{FilterSelection, TableColumns, TripRecord, TripTable};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BikeshareError, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// 讀取整份城市 CSV，並推導月份與星期欄位
pub fn read_trip_table<R: Read>(reader: R, source: &Path) -> Result<TripTable> {
    let path_label = source.display().to_string();
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(BikeshareError::MissingColumnError {
                path: path_label,
                column: column.to_string(),
            });
        }
    }

    let columns = TableColumns {
        gender: has_column(GENDER),
        birth_year: has_column(BIRTH_YEAR),
    };
    tracing::debug!(
        "Columns in {}: gender={}, birth_year={}",
        path_label,
        columns.gender,
        columns.birth_year
    );

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawTrip>().enumerate() {
        let raw = row?;
        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| {
            BikeshareError::InvalidTimestampError {
                path: path_label.clone(),
                row: index + 1,
                value: raw.start_time.clone(),
            }
        })?;

        let mut record = TripRecord::new(start_time, raw.start_station, raw.end_station, raw.trip_duration);
        record.user_type = raw.user_type;
        record.gender = raw.gender;
        record.birth_year = raw.birth_year;
        records.push(record);
    }

    Ok(TripTable::new(columns, records))
}

pub fn load_city_file(path: &Path) -> Result<TripTable> {
    let file = File::open(path)?;
    read_trip_table(file, path)
}

pub struct DatasetLoader<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DatasetLoader<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// 每次都重新讀檔，不快取上一輪的結果
    pub fn load(&self, selection: &FilterSelection) -> Result<TripTable> {
        let path = self.config.dataset_path(selection.city);
        tracing::info!("📁 Loading {} data from {}", selection.city, path.display());

        let table = load_city_file(&path)?;
        let total = table.len();
        let filtered = table.filtered(selection);

        tracing::info!(
            "✅ Loaded {} rows from {}, {} match month={:?} day={:?}",
            total,
            path.display(),
            filtered.len(),
            selection.month,
            selection.day
        );
        Ok(filtered)
    }
}
