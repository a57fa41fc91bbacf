use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// 使用者輸入時使用的名稱 (小寫)
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// TOML `[cities]` 表格中的 key
    pub fn config_key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new_york_city",
            City::Washington => "washington",
        }
    }

    pub fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based month index
    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 固定的英文全名，與主機 locale 無關
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

/// 一次查詢的城市與篩選條件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn matches(&self, record: &TripRecord) -> bool {
        let month_ok = match self.month {
            MonthFilter::All => true,
            MonthFilter::Only(month) => record.month == month.number(),
        };
        let day_ok = match self.day {
            DayFilter::All => true,
            DayFilter::Only(day) => record.weekday == day,
        };
        month_ok && day_ok
    }
}

/// 單筆行程資料；`month` 與 `weekday` 在載入時由 `start_time` 推導
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip_duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    pub month: u32,
    pub weekday: Weekday,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: Option<String>,
        end_station: Option<String>,
        trip_duration: f64,
    ) -> Self {
        Self {
            start_time,
            start_station,
            end_station,
            trip_duration,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday().into(),
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// "<start> -> <end>"，當作單一類別值統計；任一端為空值則為 `None`
    pub fn route(&self) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{} -> {}", start, end))
    }
}

/// 可選欄位是否存在於檔案表頭 (結構性檢查，與值無關)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableColumns {
    pub gender: bool,
    pub birth_year: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub columns: TableColumns,
    pub records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(columns: TableColumns, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.columns.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.columns.birth_year
    }

    /// 就地保留符合條件的資料列，不複製整份表格
    pub fn filtered(mut self, selection: &FilterSelection) -> TripTable {
        self.records.retain(|record| selection.matches(record));
        self
    }
}
