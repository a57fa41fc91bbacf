use crate::core::stats::{count_distinct, format_thousands, mean, mode};
use crate::domain::model::{Month, TripTable};
use crate::domain::ports::Reporter;
use crate::utils::error::Result;
use std::io::Write;

pub const NO_MATCHING_TRIPS: &str = "No trips match the selected filters.";

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub popular_month: Month,
    pub popular_day: &'static str,
    pub popular_hour: u32,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        let popular_month = mode(table.records.iter().map(|r| r.month)).and_then(Month::from_number)?;
        // 星期以名稱字串比較，平手時取字母序最小者
        let popular_day = mode(table.records.iter().map(|r| r.weekday.name()))?;
        let popular_hour = mode(table.records.iter().map(|r| r.start_hour()))?;

        Some(Self {
            popular_month,
            popular_day,
            popular_hour,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub popular_start_station: String,
    pub popular_end_station: String,
    pub popular_trip: String,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        // 空白站名不列入統計
        let popular_start_station = mode(table.records.iter().filter_map(|r| r.start_station.as_deref()))?;
        let popular_end_station = mode(table.records.iter().filter_map(|r| r.end_station.as_deref()))?;
        let popular_trip = mode(table.records.iter().filter_map(|r| r.route()))?;

        Some(Self {
            popular_start_station: popular_start_station.to_string(),
            popular_end_station: popular_end_station.to_string(),
            popular_trip,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        let durations: Vec<f64> = table.records.iter().map(|r| r.trip_duration).collect();
        let mean_seconds = mean(&durations)?;

        Some(Self {
            total_seconds: durations.iter().sum(),
            mean_seconds,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: usize,
    /// `None` 表示檔案沒有 Gender 欄位
    pub genders: Option<usize>,
    /// 外層 `None` 表示沒有 Birth Year 欄位，內層 `None` 表示欄位存在但全為空值
    pub birth_years: Option<Option<BirthYearStats>>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let user_types = count_distinct(table.records.iter().filter_map(|r| r.user_type.as_deref()));

        let genders = table
            .has_gender()
            .then(|| count_distinct(table.records.iter().filter_map(|r| r.gender.as_deref())));

        let birth_years = table.has_birth_year().then(|| {
            let years: Vec<i64> = table
                .records
                .iter()
                .filter_map(|r| r.birth_year)
                .map(|year| year as i64)
                .collect();

            Some(BirthYearStats {
                earliest: *years.iter().min()?,
                most_recent: *years.iter().max()?,
                most_common: mode(years.iter().copied())?,
            })
        });

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

pub struct TimeReporter;

impl Reporter for TimeReporter {
    fn name(&self) -> &'static str {
        "time_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }

    fn write_report(&self, table: &TripTable, out: &mut dyn Write) -> Result<()> {
        let Some(stats) = TimeStats::compute(table) else {
            writeln!(out, "{}", NO_MATCHING_TRIPS)?;
            return Ok(());
        };

        writeln!(out, "The most common month is {}.", stats.popular_month.name().to_lowercase())?;
        writeln!(out, "The most common day is {}.", stats.popular_day)?;
        writeln!(out, "The most common start hour is {}.", stats.popular_hour)?;
        Ok(())
    }
}

pub struct StationReporter;

impl Reporter for StationReporter {
    fn name(&self) -> &'static str {
        "station_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn write_report(&self, table: &TripTable, out: &mut dyn Write) -> Result<()> {
        let Some(stats) = StationStats::compute(table) else {
            writeln!(out, "{}", NO_MATCHING_TRIPS)?;
            return Ok(());
        };

        writeln!(out, "The most commonly used start station is {}.", stats.popular_start_station)?;
        writeln!(out, "The most commonly used end station is {}.", stats.popular_end_station)?;
        writeln!(out, "The most frequent trip is {}.", stats.popular_trip)?;
        Ok(())
    }
}

pub struct DurationReporter;

impl Reporter for DurationReporter {
    fn name(&self) -> &'static str {
        "trip_duration_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating Trip Duration..."
    }

    fn write_report(&self, table: &TripTable, out: &mut dyn Write) -> Result<()> {
        let Some(stats) = DurationStats::compute(table) else {
            writeln!(out, "{}", NO_MATCHING_TRIPS)?;
            return Ok(());
        };

        writeln!(out, "Total travel time is {} seconds.", format_thousands(stats.total_seconds))?;
        writeln!(out, "Mean travel time is {:.2} seconds.", stats.mean_seconds)?;
        Ok(())
    }
}

pub struct UserReporter;

impl Reporter for UserReporter {
    fn name(&self) -> &'static str {
        "user_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating User Stats..."
    }

    fn write_report(&self, table: &TripTable, out: &mut dyn Write) -> Result<()> {
        if table.is_empty() {
            writeln!(out, "{}", NO_MATCHING_TRIPS)?;
            return Ok(());
        }

        let stats = UserStats::compute(table);
        writeln!(out, "Counts of user types is {}.", stats.user_types)?;

        match stats.genders {
            Some(count) => writeln!(out, "Counts of gender is {}.", count)?,
            None => writeln!(out, "No gender column in the data!")?,
        }

        match stats.birth_years {
            Some(Some(years)) => {
                writeln!(out, "The earliest year of birth is {}.", years.earliest)?;
                writeln!(out, "The most recent year of birth is {}.", years.most_recent)?;
                writeln!(out, "The most common year of birth is {}.", years.most_common)?;
            }
            Some(None) => writeln!(out, "No birth year data in the selected trips!")?,
            None => writeln!(out, "No birth year column in the data!")?,
        }
        Ok(())
    }
}

/// 依固定順序輸出的四個報表區段
pub fn default_reporters() -> Vec<Box<dyn Reporter>> {
    vec![
        Box::new(TimeReporter),
        Box::new(StationReporter),
        Box::new(DurationReporter),
        Box::new(UserReporter),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{TableColumns, TripRecord};
    use chrono::NaiveDate;

    fn trip(day: u32, hour: u32, start: &str, end: &str, duration: f64) -> TripRecord {
        let start_time = NaiveDate::from_ymd_opt(2017, 3, day)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap();
        let station = |name: &str| (!name.is_empty()).then(|| name.to_string());
        TripRecord::new(start_time, station(start), station(end), duration)
    }

    fn table(records: Vec<TripRecord>, columns: TableColumns) -> TripTable {
        TripTable::new(columns, records)
    }

    fn render(reporter: &dyn Reporter, table: &TripTable) -> String {
        let mut out = Vec::new();
        reporter.write_report(table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_time_stats() {
        // 3/6 星期一、3/7 星期二
        let t = table(
            vec![
                trip(6, 8, "A", "B", 1.0),
                trip(7, 17, "A", "B", 1.0),
                trip(7, 17, "A", "B", 1.0),
            ],
            TableColumns::default(),
        );
        let stats = TimeStats::compute(&t).unwrap();
        assert_eq!(stats.popular_month, Month::March);
        assert_eq!(stats.popular_day, "Tuesday");
        assert_eq!(stats.popular_hour, 17);

        let text = render(&TimeReporter, &t);
        assert!(text.contains("The most common month is march."));
        assert!(text.contains("The most common day is Tuesday."));
        assert!(text.contains("The most common start hour is 17."));
    }

    #[test]
    fn test_station_stats_uses_route_as_single_value() {
        let t = table(
            vec![
                trip(6, 8, "A", "B", 1.0),
                trip(6, 8, "A", "C", 1.0),
                trip(6, 8, "D", "C", 1.0),
                trip(6, 8, "D", "C", 1.0),
            ],
            TableColumns::default(),
        );
        let stats = StationStats::compute(&t).unwrap();
        // A 與 D 各兩次，平手取 A
        assert_eq!(stats.popular_start_station, "A");
        assert_eq!(stats.popular_end_station, "C");
        assert_eq!(stats.popular_trip, "D -> C");
    }

    #[test]
    fn test_station_stats_skip_empty_cells() {
        let t = table(
            vec![
                trip(6, 8, "", "B", 1.0),
                trip(6, 8, "", "B", 1.0),
                trip(6, 8, "A", "B", 1.0),
            ],
            TableColumns::default(),
        );
        let stats = StationStats::compute(&t).unwrap();
        assert_eq!(stats.popular_start_station, "A");
        assert_eq!(stats.popular_end_station, "B");
        assert_eq!(stats.popular_trip, "A -> B");

        let text = render(&StationReporter, &t);
        assert!(text.contains("The most commonly used start station is A."));
        assert!(text.contains("The most frequent trip is A -> B."));
    }

    #[test]
    fn test_duration_stats() {
        let t = table(
            vec![
                trip(6, 8, "A", "B", 100.0),
                trip(6, 8, "A", "B", 200.0),
                trip(6, 8, "A", "B", 300.0),
            ],
            TableColumns::default(),
        );
        let stats = DurationStats::compute(&t).unwrap();
        assert_eq!(stats.total_seconds, 600.0);
        assert_eq!(stats.mean_seconds, 200.0);

        let text = render(&DurationReporter, &t);
        assert!(text.contains("Total travel time is 600 seconds."));
        assert!(text.contains("Mean travel time is 200.00 seconds."));
    }

    #[test]
    fn test_user_stats_without_optional_columns() {
        let mut a = trip(6, 8, "A", "B", 1.0);
        a.user_type = Some("Subscriber".to_string());
        let mut b = trip(6, 8, "A", "B", 1.0);
        b.user_type = Some("Customer".to_string());
        let mut c = trip(6, 8, "A", "B", 1.0);
        c.user_type = Some("Subscriber".to_string());
        let t = table(vec![a, b, c], TableColumns::default());

        let stats = UserStats::compute(&t);
        assert_eq!(stats.user_types, 2);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);

        let text = render(&UserReporter, &t);
        assert!(text.contains("Counts of user types is 2."));
        assert!(text.contains("No gender column in the data!"));
        assert!(text.contains("No birth year column in the data!"));
    }

    #[test]
    fn test_user_stats_with_birth_years() {
        let years = [Some(1992.0), Some(1985.0), Some(1992.0), None, Some(2001.0)];
        let records = years
            .iter()
            .map(|year| {
                let mut r = trip(6, 8, "A", "B", 1.0);
                r.gender = year.map(|_| "Male".to_string());
                r.birth_year = *year;
                r
            })
            .collect();
        let t = table(
            records,
            TableColumns {
                gender: true,
                birth_year: true,
            },
        );

        let stats = UserStats::compute(&t);
        assert_eq!(stats.genders, Some(1));
        assert_eq!(
            stats.birth_years,
            Some(Some(BirthYearStats {
                earliest: 1985,
                most_recent: 2001,
                most_common: 1992,
            }))
        );

        let text = render(&UserReporter, &t);
        assert!(text.contains("The earliest year of birth is 1985."));
        assert!(text.contains("The most recent year of birth is 2001."));
        assert!(text.contains("The most common year of birth is 1992."));
    }

    #[test]
    fn test_birth_year_column_with_only_empty_cells() {
        let t = table(
            vec![trip(6, 8, "A", "B", 1.0)],
            TableColumns {
                gender: false,
                birth_year: true,
            },
        );
        assert_eq!(UserStats::compute(&t).birth_years, Some(None));
        assert!(render(&UserReporter, &t).contains("No birth year data in the selected trips!"));
    }

    #[test]
    fn test_empty_table_prints_notice() {
        let t = table(vec![], TableColumns::default());
        for reporter in default_reporters() {
            assert_eq!(render(reporter.as_ref(), &t), format!("{}\n", NO_MATCHING_TRIPS));
        }
    }

    #[test]
    fn test_reports_are_repeatable() {
        let t = table(
            vec![
                trip(6, 8, "X", "Y", 5.0),
                trip(7, 9, "Y", "X", 7.0),
                trip(8, 10, "Z", "X", 9.0),
            ],
            TableColumns::default(),
        );
        for reporter in default_reporters() {
            assert_eq!(render(reporter.as_ref(), &t), render(reporter.as_ref(), &t));
        }
    }
}
