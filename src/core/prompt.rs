use crate::domain::model::{City, DayFilter, FilterSelection, Month, MonthFilter, Weekday};
use crate::utils::error::{BikeshareError, Result};
use crate::utils::validation::{match_vocabulary, strip_line_ending};
use std::io::{BufRead, Write};

pub const SEPARATOR_WIDTH: usize = 40;

const CITY_CHOICES: [(&str, City); 3] = [
    ("chicago", City::Chicago),
    ("new york city", City::NewYorkCity),
    ("washington", City::Washington),
];

const MONTH_CHOICES: [(&str, MonthFilter); 13] = [
    ("all", MonthFilter::All),
    ("january", MonthFilter::Only(Month::January)),
    ("february", MonthFilter::Only(Month::February)),
    ("march", MonthFilter::Only(Month::March)),
    ("april", MonthFilter::Only(Month::April)),
    ("may", MonthFilter::Only(Month::May)),
    ("june", MonthFilter::Only(Month::June)),
    ("july", MonthFilter::Only(Month::July)),
    ("august", MonthFilter::Only(Month::August)),
    ("september", MonthFilter::Only(Month::September)),
    ("october", MonthFilter::Only(Month::October)),
    ("november", MonthFilter::Only(Month::November)),
    ("december", MonthFilter::Only(Month::December)),
];

const DAY_CHOICES: [(&str, DayFilter); 8] = [
    ("all", DayFilter::All),
    ("monday", DayFilter::Only(Weekday::Monday)),
    ("tuesday", DayFilter::Only(Weekday::Tuesday)),
    ("wednesday", DayFilter::Only(Weekday::Wednesday)),
    ("thursday", DayFilter::Only(Weekday::Thursday)),
    ("friday", DayFilter::Only(Weekday::Friday)),
    ("saturday", DayFilter::Only(Weekday::Saturday)),
    ("sunday", DayFilter::Only(Weekday::Sunday)),
];

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// 互動式輸入：讀取城市、月份、星期，不合法就一直重問
pub struct FilterPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FilterPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn get_filters(&mut self) -> Result<FilterSelection> {
        let city = self.ask(
            "city",
            "Please input the city name('chicago', 'new york city', or 'washington') to analyze:",
            "Please input the city name('chicago', 'new york city', or 'washington') to analyze:",
            &CITY_CHOICES,
        )?;
        let month = self.ask(
            "month",
            "Please input the month(all, january, february, march, ...) you want to filter by:",
            "Please input the month you want to filter by:",
            &MONTH_CHOICES,
        )?;
        let day = self.ask(
            "day",
            "Please input the week day(all, monday, tuesday, ...) you want to filter by:",
            "Please input the week day you want to filter by:",
            &DAY_CHOICES,
        )?;

        writeln!(self.output, "{}", separator())?;
        Ok(FilterSelection { city, month, day })
    }

    /// 只有 "yes" (不分大小寫) 才會重新開始；輸入結束視為 "no"
    pub fn ask_restart(&mut self) -> Result<bool> {
        let answer = self.read_line("\nWould you like to restart? Enter yes or no.\n")?;
        Ok(answer.is_some_and(|line| strip_line_ending(&line).eq_ignore_ascii_case("yes")))
    }

    fn ask<T: Copy>(
        &mut self,
        field: &str,
        first_prompt: &str,
        retry_prompt: &str,
        vocabulary: &[(&str, T)],
    ) -> Result<T> {
        let mut prompt = first_prompt;
        loop {
            let line = self
                .read_line(prompt)?
                .ok_or_else(|| BikeshareError::InputClosedError {
                    field: field.to_string(),
                })?;

            if let Some(value) = match_vocabulary(&line, vocabulary) {
                return Ok(value);
            }
            tracing::debug!("Rejected {} input: {:?}", field, strip_line_ending(&line));
            prompt = retry_prompt;
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
