//! Date handling for daily notes.

use std::fmt;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Extension appended to generated daily note names.
pub const NOTE_EXTENSION: &str = "md";

/// The logical date a daily note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DailyDate(NaiveDate);

impl DailyDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Derive the date from a title or file name, falling back to `today`.
    ///
    /// Accepts `2024-03-10`, `2024-03-10.md`, `2024-03-10 Sunday` and paths
    /// ending in any of those. Anything else, including impossible dates such
    /// as `2024-02-30`, yields `today`.
    pub fn from_title_hint(hint: Option<&str>, today: NaiveDate) -> Self {
        Self(hint.and_then(parse_title_date).unwrap_or(today))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The normalized title, `YYYY-MM-DD`.
    pub fn title(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn previous_day(&self) -> Option<NaiveDate> {
        self.0.pred_opt()
    }

    /// ISO-8601 week identifier, e.g. `2024-W10`.
    ///
    /// Uses the ISO week-numbering year, so `2023-01-01` is `2022-W52`.
    pub fn iso_week_id(&self) -> String {
        let week = self.0.iso_week();
        format!("{}-W{:02}", week.year(), week.week())
    }

    pub fn file_name(&self) -> String {
        format!("{}.{NOTE_EXTENSION}", self.title())
    }
}

impl fmt::Display for DailyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn parse_title_date(hint: &str) -> Option<NaiveDate> {
    let stem = Path::new(hint.trim()).file_stem()?.to_str()?;
    let re = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid regex");
    let caps = re.captures(stem)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-03-10", ymd(2024, 3, 10))]
    #[case("2024-03-10.md", ymd(2024, 3, 10))]
    #[case("2024-03-10 Sunday review", ymd(2024, 3, 10))]
    #[case("Journal/Daily/2023-12-31.md", ymd(2023, 12, 31))]
    #[case("  2024-02-29  ", ymd(2024, 2, 29))]
    fn title_hint_dates(#[case] hint: &str, #[case] expected: NaiveDate) {
        let today = ymd(2000, 1, 1);
        assert_eq!(DailyDate::from_title_hint(Some(hint), today).date(), expected);
    }

    #[rstest]
    #[case("not a date")]
    #[case("2023-02-29")]
    #[case("2024-13-01")]
    #[case("10-03-2024")]
    #[case("")]
    fn invalid_hints_fall_back_to_today(#[case] hint: &str) {
        let today = ymd(2025, 6, 1);
        assert_eq!(DailyDate::from_title_hint(Some(hint), today).date(), today);
    }

    #[test]
    fn missing_hint_is_today() {
        let today = ymd(2025, 6, 1);
        assert_eq!(DailyDate::from_title_hint(None, today).date(), today);
    }

    #[rstest]
    #[case(ymd(2024, 3, 10), "2024-W10")]
    #[case(ymd(2023, 1, 1), "2022-W52")]
    #[case(ymd(2021, 1, 3), "2020-W53")]
    #[case(ymd(2024, 12, 30), "2025-W01")]
    #[case(ymd(2024, 1, 1), "2024-W01")]
    fn iso_week_ids(#[case] date: NaiveDate, #[case] expected: &str) {
        assert_eq!(DailyDate::new(date).iso_week_id(), expected);
    }

    #[test]
    fn previous_day_crosses_year() {
        let date = DailyDate::new(ymd(2024, 1, 1));
        assert_eq!(date.previous_day(), Some(ymd(2023, 12, 31)));
        assert_eq!(DailyDate::new(NaiveDate::MIN).previous_day(), None);
    }

    #[test]
    fn file_name_uses_title() {
        let date = DailyDate::new(ymd(2024, 3, 10));
        assert_eq!(date.title(), "2024-03-10");
        assert_eq!(date.file_name(), "2024-03-10.md");
        assert_eq!(date.to_string(), "2024-03-10");
    }
}
