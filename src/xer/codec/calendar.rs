//! Decoder for the `clndr_data` blob carried by `CALENDAR` records.
//!
//! The blob is a nested token notation. A trimmed weekly calendar looks like:
//!
//! ```text
//! (0||CalendarData()(
//!   (0||DaysOfWeek()(
//!     (0||1()())
//!     (0||2()((0||0(s|08:00|f|12:00)())(0||1(s|13:00|f|17:00)())))
//!     ...))
//!   (0||VIEW(ShowTotal|Y)())
//!   (0||Exceptions()((0||0(d|43831)()))))
//! ```
//!
//! Four independent scans run over the same text. None of them consumes the
//! output of another:
//!
//! 1. entries: `(d||n())` markers split the text into `n → segment` pairs
//! 2. work pattern: before the `VIEW` marker, `(d||w()(` opens weekday `w`,
//!    whose `s|HH:MM` / `f|HH:MM` tokens pair up into intervals
//! 3. exceptions: every run of five or more digits is a serial day number
//! 4. working days: `(d||d()...))` spans, numbered by position, flagged when
//!    anything but brackets and blanks remains inside

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Days, NaiveDate, NaiveTime, Weekday};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;

/// Literal that ends the weekly pattern section.
pub const VIEW_MARKER: &str = "(0||VIEW(ShowTotal|Y)())";

static ENTRY_PATTERN: OnceLock<Regex> = OnceLock::new();
static DAY_PATTERN: OnceLock<Regex> = OnceLock::new();
static START_PATTERN: OnceLock<Regex> = OnceLock::new();
static FINISH_PATTERN: OnceLock<Regex> = OnceLock::new();
static SERIAL_PATTERN: OnceLock<Regex> = OnceLock::new();
static WORKING_DAY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn entry_regex() -> &'static Regex {
    ENTRY_PATTERN.get_or_init(|| {
        Regex::new(r"\((\d)\|\|(\d+)\(\)\)").expect("Invalid calendar entry regex pattern")
    })
}

fn day_regex() -> &'static Regex {
    DAY_PATTERN.get_or_init(|| {
        Regex::new(r"\(\d\|\|(\d)\(\)\(").expect("Invalid calendar weekday regex pattern")
    })
}

fn start_regex() -> &'static Regex {
    START_PATTERN
        .get_or_init(|| Regex::new(r"s\|(\d{2}:\d{2})").expect("Invalid start time regex pattern"))
}

fn finish_regex() -> &'static Regex {
    FINISH_PATTERN
        .get_or_init(|| Regex::new(r"f\|(\d{2}:\d{2})").expect("Invalid finish time regex pattern"))
}

fn serial_regex() -> &'static Regex {
    SERIAL_PATTERN.get_or_init(|| Regex::new(r"\d{5,}").expect("Invalid serial date regex pattern"))
}

fn working_day_regex() -> &'static Regex {
    WORKING_DAY_PATTERN.get_or_init(|| {
        Regex::new(r"\(\d\|\|\d\(\)(.*?)\)\)").expect("Invalid working day regex pattern")
    })
}

/// One work interval within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    pub start: NaiveTime,
    pub finish: NaiveTime,
}

/// The intervals listed for one weekday, in blob order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPattern {
    /// The raw weekday digit, 1 (Sunday) through 7 (Saturday).
    pub day_number: u8,
    /// `None` for digits outside 1..=7.
    pub weekday: Option<Weekday>,
    pub intervals: Vec<WorkInterval>,
}

impl DayPattern {
    /// English day name, or `"Unknown"` for out-of-range digits.
    pub fn day_name(&self) -> &'static str {
        match self.weekday {
            Some(Weekday::Sun) => "Sunday",
            Some(Weekday::Mon) => "Monday",
            Some(Weekday::Tue) => "Tuesday",
            Some(Weekday::Wed) => "Wednesday",
            Some(Weekday::Thu) => "Thursday",
            Some(Weekday::Fri) => "Friday",
            Some(Weekday::Sat) => "Saturday",
            None => "Unknown",
        }
    }

    /// Hours covered by the intervals. Overnight intervals wrap past midnight.
    pub fn work_hours(&self) -> f64 {
        self.intervals
            .iter()
            .map(|interval| {
                let minutes = (interval.finish - interval.start).num_minutes();
                let minutes = if minutes < 0 { minutes + 24 * 60 } else { minutes };
                minutes as f64 / 60.0
            })
            .sum()
    }
}

/// The decoded content of one calendar blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarData {
    /// Segments keyed by the number in their `(d||n())` marker, first-seen order.
    pub entries: IndexMap<String, String>,
    /// Per-position working flag from the span scan, keyed from 1.
    pub working_days: BTreeMap<usize, bool>,
    pub work_pattern: Vec<DayPattern>,
    /// Exception dates in blob order.
    pub exceptions: Vec<NaiveDate>,
}

impl CalendarData {
    /// Decodes a blob. Pure: the same text always yields the same value.
    pub fn parse(text: &str) -> Self {
        let data = Self {
            entries: parse_entries(text),
            working_days: parse_working_days(text),
            work_pattern: parse_work_pattern(text),
            exceptions: parse_exceptions(text),
        };
        debug!(
            "Calendar blob decoded: {} entries, {} working-day spans, {} weekdays, {} exceptions",
            data.entries.len(),
            data.working_days.len(),
            data.work_pattern.len(),
            data.exceptions.len()
        );
        data
    }

    /// The pattern for a weekday, if the blob lists it.
    pub fn day(&self, weekday: Weekday) -> Option<&DayPattern> {
        self.work_pattern.iter().find(|day| day.weekday == Some(weekday))
    }

    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.exceptions.contains(&date)
    }
}

/// Converts a serial day number (epoch 1899-12-30) to a date.
///
/// `None` for negative numbers or results past chrono's range.
pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = u64::try_from(serial).ok()?;
    epoch.checked_add_days(Days::new(days))
}

fn parse_entries(text: &str) -> IndexMap<String, String> {
    let text = text.trim();
    let markers: Vec<_> = entry_regex().captures_iter(text).collect();
    let mut entries = IndexMap::new();
    for (index, captures) in markers.iter().enumerate() {
        let (Some(whole), Some(key)) = (captures.get(0), captures.get(2)) else {
            continue;
        };
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        entries.insert(key.as_str().to_string(), text[whole.end()..end].to_string());
    }
    entries
}

fn parse_work_pattern(text: &str) -> Vec<DayPattern> {
    let section = text.split(VIEW_MARKER).next().unwrap_or(text);
    let openers: Vec<_> = day_regex().captures_iter(section).collect();
    let mut days = Vec::with_capacity(openers.len());
    for (index, captures) in openers.iter().enumerate() {
        let (Some(whole), Some(digit)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let end = openers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(section.len(), |next| next.start());
        let segment = &section[whole.end()..end];
        let day_number: u8 = digit.as_str().parse().unwrap_or_default();
        days.push(DayPattern {
            day_number,
            weekday: weekday_from_number(day_number),
            intervals: parse_intervals(segment),
        });
    }
    days
}

fn parse_intervals(segment: &str) -> Vec<WorkInterval> {
    let starts = start_regex().captures_iter(segment).filter_map(|c| c.get(1));
    let finishes = finish_regex().captures_iter(segment).filter_map(|c| c.get(1));
    starts
        .zip(finishes)
        .filter_map(|(start, finish)| {
            match (
                NaiveTime::parse_from_str(start.as_str(), "%H:%M"),
                NaiveTime::parse_from_str(finish.as_str(), "%H:%M"),
            ) {
                (Ok(start), Ok(finish)) => Some(WorkInterval { start, finish }),
                _ => {
                    debug!(
                        "Malformed calendar time pair {}-{} skipped",
                        start.as_str(),
                        finish.as_str()
                    );
                    None
                }
            }
        })
        .collect()
}

fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Sun),
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

fn parse_exceptions(text: &str) -> Vec<NaiveDate> {
    serial_regex()
        .find_iter(text)
        .filter_map(|found| {
            let date = found.as_str().parse::<i64>().ok().and_then(serial_to_date);
            if date.is_none() {
                debug!("Calendar serial day {} out of range, skipped", found.as_str());
            }
            date
        })
        .collect()
}

fn parse_working_days(text: &str) -> BTreeMap<usize, bool> {
    working_day_regex()
        .captures_iter(text)
        .enumerate()
        .map(|(index, captures)| {
            let content = captures.get(1).map_or("", |m| m.as_str());
            let working = content
                .chars()
                .any(|c| !matches!(c, '(' | ')') && !c.is_whitespace());
            (index + 1, working)
        })
        .collect()
}
