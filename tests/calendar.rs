use chrono::{NaiveDate, NaiveTime, Weekday};
use pretty_assertions::assert_eq;
use xer_reader::xer::codec::calendar::serial_to_date;
use xer_reader::{Calendar, CalendarData, WorkInterval};

fn time(text: &str) -> NaiveTime {
    NaiveTime::parse_from_str(text, "%H:%M").expect("valid test time")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn weekday_intervals_are_paired_in_order() {
    let blob = "(0||2()(s|08:00f|12:00s|13:00f|17:00))(0||VIEW(ShowTotal|Y)())";
    let data = CalendarData::parse(blob);
    assert_eq!(data.work_pattern.len(), 1);
    let monday = &data.work_pattern[0];
    assert_eq!(monday.day_name(), "Monday");
    assert_eq!(monday.weekday, Some(Weekday::Mon));
    assert_eq!(
        monday.intervals,
        vec![
            WorkInterval { start: time("08:00"), finish: time("12:00") },
            WorkInterval { start: time("13:00"), finish: time("17:00") },
        ]
    );
}

#[test]
fn pattern_stops_at_view_marker() {
    let blob = "(0||1()(s|09:00f|10:00))(0||VIEW(ShowTotal|Y)())(0||3()(s|08:00f|09:00))";
    let data = CalendarData::parse(blob);
    let days: Vec<&str> = data.work_pattern.iter().map(|d| d.day_name()).collect();
    assert_eq!(days, vec!["Sunday"]);
}

#[test]
fn out_of_range_weekday_is_unknown() {
    let data = CalendarData::parse("(0||9()(s|08:00f|09:00))");
    assert_eq!(data.work_pattern[0].day_number, 9);
    assert_eq!(data.work_pattern[0].day_name(), "Unknown");
    assert_eq!(data.work_pattern[0].weekday, None);
}

#[test]
fn malformed_time_pair_is_dropped() {
    let blob = "(0||4()(s|08:00f|12:00s|25:00f|26:30s|14:00f|18:00))";
    let data = CalendarData::parse(blob);
    let wednesday = data.day(Weekday::Wed).expect("wednesday");
    assert_eq!(
        wednesday.intervals,
        vec![
            WorkInterval { start: time("08:00"), finish: time("12:00") },
            WorkInterval { start: time("14:00"), finish: time("18:00") },
        ]
    );
    assert_eq!(wednesday.work_hours(), 8.0);
}

#[test]
fn unmatched_start_is_ignored() {
    let data = CalendarData::parse("(0||5()(s|08:00f|12:00s|13:00))");
    assert_eq!(data.day(Weekday::Thu).map(|d| d.intervals.len()), Some(1));
}

#[test]
fn night_shift_wraps_midnight() {
    let data = CalendarData::parse("(0||6()(s|22:00f|06:00))");
    assert_eq!(data.day(Weekday::Fri).map(|d| d.work_hours()), Some(8.0));
}

#[test]
fn serial_days_count_from_1899_12_30() {
    assert_eq!(serial_to_date(0), Some(date(1899, 12, 30)));
    assert_eq!(serial_to_date(1), Some(date(1899, 12, 31)));
    assert_eq!(serial_to_date(44562), Some(date(2022, 1, 1)));
    assert_eq!(serial_to_date(-1), None);
    assert_eq!(serial_to_date(i64::MAX), None);
}

#[test]
fn exceptions_are_five_digit_runs() {
    let blob = "(0||Exceptions()((0||0(d|44561)())(0||1(d|1234)())(0||2(d|44927)())))";
    let data = CalendarData::parse(blob);
    assert_eq!(data.exceptions, vec![date(2021, 12, 31), date(2023, 1, 1)]);
    assert!(data.is_exception(date(2023, 1, 1)));
    assert!(!data.is_exception(date(2023, 1, 2)));

    let huge = CalendarData::parse("(d|99999999999999999999999)");
    assert!(huge.exceptions.is_empty());
}

#[test]
fn entries_split_on_numbered_markers() {
    let blob = "  (0||1())alpha(0||2())beta (1||1())gamma ";
    let data = CalendarData::parse(blob);
    let entries: Vec<(&str, &str)> = data
        .entries
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    // A repeated key keeps its first position and its last value
    assert_eq!(entries, vec![("1", "gamma"), ("2", "beta ")]);
}

#[test]
fn working_days_come_from_their_own_scan() {
    let blob = "(0||1()())(0||2()((0||0(s|08:00|f|12:00)())(0||3()( ( ) ))";
    let data = CalendarData::parse(blob);
    let days: Vec<(usize, bool)> = data.working_days.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(days, vec![(1, false), (2, true), (3, false)]);
    assert!(data.entries.is_empty(), "no (d||n()) markers in this blob");
}

#[test]
fn decoding_is_pure() {
    let blob = "(0||CalendarData()((0||DaysOfWeek()((0||1()())(0||2()((0||0(s|08:00|f|17:00)())))))\
(0||VIEW(ShowTotal|Y)())(0||Exceptions()((0||0(d|45000)()))))";
    assert_eq!(CalendarData::parse(blob), CalendarData::parse(blob));
}

#[test]
fn empty_and_missing_blobs() {
    assert_eq!(CalendarData::parse(""), CalendarData::default());
    let calendar = Calendar {
        clndr_id: Some(1),
        ..Default::default()
    };
    assert_eq!(calendar.decoded(), CalendarData::default());
}
