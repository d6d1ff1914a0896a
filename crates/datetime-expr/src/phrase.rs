//! The phrase rule table.
//!
//! Pure functions over moments that have already been projected into the
//! generator's timezone. Each function takes the moment being rendered, the
//! reference ("now") moment and, when rendering the end of a range, the
//! range start. A range end omits whatever the start already told the
//! reader: the year, the month, the day, or the meridiem.
//!
//! # Conversational date phrases
//!
//! With a reference of Wednesday 2018-06-06:
//!
//! | moment     | phrase                     |
//! |------------|----------------------------|
//! | 2018-06-04 | `이번주 월요일(4일)`        |
//! | 2018-06-05 | `어제(5일)`                 |
//! | 2018-06-06 | `오늘`                      |
//! | 2018-06-07 | `내일`                      |
//! | 2018-06-08 | `모레(8일)`                 |
//! | 2018-06-09 | `토요일(9일)`               |
//! | 2018-06-11 | `다음주 월요일(11일)`       |
//! | 2018-06-01 | `지난주 금요일(1일)`        |
//! | 2018-07-21 | `7월 21일 토요일,`          |
//! | 2018-05-30 | `2018년 5월 30일 수요일,`   |

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::config::RelativeRule;
use crate::locale::Vocabulary;

/// Date phrase for conversational output.
///
/// `day_numbers` controls the "(<day>일)" suffix on 어제, 모레 and
/// week-relative phrases. `rule` picks how day and week distances from
/// `reference` are measured.
pub fn dialog_date(
    vocab: &Vocabulary,
    moment: &DateTime<Tz>,
    reference: &DateTime<Tz>,
    range_start: Option<&DateTime<Tz>>,
    day_numbers: bool,
    rule: RelativeRule,
) -> String {
    let compare = range_start.unwrap_or(reference);
    let weekday = vocab.weekday(moment.weekday());

    // An earlier month of the same year spells out the year; a later one
    // does not.
    if moment.year() != compare.year() || moment.month() < compare.month() {
        return format!(
            "{}{} {}{} {}{} {},",
            moment.year(),
            vocab.year,
            moment.month(),
            vocab.month,
            moment.day(),
            vocab.day,
            weekday
        );
    }
    if moment.month() != compare.month() {
        return format!(
            "{}{} {}{} {},",
            moment.month(),
            vocab.month,
            moment.day(),
            vocab.day,
            weekday
        );
    }
    if range_start.is_some_and(|start| start.day() == moment.day()) {
        return String::new();
    }

    let day_and_weekday = format!("{}{} {}", moment.day(), vocab.day, weekday);
    let numbered = |word: &str| {
        if day_numbers {
            format!("{word}({}{})", moment.day(), vocab.day)
        } else {
            word.to_string()
        }
    };

    if rule == RelativeRule::Calendar && !same_month(moment, reference) {
        return day_and_weekday;
    }

    let day_diff = i64::from(moment.day()) - i64::from(reference.day());
    match (day_diff, vocab.relative_day(day_diff)) {
        (0 | 1, Some(word)) => return word.to_string(),
        (_, Some(word)) => return numbered(word),
        _ => {}
    }

    if range_start.is_some_and(|start| start.iso_week() == moment.iso_week()) {
        return day_and_weekday;
    }

    let week_diff = match rule {
        RelativeRule::Numeric => week_number_distance(moment, reference),
        RelativeRule::Calendar => week_distance(moment.date_naive(), reference.date_naive())
            .unwrap_or_else(|| week_number_distance(moment, reference)),
    };
    let prefix = match week_diff {
        0 if day_diff < 0 => Some(vocab.this_week),
        0 => None,
        1 => Some(vocab.next_week),
        -1 => Some(vocab.last_week),
        _ => return day_and_weekday,
    };
    let phrase = numbered(weekday);
    match prefix {
        Some(prefix) => format!("{prefix} {phrase}"),
        None => phrase,
    }
}

/// 12-hour time phrase: "오후 3시 10분 30초".
///
/// The meridiem is dropped when `range_start` falls on the same day and in
/// the same half of the day.
pub fn dialog_time(
    vocab: &Vocabulary,
    moment: &DateTime<Tz>,
    range_start: Option<&DateTime<Tz>>,
) -> String {
    let mut parts = Vec::with_capacity(4);

    let meridiem_known = range_start.is_some_and(|start| {
        start.date_naive() == moment.date_naive() && (start.hour() < 12) == (moment.hour() < 12)
    });
    if !meridiem_known {
        parts.push(vocab.meridiem(moment.hour()).to_string());
    }

    let hour = match moment.hour() {
        0 => 12,
        h if h <= 12 => h,
        h => h - 12,
    };
    parts.push(format!("{hour}{}", vocab.hour));

    if moment.minute() > 0 || moment.second() > 0 {
        parts.push(format!("{}{}", moment.minute(), vocab.minute));
    }
    if moment.second() > 0 {
        parts.push(format!("{}{}", moment.second(), vocab.second));
    }

    parts.join(" ")
}

/// Date segment for summary output: "2018/5/30(수)", "6/4(월)", "31(목)" or
/// nothing at all.
///
/// A standalone moment always shows at least month and day; a range end
/// drops whatever it shares with its start.
pub fn summary_date(
    vocab: &Vocabulary,
    moment: &DateTime<Tz>,
    reference: &DateTime<Tz>,
    range_start: Option<&DateTime<Tz>>,
) -> String {
    let compare = range_start.unwrap_or(reference);
    let weekday = vocab.weekday_short(moment.weekday());

    if moment.year() != compare.year() || moment.month() < compare.month() {
        format!(
            "{}/{}/{}({weekday})",
            moment.year(),
            moment.month(),
            moment.day()
        )
    } else if range_start.is_none() || moment.month() != compare.month() {
        month_day(vocab, moment)
    } else if moment.day() != compare.day() {
        format!("{}({weekday})", moment.day())
    } else {
        String::new()
    }
}

/// Zero-padded 24-hour clock: "08:05".
pub fn clock(moment: &DateTime<Tz>) -> String {
    moment.format("%H:%M").to_string()
}

/// "6/9(토)"
pub fn month_day(vocab: &Vocabulary, moment: &DateTime<Tz>) -> String {
    format!(
        "{}/{}({})",
        moment.month(),
        moment.day(),
        vocab.weekday_short(moment.weekday())
    )
}

/// Duration suffix for a summary range, shown only for ranges shorter than a
/// day: "(4시간)", "(23시간 59분)", "(45분)".
pub fn summary_duration(
    vocab: &Vocabulary,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> Option<String> {
    let minutes = (*end - *start).num_minutes();
    if minutes <= 0 || minutes >= Duration::days(1).num_minutes() {
        return None;
    }

    let (hours, minutes) = (minutes / 60, minutes % 60);
    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{hours}{}", vocab.hours));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}{}", vocab.minute));
    }
    Some(format!("({})", parts.join(" ")))
}

/// Whole hours between `start` and `end`, truncated: "(2시간)".
pub fn whole_hours(vocab: &Vocabulary, start: &DateTime<Tz>, end: &DateTime<Tz>) -> String {
    format!("({}{})", (*end - *start).num_hours(), vocab.hours)
}

/// Join a date and a time phrase, dropping the separator when either is empty.
pub fn join(date: &str, time: &str) -> String {
    format!("{date} {time}").trim().to_string()
}

fn same_month(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Difference of the ISO week numbers, ignoring the week-based year.
fn week_number_distance(moment: &DateTime<Tz>, reference: &DateTime<Tz>) -> i64 {
    i64::from(moment.iso_week().week()) - i64::from(reference.iso_week().week())
}

/// Signed number of weeks from `reference`'s week to `date`'s week, or
/// `None` when a Monday falls outside the representable range.
fn week_distance(date: NaiveDate, reference: NaiveDate) -> Option<i64> {
    let days = (week_monday(date)? - week_monday(reference)?).num_days();
    Some(days / 7)
}

fn week_monday(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}
