//! Line-oriented list output for a sequence of time ranges.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::locale::Vocabulary;
use crate::phrase;

/// A list entry whose moments are already projected into the generator
/// timezone.
pub(crate) struct LocalEntry<'a> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub label: Option<&'a str>,
}

/// Render `entries` in input order.
///
/// With `aggregate`, runs of consecutive entries on the same calendar day
/// share one header line ("6/7(목) 내일") and groups are separated by an
/// empty line. Without it, every line carries its own date.
pub(crate) fn render(
    vocab: &Vocabulary,
    entries: &[LocalEntry<'_>],
    reference: &DateTime<Tz>,
    aggregate: bool,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() * 2);
    let mut current_day: Option<NaiveDate> = None;

    for entry in entries {
        let range = range_line(vocab, entry);
        if !aggregate {
            lines.push(format!("{} {range}", phrase::month_day(vocab, &entry.start)));
            continue;
        }

        let day = entry.start.date_naive();
        if current_day != Some(day) {
            if current_day.is_some() {
                lines.push(String::new());
            }
            lines.push(header(vocab, &entry.start, reference));
            current_day = Some(day);
        }
        lines.push(range);
    }

    lines
}

/// "6/6(수) 오늘", "6/9(토)"
fn header(vocab: &Vocabulary, start: &DateTime<Tz>, reference: &DateTime<Tz>) -> String {
    let date = phrase::month_day(vocab, start);
    let days_ahead = (start.date_naive() - reference.date_naive()).num_days();
    match days_ahead {
        0..=2 => match vocab.relative_day(days_ahead) {
            Some(word) => format!("{date} {word}"),
            None => date,
        },
        _ => date,
    }
}

/// "15:00 ~ 16:00 정보1" or "15:00 ~ 16:00 (1시간)"
fn range_line(vocab: &Vocabulary, entry: &LocalEntry<'_>) -> String {
    let tail = match entry.label {
        Some(label) => label.to_string(),
        None => phrase::whole_hours(vocab, &entry.start, &entry.end),
    };
    format!(
        "{} ~ {} {tail}",
        phrase::clock(&entry.start),
        phrase::clock(&entry.end)
    )
}
