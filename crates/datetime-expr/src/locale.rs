//! Literal tokens used by the phrase rules.
//!
//! Every word, unit and marker the generator emits comes from a
//! [`Vocabulary`]. The branching logic in [`crate::phrase`] only decides
//! *which* token to use.

use chrono::Weekday;

/// Token table for one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Full weekday names, Monday first.
    pub weekdays: [&'static str; 7],
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub second: &'static str,
    /// Unit used for durations ("N hours").
    pub hours: &'static str,
    pub am: &'static str,
    pub pm: &'static str,
    pub yesterday: &'static str,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub day_after_tomorrow: &'static str,
    pub last_week: &'static str,
    pub this_week: &'static str,
    pub next_week: &'static str,
    /// Joins the start and end of a conversational range ("from ... to ...").
    pub range_from: &'static str,
}

pub const KOREAN: Vocabulary = Vocabulary {
    weekdays: [
        "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
    ],
    year: "년",
    month: "월",
    day: "일",
    hour: "시",
    minute: "분",
    second: "초",
    hours: "시간",
    am: "오전",
    pm: "오후",
    yesterday: "어제",
    today: "오늘",
    tomorrow: "내일",
    day_after_tomorrow: "모레",
    last_week: "지난주",
    this_week: "이번주",
    next_week: "다음주",
    range_from: "부터",
};

impl Vocabulary {
    pub fn weekday(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Single-character weekday ("월" for "월요일").
    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        let full = self.weekday(weekday);
        match full.char_indices().nth(1) {
            Some((idx, _)) => &full[..idx],
            None => full,
        }
    }

    /// Relative-day word for a day difference of -1, 0, 1 or 2.
    pub fn relative_day(&self, day_diff: i64) -> Option<&'static str> {
        match day_diff {
            -1 => Some(self.yesterday),
            0 => Some(self.today),
            1 => Some(self.tomorrow),
            2 => Some(self.day_after_tomorrow),
            _ => None,
        }
    }

    pub fn meridiem(&self, hour: u32) -> &'static str {
        if hour < 12 {
            self.am
        } else {
            self.pm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_full_names() {
        assert_eq!(KOREAN.weekday(Weekday::Mon), "월요일");
        assert_eq!(KOREAN.weekday(Weekday::Wed), "수요일");
        assert_eq!(KOREAN.weekday(Weekday::Sun), "일요일");
    }

    #[test]
    fn test_weekday_short_is_first_character() {
        assert_eq!(KOREAN.weekday_short(Weekday::Mon), "월");
        assert_eq!(KOREAN.weekday_short(Weekday::Thu), "목");
        assert_eq!(KOREAN.weekday_short(Weekday::Sat), "토");
    }

    #[test]
    fn test_relative_day_tokens() {
        assert_eq!(KOREAN.relative_day(-1), Some("어제"));
        assert_eq!(KOREAN.relative_day(0), Some("오늘"));
        assert_eq!(KOREAN.relative_day(1), Some("내일"));
        assert_eq!(KOREAN.relative_day(2), Some("모레"));
        assert_eq!(KOREAN.relative_day(3), None);
        assert_eq!(KOREAN.relative_day(-2), None);
    }

    #[test]
    fn test_meridiem_boundary() {
        assert_eq!(KOREAN.meridiem(0), "오전");
        assert_eq!(KOREAN.meridiem(11), "오전");
        assert_eq!(KOREAN.meridiem(12), "오후");
        assert_eq!(KOREAN.meridiem(23), "오후");
    }
}
