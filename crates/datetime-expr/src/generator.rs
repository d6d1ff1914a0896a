//! The expression generator.
//!
//! [`ExpressionGenerator`] owns the only configuration (timezone,
//! day-number style and relative-distance rule). Every call projects its inputs into that timezone and
//! then runs the pure rules in [`crate::phrase`] and [`crate::schedule`].
//!
//! # Examples
//!
//! ```
//! use datetime_expr::{ExpressionGenerator, Moment, Situation};
//!
//! let generator = ExpressionGenerator::default();
//! let now: Moment = "2018-06-06T15:00:00+09:00".parse().unwrap();
//! let dt: Moment = "2018-06-07T22:10:00+09:00".parse().unwrap();
//!
//! let expr = generator
//!     .generate(&dt, None, Some(&now), Situation::SchedulingDialog)
//!     .unwrap();
//! assert_eq!(expr, "내일 오후 10시 10분");
//! ```

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::config::{DayNumberStyle, GeneratorConfig, RelativeRule, Situation};
use crate::error::Result;
use crate::locale::{Vocabulary, KOREAN};
use crate::moment::{parse_timezone, Moment, TimeRangeEntry};
use crate::phrase;
use crate::schedule::{self, LocalEntry};

/// Generates Korean date/time expressions relative to a reference moment.
#[derive(Debug, Clone)]
pub struct ExpressionGenerator {
    tz: Tz,
    day_numbers: DayNumberStyle,
    relative_rule: RelativeRule,
    vocab: &'static Vocabulary,
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Asia::Seoul,
            day_numbers: DayNumberStyle::default(),
            relative_rule: RelativeRule::default(),
            vocab: &KOREAN,
        }
    }
}

impl ExpressionGenerator {
    /// Create a generator for an IANA timezone (e.g. `"Asia/Seoul"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExprError::InvalidTimezone`] for an unknown name.
    pub fn new(timezone: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_timezone(timezone)?,
            ..Self::default()
        })
    }

    /// Create a generator from a [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExprError::InvalidTimezone`] for an unknown timezone.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self::new(&config.timezone)?
            .with_day_numbers(config.day_numbers)
            .with_relative_rule(config.relative_rule))
    }

    pub fn with_day_numbers(mut self, day_numbers: DayNumberStyle) -> Self {
        self.day_numbers = day_numbers;
        self
    }

    pub fn with_relative_rule(mut self, relative_rule: RelativeRule) -> Self {
        self.relative_rule = relative_rule;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn day_numbers(&self) -> DayNumberStyle {
        self.day_numbers
    }

    pub fn relative_rule(&self) -> RelativeRule {
        self.relative_rule
    }

    /// Render `moment`, or the range `moment`..`range_end`, relative to
    /// `reference` (the current instant when `None`).
    ///
    /// # Errors
    ///
    /// Typed moments always carry an offset, so this only fails through the
    /// textual entry point [`Self::generate_from_str`]; the `Result` keeps
    /// both entry points interchangeable.
    pub fn generate(
        &self,
        moment: &Moment,
        range_end: Option<&Moment>,
        reference: Option<&Moment>,
        situation: Situation,
    ) -> Result<String> {
        let start = moment.project(&self.tz);
        let end = range_end.map(|m| m.project(&self.tz));
        let reference = self.resolve_reference(reference);

        debug!(
            situation = situation.as_str(),
            timezone = self.tz.name(),
            range = end.is_some(),
            "generating expression"
        );

        let expr = match situation {
            Situation::SchedulingDialog => self.dialog(&start, end.as_ref(), &reference),
            Situation::SummingUp => self.summary(&start, end.as_ref(), &reference),
        };
        trace!(expr = %expr, "generated expression");
        Ok(expr)
    }

    /// Textual variant of [`Self::generate`]: moments are RFC 3339 strings and
    /// the situation is its name (`"SCHEDULING_DIALOG"` / `"SUMMING_UP"`).
    ///
    /// # Errors
    ///
    /// - [`crate::ExprError::NaiveTimestamp`] if any moment lacks an offset.
    /// - [`crate::ExprError::InvalidMoment`] if any moment is not a datetime.
    /// - [`crate::ExprError::UnsupportedSituation`] for an unknown situation.
    pub fn generate_from_str(
        &self,
        moment: &str,
        range_end: Option<&str>,
        reference: Option<&str>,
        situation: &str,
    ) -> Result<String> {
        let moment = Moment::parse(moment)?;
        let range_end = range_end.map(Moment::parse).transpose()?;
        let reference = reference.map(Moment::parse).transpose()?;
        let situation = situation.parse::<Situation>()?;
        self.generate(&moment, range_end.as_ref(), reference.as_ref(), situation)
    }

    /// Render a schedule, one output line per element.
    ///
    /// Entries must already be ordered by start; they are not sorted here.
    /// Lines read `"HH:MM ~ HH:MM <label>"`, or `"(<N>시간)"` in place of a
    /// missing label. With `aggregate`, consecutive entries on the same day
    /// sit under a `"6/7(목) 내일"` header; otherwise each line is prefixed
    /// with its own `"6/7(목)"`.
    ///
    /// # Errors
    ///
    /// Infallible for typed input; see [`Self::generate`].
    pub fn generate_list(
        &self,
        entries: &[TimeRangeEntry],
        reference: Option<&Moment>,
        aggregate: bool,
    ) -> Result<Vec<String>> {
        let reference = self.resolve_reference(reference);
        let local: Vec<LocalEntry<'_>> = entries
            .iter()
            .map(|entry| LocalEntry {
                start: entry.start.project(&self.tz),
                end: entry.end.project(&self.tz),
                label: entry.label.as_deref(),
            })
            .collect();

        debug!(
            entries = local.len(),
            aggregate,
            timezone = self.tz.name(),
            "generating list"
        );
        Ok(schedule::render(self.vocab, &local, &reference, aggregate))
    }

    /// Weekday name of `moment` in the generator timezone: "수요일", or "수"
    /// when `simple`.
    pub fn weekday(&self, moment: &Moment, simple: bool) -> String {
        use chrono::Datelike;

        let weekday = moment.project(&self.tz).weekday();
        if simple {
            self.vocab.weekday_short(weekday).to_string()
        } else {
            self.vocab.weekday(weekday).to_string()
        }
    }

    fn resolve_reference(&self, reference: Option<&Moment>) -> DateTime<Tz> {
        match reference {
            Some(m) => m.project(&self.tz),
            None => Utc::now().with_timezone(&self.tz),
        }
    }

    fn dialog(
        &self,
        start: &DateTime<Tz>,
        end: Option<&DateTime<Tz>>,
        reference: &DateTime<Tz>,
    ) -> String {
        let start_expr = phrase::join(
            &phrase::dialog_date(
                self.vocab,
                start,
                reference,
                None,
                self.day_numbers.applies(false),
                self.relative_rule,
            ),
            &phrase::dialog_time(self.vocab, start, None),
        );
        let Some(end) = end else {
            return start_expr;
        };

        let end_expr = phrase::join(
            &phrase::dialog_date(
                self.vocab,
                end,
                reference,
                Some(start),
                self.day_numbers.applies(true),
                self.relative_rule,
            ),
            &phrase::dialog_time(self.vocab, end, Some(start)),
        );
        format!("{start_expr}{} {end_expr}", self.vocab.range_from)
    }

    fn summary(
        &self,
        start: &DateTime<Tz>,
        end: Option<&DateTime<Tz>>,
        reference: &DateTime<Tz>,
    ) -> String {
        let start_expr = phrase::join(
            &phrase::summary_date(self.vocab, start, reference, None),
            &phrase::clock(start),
        );
        let Some(end) = end else {
            return start_expr;
        };

        let end_expr = phrase::join(
            &phrase::summary_date(self.vocab, end, reference, Some(start)),
            &phrase::clock(end),
        );
        match phrase::summary_duration(self.vocab, start, end) {
            Some(duration) => format!("{start_expr} ~ {end_expr} {duration}"),
            None => format!("{start_expr} ~ {end_expr}"),
        }
    }
}
