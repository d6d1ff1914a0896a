//! # datetime-expr
//!
//! Rule-based generation of Korean date/time expressions.
//!
//! Given a moment and a reference "now", the generator writes the phrase a
//! person would use: it drops the year and month when they are obvious,
//! prefers "오늘" / "내일" / "모레" over dates, names nearby days by week
//! ("다음주 월요일"), and renders ranges and day-grouped schedules.
//!
//! ## Modules
//!
//! - [`generator`] — [`ExpressionGenerator`]: input normalization and composition
//! - [`phrase`] — The date/time phrase rule table (pure functions)
//! - [`moment`] — Offset-aware input moments and schedule entries
//! - [`config`] — Situations, day-number style, generator configuration
//! - [`locale`] — Token table for the target language
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod generator;
pub mod locale;
pub mod moment;
pub mod phrase;
mod schedule;

pub use config::{DayNumberStyle, GeneratorConfig, RelativeRule, Situation, DEFAULT_TIMEZONE};
pub use error::{ExprError, Result};
pub use generator::ExpressionGenerator;
pub use locale::{Vocabulary, KOREAN};
pub use moment::{Moment, TimeRangeEntry};
