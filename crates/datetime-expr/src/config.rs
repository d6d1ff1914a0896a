//! Generator configuration and rendering modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExprError, Result};

pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

/// Rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Situation {
    /// Conversational phrasing: "내일 오후 3시부터 5시".
    #[default]
    SchedulingDialog,
    /// Compact slash notation: "6/7(목) 15:00 ~ 17:00 (2시간)".
    SummingUp,
}

impl Situation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchedulingDialog => "SCHEDULING_DIALOG",
            Self::SummingUp => "SUMMING_UP",
        }
    }
}

impl FromStr for Situation {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SCHEDULING_DIALOG" => Ok(Self::SchedulingDialog),
            "SUMMING_UP" => Ok(Self::SummingUp),
            _ => Err(ExprError::UnsupportedSituation(format!("'{}'", s.trim()))),
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the "(<day>일)" day-number suffix is attached to relative phrases
/// such as "모레(8일)" or "다음주 월요일(11일)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayNumberStyle {
    /// On every relative phrase, range ends included.
    #[default]
    Always,
    /// On single moments and range starts; dropped on range ends, where the
    /// reader has already seen the start's day.
    StartOnly,
    Never,
}

impl DayNumberStyle {
    /// Whether the suffix applies when rendering a range end (`is_range_end`)
    /// or a standalone moment / range start.
    pub fn applies(&self, is_range_end: bool) -> bool {
        match self {
            Self::Always => true,
            Self::StartOnly => !is_range_end,
            Self::Never => false,
        }
    }
}

impl FromStr for DayNumberStyle {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "always" => Ok(Self::Always),
            "start-only" => Ok(Self::StartOnly),
            "never" => Ok(Self::Never),
            other => Err(ExprError::InvalidOption(format!(
                "day-number style '{other}' (expected always, start-only or never)"
            ))),
        }
    }
}

/// How day and week distances from the reference are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeRule {
    /// Day-of-month difference and ISO week-number difference. A range end
    /// in another month than the reference still reads "내일" when its day
    /// number is one past the reference's, and early January days in ISO
    /// week 52/53 are not placed in a neighbouring week.
    #[default]
    Numeric,
    /// Relative words only within the reference's month. Week distance is
    /// counted between the Mondays of the two weeks, across year boundaries.
    Calendar,
}

impl FromStr for RelativeRule {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "calendar" => Ok(Self::Calendar),
            other => Err(ExprError::InvalidOption(format!(
                "relative rule '{other}' (expected numeric or calendar)"
            ))),
        }
    }
}

/// Immutable settings for an [`crate::ExpressionGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// IANA timezone every moment is projected into before comparison.
    pub timezone: String,
    pub day_numbers: DayNumberStyle,
    pub relative_rule: RelativeRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            day_numbers: DayNumberStyle::default(),
            relative_rule: RelativeRule::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidOption`] if the document is not valid JSON
    /// or a field has the wrong shape.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| ExprError::InvalidOption(format!("config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_situation_from_str() {
        assert_eq!(
            "SCHEDULING_DIALOG".parse::<Situation>().unwrap(),
            Situation::SchedulingDialog
        );
        assert_eq!("summing-up".parse::<Situation>().unwrap(), Situation::SummingUp);
        assert_eq!(" Summing_Up ".parse::<Situation>().unwrap(), Situation::SummingUp);
    }

    #[test]
    fn test_unknown_situation_is_rejected() {
        let err = "SMALL_TALK".parse::<Situation>().unwrap_err();
        assert!(matches!(err, ExprError::UnsupportedSituation(_)));
        assert!(err.to_string().contains("SMALL_TALK"), "got: {err}");
    }

    #[test]
    fn test_situation_display_round_trips() {
        for s in [Situation::SchedulingDialog, Situation::SummingUp] {
            assert_eq!(s.to_string().parse::<Situation>().unwrap(), s);
        }
    }

    #[test]
    fn test_day_number_style_applies() {
        assert!(DayNumberStyle::Always.applies(true));
        assert!(DayNumberStyle::StartOnly.applies(false));
        assert!(!DayNumberStyle::StartOnly.applies(true));
        assert!(!DayNumberStyle::Never.applies(false));
    }

    #[test]
    fn test_day_number_style_from_str() {
        assert_eq!(
            "start_only".parse::<DayNumberStyle>().unwrap(),
            DayNumberStyle::StartOnly
        );
        let err = "sometimes".parse::<DayNumberStyle>().unwrap_err();
        assert!(err.to_string().contains("Invalid option"), "got: {err}");
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.timezone, "Asia/Seoul");

        let config =
            GeneratorConfig::from_json(r#"{"timezone": "UTC", "day_numbers": "never"}"#).unwrap();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.day_numbers, DayNumberStyle::Never);
        assert_eq!(config.relative_rule, RelativeRule::Numeric);

        let config = GeneratorConfig::from_json(r#"{"relative_rule": "calendar"}"#).unwrap();
        assert_eq!(config.relative_rule, RelativeRule::Calendar);
    }

    #[test]
    fn test_relative_rule_from_str() {
        assert_eq!(" Calendar ".parse::<RelativeRule>().unwrap(), RelativeRule::Calendar);
        assert_eq!("numeric".parse::<RelativeRule>().unwrap(), RelativeRule::Numeric);
        let err = "weekly".parse::<RelativeRule>().unwrap_err();
        assert!(matches!(err, ExprError::InvalidOption(_)));
    }

    #[test]
    fn test_config_from_bad_json() {
        let err = GeneratorConfig::from_json(r#"{"day_numbers": 3}"#).unwrap_err();
        assert!(matches!(err, ExprError::InvalidOption(_)));
    }
}
