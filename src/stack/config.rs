use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LengthParseError {
    #[error("empty length")]
    Empty,
    #[error("invalid length: {0}")]
    Invalid(String),
    #[error("length must be finite: {0}")]
    NotFinite(String),
}

/// A position along the scroll axis, either absolute or relative to the
/// scrolling viewport. Percentages are resolved at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LengthRepr", into = "String")]
pub enum Length {
    Pixels(f64),
    Percent(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = LengthParseError;

    fn try_from(value: LengthRepr) -> Result<Self, Self::Error> {
        match value {
            LengthRepr::Number(n) if n.is_finite() => Ok(Self::Pixels(n)),
            LengthRepr::Number(n) => Err(LengthParseError::NotFinite(n.to_string())),
            LengthRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

impl Length {
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => pct / 100.0 * extent,
        }
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LengthParseError::Empty);
        }
        let (number, percent) = if let Some(n) = s.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, false)
        } else {
            (s, false)
        };
        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| LengthParseError::Invalid(s.to_string()))?;
        if !value.is_finite() {
            return Err(LengthParseError::NotFinite(s.to_string()));
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Where the pin window of every panel ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinRelease {
    /// End marker minus half the viewport.
    #[default]
    HalfViewport,
    /// Release once the end marker reaches the bottom edge of the pinned
    /// last panel, so following content never covers it.
    KeepLastVisible,
}

/// Behaviour of the "stack complete" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionMode {
    /// Fires on every entry into the last pin window, re-armed on exit.
    #[default]
    Rearm,
    /// Fires on the first entry only, until the engine is detached.
    Once,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub item_distance: f64,
    pub item_scale: f64,
    pub item_stack_distance: f64,
    pub stack_position: Length,
    pub scale_end_position: Length,
    pub base_scale: f64,
    pub scale_duration: f64, // accepted for compatibility, not read by the engine
    pub rotation_amount: f64,
    pub blur_amount: f64,
    pub max_blur: f64,
    /// Track the window instead of the stack's own scroll container.
    pub use_external_scroll_source: bool,
    pub smooth_scroll: bool,
    pub smoothing_lerp: f64,
    pub pin_release: PinRelease,
    pub completion: CompletionMode,
    pub idle_delay_ms: f64,
    pub snap_velocity: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_distance: 120.0,
            item_scale: 0.04,
            item_stack_distance: 50.0,
            stack_position: Length::Percent(25.0),
            scale_end_position: Length::Percent(15.0),
            base_scale: 0.88,
            scale_duration: 0.6,
            rotation_amount: 0.0,
            blur_amount: 0.8,
            max_blur: 10.0,
            use_external_scroll_source: false,
            smooth_scroll: true,
            smoothing_lerp: 0.12,
            pin_release: PinRelease::HalfViewport,
            completion: CompletionMode::Rearm,
            idle_delay_ms: 150.0,
            snap_velocity: 50.0,
        }
    }
}

impl StackConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_window_scroll(mut self) -> Self {
        self.use_external_scroll_source = true;
        self
    }
}
