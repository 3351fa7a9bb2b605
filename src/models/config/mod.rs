// Layout configuration module
// Caller-chosen time grid parameters, fixed for one layout pass

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid time-grid configuration supplied by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start hour {0} must be in 0..24")]
    StartHourOutOfRange(u32),
    #[error("end hour {0} must be in 1..=24")]
    EndHourOutOfRange(u32),
    #[error("start hour {start} must be before end hour {end}")]
    EmptyHourRange { start: u32, end: u32 },
    #[error("step must be 15, 30 or 60 minutes, got {0}")]
    InvalidStep(u32),
}

/// Sub-hour granularity of the time grid, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Step {
    QuarterHour = 15,
    HalfHour = 30,
    #[default]
    Hour = 60,
}

impl Step {
    /// Step length in minutes.
    pub fn minutes(self) -> u32 {
        self as u32
    }

    /// Number of sub-slot parts per hour (`60 / step`).
    pub fn hour_parts(self) -> u32 {
        60 / self.minutes()
    }
}

impl TryFrom<u32> for Step {
    type Error = ConfigError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(Step::QuarterHour),
            30 => Ok(Step::HalfHour),
            60 => Ok(Step::Hour),
            other => Err(ConfigError::InvalidStep(other)),
        }
    }
}

impl From<Step> for u32 {
    fn from(step: Step) -> Self {
        step.minutes()
    }
}

/// Horizontal direction in which assigned columns are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Time-grid parameters for one layout pass.
///
/// `start_hour..end_hour` bounds the visible slot rows; `step` controls the
/// sub-slot granularity events snap to. Construct through
/// [`LayoutConfig::new`] to reject inverted or out-of-range hour bounds,
/// which the layout pass itself treats as a caller contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// First visible hour of the window, inclusive.
    #[serde(default)]
    pub start_hour: u32,
    /// Last visible hour of the window, exclusive slot index bound.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default)]
    pub step: Step,
    #[serde(default)]
    pub direction: Direction,
}

fn default_end_hour() -> u32 {
    24
}

impl LayoutConfig {
    /// Create a validated configuration.
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        step: Step,
        direction: Direction,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            start_hour,
            end_hour,
            step,
            direction,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the hour bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour >= 24 {
            return Err(ConfigError::StartHourOutOfRange(self.start_hour));
        }

        if self.end_hour == 0 || self.end_hour > 24 {
            return Err(ConfigError::EndHourOutOfRange(self.end_hour));
        }

        if self.start_hour >= self.end_hour {
            return Err(ConfigError::EmptyHourRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }

        Ok(())
    }

    /// Number of sub-slot parts per hour.
    pub fn hour_parts(&self) -> u32 {
        self.step.hour_parts()
    }

    /// Number of visible slot rows.
    pub fn hour_range(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            step: Step::Hour,
            direction: Direction::Ltr,
        }
    }
}
