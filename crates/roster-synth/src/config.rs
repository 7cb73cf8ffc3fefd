//! Synthesis configuration
//!
//! Batch sizes, identifier prefixes and the date windows each record field
//! is drawn from. Loadable from TOML; dates are written as quoted
//! `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of members per batch
pub const DEFAULT_MEMBER_COUNT: usize = 250;
/// Default number of applications per batch
pub const DEFAULT_APPLICATION_COUNT: usize = 25;

/// Errors while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Date window ends before it starts
    #[error("invalid date range for {field}: {start} is after {end}")]
    InvalidRange {
        field: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Identifier prefix is empty or not alphanumeric
    #[error("invalid identifier prefix: '{0}'")]
    InvalidPrefix(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inclusive window of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window from `start` through `end` given as `(year, month, day)`
    ///
    /// Intended for constants; an impossible date becomes `NaiveDate::MIN`.
    #[must_use]
    pub fn ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Self {
        let day = |(y, m, d): (i32, u32, u32)| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
        };
        Self {
            start: day(start),
            end: day(end),
        }
    }

    /// Number of days after `start` that `end` falls
    #[inline]
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Check if `date` is inside the window
    #[inline]
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    fn validate(&self, field: &'static str) -> ConfigResult<()> {
        if self.start > self.end {
            return Err(ConfigError::InvalidRange {
                field,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Synthesizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Members generated when no count is given
    pub member_count: usize,
    /// Applications generated when no count is given
    pub application_count: usize,
    /// Prefix of `membership_id`
    pub membership_id_prefix: String,
    /// Prefix of `application_id`
    pub application_id_prefix: String,
    pub join_dates: DateWindow,
    pub renewal_dates: DateWindow,
    pub activity_dates: DateWindow,
    pub submitted_dates: DateWindow,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl SynthConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With member count
    #[inline]
    #[must_use]
    pub fn with_member_count(mut self, count: usize) -> Self {
        self.member_count = count;
        self
    }

    /// With application count
    #[inline]
    #[must_use]
    pub fn with_application_count(mut self, count: usize) -> Self {
        self.application_count = count;
        self
    }

    /// With fixed seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// With membership id prefix
    #[inline]
    #[must_use]
    pub fn with_membership_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.membership_id_prefix = prefix.into();
        self
    }

    /// With renewal date window
    #[inline]
    #[must_use]
    pub fn with_renewal_dates(mut self, window: DateWindow) -> Self {
        self.renewal_dates = window;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, or any [`SynthConfig::validate`] error.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as [`SynthConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded synth config");
        Ok(config)
    }

    /// Check prefixes and date windows
    ///
    /// # Errors
    /// [`ConfigError::InvalidPrefix`] or [`ConfigError::InvalidRange`].
    pub fn validate(&self) -> ConfigResult<()> {
        for prefix in [&self.membership_id_prefix, &self.application_id_prefix] {
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::InvalidPrefix(prefix.clone()));
            }
        }
        self.join_dates.validate("join_dates")?;
        self.renewal_dates.validate("renewal_dates")?;
        self.activity_dates.validate("activity_dates")?;
        self.submitted_dates.validate("submitted_dates")?;
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            member_count: DEFAULT_MEMBER_COUNT,
            application_count: DEFAULT_APPLICATION_COUNT,
            membership_id_prefix: "NCPA".to_string(),
            application_id_prefix: "APP".to_string(),
            join_dates: DateWindow::ymd((2015, 1, 1), (2024, 1, 1)),
            renewal_dates: DateWindow::ymd((2024, 6, 1), (2025, 12, 31)),
            activity_dates: DateWindow::ymd((2024, 1, 1), (2024, 6, 13)),
            submitted_dates: DateWindow::ymd((2024, 1, 1), (2024, 6, 13)),
            seed: None,
        }
    }
}
