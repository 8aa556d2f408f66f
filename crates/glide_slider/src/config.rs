//! Slider configuration
//!
//! Programmatic configs are built with the `with_*` methods and checked by
//! [`SliderConfig::validate`]. Configs read from JSON go through
//! [`SliderConfig::from_json`], which never fails: every missing or malformed
//! field keeps its default.
//!
//! ```rust
//! use glide_slider::SliderConfig;
//! use std::time::Duration;
//!
//! let config = SliderConfig::from_json(r#"{ "autoplay": true, "duration": "soon" }"#);
//! assert!(config.autoplay);
//! assert_eq!(config.duration, Duration::from_millis(3000));
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, SliderError};

/// Default interval between autoplay advances
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Default length of a slide transition
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// Default pause between the wraparound snap and re-enabling transitions
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// What to do with navigation requested while a wraparound is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Hold requests (up to `queue_limit`) and replay them once settled
    #[default]
    Queue,
    /// Drop requests outright
    Ignore,
}

/// Configuration for a [`Slider`](crate::Slider)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Start advancing automatically at construction
    pub autoplay: bool,
    /// Interval between autoplay advances
    #[serde(with = "millis")]
    pub duration: Duration,
    /// Length of one slide transition, matching the stylesheet's transition
    #[serde(with = "millis")]
    pub transition: Duration,
    /// Pause after the wraparound snap before transitions come back on
    #[serde(with = "millis")]
    pub settle_delay: Duration,
    pub busy_policy: BusyPolicy,
    /// Maximum navigation requests held under [`BusyPolicy::Queue`]
    pub queue_limit: usize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            duration: DEFAULT_DURATION,
            transition: DEFAULT_TRANSITION,
            settle_delay: DEFAULT_SETTLE_DELAY,
            busy_policy: BusyPolicy::Queue,
            queue_limit: 1,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    pub fn with_queue_limit(mut self, limit: usize) -> Self {
        self.queue_limit = limit;
        self
    }

    /// Reject configurations that would stall the slider
    pub fn validate(&self) -> Result<()> {
        if self.duration.is_zero() {
            return Err(SliderError::InvalidConfig(
                "autoplay duration must be non-zero".to_string(),
            ));
        }
        if self.transition.is_zero() {
            return Err(SliderError::InvalidConfig(
                "transition duration must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a configuration from JSON, falling back to defaults
    ///
    /// Anything that isn't a JSON object yields the default config. Inside an
    /// object each recognized field is read on its own; a field that fails to
    /// parse, or a zero duration, keeps its default. Unknown keys are ignored.
    pub fn from_json(source: &str) -> Self {
        let mut config = Self::default();

        let value: serde_json::Value = match serde_json::from_str(source) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "slider config is not valid JSON, using defaults");
                return config;
            }
        };
        let Some(fields) = value.as_object() else {
            tracing::warn!("slider config is not an object, using defaults");
            return config;
        };

        if let Some(autoplay) = read_field(fields, "autoplay") {
            config.autoplay = autoplay;
        }
        if let Some(duration) = read_millis(fields, "duration") {
            config.duration = duration;
        }
        if let Some(transition) = read_millis(fields, "transition") {
            config.transition = transition;
        }
        if let Some(settle_delay) = read_field::<u64>(fields, "settle_delay") {
            config.settle_delay = Duration::from_millis(settle_delay);
        }
        if let Some(policy) = read_field(fields, "busy_policy") {
            config.busy_policy = policy;
        }
        if let Some(limit) = read_field(fields, "queue_limit") {
            config.queue_limit = limit;
        }

        config
    }
}

fn read_field<T: DeserializeOwned>(
    fields: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Option<T> {
    let raw = fields.get(key)?;
    match serde_json::from_value(raw.clone()) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "ignoring malformed slider config field");
            None
        }
    }
}

fn read_millis(fields: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<Duration> {
    match read_field::<u64>(fields, key)? {
        0 => {
            tracing::warn!(key, "ignoring zero duration in slider config");
            None
        }
        ms => Some(Duration::from_millis(ms)),
    }
}

/// Serialize durations as integer milliseconds
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
