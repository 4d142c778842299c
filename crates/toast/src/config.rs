//! Engine configuration.
//!
//! Every constant the engine uses has a default here and can be overridden
//! from a TOML document:
//!
//! ```toml
//! horizontal_margin = 40.0
//!
//! [present]
//! duration = 0.5   # seconds
//! delay = 0.0      # seconds
//! damping = 0.6
//! velocity = 1.0
//! easing = "ease-in-out"
//!
//! [dismiss]
//! duration = 1.0
//!
//! [metrics]
//! padding = 12.0
//! spacing = 10.0
//! glyph_width = 8.0
//! line_height = 17.0
//! ```
//!
//! Missing keys keep their defaults, unknown keys are rejected.

use std::path::{Path, PathBuf};
use std::time::Duration;

use butter_animation::{Curve, Easing, Spring};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but is out of range.
	#[error("invalid value for {field}: {reason}")]
	Invalid {
		/// Dotted path of the offending key.
		field: String,
		/// What is wrong with it.
		reason: &'static str,
	},
}

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Longest accepted transition duration or delay.
pub const MAX_TRANSITION: Duration = Duration::from_secs(3600);

/// Pace and shape of one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
	/// Length of the motion.
	pub duration: Duration,
	/// Wait before motion starts.
	pub delay: Duration,
	/// Pacing applied to linear progress.
	pub easing: Easing,
	/// Spring response applied after easing.
	pub spring: Spring,
}

impl TransitionTiming {
	/// Default timing for presenting a toast.
	pub const PRESENT: Self = Self {
		duration: Duration::from_millis(500),
		delay: Duration::ZERO,
		easing: Easing::EaseInOut,
		spring: Spring::new(0.6, 1.0),
	};

	/// Default timing for dismissing a toast.
	pub const DISMISS: Self = Self {
		duration: Duration::from_secs(1),
		..Self::PRESENT
	};

	/// Sets the motion length.
	#[must_use]
	pub const fn with_duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}

	/// Sets the wait before motion starts.
	#[must_use]
	pub const fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Sets the spring response.
	#[must_use]
	pub const fn with_spring(mut self, spring: Spring) -> Self {
		self.spring = spring;
		self
	}

	/// Timing curve for tweens using this timing.
	pub const fn curve(&self) -> Curve {
		Curve::sprung(self.easing, self.spring)
	}

	/// Total time from start to completion.
	pub fn total(&self) -> Duration {
		self.delay.saturating_add(self.duration)
	}
}

/// Intrinsic measurements used to fit an overlay to its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
	/// Inset between the overlay's edge and its content on every side.
	pub padding: f32,
	/// Gap between the icon, the text column and the button.
	pub spacing: f32,
	/// Advance of one terminal-width column of text.
	pub glyph_width: f32,
	/// Height of one line of text.
	pub line_height: f32,
	/// Height of the action button.
	pub button_height: f32,
}

impl Default for SurfaceMetrics {
	fn default() -> Self {
		Self {
			padding: 12.0,
			spacing: 10.0,
			glyph_width: 8.0,
			line_height: 17.0,
			button_height: 17.0,
		}
	}
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToasterConfig {
	/// Timing of present transitions.
	pub present: TransitionTiming,
	/// Timing of dismiss transitions.
	pub dismiss: TransitionTiming,
	/// Total horizontal space left free around a host-width toast.
	pub horizontal_margin: f32,
	/// Measurements used to fit overlays.
	pub metrics: SurfaceMetrics,
}

impl Default for ToasterConfig {
	fn default() -> Self {
		Self {
			present: TransitionTiming::PRESENT,
			dismiss: TransitionTiming::DISMISS,
			horizontal_margin: 40.0,
			metrics: SurfaceMetrics::default(),
		}
	}
}

impl ToasterConfig {
	/// Parse a TOML string on top of the defaults.
	pub fn parse(input: &str) -> Result<Self> {
		let file: ConfigFile = toml::from_str(input)?;
		let mut config = Self::default();
		file.present.apply("present", &mut config.present)?;
		file.dismiss.apply("dismiss", &mut config.dismiss)?;
		if let Some(margin) = file.horizontal_margin {
			config.horizontal_margin = margin;
		}
		file.metrics.apply(&mut config.metrics);
		config.validate()?;
		Ok(config)
	}

	/// Checks every value is in range.
	///
	/// Lengths must be finite and non-negative, damping must be positive and
	/// velocity finite. Durations and delays are capped at [`MAX_TRANSITION`].
	pub fn validate(&self) -> Result<()> {
		for (table, timing) in [("present", &self.present), ("dismiss", &self.dismiss)] {
			if timing.duration > MAX_TRANSITION {
				return Err(invalid(format!("{table}.duration"), "must be at most one hour"));
			}
			if timing.delay > MAX_TRANSITION {
				return Err(invalid(format!("{table}.delay"), "must be at most one hour"));
			}
			let damping = timing.spring.damping;
			if !damping.is_finite() || damping <= 0.0 {
				return Err(invalid(format!("{table}.damping"), "must be a positive number"));
			}
			if !timing.spring.velocity.is_finite() {
				return Err(invalid(format!("{table}.velocity"), "must be finite"));
			}
		}
		let lengths = [
			("horizontal_margin", self.horizontal_margin),
			("metrics.padding", self.metrics.padding),
			("metrics.spacing", self.metrics.spacing),
			("metrics.glyph_width", self.metrics.glyph_width),
			("metrics.line_height", self.metrics.line_height),
			("metrics.button_height", self.metrics.button_height),
		];
		for (field, value) in lengths {
			if !value.is_finite() || value < 0.0 {
				return Err(invalid(field.to_string(), "must be a non-negative number"));
			}
		}
		Ok(())
	}

	/// Load configuration from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
	present: TimingTable,
	dismiss: TimingTable,
	horizontal_margin: Option<f32>,
	metrics: MetricsTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TimingTable {
	duration: Option<f32>,
	delay: Option<f32>,
	damping: Option<f32>,
	velocity: Option<f32>,
	easing: Option<EasingName>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum EasingName {
	Linear,
	EaseIn,
	EaseOut,
	EaseInOut,
}

impl From<EasingName> for Easing {
	fn from(name: EasingName) -> Self {
		match name {
			EasingName::Linear => Easing::Linear,
			EasingName::EaseIn => Easing::EaseIn,
			EasingName::EaseOut => Easing::EaseOut,
			EasingName::EaseInOut => Easing::EaseInOut,
		}
	}
}

impl TimingTable {
	fn apply(self, table: &str, timing: &mut TransitionTiming) -> Result<()> {
		if let Some(secs) = self.duration {
			timing.duration = seconds(&format!("{table}.duration"), secs)?;
		}
		if let Some(secs) = self.delay {
			timing.delay = seconds(&format!("{table}.delay"), secs)?;
		}
		if let Some(damping) = self.damping {
			timing.spring.damping = damping;
		}
		if let Some(velocity) = self.velocity {
			timing.spring.velocity = velocity;
		}
		if let Some(easing) = self.easing {
			timing.easing = easing.into();
		}
		Ok(())
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MetricsTable {
	padding: Option<f32>,
	spacing: Option<f32>,
	glyph_width: Option<f32>,
	line_height: Option<f32>,
	button_height: Option<f32>,
}

impl MetricsTable {
	fn apply(self, metrics: &mut SurfaceMetrics) {
		let fields = [
			(self.padding, &mut metrics.padding),
			(self.spacing, &mut metrics.spacing),
			(self.glyph_width, &mut metrics.glyph_width),
			(self.line_height, &mut metrics.line_height),
			(self.button_height, &mut metrics.button_height),
		];
		for (value, slot) in fields {
			if let Some(value) = value {
				*slot = value;
			}
		}
	}
}

fn seconds(field: &str, secs: f32) -> Result<Duration> {
	Duration::try_from_secs_f32(secs)
		.map_err(|_| invalid(field.to_string(), "must be a non-negative number of seconds"))
}

fn invalid(field: String, reason: &'static str) -> ConfigError {
	ConfigError::Invalid { field, reason }
}
