//! Runtime generator settings shared between the geometry and mesh crates.
//!
//! The constants module holds the defaults; this module wraps them in a
//! validated snapshot so callers can tune tessellation density without
//! scattering literals.

use std::fmt;

use crate::constants::{
    BRACE_SEGMENTS, CASTER_SEGMENTS, EPSILON, MIN_SEGMENTS, POST_SEGMENTS, SPHERE_SEGMENTS,
};

/// Immutable snapshot of generator settings.
///
/// # Examples
/// ```
/// use config::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.post_segments, 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Numeric tolerance used when comparing coordinates.
    pub tolerance: f64,
    /// Radial segments for corner posts.
    pub post_segments: u32,
    /// Radial segments for cross-braces.
    pub brace_segments: u32,
    /// Radial segments for caster mounting plates.
    pub caster_segments: u32,
    /// Segments around caster wheel spheres.
    pub sphere_segments: u32,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and segment counts.
    ///
    /// # Examples
    /// ```
    /// use config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(1.0e-6, 32, 12, 16, 16).expect("valid config");
    /// assert_eq!(cfg.post_segments, 32);
    /// ```
    pub fn new(
        tolerance: f64,
        post_segments: u32,
        brace_segments: u32,
        caster_segments: u32,
        sphere_segments: u32,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        for segments in [post_segments, brace_segments, caster_segments, sphere_segments] {
            if segments < MIN_SEGMENTS {
                return Err(ConfigError::InvalidSegments(segments));
            }
        }
        Ok(Self {
            tolerance,
            post_segments,
            brace_segments,
            caster_segments,
            sphere_segments,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            post_segments: POST_SEGMENTS,
            brace_segments: BRACE_SEGMENTS,
            caster_segments: CASTER_SEGMENTS,
            sphere_segments: SPHERE_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when a segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segment count must be >= {MIN_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
