//! # Config Crate
//!
//! Centralized configuration constants for the shelf generator pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{POST_RADIUS, WIDTH_RANGE};
//!
//! assert!(POST_RADIUS > 0.0);
//! assert!(WIDTH_RANGE.contains(&36.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Inches**: Every length is expressed in inches

pub mod constants;
pub mod generator;

pub use generator::{ConfigError, GeneratorConfig};
