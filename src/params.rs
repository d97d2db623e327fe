//! Tunable motion parameters.
//!
//! `MotionParams` bundles the four knobs of the speed profile so they can be
//! shipped as JSON alongside a scene. Values are stored as given: negative
//! speeds or a zero radius are accepted and simply produce degenerate motion.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GraphicError;
use crate::{
    DEFAULT_ACCELERATION, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED, DEFAULT_SLOW_DOWN_RADIUS,
};

/// Speed profile used while a graphic travels toward its target.
///
/// # Examples
///
/// ```
/// use kinetic::MotionParams;
///
/// let params = MotionParams::from_json_str(r#"{ "max_speed": 400.0 }"#).unwrap();
/// assert!((params.max_speed - 400.0).abs() < f32::EPSILON);
/// // Missing fields fall back to the defaults.
/// assert!((params.acceleration - 700.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Speed ceiling as the remaining distance approaches zero.
    pub min_speed: f32,
    /// Hard cap on speed.
    pub max_speed: f32,
    /// Speed gained per second while in transit.
    pub acceleration: f32,
    /// Remaining distance at which the speed ceiling begins to fall.
    pub slow_down_radius: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            slow_down_radius: DEFAULT_SLOW_DOWN_RADIUS,
        }
    }
}

impl MotionParams {
    /// Parses parameters from a JSON object, filling absent fields with
    /// their defaults.
    ///
    /// # Errors
    /// Returns [`GraphicError::InvalidParams`] when the document is not a
    /// valid parameter object.
    pub fn from_json_str(json: &str) -> Result<Self, GraphicError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON parameter file.
    ///
    /// # Errors
    /// Returns [`GraphicError::Io`] when the file cannot be read and
    /// [`GraphicError::InvalidParams`] when its contents do not parse.
    pub fn from_path(path: &Path) -> Result<Self, GraphicError> {
        let json = fs::read_to_string(path).map_err(|source| GraphicError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
