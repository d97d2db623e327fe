//! Motion constants shared by the engine and its parameter defaults.
//!
//! Distances are in the host's coordinate units; speeds in units per
//! second; acceleration in units per second squared.

/// Speed ceiling reached as the remaining distance shrinks to zero.
pub const DEFAULT_MIN_SPEED: f32 = 10.0;
/// Upper bound on travel speed outside the slow-down band.
pub const DEFAULT_MAX_SPEED: f32 = 1000.0;
/// Rate at which speed builds while in transit.
pub const DEFAULT_ACCELERATION: f32 = 700.0;
/// Distance from the target at which the speed ceiling starts ramping down.
pub const DEFAULT_SLOW_DOWN_RADIUS: f32 = 120.0;
/// Remaining distance below which a graphic snaps onto its target.
pub const ARRIVAL_THRESHOLD: f32 = 1.0;
