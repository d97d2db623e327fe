#![cfg_attr(docsrs, feature(doc_cfg))]
//! Moving graphics that glide toward a commanded target.
//!
//! A [`KineticGraphic`] travels in a straight line to its target under a
//! bounded-acceleration speed profile, optionally runs an idle animation
//! while at rest and reports pointer hover through caller-supplied
//! strategies. Time, pointer state and the drawing transform come from a
//! [`Host`].
pub mod constants;
pub mod error;
pub mod graphic;
pub mod host;
pub mod logging;
pub mod params;
pub mod strategy;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use error::{DrawFailure, GraphicError};
pub use graphic::KineticGraphic;
pub use host::{Host, ManualHost, SystemHost, TransformStack};
pub use logging::init as init_logging;
pub use params::MotionParams;
pub use strategy::{DrawStrategy, HoverDetector, HoverListener, IdlingStrategy};
pub use vector_math::{linear_map, vec_mag, vec_normalize};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use kinetic::prelude::*;
    //! ```

    pub use crate::DrawFailure;
    pub use crate::Host;
    pub use crate::KineticGraphic;
    pub use crate::ManualHost;
    pub use crate::MotionParams;
    pub use glam::Vec2;
}
