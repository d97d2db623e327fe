//! Caller-supplied behaviours plugged into a [`KineticGraphic`].
//!
//! The graphic only holds weak references to these; the caller owns them
//! through an `Rc`. Any closure of the matching shape implements the trait,
//! so most callers never name these traits directly:
//!
//! ```
//! use std::rc::Rc;
//! use glam::Vec2;
//! use kinetic::{DrawFailure, KineticGraphic, ManualHost};
//!
//! let host = Rc::new(ManualHost::new());
//! let draw = Rc::new(|_: &KineticGraphic| -> Result<(), DrawFailure> { Ok(()) });
//! let near = Rc::new(|_: &KineticGraphic, local: Vec2| local.length() < 10.0);
//!
//! let mut graphic = KineticGraphic::new(host, Vec2::ZERO, &draw);
//! graphic.set_hover_detector(&near);
//! graphic.update_with_mouse_pos(Vec2::new(5.0, 0.0));
//! assert!(graphic.is_hovering());
//! ```

use glam::Vec2;

use crate::error::DrawFailure;
use crate::graphic::KineticGraphic;

/// Renders a graphic relative to an origin already translated to its
/// position.
pub trait DrawStrategy {
    /// Draws `graphic`.
    ///
    /// # Errors
    /// Implementations report rendering failures; the graphic restores the
    /// transform scope before passing the error on.
    fn draw(&self, graphic: &KineticGraphic) -> Result<(), DrawFailure>;
}

impl<F> DrawStrategy for F
where
    F: Fn(&KineticGraphic) -> Result<(), DrawFailure>,
{
    fn draw(&self, graphic: &KineticGraphic) -> Result<(), DrawFailure> {
        self(graphic)
    }
}

/// Animates a graphic while it rests at its target.
///
/// Implementations may move the graphic with
/// [`KineticGraphic::set_pos`] but must leave its target and idling state
/// alone.
pub trait IdlingStrategy {
    /// Runs one idle frame.
    fn idle(&self, graphic: &mut KineticGraphic);
}

impl<F> IdlingStrategy for F
where
    F: Fn(&mut KineticGraphic),
{
    fn idle(&self, graphic: &mut KineticGraphic) {
        self(graphic);
    }
}

/// Decides whether the pointer is over a graphic.
pub trait HoverDetector {
    /// Returns `true` when `local_mouse`, the pointer relative to the
    /// graphic's position, lies over the graphic.
    fn detect(&self, graphic: &KineticGraphic, local_mouse: Vec2) -> bool;
}

impl<F> HoverDetector for F
where
    F: Fn(&KineticGraphic, Vec2) -> bool,
{
    fn detect(&self, graphic: &KineticGraphic, local_mouse: Vec2) -> bool {
        self(graphic, local_mouse)
    }
}

/// Reacts to a frame in which the pointer hovers over a graphic.
pub trait HoverListener {
    /// Called once per update while hovering.
    fn on_hover(&self, graphic: &mut KineticGraphic);
}

impl<F> HoverListener for F
where
    F: Fn(&mut KineticGraphic),
{
    fn on_hover(&self, graphic: &mut KineticGraphic) {
        self(graphic);
    }
}
