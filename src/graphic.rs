//! The kinetic graphic: a drawable that glides toward a commanded target.
//!
//! Each call to [`KineticGraphic::update`] advances a one-dimensional speed
//! controller along the straight line to the target. Speed grows at a
//! fixed acceleration up to `max_speed`; inside the slow-down radius the
//! speed ceiling falls linearly toward `min_speed`, and travel within a
//! frame never exceeds the remaining distance. Once the graphic comes
//! within [`ARRIVAL_THRESHOLD`] it snaps onto the target and idles.

use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use glam::Vec2;
use log::{debug, trace};

use crate::error::GraphicError;
use crate::host::Host;
use crate::params::MotionParams;
use crate::strategy::{DrawStrategy, HoverDetector, HoverListener, IdlingStrategy};
use crate::vector_math::{linear_map, vec_mag, vec_normalize};
use crate::ARRIVAL_THRESHOLD;

/// A drawable entity with acceleration-limited motion toward a target.
///
/// Strategies are held weakly: the caller keeps the owning `Rc` and the
/// graphic stops using a strategy as soon as that `Rc` is dropped.
pub struct KineticGraphic {
    host: Rc<dyn Host>,
    position: Vec2,
    target: Vec2,
    idling: bool,
    speed: f32,
    started_moving: bool,
    last_tick: Duration,
    hovering: bool,
    params: MotionParams,
    draw_strategy: Weak<dyn DrawStrategy>,
    idling_strategy: Option<Weak<dyn IdlingStrategy>>,
    hover_detector: Option<Weak<dyn HoverDetector>>,
    hover_listener: Option<Weak<dyn HoverListener>>,
}

impl fmt::Debug for KineticGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KineticGraphic")
            .field("position", &self.position)
            .field("target", &self.target)
            .field("idling", &self.idling)
            .field("speed", &self.speed)
            .field("hovering", &self.hovering)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl KineticGraphic {
    /// Creates an idle graphic at `position` using the default
    /// [`MotionParams`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use glam::Vec2;
    /// use kinetic::{DrawFailure, KineticGraphic, ManualHost};
    ///
    /// let draw = Rc::new(|_: &KineticGraphic| -> Result<(), DrawFailure> { Ok(()) });
    /// let graphic = KineticGraphic::new(Rc::new(ManualHost::new()), Vec2::new(4.0, 2.0), &draw);
    /// assert!(graphic.is_idling());
    /// assert_eq!(graphic.pos(), graphic.target_pos());
    /// ```
    pub fn new<D>(host: Rc<dyn Host>, position: Vec2, draw: &Rc<D>) -> Self
    where
        D: DrawStrategy + 'static,
    {
        let draw_strategy = Rc::downgrade(draw) as Weak<dyn DrawStrategy>;
        Self {
            host,
            position,
            target: position,
            idling: true,
            speed: 0.0,
            started_moving: false,
            last_tick: Duration::ZERO,
            hovering: false,
            params: MotionParams::default(),
            draw_strategy,
            idling_strategy: None,
            hover_detector: None,
            hover_listener: None,
        }
    }

    /// Replaces the motion parameters, builder style.
    #[must_use]
    pub fn with_params(mut self, params: MotionParams) -> Self {
        self.params = params;
        self
    }

    /// Current motion parameters.
    #[must_use]
    pub const fn params(&self) -> MotionParams {
        self.params
    }

    /// Replaces all motion parameters at once.
    pub const fn set_params(&mut self, params: MotionParams) {
        self.params = params;
    }

    /// Sets the speed ceiling reached at zero remaining distance.
    pub const fn set_min_speed(&mut self, min_speed: f32) {
        self.params.min_speed = min_speed;
    }

    /// Sets the hard speed cap.
    pub const fn set_max_speed(&mut self, max_speed: f32) {
        self.params.max_speed = max_speed;
    }

    /// Sets the speed gained per second of transit.
    pub const fn set_acceleration(&mut self, acceleration: f32) {
        self.params.acceleration = acceleration;
    }

    /// Sets the distance at which the speed ceiling starts falling.
    pub const fn set_slow_down_radius(&mut self, slow_down_radius: f32) {
        self.params.slow_down_radius = slow_down_radius;
    }

    /// Installs an idle animation.
    pub fn set_idling_strategy<S>(&mut self, strategy: &Rc<S>)
    where
        S: IdlingStrategy + 'static,
    {
        let weak = Rc::downgrade(strategy) as Weak<dyn IdlingStrategy>;
        self.idling_strategy = Some(weak);
    }

    /// Removes the idle animation.
    pub fn clear_idling_strategy(&mut self) {
        self.idling_strategy = None;
    }

    /// Installs a listener invoked on every hovered update.
    pub fn set_hover_listener<L>(&mut self, listener: &Rc<L>)
    where
        L: HoverListener + 'static,
    {
        let weak = Rc::downgrade(listener) as Weak<dyn HoverListener>;
        self.hover_listener = Some(weak);
    }

    /// Removes the hover listener.
    pub fn clear_hover_listener(&mut self) {
        self.hover_listener = None;
    }

    /// Installs the predicate used to compute [`Self::is_hovering`].
    pub fn set_hover_detector<H>(&mut self, detector: &Rc<H>)
    where
        H: HoverDetector + 'static,
    {
        let weak = Rc::downgrade(detector) as Weak<dyn HoverDetector>;
        self.hover_detector = Some(weak);
    }

    /// Removes the hover detector and drops any stale hover state.
    pub fn clear_hover_detector(&mut self) {
        self.hover_detector = None;
        self.hovering = false;
    }

    /// Moves the graphic without affecting its target or motion state.
    pub const fn set_pos(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current position.
    #[must_use]
    pub const fn pos(&self) -> Vec2 {
        self.position
    }

    /// Position the graphic is steering toward.
    #[must_use]
    pub const fn target_pos(&self) -> Vec2 {
        self.target
    }

    /// Current travel speed in units per second.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Hover state computed by the last update with a detector installed.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the graphic is at rest at its target.
    #[must_use]
    pub const fn is_idling(&self) -> bool {
        self.idling
    }

    /// Host environment the graphic reads time and pointer state from.
    #[must_use]
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    /// Starts steering toward `target`.
    ///
    /// Speed carries over, so redirecting mid-flight keeps momentum.
    pub fn go_to(&mut self, target: Vec2) {
        debug!(
            "heading from {:?} to {:?} at speed {:.2}",
            self.position, target, self.speed
        );
        self.idling = false;
        self.target = target;
        self.started_moving = false;
    }

    /// Steers toward the current position, so the next update settles.
    pub fn stop(&mut self) {
        self.go_to(self.pos());
    }

    /// Advances one frame, testing hover against the host's pointer.
    ///
    /// The pointer is converted to graphic-local coordinates before any
    /// motion is applied in this frame.
    pub fn update(&mut self) {
        let local_mouse = self.host.pointer_position() - self.position;
        self.update_with_mouse_pos(local_mouse);
    }

    /// Advances one frame with an explicit graphic-local pointer position.
    pub fn update_with_mouse_pos(&mut self, local_mouse: Vec2) {
        if self.idling {
            if let Some(strategy) = live(&mut self.idling_strategy, "idling strategy") {
                self.run_idle(strategy.as_ref());
            }
        }

        if !self.idling {
            self.step_transit();
        }

        self.refresh_hover(local_mouse);
    }

    /// Draws the graphic with the origin translated to its position.
    ///
    /// The transform scope is closed again however the draw strategy exits,
    /// including by panicking.
    ///
    /// # Errors
    /// Returns [`GraphicError::MissingDrawStrategy`] when the caller has
    /// dropped the draw strategy and [`GraphicError::Draw`] when the strategy
    /// fails.
    pub fn draw(&self) -> Result<(), GraphicError> {
        let strategy = self
            .draw_strategy
            .upgrade()
            .ok_or(GraphicError::MissingDrawStrategy)?;
        let _scope = TransformScope::open(self.host.as_ref(), self.position);
        strategy.draw(self).map_err(GraphicError::Draw)
    }

    fn run_idle(&mut self, strategy: &dyn IdlingStrategy) {
        let target = self.target;
        strategy.idle(self);
        debug_assert!(
            self.idling && self.target == target,
            "idling strategies may only move the graphic"
        );
    }

    fn step_transit(&mut self) {
        let now = self.host.now();
        if !self.started_moving {
            self.started_moving = true;
            self.last_tick = now;
        }

        let diff = self.target - self.position;
        let distance = vec_mag(diff);
        let arrived = distance < ARRIVAL_THRESHOLD;
        if arrived {
            self.idling = true;
            self.position = self.target;
            debug!("arrived at {:?}", self.target);
        }

        // Hosts that run backwards contribute no elapsed time.
        let elapsed = now.saturating_sub(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.speed = self.next_speed(distance, elapsed);

        if arrived {
            return;
        }

        let travel = (self.speed * elapsed).min(distance);
        if travel >= distance {
            self.position = self.target;
        } else {
            self.position += vec_normalize(diff) * travel;
        }
        trace!(
            "moved {travel:.3} toward {:?}; now at {:?}, speed {:.2}",
            self.target,
            self.position,
            self.speed
        );
    }

    fn next_speed(&self, distance: f32, elapsed: f32) -> f32 {
        let MotionParams {
            min_speed,
            max_speed,
            acceleration,
            slow_down_radius,
        } = self.params;

        let accelerated = (self.speed + elapsed * acceleration).min(max_speed);
        let capped = if distance < slow_down_radius {
            let ceiling = linear_map(distance, slow_down_radius, 0.0, max_speed, min_speed);
            accelerated.min(ceiling)
        } else {
            accelerated
        };
        capped.max(0.0)
    }

    fn refresh_hover(&mut self, local_mouse: Vec2) {
        let Some(detector) = live(&mut self.hover_detector, "hover detector") else {
            self.hovering = false;
            return;
        };

        self.hovering = detector.detect(self, local_mouse);
        if self.hovering {
            if let Some(listener) = live(&mut self.hover_listener, "hover listener") {
                listener.on_hover(self);
            }
        }
    }
}

/// Upgrades a strategy slot, clearing it once the owner has dropped the
/// strategy.
fn live<T: ?Sized>(slot: &mut Option<Weak<T>>, role: &str) -> Option<Rc<T>> {
    let strategy = slot.as_ref()?.upgrade();
    if strategy.is_none() {
        debug!("{role} was dropped by its owner; clearing");
        *slot = None;
    }
    strategy
}

/// Transform scope that pops itself on drop.
struct TransformScope<'a> {
    host: &'a dyn Host,
}

impl<'a> TransformScope<'a> {
    fn open(host: &'a dyn Host, origin: Vec2) -> Self {
        host.push();
        host.translate(origin);
        Self { host }
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.host.pop();
    }
}
