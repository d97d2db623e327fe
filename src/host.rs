//! Host environment capabilities consumed by the motion engine.
//!
//! A [`Host`] supplies the clock, the pointer position and a nestable
//! transform scope. Two adapters ship with the crate: [`SystemHost`] reads
//! the wall clock, while [`ManualHost`] advances only when told to, which
//! makes simulations deterministic.

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use glam::Vec2;
use log::warn;

/// Capabilities a drawing environment must provide to a
/// [`crate::KineticGraphic`].
///
/// Methods take `&self` so a host can be shared between the engine and the
/// caller's render loop; implementations keep their mutable state in
/// cells.
pub trait Host {
    /// Monotonic time since the host's epoch.
    fn now(&self) -> Duration;

    /// Current pointer location in the same space as graphic positions.
    fn pointer_position(&self) -> Vec2;

    /// Opens a transform scope, saving the current origin.
    fn push(&self);

    /// Closes the innermost transform scope, restoring the saved origin.
    fn pop(&self);

    /// Shifts the drawing origin of the current scope by `offset`.
    fn translate(&self, offset: Vec2);
}

/// Stack of saved drawing origins shared by the bundled hosts.
#[derive(Debug, Default)]
pub struct TransformStack {
    origin: Cell<Vec2>,
    saved: RefCell<Vec<Vec2>>,
}

impl TransformStack {
    /// Saves the current origin.
    pub fn push(&self) {
        self.saved.borrow_mut().push(self.origin.get());
    }

    /// Restores the most recently saved origin.
    ///
    /// Popping an empty stack leaves the origin untouched.
    pub fn pop(&self) {
        match self.saved.borrow_mut().pop() {
            Some(origin) => self.origin.set(origin),
            None => warn!("transform pop without a matching push; ignoring"),
        }
    }

    /// Offsets the current origin.
    pub fn translate(&self, offset: Vec2) {
        self.origin.set(self.origin.get() + offset);
    }

    /// Current drawing origin.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin.get()
    }

    /// Number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.borrow().len()
    }
}

/// Host backed by the system's monotonic clock.
///
/// The windowing layer reports pointer movement through
/// [`SystemHost::set_pointer_position`].
#[derive(Debug)]
pub struct SystemHost {
    epoch: Instant,
    pointer: Cell<Vec2>,
    transform: TransformStack,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemHost {
    /// Creates a host whose clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            pointer: Cell::new(Vec2::ZERO),
            transform: TransformStack::default(),
        }
    }

    /// Records the latest pointer location.
    pub fn set_pointer_position(&self, position: Vec2) {
        self.pointer.set(position);
    }

    /// Transform state accumulated by draw calls.
    #[must_use]
    pub const fn transform(&self) -> &TransformStack {
        &self.transform
    }
}

impl Host for SystemHost {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer.get()
    }

    fn push(&self) {
        self.transform.push();
    }

    fn pop(&self) {
        self.transform.pop();
    }

    fn translate(&self, offset: Vec2) {
        self.transform.translate(offset);
    }
}

/// Host whose clock moves only when the caller advances it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use kinetic::{Host, ManualHost};
///
/// let host = ManualHost::new();
/// host.advance(Duration::from_millis(16));
/// host.advance(Duration::from_millis(16));
/// assert_eq!(host.now(), Duration::from_millis(32));
/// ```
#[derive(Debug, Default)]
pub struct ManualHost {
    clock: Cell<Duration>,
    pointer: Cell<Vec2>,
    transform: TransformStack,
}

impl ManualHost {
    /// Creates a host at time zero with the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.clock.set(self.clock.get().saturating_add(step));
    }

    /// Sets the clock to an absolute time.
    ///
    /// Moving the clock backwards is allowed; the engine treats the negative
    /// delta as zero elapsed time.
    pub fn set_time(&self, time: Duration) {
        self.clock.set(time);
    }

    /// Places the pointer.
    pub fn set_pointer_position(&self, position: Vec2) {
        self.pointer.set(position);
    }

    /// Transform state accumulated by draw calls.
    #[must_use]
    pub const fn transform(&self) -> &TransformStack {
        &self.transform
    }
}

impl Host for ManualHost {
    fn now(&self) -> Duration {
        self.clock.get()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer.get()
    }

    fn push(&self) {
        self.transform.push();
    }

    fn pop(&self) {
        self.transform.pop();
    }

    fn translate(&self, offset: Vec2) {
        self.transform.translate(offset);
    }
}
