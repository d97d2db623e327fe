//! Frame-stepping harness for kinetic graphics.

use std::rc::Rc;
use std::time::Duration;

use glam::Vec2;
use kinetic::{DrawFailure, DrawStrategy, KineticGraphic, ManualHost, MotionParams};

/// Length of a 60 Hz frame, rounded to whole milliseconds.
pub const FRAME: Duration = Duration::from_millis(16);

/// Draw strategy that renders nothing.
#[derive(Debug, Default)]
pub struct NoopDraw;

impl DrawStrategy for NoopDraw {
    fn draw(&self, _graphic: &KineticGraphic) -> Result<(), DrawFailure> {
        Ok(())
    }
}

/// Observable state after one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub speed: f32,
    pub idling: bool,
}

impl Frame {
    fn capture(graphic: &KineticGraphic) -> Self {
        Self {
            position: graphic.pos(),
            speed: graphic.speed(),
            idling: graphic.is_idling(),
        }
    }
}

/// A graphic wired to a manual clock.
pub struct Rig {
    pub host: Rc<ManualHost>,
    pub graphic: KineticGraphic,
    draw: Rc<NoopDraw>,
}

impl Rig {
    /// Create an idle graphic at `start` with default parameters.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use test_utils::physics::{Rig, FRAME};
    ///
    /// let mut rig = Rig::new(Vec2::ZERO);
    /// rig.graphic.go_to(Vec2::new(100.0, 0.0));
    /// let frames = rig.run_until_idle(FRAME, 1_000);
    /// assert!(frames.last().is_some_and(|f| f.idling));
    /// ```
    pub fn new(start: Vec2) -> Self {
        let host = Rc::new(ManualHost::new());
        let draw = Rc::new(NoopDraw);
        let graphic = KineticGraphic::new(host.clone(), start, &draw);
        Self {
            host,
            graphic,
            draw,
        }
    }

    /// Create a rig using `params` instead of the defaults.
    pub fn with_params(start: Vec2, params: MotionParams) -> Self {
        let mut rig = Self::new(start);
        rig.graphic.set_params(params);
        rig
    }

    /// Keeps the draw strategy alive for as long as the rig.
    pub fn draw_strategy(&self) -> &Rc<NoopDraw> {
        &self.draw
    }

    /// Advance the clock by `step` and update once.
    pub fn step(&mut self, step: Duration) -> Frame {
        self.host.advance(step);
        self.graphic.update();
        Frame::capture(&self.graphic)
    }

    /// Step until the graphic idles or `max_frames` have elapsed.
    ///
    /// Returns every frame, including the one on which the graphic arrived.
    pub fn run_until_idle(&mut self, step: Duration, max_frames: usize) -> Vec<Frame> {
        let mut frames = Vec::new();
        for _ in 0..max_frames {
            let frame = self.step(step);
            frames.push(frame);
            if frame.idling {
                break;
            }
        }
        frames
    }
}
