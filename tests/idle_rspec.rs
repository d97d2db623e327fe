//! Behaviour tests for idle animations using rust-rspec.

use std::rc::Rc;
use std::time::Duration;

use glam::Vec2;
use kinetic::{Host, KineticGraphic};
use test_utils::physics::{Rig, FRAME};

const REST: Vec2 = Vec2::new(100.0, 100.0);

#[derive(Clone, Debug, Default)]
struct IdleWorld {
    idle_offsets: Vec<f32>,
    transit_offsets: Vec<f32>,
    target_after_idle: Vec2,
}

impl IdleWorld {
    fn run(&mut self) {
        let mut rig = Rig::new(REST);
        // Bob vertically around the rest point, driven by host time.
        let bob = Rc::new(|graphic: &mut KineticGraphic| {
            let seconds = graphic.host().now().as_secs_f32();
            let anchor = graphic.target_pos();
            graphic.set_pos(anchor + Vec2::new(0.0, (seconds * 4.0).sin() * 3.0));
        });
        rig.graphic.set_idling_strategy(&bob);

        for _ in 0..10 {
            let frame = rig.step(Duration::from_millis(50));
            self.idle_offsets.push(frame.position.y - REST.y);
        }
        self.target_after_idle = rig.graphic.target_pos();

        rig.graphic.go_to(Vec2::new(400.0, 100.0));
        for _ in 0..10 {
            let frame = rig.step(FRAME);
            self.transit_offsets.push(frame.position.y - REST.y);
        }
    }
}

#[test]
fn idle_animation_runs_only_at_rest() {
    rspec::run(&rspec::given(
        "a resting graphic with a bobbing idle animation",
        IdleWorld::default(),
        |ctx| {
            ctx.before_each(|world| {
                *world = IdleWorld::default();
                world.run();
            });
            ctx.when("frames pass while idle", |ctx| {
                ctx.then("the animation moves the graphic", |world| {
                    assert!(world.idle_offsets.iter().any(|dy| dy.abs() > 0.5));
                    assert!(world.idle_offsets.iter().all(|dy| dy.abs() <= 3.0 + 1e-4));
                });
                ctx.then("the target is left where it was", |world| {
                    assert_eq!(world.target_after_idle, REST);
                });
            });
            ctx.when("the graphic starts travelling", |ctx| {
                ctx.then("the animation no longer runs", |world| {
                    let settled = world.idle_offsets.last().copied().unwrap_or_default();
                    // Transit only moves along the ray toward the target, so
                    // the vertical offset left by the last bob shrinks.
                    assert!(world
                        .transit_offsets
                        .iter()
                        .all(|dy| dy.abs() <= settled.abs() + 1e-4));
                });
            });
        },
    ));
}
