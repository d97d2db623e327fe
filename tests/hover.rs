//! Hover detection and listener dispatch.
use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use kinetic::KineticGraphic;
use rstest::rstest;
use test_utils::physics::{Rig, FRAME};

fn within(radius: f32) -> Rc<impl Fn(&KineticGraphic, Vec2) -> bool> {
    Rc::new(move |_: &KineticGraphic, local: Vec2| local.length() < radius)
}

fn counter() -> (Rc<Cell<u32>>, Rc<impl Fn(&mut KineticGraphic)>) {
    let count = Rc::new(Cell::new(0));
    let tally = Rc::clone(&count);
    (count, Rc::new(move |_: &mut KineticGraphic| tally.set(tally.get() + 1)))
}

#[test]
fn nearby_pointer_hovers_and_notifies_once() {
    let mut rig = Rig::new(Vec2::new(50.0, 50.0));
    let detector = within(10.0);
    let (calls, listener) = counter();
    rig.graphic.set_hover_detector(&detector);
    rig.graphic.set_hover_listener(&listener);

    rig.graphic.update_with_mouse_pos(Vec2::new(5.0, 0.0));

    assert!(rig.graphic.is_hovering());
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case::on_centre(Vec2::new(50.0, 50.0), true)]
#[case::inside(Vec2::new(57.0, 50.0), true)]
#[case::outside(Vec2::new(61.0, 50.0), false)]
#[case::far_away(Vec2::new(-400.0, 900.0), false)]
fn host_pointer_is_made_local(#[case] pointer: Vec2, #[case] expected: bool) {
    let mut rig = Rig::new(Vec2::new(50.0, 50.0));
    let detector = within(10.0);
    rig.graphic.set_hover_detector(&detector);
    rig.host.set_pointer_position(pointer);

    rig.step(FRAME);
    assert_eq!(rig.graphic.is_hovering(), expected);
}

#[test]
fn no_detector_never_hovers() {
    let mut rig = Rig::new(Vec2::ZERO);
    let (calls, listener) = counter();
    rig.graphic.set_hover_listener(&listener);
    rig.host.set_pointer_position(Vec2::ZERO);

    for _ in 0..5 {
        rig.step(FRAME);
        assert!(!rig.graphic.is_hovering());
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn clearing_detector_drops_hover_immediately() {
    let mut rig = Rig::new(Vec2::ZERO);
    let detector = within(10.0);
    rig.graphic.set_hover_detector(&detector);
    rig.graphic.update_with_mouse_pos(Vec2::ZERO);
    assert!(rig.graphic.is_hovering());

    rig.graphic.clear_hover_detector();
    assert!(!rig.graphic.is_hovering());
}

#[test]
fn listener_fires_every_hovered_frame_only() {
    let mut rig = Rig::new(Vec2::ZERO);
    let detector = within(10.0);
    let (calls, listener) = counter();
    rig.graphic.set_hover_detector(&detector);
    rig.graphic.set_hover_listener(&listener);

    rig.graphic.update_with_mouse_pos(Vec2::new(1.0, 1.0));
    rig.graphic.update_with_mouse_pos(Vec2::new(2.0, 0.0));
    rig.graphic.update_with_mouse_pos(Vec2::new(30.0, 0.0));
    assert_eq!(calls.get(), 2);

    rig.graphic.clear_hover_listener();
    rig.graphic.update_with_mouse_pos(Vec2::ZERO);
    assert!(rig.graphic.is_hovering());
    assert_eq!(calls.get(), 2);
}

#[test]
fn dropped_listener_is_skipped() {
    let mut rig = Rig::new(Vec2::ZERO);
    let detector = within(10.0);
    let (calls, listener) = counter();
    rig.graphic.set_hover_detector(&detector);
    rig.graphic.set_hover_listener(&listener);
    drop(listener);

    rig.graphic.update_with_mouse_pos(Vec2::ZERO);
    assert!(rig.graphic.is_hovering());
    assert_eq!(calls.get(), 0);
}
