//! Integration tests for the layout-change event bus.
//!
//! Models the keyboard-avoidance flow: an editor component subscribes for
//! keyboard frame changes, receives geometry and timing with each event, and
//! unsubscribes when it leaves the screen.

use note_excerpt::{FrameChange, LayoutEventBus, Rect};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_keyboard_avoidance_flow() {
    let mut bus = LayoutEventBus::new();
    let bottom_inset = Rc::new(RefCell::new(0.0_f64));

    let inset = bottom_inset.clone();
    let subscription = bus.subscribe(move |change| {
        if let Some(end) = change.end_frame {
            *inset.borrow_mut() = end.height;
        }
    });

    // Keyboard slides in.
    bus.publish(&FrameChange {
        begin_frame: Some(Rect::new(0.0, 896.0, 414.0, 0.0)),
        end_frame: Some(Rect::new(0.0, 550.0, 414.0, 346.0)),
        animation_duration: Some(0.25),
        animation_curve: Some(7),
    });
    assert_eq!(*bottom_inset.borrow(), 346.0);

    // Keyboard slides out.
    bus.publish(&FrameChange {
        begin_frame: Some(Rect::new(0.0, 550.0, 414.0, 346.0)),
        end_frame: Some(Rect::new(0.0, 896.0, 414.0, 0.0)),
        animation_duration: Some(0.25),
        animation_curve: Some(7),
    });
    assert_eq!(*bottom_inset.borrow(), 0.0);

    // Component leaves the screen; later events are no longer delivered.
    bus.unsubscribe(subscription);
    bus.publish(&FrameChange {
        end_frame: Some(Rect::new(0.0, 550.0, 414.0, 346.0)),
        ..Default::default()
    });
    assert_eq!(*bottom_inset.borrow(), 0.0);
}

#[test]
fn test_partial_payloads_are_delivered_as_is() {
    let mut bus = LayoutEventBus::new();
    let seen = Rc::new(RefCell::new(None));

    let sink = seen.clone();
    bus.subscribe(move |change| *sink.borrow_mut() = Some(*change));

    // Hosts may omit any field of the payload.
    let change = FrameChange {
        animation_duration: Some(0.1),
        ..Default::default()
    };
    bus.publish(&change);

    let received = seen.borrow().unwrap();
    assert_eq!(received.begin_frame, None);
    assert_eq!(received.end_frame, None);
    assert_eq!(received.animation_duration, Some(0.1));
    assert_eq!(received.animation_curve, None);
}
