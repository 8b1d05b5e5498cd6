//! End-to-end scenarios for the sheet driver: realistic event sequences a
//! web host would deliver, checked against the committed state, the flag
//! set, and the exact command stream.

use sheetkit_core::controller::SheetCommand;
use sheetkit_core::event::{PointerId, SheetEvent};
use sheetkit_core::host::{RecordingHost, SheetDriver};
use sheetkit_core::state::{PresentationFlags, SheetOffset, SheetState};

const VH: f64 = 800.0;
const PEEK: f64 = 80.0;

fn driver() -> SheetDriver<RecordingHost> {
    SheetDriver::attach(RecordingHost::new(VH))
}

fn pointer() -> PointerId {
    PointerId(1)
}

/// Deliver a handle drag of `dy` pixels through the driver.
fn drag(driver: &mut SheetDriver<RecordingHost>, dy: f64) {
    let start = 400.0;
    driver.handle(&SheetEvent::handle_down(pointer(), start));
    driver.handle(&SheetEvent::PointerMove {
        pointer: pointer(),
        y: start + dy,
    });
    driver.handle(&SheetEvent::PointerUp {
        pointer: pointer(),
        y: start + dy,
    });
}

#[test]
fn initial_load_then_map_tap_reaches_peek() {
    let mut driver = driver();
    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Split);
    assert_eq!(snap.flags, PresentationFlags::empty());

    driver.handle(&SheetEvent::TapMap);
    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Peek);
    assert!(snap.map_focused());
    assert_eq!(snap.offset, SheetOffset::Px(VH - PEEK));
}

#[test]
fn peek_drag_up_past_threshold_opens_full() {
    let mut driver = driver();
    driver.handle(&SheetEvent::TapMap);
    drag(&mut driver, -100.0);

    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Full);
    assert!(snap.flags.contains(PresentationFlags::SHEET_FULL));
    assert!(snap.flags.contains(PresentationFlags::NO_SCROLL));
    assert_eq!(snap.offset, SheetOffset::Auto);
}

#[test]
fn full_small_downward_drag_snaps_back() {
    let mut driver = driver();
    driver.handle(&SheetEvent::TapHandle);
    drag(&mut driver, 30.0);

    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Full);
    assert_eq!(snap.offset, SheetOffset::Auto);
}

#[test]
fn full_firm_downward_drag_collapses_to_peek() {
    let mut driver = driver();
    driver.handle(&SheetEvent::TapHandle);
    drag(&mut driver, 150.0);

    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Peek);
    assert!(!snap.flags.contains(PresentationFlags::SHEET_FULL));
    assert!(!snap.flags.contains(PresentationFlags::NO_SCROLL));
    assert_eq!(snap.offset, SheetOffset::Px(VH - PEEK));
}

#[test]
fn scrolled_content_press_starts_nothing() {
    let mut driver = driver();
    driver.handle(&SheetEvent::content_down(pointer(), 400.0, 40.0));
    assert!(!driver.controller().is_dragging());
    assert!(driver.host().commands.is_empty());
}

#[test]
fn content_press_at_top_drags_like_the_handle() {
    let mut driver = driver();
    driver.handle(&SheetEvent::content_down(pointer(), 400.0, 0.0));
    driver.handle(&SheetEvent::PointerMove {
        pointer: pointer(),
        y: 300.0,
    });
    driver.handle(&SheetEvent::PointerUp {
        pointer: pointer(),
        y: 300.0,
    });
    assert_eq!(driver.controller().state(), SheetState::Full);
}

#[test]
fn full_drag_command_stream_is_exact() {
    let mut driver = driver();
    driver.handle(&SheetEvent::handle_down(pointer(), 400.0));
    driver.handle(&SheetEvent::PointerMove {
        pointer: pointer(),
        y: 460.0,
    });
    driver.handle(&SheetEvent::PointerMove {
        pointer: pointer(),
        y: 520.0,
    });
    driver.handle(&SheetEvent::PointerUp {
        pointer: pointer(),
        y: 520.0,
    });

    assert_eq!(
        driver.host().commands,
        vec![
            SheetCommand::SetTransitions(false),
            SheetCommand::CapturePointer(pointer()),
            SheetCommand::SetOffset(SheetOffset::Px(60.0)),
            SheetCommand::SetOffset(SheetOffset::Px(120.0)),
            SheetCommand::SetTransitions(true),
            SheetCommand::SetFlags(PresentationFlags::MAP_FOCUSED),
            SheetCommand::SetOffset(SheetOffset::Px(VH - PEEK)),
            SheetCommand::ReleasePointer(pointer()),
        ]
    );
}

#[test]
fn resize_in_peek_keeps_flags_and_clears_transform() {
    let mut driver = driver();
    driver.handle(&SheetEvent::TapMap);
    driver.host_mut().take_commands();

    driver.handle(&SheetEvent::Resize {
        viewport_height: 600.0,
    });
    assert_eq!(
        driver.host_mut().take_commands(),
        vec![
            SheetCommand::SetTransitions(true),
            SheetCommand::SetOffset(SheetOffset::Auto),
        ]
    );
    let snap = driver.controller().snapshot();
    assert_eq!(snap.state, SheetState::Peek);
    assert_eq!(snap.flags, PresentationFlags::MAP_FOCUSED);
    assert_eq!(snap.offset, SheetOffset::Auto);

    // The next peek commit uses the new viewport height.
    driver.handle(&SheetEvent::TapMap);
    driver.handle(&SheetEvent::TapMap);
    assert_eq!(
        driver.controller().snapshot().offset,
        SheetOffset::Px(600.0 - PEEK)
    );
}

#[test]
fn subscriber_sees_the_whole_journey() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut driver = driver();
    let states = Rc::new(RefCell::new(Vec::new()));
    let states2 = Rc::clone(&states);
    let _guard = driver
        .controller()
        .subscribe(move |snap| states2.borrow_mut().push(snap.state));

    driver.handle(&SheetEvent::TapMap); // Split -> Peek
    drag(&mut driver, -120.0); // Peek  -> Full
    drag(&mut driver, 200.0); // Full  -> Peek
    driver.handle(&SheetEvent::TapMap); // Peek  -> Split
    drag(&mut driver, 10.0); // aborted: no notification

    assert_eq!(
        *states.borrow(),
        vec![
            SheetState::Peek,
            SheetState::Full,
            SheetState::Peek,
            SheetState::Split,
        ]
    );
}
