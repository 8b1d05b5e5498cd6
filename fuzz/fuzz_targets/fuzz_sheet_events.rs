#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetkit_core::controller::{SheetConfig, SheetController};
use sheetkit_core::event::{PointerId, SheetEvent};

/// Structured event vocabulary with bounded coordinates.
#[derive(Debug, Arbitrary)]
enum Op {
    TapMap,
    TapHandle,
    HandleDown { pointer: u8, y: u16 },
    ContentDown { pointer: u8, y: u16, scroll_top: u16 },
    Move { pointer: u8, y: u16 },
    Up { pointer: u8, y: u16 },
    Cancel { pointer: u8 },
    Resize { viewport_height: u16 },
}

fn to_event(op: &Op) -> SheetEvent {
    match *op {
        Op::TapMap => SheetEvent::TapMap,
        Op::TapHandle => SheetEvent::TapHandle,
        Op::HandleDown { pointer, y } => {
            SheetEvent::handle_down(PointerId(pointer.into()), f64::from(y))
        }
        Op::ContentDown {
            pointer,
            y,
            scroll_top,
        } => SheetEvent::content_down(
            PointerId(pointer.into()),
            f64::from(y),
            f64::from(scroll_top),
        ),
        Op::Move { pointer, y } => SheetEvent::PointerMove {
            pointer: PointerId(pointer.into()),
            y: f64::from(y),
        },
        Op::Up { pointer, y } => SheetEvent::PointerUp {
            pointer: PointerId(pointer.into()),
            y: f64::from(y),
        },
        Op::Cancel { pointer } => SheetEvent::PointerCancel {
            pointer: PointerId(pointer.into()),
        },
        Op::Resize { viewport_height } => SheetEvent::Resize {
            viewport_height: f64::from(viewport_height).max(1.0),
        },
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut controller = SheetController::new(SheetConfig::default(), 800.0);
    let mut pointers_seen: Vec<u8> = Vec::new();

    for op in &ops {
        if let Op::HandleDown { pointer, .. } | Op::ContentDown { pointer, .. } = op
            && !pointers_seen.contains(pointer)
        {
            pointers_seen.push(*pointer);
        }
        let _ = controller.process(&to_event(op));

        // Post-conditions that must always hold:
        let snap = controller.snapshot();
        assert_eq!(snap.flags, snap.state.flags(), "flags diverged from state");
    }

    // Releasing every pointer that could own a session must leave none.
    for pointer in pointers_seen {
        let _ = controller.process(&SheetEvent::PointerCancel {
            pointer: PointerId(pointer.into()),
        });
    }
    assert!(!controller.is_dragging(), "session leaked past release");
});
