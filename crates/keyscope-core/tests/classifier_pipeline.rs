//! Integration tests for the classification pipeline.
//!
//! These exercise the full core path the way a viewer drives it: classifier
//! + built-in resolver routing into the two bounded histories, then
//! clipboard serialization of the result.

use std::sync::Arc;

use keyscope_core::{
    export, BoundedHistory, BuiltinResolver, Classification, DeviceId, DisplayMode,
    EventClassifier, NotificationKind, RawHidNotification,
};

fn notification(usage_page: i32, usage: i32, value: i64) -> RawHidNotification {
    RawHidNotification {
        device_id: DeviceId(7),
        usage_page,
        usage,
        value,
        kind: NotificationKind::KeyEdge,
    }
}

/// Routes one classification outcome the way a viewer does: exactly one
/// append to exactly one history, or none at all for skipped events.
fn route(
    outcome: Classification,
    known: &mut BoundedHistory,
    unknown: &mut BoundedHistory,
) {
    match outcome {
        Classification::Skipped => {}
        Classification::Unknown(entry) => unknown.append(entry),
        Classification::Known(entry) => known.append(entry),
    }
}

#[test]
fn test_shift_a_sequence_produces_expected_history() {
    let mut classifier = EventClassifier::new(Arc::new(BuiltinResolver));
    let mut known = BoundedHistory::historical(32);
    let mut unknown = BoundedHistory::historical(32);

    let sequence = [
        notification(0x07, 0xe1, 1), // left_shift down
        notification(0x07, 0x04, 1), // a down
        notification(0x07, 0x04, 0), // a up
        notification(0x07, 0xe1, 0), // left_shift up
    ];
    for n in &sequence {
        let outcome = classifier.classify(n, DisplayMode::Hex);
        route(outcome, &mut known, &mut unknown);
    }

    assert_eq!(known.len(), 4);
    assert!(unknown.is_empty());

    let entries = known.snapshot();
    assert_eq!(entries[0].name, "left_shift");
    assert_eq!(entries[0].misc, "flags left_shift");
    assert_eq!(entries[1].name, "a");
    assert_eq!(entries[1].misc, "flags left_shift");
    assert_eq!(entries[2].event_type, "up");
    assert_eq!(entries[2].misc, "flags left_shift");
    assert_eq!(entries[3].name, "left_shift");
    assert_eq!(entries[3].misc, "");
}

#[test]
fn test_mixed_stream_routes_to_exactly_one_history_each() {
    let mut classifier = EventClassifier::new(Arc::new(BuiltinResolver));
    let mut known = BoundedHistory::historical(32);
    let mut unknown = BoundedHistory::historical(32);

    let stream = [
        notification(0x01, 0x30, 55),   // pointer x: skipped
        notification(0x07, 0x04, 1),    // a: known
        notification(0xff01, 0x21, 1),  // vendor usage: unknown
        notification(0x0c, 0x238, 1),   // horizontal wheel: skipped
        notification(0x09, 0x01, 1),    // button1: known
    ];
    for n in &stream {
        let outcome = classifier.classify(n, DisplayMode::Decimal);
        route(outcome, &mut known, &mut unknown);
    }

    assert_eq!(known.len(), 2);
    assert_eq!(unknown.len(), 1);
    assert_eq!(known.snapshot()[1].name, "button1");
    assert_eq!(unknown.snapshot()[0].event_type, "1");
}

#[test]
fn test_history_eviction_under_sustained_typing() {
    let mut classifier = EventClassifier::new(Arc::new(BuiltinResolver));
    let mut known = BoundedHistory::historical(16);
    let mut unknown = BoundedHistory::historical(16);

    // 26 letters down and up: 52 appends through a capacity-16 buffer.
    for usage in 0x04..0x1e {
        for value in [1, 0] {
            let outcome = classifier.classify(&notification(0x07, usage, value), DisplayMode::Decimal);
            route(outcome, &mut known, &mut unknown);
        }
    }

    assert_eq!(known.len(), 16);
    // The newest entry is 'z' up.
    let entries = known.snapshot();
    assert_eq!(entries.last().unwrap().name, "z");
    assert_eq!(entries.last().unwrap().event_type, "up");
}

#[test]
fn test_snapshot_serializes_to_fixed_width_export() {
    let mut classifier = EventClassifier::new(Arc::new(BuiltinResolver));
    let mut known = BoundedHistory::historical(32);
    let mut unknown = BoundedHistory::historical(32);

    let outcome = classifier.classify(&notification(0x07, 0x2c, 1), DisplayMode::Hex);
    route(outcome, &mut known, &mut unknown);

    let output = export::serialize(&known.snapshot());

    assert!(output.starts_with("type:down           "));
    assert!(output.contains("HID usage: 0x07,0x2c"));
    assert!(output.contains("name:spacebar"));
    assert!(output.ends_with("misc:\n"));
}

#[test]
fn test_live_queue_viewer_keeps_constant_length_under_stream() {
    let mut classifier = EventClassifier::new(Arc::new(BuiltinResolver));
    let mut known = BoundedHistory::live_queue(256);
    let mut unknown = BoundedHistory::live_queue(256);

    for i in 0..600 {
        let usage = 0x04 + (i % 26);
        let outcome = classifier.classify(&notification(0x07, usage, (i % 2) as i64), DisplayMode::Decimal);
        route(outcome, &mut known, &mut unknown);
        assert_eq!(known.len(), 256);
        assert_eq!(unknown.len(), 256);
    }

    // Export skips whatever placeholders remain.
    let exported = export::serialize(&unknown.snapshot());
    assert!(exported.is_empty());
}
