//! Consumer page (0x0C) usage names.
//!
//! Media and system keys reported on the consumer page. Only the usages the
//! remapper models as momentary switches appear here; continuous controls
//! (AC pan and friends) are filtered out upstream by the skip table.

/// Returns `true` if `usage` is a consumer key the remapper understands.
pub fn target(usage: i32) -> bool {
    name(usage).is_some()
}

/// Canonical name for a consumer usage, `None` if unmapped.
pub fn name(usage: i32) -> Option<&'static str> {
    let name = match usage {
        0x30 => "power",
        0x40 => "menu",
        0x6f => "display_brightness_increment",
        0x70 => "display_brightness_decrement",
        0xb0 => "play",
        0xb1 => "pause",
        0xb3 => "fast_forward",
        0xb4 => "rewind",
        0xb5 => "scan_next_track",
        0xb6 => "scan_previous_track",
        0xb7 => "stop",
        0xb8 => "eject",
        0xcd => "play_or_pause",
        0xe2 => "mute",
        0xe9 => "volume_increment",
        0xea => "volume_decrement",
        _ => return None,
    };
    Some(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
