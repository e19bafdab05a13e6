//! Static noise filter for the classification pipeline.
//!
//! A fixed allow-skip list of `(usage_page, usage)` pairs that are dropped
//! before any further processing: pointer axes and wheels fire continuously
//! during normal use, the keyboard error codes carry no user intent, and the
//! vendor `-1` sentinels mark usages the monitor could not decode. None of
//! them belong in a human-readable event log.
//!
//! This is an explicit table, not a heuristic; pairs outside it are always
//! processed.

mod usage {
    pub const UNKNOWN: i32 = -1;

    // usage_page::generic_desktop
    pub const GENERIC_DESKTOP_X: i32 = 0x30;
    pub const GENERIC_DESKTOP_Y: i32 = 0x31;
    pub const GENERIC_DESKTOP_Z: i32 = 0x32;
    pub const GENERIC_DESKTOP_RZ: i32 = 0x35;
    pub const GENERIC_DESKTOP_WHEEL: i32 = 0x38;
    pub const GENERIC_DESKTOP_HAT_SWITCH: i32 = 0x39;

    // usage_page::keyboard_or_keypad
    pub const KEYBOARD_ERROR_ROLLOVER: i32 = 0x01;
    pub const KEYBOARD_POST_FAIL: i32 = 0x02;
    pub const KEYBOARD_ERROR_UNDEFINED: i32 = 0x03;

    // usage_page::consumer
    pub const CONSUMER_AC_PAN: i32 = 0x238;
}

use crate::keymap::usage_page;

/// The skip pairs, grouped by usage page.
const SKIP_PAIRS: &[(i32, i32)] = &[
    (usage_page::GENERIC_DESKTOP, usage::UNKNOWN),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_X),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_Y),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_Z),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_RZ),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_WHEEL),
    (usage_page::GENERIC_DESKTOP, usage::GENERIC_DESKTOP_HAT_SWITCH),
    (usage_page::KEYBOARD_OR_KEYPAD, usage::KEYBOARD_ERROR_ROLLOVER),
    (usage_page::KEYBOARD_OR_KEYPAD, usage::KEYBOARD_POST_FAIL),
    (usage_page::KEYBOARD_OR_KEYPAD, usage::KEYBOARD_ERROR_UNDEFINED),
    (usage_page::KEYBOARD_OR_KEYPAD, usage::UNKNOWN),
    (usage_page::CONSUMER, usage::CONSUMER_AC_PAN),
    (usage_page::CONSUMER, usage::UNKNOWN),
    (usage_page::APPLE_VENDOR_TOP_CASE, usage::UNKNOWN),
    (usage_page::APPLE_VENDOR_KEYBOARD, usage::UNKNOWN),
];

/// Returns `true` when a notification must be dropped before classification.
///
/// The undefined page (0) and undefined usage (0) are skipped on any page.
pub fn should_skip(usage_page: i32, usage: i32) -> bool {
    if usage_page == 0 || usage == 0 {
        return true;
    }
    SKIP_PAIRS.contains(&(usage_page, usage))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
