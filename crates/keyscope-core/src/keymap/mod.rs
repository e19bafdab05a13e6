//! Built-in HID usage-name tables and the table-backed resolver.
//!
//! # What is a HID usage? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a number to
//! every control on an input device. These numbers are called *usages* and
//! are grouped by *usage page*: keyboard keys live on page 0x07, pointing
//! buttons on page 0x09, media keys on the consumer page 0x0C, and Apple
//! keeps its proprietary top-case/keyboard controls on vendor pages.
//!
//! A usage identifies a **physical position**, not a character: usage 0x04 on
//! page 0x07 is the key labelled `A` on a US keyboard regardless of the
//! active layout. The viewer therefore displays canonical position names
//! (`a`, `spacebar`, `left_shift`, ...) rather than characters.
//!
//! # Role of this module
//!
//! The classifier consumes the [`crate::classify::SwitchResolver`] trait; in
//! a full deployment the remapper's native service answers those queries.
//! [`BuiltinResolver`] is the self-contained implementation backed by the
//! tables below, covering the momentary-switch vocabulary of the remapper:
//! keyboard key codes, consumer key codes, and pointing buttons.

pub mod consumer_key_code;
pub mod key_code;
pub mod pointing_button;

use crate::classify::SwitchResolver;

/// Usage-page values used throughout the engine.
pub mod usage_page {
    pub const GENERIC_DESKTOP: i32 = 0x01;
    pub const KEYBOARD_OR_KEYPAD: i32 = 0x07;
    pub const BUTTON: i32 = 0x09;
    pub const CONSUMER: i32 = 0x0c;
    pub const APPLE_VENDOR_TOP_CASE: i32 = 0xff;
    pub const APPLE_VENDOR_KEYBOARD: i32 = 0xff01;
}

/// Returns `true` if the pair is a momentary switch the tables know about.
pub fn is_momentary_switch_target(page: i32, usage: i32) -> bool {
    match page {
        usage_page::KEYBOARD_OR_KEYPAD => key_code::target(usage),
        usage_page::CONSUMER => consumer_key_code::target(usage),
        usage_page::BUTTON => pointing_button::target(usage),
        _ => false,
    }
}

/// Canonical label for a momentary switch; empty for unknown pairs.
pub fn momentary_switch_name(page: i32, usage: i32) -> String {
    match page {
        usage_page::KEYBOARD_OR_KEYPAD => key_code::name(usage).unwrap_or("").to_string(),
        usage_page::CONSUMER => consumer_key_code::name(usage).unwrap_or("").to_string(),
        usage_page::BUTTON => pointing_button::name(usage).unwrap_or_default(),
        _ => String::new(),
    }
}

/// Returns `true` if the pair participates in per-device modifier state.
pub fn is_modifier_flag(page: i32, usage: i32) -> bool {
    page == usage_page::KEYBOARD_OR_KEYPAD && key_code::is_modifier(usage)
}

/// Modifier-flag name for tracker bookkeeping; empty for non-modifiers.
pub fn modifier_flag_name(page: i32, usage: i32) -> String {
    if page == usage_page::KEYBOARD_OR_KEYPAD {
        key_code::modifier_flag_name(usage)
            .unwrap_or("")
            .to_string()
    } else {
        String::new()
    }
}

/// [`SwitchResolver`] implementation backed by the built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResolver;

impl SwitchResolver for BuiltinResolver {
    fn is_momentary_switch_target(&self, usage_page: i32, usage: i32) -> bool {
        is_momentary_switch_target(usage_page, usage)
    }

    fn is_modifier_flag(&self, usage_page: i32, usage: i32) -> bool {
        is_modifier_flag(usage_page, usage)
    }

    fn momentary_switch_name(&self, usage_page: i32, usage: i32) -> String {
        momentary_switch_name(usage_page, usage)
    }

    fn modifier_flag_name(&self, usage_page: i32, usage: i32) -> String {
        modifier_flag_name(usage_page, usage)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
