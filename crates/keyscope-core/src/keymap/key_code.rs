//! Keyboard/Keypad page (0x07) usage names.
//!
//! The name vocabulary follows the remapper's configuration language
//! (`a` ... `z`, `spacebar`, `return_or_enter`, `left_shift`, ...), so an
//! event shown in the viewer can be pasted directly into a remapping rule.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page).

/// Returns `true` if `usage` is a key the remapper understands.
pub fn target(usage: i32) -> bool {
    name(usage).is_some()
}

/// Canonical name for a keyboard usage, `None` if unmapped.
pub fn name(usage: i32) -> Option<&'static str> {
    let name = match usage {
        // Letters (0x04–0x1D)
        0x04 => "a",
        0x05 => "b",
        0x06 => "c",
        0x07 => "d",
        0x08 => "e",
        0x09 => "f",
        0x0a => "g",
        0x0b => "h",
        0x0c => "i",
        0x0d => "j",
        0x0e => "k",
        0x0f => "l",
        0x10 => "m",
        0x11 => "n",
        0x12 => "o",
        0x13 => "p",
        0x14 => "q",
        0x15 => "r",
        0x16 => "s",
        0x17 => "t",
        0x18 => "u",
        0x19 => "v",
        0x1a => "w",
        0x1b => "x",
        0x1c => "y",
        0x1d => "z",

        // Digits (0x1E–0x27)
        0x1e => "1",
        0x1f => "2",
        0x20 => "3",
        0x21 => "4",
        0x22 => "5",
        0x23 => "6",
        0x24 => "7",
        0x25 => "8",
        0x26 => "9",
        0x27 => "0",

        // Control and punctuation (0x28–0x38)
        0x28 => "return_or_enter",
        0x29 => "escape",
        0x2a => "delete_or_backspace",
        0x2b => "tab",
        0x2c => "spacebar",
        0x2d => "hyphen",
        0x2e => "equal_sign",
        0x2f => "open_bracket",
        0x30 => "close_bracket",
        0x31 => "backslash",
        0x32 => "non_us_pound",
        0x33 => "semicolon",
        0x34 => "quote",
        0x35 => "grave_accent_and_tilde",
        0x36 => "comma",
        0x37 => "period",
        0x38 => "slash",

        0x39 => "caps_lock",

        // Function keys (0x3A–0x45)
        0x3a => "f1",
        0x3b => "f2",
        0x3c => "f3",
        0x3d => "f4",
        0x3e => "f5",
        0x3f => "f6",
        0x40 => "f7",
        0x41 => "f8",
        0x42 => "f9",
        0x43 => "f10",
        0x44 => "f11",
        0x45 => "f12",

        // Navigation cluster (0x46–0x52)
        0x46 => "print_screen",
        0x47 => "scroll_lock",
        0x48 => "pause",
        0x49 => "insert",
        0x4a => "home",
        0x4b => "page_up",
        0x4c => "delete_forward",
        0x4d => "end",
        0x4e => "page_down",
        0x4f => "right_arrow",
        0x50 => "left_arrow",
        0x51 => "down_arrow",
        0x52 => "up_arrow",

        // Keypad (0x53–0x63)
        0x53 => "keypad_num_lock",
        0x54 => "keypad_slash",
        0x55 => "keypad_asterisk",
        0x56 => "keypad_hyphen",
        0x57 => "keypad_plus",
        0x58 => "keypad_enter",
        0x59 => "keypad_1",
        0x5a => "keypad_2",
        0x5b => "keypad_3",
        0x5c => "keypad_4",
        0x5d => "keypad_5",
        0x5e => "keypad_6",
        0x5f => "keypad_7",
        0x60 => "keypad_8",
        0x61 => "keypad_9",
        0x62 => "keypad_0",
        0x63 => "keypad_period",

        0x64 => "non_us_backslash",
        0x65 => "application",

        // Media keys reported on the keyboard page by some devices
        0x7f => "mute",
        0x80 => "volume_up",
        0x81 => "volume_down",

        // International / language keys (0x87–0x93)
        0x87 => "international1",
        0x88 => "international2",
        0x89 => "international3",
        0x8a => "international4",
        0x8b => "international5",
        0x90 => "lang1",
        0x91 => "lang2",
        0x92 => "lang3",
        0x93 => "lang4",

        // Modifiers (0xE0–0xE7)
        0xe0 => "left_control",
        0xe1 => "left_shift",
        0xe2 => "left_option",
        0xe3 => "left_command",
        0xe4 => "right_control",
        0xe5 => "right_shift",
        0xe6 => "right_option",
        0xe7 => "right_command",

        _ => return None,
    };
    Some(name)
}

/// Returns `true` if `usage` participates in per-device modifier state.
///
/// Caps lock counts: the remapper tracks it as a held flag like the
/// left/right modifiers.
pub fn is_modifier(usage: i32) -> bool {
    usage == 0x39 || (0xe0..=0xe7).contains(&usage)
}

/// Modifier-flag name for the tracker, `None` for non-modifiers.
pub fn modifier_flag_name(usage: i32) -> Option<&'static str> {
    if is_modifier(usage) {
        name(usage)
    } else {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_letters_are_named_in_order() {
        let letters = "abcdefghijklmnopqrstuvwxyz";
        for (i, expected) in letters.chars().enumerate() {
            let usage = 0x04 + i as i32;
            assert_eq!(
                name(usage),
                Some(expected.to_string().as_str()),
                "usage 0x{usage:02x} must be letter {expected}"
            );
        }
    }

    #[test]
    fn test_well_known_keys_have_remapper_vocabulary_names() {
        assert_eq!(name(0x28), Some("return_or_enter"));
        assert_eq!(name(0x2a), Some("delete_or_backspace"));
        assert_eq!(name(0x2c), Some("spacebar"));
        assert_eq!(name(0x35), Some("grave_accent_and_tilde"));
        assert_eq!(name(0x4c), Some("delete_forward"));
    }

    #[test]
    fn test_unmapped_usages_have_no_name_and_are_not_targets() {
        for usage in [0x00, 0x01, 0x02, 0x03, 0xa5, 0x2000, -1] {
            assert_eq!(name(usage), None, "usage 0x{usage:x} must be unmapped");
            assert!(!target(usage));
        }
    }

    #[test]
    fn test_modifiers_cover_caps_lock_and_e0_to_e7() {
        assert!(is_modifier(0x39));
        for usage in 0xe0..=0xe7 {
            assert!(is_modifier(usage), "0x{usage:x} must be a modifier");
        }
        assert!(!is_modifier(0x04));
        assert!(!is_modifier(0xe8));
    }

    #[test]
    fn test_modifier_flag_name_matches_key_name() {
        assert_eq!(modifier_flag_name(0xe1), Some("left_shift"));
        assert_eq!(modifier_flag_name(0x39), Some("caps_lock"));
        assert_eq!(modifier_flag_name(0x04), None);
    }
}
