//! Button page (0x09) usage names.
//!
//! Pointing buttons are numbered 1..=32; usage N is `buttonN`. Unlike the
//! other pages the names are generated, not tabulated.

/// Highest button number the remapper models.
const MAX_BUTTON: i32 = 32;

/// Returns `true` if `usage` is a pointing button the remapper understands.
pub fn target(usage: i32) -> bool {
    (1..=MAX_BUTTON).contains(&usage)
}

/// Canonical name for a pointing button, `None` outside 1..=32.
pub fn name(usage: i32) -> Option<String> {
    target(usage).then(|| format!("button{usage}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_one_to_thirty_two_are_targets() {
        assert!(target(1));
        assert!(target(32));
        assert!(!target(0));
        assert!(!target(33));
        assert!(!target(-1));
    }

    #[test]
    fn test_button_names_are_generated_from_usage() {
        assert_eq!(name(1).as_deref(), Some("button1"));
        assert_eq!(name(3).as_deref(), Some("button3"));
        assert_eq!(name(0), None);
    }
}
