//! Fixed-width text serialization for clipboard export.
//!
//! Each non-placeholder entry becomes one newline-terminated line of four
//! space-padded columns: `type:` (20 wide), `HID usage:` (20 wide), `name:`
//! (60 wide), then `misc:` unpadded. Fields longer than their column are
//! truncated to it; the output is a fixed-width table, not a lossless
//! format. Serialization is deterministic: the same entries always produce
//! byte-identical output.

use crate::domain::DisplayEntry;

const TYPE_WIDTH: usize = 20;
const USAGE_WIDTH: usize = 20;
const NAME_WIDTH: usize = 60;

/// Pads `field` with trailing spaces to exactly `width` bytes, truncating
/// longer fields at the column boundary.
fn column(mut field: String, width: usize) -> String {
    if field.len() > width {
        field.truncate(width);
    } else {
        let padding = width - field.len();
        field.extend(std::iter::repeat(' ').take(padding));
    }
    field
}

/// Serializes entries into the fixed-width table.
///
/// Placeholder entries (empty `event_type`) are skipped; empty input yields
/// the empty string.
pub fn serialize(entries: &[DisplayEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        if entry.event_type.is_empty() {
            continue;
        }

        out.push_str(&column(format!("type:{}", entry.event_type), TYPE_WIDTH));
        out.push_str(&column(
            format!("HID usage: {},{}", entry.usage_page_text, entry.usage_text),
            USAGE_WIDTH,
        ));
        out.push_str(&column(format!("name:{}", entry.name), NAME_WIDTH));
        out.push_str(&format!("misc:{}", entry.misc));
        out.push('\n');
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
