//! Static help text for the interactive screen.

use crate::rand;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub const KEY_HINTS: &str = "[←/→] length  [u/l/d/s] classes  [w] save  [?] help  [q] quit";

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("pwforge"),
        box_line_center("Password generator with strength meter"),
        box_line(""),
        box_line("KEYS:"),
    ];
    let keys = [
        ("  Enter, g", "Generate a new password"),
        ("  c", "Copy the password to the clipboard"),
        ("  p, Space", "Copy by clicking the password; the text briefly shows the result"),
        ("  ←/→, -/+", "Shorten or lengthen the password"),
        ("  u, l, d, s", "Toggle uppercase, lowercase, digits, symbols"),
        ("  w", "Save the current form as defaults"),
        ("  ?", "Toggle this help"),
        ("  q, Esc, Ctrl+C", "Quit"),
    ];
    for (flag, desc) in keys {
        lines.extend(box_opt(flag, desc));
    }
    lines.push(box_line(""));
    lines.push(box_line("STRENGTH:"));
    lines.push(box_line("  A heuristic from length and enabled classes, not from the"));
    lines.push(box_line("  generated text. Crack times are illustrative only."));
    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "Length {MIN_LENGTH}-{MAX_LENGTH} • Source: {}",
        rand::source_name()
    )));
    lines.push(box_bottom());
    lines.push(String::new());
    lines.push(" press any key to return".to_string());
    lines
}
