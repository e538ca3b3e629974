//! Terminal output utilities.
//!
//! Box drawing, the strength meter and ANSI helpers. Drawing helpers return
//! lines instead of printing so the same code serves cooked-mode CLI output
//! and raw-mode frames.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option with flag and description, wrapped to the box width.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_width = console_width(flag);
    let flag_padded = if flag_width < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag_width))
    } else {
        flag.chars().take(flag_col).collect()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if console_width(&current_line) + 1 + console_width(word) <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut out = Vec::with_capacity(lines.len().max(1));
    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(console_width(first));
            out.push(format!("│ {}{}{} │", flag_padded, first, " ".repeat(padding)));
        }
        None => out.push(format!("│ {}{} │", flag_padded, " ".repeat(desc_col))),
    }
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(console_width(line));
        out.push(format!("│ {}{}{} │", indent, line, " ".repeat(padding)));
    }
    out
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Three-line meter box filled to `percent`, with `text` centered inside.
/// `color` tints the filled part.
pub fn meter(percent: u8, text: &str, color: &str) -> [String; 3] {
    let inner_width = BOX_WIDTH - 2;
    let filled = (percent.min(100) as usize * inner_width) / 100;

    let text_chars: Vec<char> = text.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let mut top = String::new();
    let mut mid = String::new();
    let mut bottom = String::new();

    if filled > 0 {
        top.push_str(&format!("{color}▗{}{RESET}", "▄".repeat(filled)));
        let filled_str: String = content[..filled].iter().collect();
        mid.push_str(&format!("{color}▐\x1b[7m{}{RESET}", filled_str));
        bottom.push_str(&format!("{color}▝{}{RESET}", "▀".repeat(filled)));
    } else {
        top.push('┌');
        mid.push('│');
        bottom.push('└');
    }

    if filled < inner_width {
        let unfilled_str: String = content[filled..].iter().collect();
        top.push_str(&format!("{}┐", "─".repeat(inner_width - filled)));
        mid.push_str(&format!("{}│", unfilled_str));
        bottom.push_str(&format!("{}┘", "─".repeat(inner_width - filled)));
    } else {
        top.push_str(&format!("{color}▖{RESET}"));
        mid.push_str(&format!("{color}▌{RESET}"));
        bottom.push_str(&format!("{color}▘{RESET}"));
    }

    [top, mid, bottom]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_lines_have_fixed_width() {
        assert_eq!(console_width(&box_top("Strength")), BOX_WIDTH);
        assert_eq!(console_width(&box_line("hello")), BOX_WIDTH);
        assert_eq!(console_width(&box_line_center("hello")), BOX_WIDTH);
        assert_eq!(console_width(&box_line(&format!("{RED}red{RESET}"))), BOX_WIDTH);
        assert_eq!(console_width(&box_rule()), BOX_WIDTH);
        assert_eq!(console_width(&box_bottom()), BOX_WIDTH);
    }

    #[test]
    fn box_opt_wraps_long_descriptions() {
        let lines = box_opt(
            "  -l, --length <N>",
            "Characters per password, a rather long description that must wrap onto a second line",
        );
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| console_width(l) == BOX_WIDTH));

        let arrows = box_opt("  ←/→, -/+", "Shorten or lengthen the password, ←/→ on most keyboards");
        assert!(arrows.iter().all(|l| console_width(l) == BOX_WIDTH), "{arrows:?}");
    }

    #[test]
    fn meter_width_is_constant_across_fill_levels() {
        for pct in [0, 1, 50, 99, 100, 255] {
            for line in meter(pct, "Strength: Good", GREEN) {
                assert_eq!(console_width(&line), BOX_WIDTH, "pct {pct}");
            }
        }
    }
}
