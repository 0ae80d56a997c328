//! Small text and list helpers shared by the widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fit `text` into `max_width` terminal columns, ending in `…` when cut.
///
/// Width is measured in display columns, so wide glyphs count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// First visible row of a `visible`-row window over `len` rows that keeps
/// `cursor` on screen, with the cursor pinned to the bottom edge when scrolling.
pub fn scroll_window_start(cursor: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    cursor.saturating_sub(visible - 1).min(len - visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_to_width("Alice", 10), "Alice");
        assert_eq!(truncate_to_width("Alice", 5), "Alice");
    }

    #[test]
    fn long_text_gets_ellipsis_within_width() {
        let out = truncate_to_width("Alexandria Ocasio", 8);
        assert_eq!(out, "Alexand…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn wide_glyphs_count_double() {
        // Each CJK glyph is two columns wide.
        let out = truncate_to_width("山田太郎", 5);
        assert_eq!(out, "山田…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_to_width("Alice", 0), "");
    }

    #[test]
    fn window_starts_at_top_when_everything_fits() {
        assert_eq!(scroll_window_start(3, 4, 6), 0);
        assert_eq!(scroll_window_start(0, 0, 6), 0);
        assert_eq!(scroll_window_start(5, 10, 0), 0);
    }

    #[test]
    fn window_follows_cursor_past_bottom() {
        assert_eq!(scroll_window_start(2, 10, 3), 0);
        assert_eq!(scroll_window_start(3, 10, 3), 1);
        assert_eq!(scroll_window_start(9, 10, 3), 7);
    }

    #[test]
    fn window_never_runs_past_end() {
        assert_eq!(scroll_window_start(usize::MAX, 10, 3), 7);
    }
}
