//! Tests for widgets/popup

use super::*;

fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = rect(0, 0, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 10, 1);

    assert_eq!(popup.x, 1);
    assert_eq!(popup.y, 3);
    assert_eq!(popup.width, 78);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_below_anchor_shrinks_to_fit() {
    let anchor = rect(0, 18, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 10, 0);

    assert_eq!(popup.y, 21);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_below_anchor_at_bottom_has_no_height() {
    let anchor = rect(0, 21, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 10, 0);

    assert_eq!(popup.y, 24);
    assert_eq!(popup.height, 0);
}

#[test]
fn test_popup_below_anchor_wide_offset() {
    let anchor = rect(5, 0, 10, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 4, 6);

    assert_eq!(popup.x, 11);
    assert_eq!(popup.width, 0);
}

#[test]
fn test_content_width_uses_display_width() {
    assert_eq!(content_width(["abc", "abcdef"], 2, 0, 100), 8);
    // CJK characters take two columns each
    assert_eq!(content_width(["日本語"], 0, 0, 100), 6);
}

#[test]
fn test_content_width_clamps() {
    assert_eq!(content_width(["a"], 0, 10, 40), 10);
    assert_eq!(content_width(["a".repeat(100).as_str()], 0, 10, 40), 40);
    assert_eq!(content_width(std::iter::empty(), 4, 0, 40), 4);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("javascript", 20), "javascript");
    assert_eq!(truncate_to_width("javascript", 5), "java…");
    assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_content_width_max_wins_over_min() {
    assert_eq!(content_width(["a"], 0, 24, 10), 10);
}
