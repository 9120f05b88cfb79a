use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::UnicodeWidthStr;

/// Place a popup directly under `anchor`, kept inside `bounds`
///
/// The popup is as wide as the anchor minus `x_offset` on each side, and
/// its height shrinks when there is not enough room below the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y.min(bottom),
        width: anchor.width.saturating_sub(x_offset * 2),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

/// Columns needed to show the widest line plus `padding`, within `[min, max]`
///
/// `max` wins when the two bounds conflict.
pub fn content_width<'a, I>(lines: I, padding: u16, min: u16, max: u16) -> u16
where
    I: IntoIterator<Item = &'a str>,
{
    let widest = lines
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest).unwrap_or(u16::MAX);
    width.saturating_add(padding).max(min).min(max)
}

/// Cut `text` to at most `max_width` display columns, marking the cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
