//! Layout and hit-testing helpers shared by the components.

use ratatui::layout::{Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Index of the area under `(x, y)`, provided the point is also inside the
/// component's `container` area.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    areas.iter().position(|area| area.contains(position))
}

/// Entry index under `position` in a one-line-per-entry list scrolled by
/// `offset`.
pub fn hover_index_for_position(list_area: Rect, position: Position, offset: usize, entry_len: usize) -> Option<usize> {
    if !list_area.contains(position) {
        return None;
    }
    let relative_row = position.y.saturating_sub(list_area.y) as usize;
    let index = relative_row + offset;
    if index < entry_len { Some(index) } else { None }
}

/// Shortens `text` to at most `max_width` display columns, marking the cut
/// with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for character in text.chars() {
        let width = character.width().unwrap_or(0);
        if used + width + 1 > max_width {
            break;
        }
        truncated.push(character);
        used += width;
    }
    truncated.push('…');
    truncated
}

/// First scroll offset that keeps `selected` inside a window of `height`
/// entries, moving as little as possible from `current`.
pub fn scroll_offset_for(selected: usize, current: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    if selected < current {
        selected
    } else if selected >= current + height {
        selected + 1 - height
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_index_returns_none_outside_list_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(hover_index_for_position(area, Position::new(20, 2), 0, 10), None);
    }

    #[test]
    fn hover_index_accounts_for_scroll_offset() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(hover_index_for_position(area, Position::new(1, 3), 4, 10), Some(7));
        assert_eq!(hover_index_for_position(area, Position::new(1, 4), 4, 5), None);
    }

    #[test]
    fn target_index_requires_the_container() {
        let container = Rect::new(0, 0, 30, 3);
        let areas = [Rect::new(0, 0, 10, 3), Rect::new(10, 0, 10, 3)];
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 12, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 25, 1), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 12, 5), None);
    }

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(truncate_to_width("Getting Started", 20), "Getting Started");
        assert_eq!(truncate_to_width("Getting Started", 8), "Getting…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn scroll_offset_follows_selection() {
        assert_eq!(scroll_offset_for(2, 0, 5), 0);
        assert_eq!(scroll_offset_for(7, 0, 5), 3);
        assert_eq!(scroll_offset_for(1, 3, 5), 1);
    }
}
