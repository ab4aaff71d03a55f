use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (channel as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Move an RGB color towards white by `factor` (0.0..=1.0).
pub fn lighten_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (channel as f32 + (255.0 - channel as f32) * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let style = Style::default().bg(surface).fg(text);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        selection_fg,
        ..
    } = *theme.roles();
    if selected {
        Style::default().fg(selection_fg).bg(selection_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent_secondary)
    }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_subtle, background, ..
    } = *theme.roles();
    Style::default().bg(accent_subtle).fg(background).add_modifier(Modifier::BOLD)
}

/// Renders a single-line button. Focus draws the border, selection fills it.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, is_selected: bool, theme: &T) {
    let borders = if is_focused { Borders::ALL } else { Borders::NONE };
    let block = Block::default()
        .borders(borders)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(is_focused));
    let inner = if is_focused { area } else { vertically_centered(area) };
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(block)
            .style(button_secondary_style(theme, is_selected)),
        inner,
    );
}

fn vertically_centered(area: Rect) -> Rect {
    if area.height <= 1 {
        return area;
    }
    Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    }
}

/// Builds `key description` pairs for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
