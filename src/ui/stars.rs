use crate::app::animation::pulse_on;
use crate::app::state::AppState;
use crate::ui::glyphs::{STAR_LARGE, STAR_SMALL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Duration;

/// Glyph for a star pulsing with `period_ms`: large during the first half of
/// each period while animating, small otherwise.
pub fn glyph(state: &AppState, period_ms: u64) -> &'static [&'static str; 3] {
    match state.animation_elapsed() {
        Some(elapsed) if pulse_on(elapsed, Duration::from_millis(period_ms)) => &STAR_LARGE,
        _ => &STAR_SMALL,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, period_ms: u64) {
    let level = state.stars_level();
    if level <= 0.0 {
        return;
    }
    let style = Theme::star_faded(level);
    let lines: Vec<Line> = glyph(state, period_ms)
        .iter()
        .map(|row| Line::styled(*row, style))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
