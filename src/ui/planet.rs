use crate::app::animation::pulse_on;
use crate::app::state::AppState;
use crate::ui::glyphs::PLANET;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Duration;

/// Whether the planet shows its own colors this frame. It stays tinted gray
/// except during the "on" half of each pulse while the countdown is visible.
pub fn is_lit(state: &AppState) -> bool {
    if !state.session.countdown_visible {
        return false;
    }
    let Some(elapsed) = state.since(state.countdown_changed_at) else {
        return false;
    };
    pulse_on(
        elapsed,
        Duration::from_millis(state.config.animation.planet_period_ms),
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = Theme::planet(is_lit(state));
    let lines: Vec<Line> = PLANET.iter().map(|row| Line::styled(*row, style)).collect();
    frame.render_widget(Paragraph::new(lines), area);
}
