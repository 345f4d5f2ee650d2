use crate::app::state::AppState;
use crate::ui::glyphs::big_number;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let level = state.countdown_level();
    if level <= 0.0 {
        return;
    }
    let style = Theme::countdown(level);
    let lines: Vec<Line> = big_number(state.session.remaining_seconds)
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
