use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hint = match state.session.phase() {
        SessionPhase::Idle => "Enter: take off  q: quit",
        SessionPhase::Launching | SessionPhase::Counting => "q: quit",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", hint), Theme::status_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
