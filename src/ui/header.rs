use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled("✦ ", Theme::star()),
        Span::styled(state.config.ui.title.as_str(), Theme::title()),
        Span::styled(" ✦", Theme::star()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
