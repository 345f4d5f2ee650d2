use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let level = state.button_level();
    if level <= 0.0 {
        return;
    }

    let label = state.config.ui.button_label.as_str();
    let width = u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let area = centered(area, width);
    let style = Theme::button(level);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .style(style);

    let paragraph = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
