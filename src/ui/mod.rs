mod countdown;
mod glyphs;
mod header;
mod launch_button;
mod layout;
mod planet;
mod stars;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::screen()), area);

    let screen = layout::compute_layout(area);
    let [top, left, right, bottom] = state.config.animation.star_periods_ms;

    header::render(frame, screen.header, state);
    planet::render(frame, screen.planet, state);
    launch_button::render(frame, screen.button, state);
    stars::render(frame, screen.star_top, state, top);
    stars::render(frame, screen.star_left, state, left);
    countdown::render(frame, screen.countdown, state);
    stars::render(frame, screen.star_right, state, right);
    stars::render(frame, screen.star_bottom, state, bottom);
    status_bar::render(frame, screen.status_bar, state);
}
