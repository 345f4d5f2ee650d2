use crate::ui::glyphs;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct ScreenLayout {
    pub header: Rect,
    pub planet: Rect,
    pub button: Rect,
    pub star_top: Rect,
    pub star_left: Rect,
    pub countdown: Rect,
    pub star_right: Rect,
    pub star_bottom: Rect,
    pub status_bar: Rect,
}

const STAR_SIZE: u16 = 3;
const COUNTDOWN_WIDTH: u16 = 11; // three digits at most

pub fn compute_layout(area: Rect) -> ScreenLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                // Header
            Constraint::Length(1),                                // Gap
            Constraint::Length(glyphs::PLANET.len() as u16),      // Planet
            Constraint::Length(3),                                // Button
            Constraint::Length(1),                                // Gap
            Constraint::Length(STAR_SIZE),                        // Top star
            Constraint::Length(1),                                // Gap
            Constraint::Length(glyphs::DIGIT_HEIGHT as u16),      // Stars + countdown
            Constraint::Length(1),                                // Gap
            Constraint::Length(STAR_SIZE),                        // Bottom star
            Constraint::Min(0),
        ])
        .split(content);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([
            Constraint::Length(STAR_SIZE),
            Constraint::Length(COUNTDOWN_WIDTH),
            Constraint::Length(STAR_SIZE),
        ])
        .split(rows[7]);

    ScreenLayout {
        header: rows[0],
        planet: centered(rows[2], glyphs::PLANET[0].chars().count() as u16),
        button: rows[3],
        star_top: centered(rows[5], STAR_SIZE),
        star_left: vertically_centered(middle[0], STAR_SIZE),
        countdown: middle[1],
        star_right: vertically_centered(middle[2], STAR_SIZE),
        star_bottom: centered(rows[9], STAR_SIZE),
        status_bar,
    }
}

/// A `width`-wide slice from the middle of `area`.
pub fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_top_to_bottom() {
        let l = compute_layout(Rect::new(0, 0, 60, 40));
        assert_eq!(l.header.y, 0);
        assert!(l.planet.y > l.header.y);
        assert!(l.button.y >= l.planet.bottom());
        assert!(l.star_top.y >= l.button.bottom());
        assert!(l.countdown.y >= l.star_top.bottom());
        assert!(l.star_bottom.y >= l.countdown.bottom());
        assert_eq!(l.status_bar.y, 39);
        assert_eq!(l.status_bar.height, 1);
    }

    #[test]
    fn test_side_stars_flank_countdown() {
        let l = compute_layout(Rect::new(0, 0, 60, 40));
        assert!(l.star_left.right() <= l.countdown.x);
        assert!(l.star_right.x >= l.countdown.right());
        assert_eq!(l.star_left.height, 3);
        assert_eq!(l.star_top.width, 3);
    }

    #[test]
    fn test_centered() {
        let r = centered(Rect::new(10, 2, 20, 4), 6);
        assert_eq!(r, Rect::new(17, 2, 6, 4));
        assert_eq!(centered(Rect::new(0, 0, 4, 1), 10).width, 4);
    }
}
