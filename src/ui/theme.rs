use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 18, 30);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 40, 56);
    pub const TEXT_PRIMARY: Color = Color::Rgb(232, 232, 240);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 140);
    pub const ACCENT_TEAL: Color = Color::Rgb(3, 218, 197);
    pub const STAR_GOLD: Color = Color::Rgb(255, 214, 102);
    pub const PLANET_LIT: Color = Color::Rgb(137, 180, 250);
    pub const PLANET_TINT: Color = Color::Rgb(128, 128, 128);

    pub fn screen() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn planet(lit: bool) -> Style {
        Style::default().fg(if lit { Self::PLANET_LIT } else { Self::PLANET_TINT })
    }

    pub fn star() -> Style {
        Style::default().fg(Self::STAR_GOLD)
    }

    pub fn star_faded(level: f32) -> Style {
        Style::default().fg(fade(Self::STAR_GOLD, level))
    }

    pub fn countdown(level: f32) -> Style {
        Style::default()
            .fg(fade(Self::TEXT_PRIMARY, level))
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(level: f32) -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(fade(Self::ACCENT_TEAL, level))
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }
}

/// Blend an RGB color toward the background. `level` 1.0 is the color
/// itself, 0.0 is the background. Non-RGB colors are returned unchanged.
pub fn fade(color: Color, level: f32) -> Color {
    let level = level.clamp(0.0, 1.0);
    match (color, Theme::BG) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(br, r, level),
            mix(bg, g, level),
            mix(bb, b, level),
        ),
        _ => color,
    }
}

fn mix(from: u8, to: u8, level: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * level).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(Theme::STAR_GOLD, 1.0), Theme::STAR_GOLD);
        assert_eq!(fade(Theme::STAR_GOLD, 0.0), Theme::BG);
        assert_eq!(fade(Theme::STAR_GOLD, 3.0), Theme::STAR_GOLD);
        assert_eq!(fade(Color::Red, 0.2), Color::Red);
    }

    #[test]
    fn test_fade_midpoint() {
        assert_eq!(
            fade(Color::Rgb(218, 218, 230), 0.5),
            Color::Rgb(118, 118, 130)
        );
    }
}
