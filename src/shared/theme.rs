//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused panel.
    pub focus_border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Country outline color.
    pub country: Color,
    /// Municipality outline color.
    pub municipality: Color,
    /// Municipality fill color.
    pub municipality_fill: Color,
    /// Active toggle background (the "success" button).
    pub toggle_on: Color,
    /// Inactive toggle background.
    pub toggle_off: Color,
    /// Map cursor color.
    pub cursor: Color,
    /// Marker colors, indexed by priority rank.
    pub markers: [Color; 4],
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                focus_border: Color::Rgb(250, 189, 47),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                country: Color::Rgb(251, 73, 52),
                municipality: Color::Rgb(152, 151, 26),
                municipality_fill: Color::Rgb(69, 133, 136),
                toggle_on: Color::Rgb(152, 151, 26),
                toggle_off: Color::Rgb(80, 73, 69),
                cursor: Color::Rgb(235, 219, 178),
                markers: [
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(250, 189, 47),
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(211, 134, 155),
                ],
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                focus_border: Color::Rgb(181, 118, 20),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                country: Color::Rgb(157, 0, 6),
                municipality: Color::Rgb(121, 116, 14),
                municipality_fill: Color::Rgb(180, 200, 210),
                toggle_on: Color::Rgb(121, 116, 14),
                toggle_off: Color::Rgb(213, 196, 161),
                cursor: Color::Rgb(60, 56, 54),
                markers: [
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(181, 118, 20),
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(143, 63, 113),
                ],
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Marker color for the priority at `rank` in toggle order.
    pub fn marker(&self, rank: usize) -> Color {
        self.markers[rank.min(self.markers.len() - 1)]
    }
}
