//! Color themes and styling utilities for the assistant client.
//!
//! Two semantic palettes (dark-first, light inverted) plus the severity
//! color mapping used by the predictor's result cards.

use eframe::egui::{self, Color32};

/// Semantic color palette for the application.
#[derive(Clone, Debug)]
pub struct AppTheme {
    pub name: String,
    /// App background (deepest layer)
    pub app_bg: Color32,
    /// Panel backgrounds (toolbar, input bar)
    pub panel_bg: Color32,
    /// Chat bubble backgrounds
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub error_bubble: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            app_bg: Color32::from_rgb(30, 31, 34),
            panel_bg: Color32::from_rgb(43, 45, 49),
            user_bubble: Color32::from_rgb(59, 66, 97),
            bot_bubble: Color32::from_rgb(49, 51, 56),
            error_bubble: Color32::from_rgb(74, 42, 42),
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(87, 180, 110),
            warning: Color32::from_rgb(230, 168, 60),
            error: Color32::from_rgb(220, 90, 90),
            info: Color32::from_rgb(95, 160, 235),
            text_primary: Color32::from_rgb(232, 233, 235),
            text_secondary: Color32::from_rgb(181, 186, 193),
            text_muted: Color32::from_rgb(148, 155, 164),
            border_medium: Color32::from_rgb(60, 63, 69),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".into(),
            app_bg: Color32::from_rgb(245, 246, 248),
            panel_bg: Color32::from_rgb(255, 255, 255),
            user_bubble: Color32::from_rgb(219, 228, 255),
            bot_bubble: Color32::from_rgb(235, 236, 239),
            error_bubble: Color32::from_rgb(250, 225, 225),
            accent: Color32::from_rgb(71, 82, 196),
            success: Color32::from_rgb(46, 125, 70),
            warning: Color32::from_rgb(176, 118, 20),
            error: Color32::from_rgb(185, 50, 50),
            info: Color32::from_rgb(40, 110, 190),
            text_primary: Color32::from_rgb(35, 36, 40),
            text_secondary: Color32::from_rgb(75, 78, 85),
            text_muted: Color32::from_rgb(120, 124, 130),
            border_medium: Color32::from_rgb(215, 218, 223),
        }
    }

    /// Badge color for a backend severity level.
    pub fn severity_color(&self, level: &str) -> Color32 {
        match level {
            "Mild" => self.success,
            "Moderate" => self.warning,
            "Severe" => Color32::from_rgb(235, 120, 55),
            "Critical" => self.error,
            _ => self.text_muted,
        }
    }
}

/// Apply application-wide spacing and shape styling.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors_are_distinct() {
        let theme = AppTheme::dark();
        let levels = ["Mild", "Moderate", "Severe", "Critical"];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(theme.severity_color(a), theme.severity_color(b));
            }
        }
    }

    #[test]
    fn test_unknown_severity_falls_back_to_muted() {
        let theme = AppTheme::light();
        assert_eq!(theme.severity_color("Unheard Of"), theme.text_muted);
    }
}
