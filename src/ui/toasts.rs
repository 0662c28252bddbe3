//! Status toast notifications - floating messages in top-right corner.
//!
//! Toasts carry a [`StatusKind`] so confirmations ("Chat history cleared")
//! and failures ("Failed to clear history: ...") are colored differently,
//! following the active palette.

use eframe::egui::{self, Color32, RichText};
use std::time::Instant;

use crate::state::StatusKind;
use crate::ui::theme::AppTheme;

/// Render floating status toasts below the toolbar.
pub fn render_status_toasts(
    ctx: &egui::Context,
    status_messages: &[(String, StatusKind, Instant)],
    theme: &AppTheme,
) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.panel_bg)
                .stroke(egui::Stroke::new(1.0, theme.border_medium))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, kind, _) in status_messages {
                        ui.label(RichText::new(msg).color(toast_color(*kind, theme)));
                    }
                });
        });
}

fn toast_color(kind: StatusKind, theme: &AppTheme) -> Color32 {
    match kind {
        StatusKind::Info => theme.success,
        StatusKind::Error => theme.error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_colors_follow_palette() {
        for theme in [AppTheme::dark(), AppTheme::light()] {
            assert_eq!(toast_color(StatusKind::Info, &theme), theme.success);
            assert_eq!(toast_color(StatusKind::Error, &theme), theme.error);
        }
    }
}
