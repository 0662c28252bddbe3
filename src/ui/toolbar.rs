//! Top toolbar rendering with server and session controls.

use eframe::egui::{self, RichText};

use crate::ui::theme::AppTheme;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// User clicked the predictor button
    OpenPredictor,
    /// User asked to clear the chat history (needs confirmation)
    RequestClearHistory,
    /// User applied a new server URL
    ApplyServer,
    /// User toggled dark/light theme
    ToggleTheme,
}

/// Render the top toolbar. Returns Some(ToolbarAction) if an action was
/// requested.
pub fn render_toolbar(
    ctx: &egui::Context,
    server_input: &mut String,
    clearing: bool,
    theme: &AppTheme,
) -> Option<ToolbarAction> {
    let mut toolbar_action: Option<ToolbarAction> = None;

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::new()
                .fill(theme.panel_bg)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                ui.label(
                    RichText::new("MedAssist")
                        .strong()
                        .size(16.0)
                        .color(theme.accent),
                );

                ui.separator();

                if ui.button("🩺 Disease Predictor").clicked() {
                    toolbar_action = Some(ToolbarAction::OpenPredictor);
                }

                if ui
                    .add_enabled(!clearing, egui::Button::new("🗑 Clear History"))
                    .clicked()
                {
                    toolbar_action = Some(ToolbarAction::RequestClearHistory);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🌓").on_hover_text("Toggle theme").clicked() {
                        toolbar_action = Some(ToolbarAction::ToggleTheme);
                    }

                    if ui.button("Apply").clicked() {
                        toolbar_action = Some(ToolbarAction::ApplyServer);
                    }

                    let response = ui.add(
                        egui::TextEdit::singleline(server_input)
                            .hint_text("http://127.0.0.1:5000")
                            .desired_width(200.0),
                    );
                    if response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        toolbar_action = Some(ToolbarAction::ApplyServer);
                    }

                    ui.label(RichText::new("Server:").color(theme.text_muted));
                });
            });
        });

    toolbar_action
}
