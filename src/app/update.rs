//! Main update loop.

use eframe::egui;
use std::time::Duration;

use crate::config::save_settings;
use crate::protocol::BackendAction;
use crate::state::ChatMessage;
use crate::ui;
use crate::ui::toolbar::ToolbarAction;
use crate::validation;

use super::MedAssistApp;

impl eframe::App for MedAssistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process network events
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));

        // Purge status toasts older than 4 seconds
        self.state.purge_old_status_messages(4);

        let theme = self.get_theme();

        // Top toolbar
        if let Some(action) =
            ui::toolbar::render_toolbar(ctx, &mut self.server_input, self.state.clearing, &theme)
        {
            self.handle_toolbar_action(ctx, action);
        }

        // Bottom input panel
        if let Some(message) =
            ui::input::render_input_panel(ctx, &mut self.message_input, self.state.sending, &theme)
        {
            self.state.push_message(ChatMessage::user(message.clone()));
            self.state.sending = true;
            let _ = self.action_tx.send(BackendAction::SendChat(message));
        }

        // Central transcript
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.app_bg))
            .show(ctx, |ui| {
                ui::chat::render_transcript(ui, &self.state, &theme);
            });

        // Dialogs and overlays
        self.predictor.render(ctx, &theme, &self.action_tx);
        self.render_clear_confirmation(ctx, &theme);
        ui::toasts::render_status_toasts(ctx, &self.state.status_messages, &theme);
    }
}

impl MedAssistApp {
    fn handle_toolbar_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::OpenPredictor => {
                self.predictor.show(&self.action_tx);
            }

            ToolbarAction::RequestClearHistory => {
                self.confirm_clear = true;
            }

            ToolbarAction::ApplyServer => match validation::validate_server_url(&self.server_input)
            {
                Ok(()) => {
                    let url = self.server_input.trim().to_string();
                    self.settings.server_url = url.clone();
                    if let Err(e) = save_settings(&self.settings) {
                        self.state.log_system(format!("Failed to save settings: {}", e));
                    }
                    let _ = self.action_tx.send(BackendAction::SetServer(url));
                    self.state.push_status("Server URL updated");
                }
                Err(msg) => {
                    self.state.push_error_status(msg);
                }
            },

            ToolbarAction::ToggleTheme => {
                self.settings.theme = if self.settings.theme == "light" {
                    "dark".into()
                } else {
                    "light".into()
                };
                match self.settings.theme.as_str() {
                    "light" => ctx.set_visuals(egui::Visuals::light()),
                    _ => ctx.set_visuals(egui::Visuals::dark()),
                }
                if let Err(e) = save_settings(&self.settings) {
                    self.state.log_system(format!("Failed to save settings: {}", e));
                }
            }
        }
    }

    /// Confirmation dialog shown before clearing the stored history.
    fn render_clear_confirmation(&mut self, ctx: &egui::Context, theme: &crate::ui::theme::AppTheme) {
        if !self.confirm_clear {
            return;
        }

        egui::Window::new("Clear chat history?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("This removes the stored conversation for this session.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("Clear").color(theme.error))
                        .clicked()
                    {
                        self.confirm_clear = false;
                        self.state.clearing = true;
                        let _ = self.action_tx.send(BackendAction::ClearHistory);
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_clear = false;
                    }
                });
            });
    }
}
