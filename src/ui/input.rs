//! Message input panel at the bottom of the window.

use eframe::egui;

use crate::ui::theme::AppTheme;

/// Render the input panel. Returns the trimmed message when the user
/// submitted one; blank or whitespace-only input submits nothing.
///
/// The send control is disabled while a chat request is in flight, so at
/// most one request is outstanding at a time.
pub fn render_input_panel(
    ctx: &egui::Context,
    message_input: &mut String,
    sending: bool,
    theme: &AppTheme,
) -> Option<String> {
    let mut submitted = None;

    egui::TopBottomPanel::bottom("input_panel")
        .frame(
            egui::Frame::new()
                .fill(theme.panel_bg)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .stroke(egui::Stroke::new(1.0, theme.border_medium)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add_enabled(
                    !sending,
                    egui::TextEdit::multiline(message_input)
                        .desired_rows(1)
                        .desired_width(ui.available_width() - 70.0)
                        .hint_text("Describe your symptoms or ask a question..."),
                );

                // Enter sends; Shift+Enter inserts a newline in the
                // multiline edit by default.
                let enter_pressed = response.has_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

                let send_clicked = ui
                    .add_enabled(!sending, egui::Button::new("Send"))
                    .clicked();

                if (send_clicked || enter_pressed) && !sending {
                    submitted = take_submission(message_input);
                    message_input.clear();
                    response.request_focus();
                }
            });
        });

    submitted
}

/// Decide what (if anything) to submit for the current input. Blank or
/// whitespace-only input performs no request and adds no message.
fn take_submission(input: &str) -> Option<String> {
    let message = input.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_submits_nothing() {
        assert_eq!(take_submission(""), None);
        assert_eq!(take_submission("   \n\t "), None);
    }

    #[test]
    fn test_input_is_trimmed_before_submit() {
        assert_eq!(
            take_submission("  I have a headache \n"),
            Some("I have a headache".to_string())
        );
    }
}
