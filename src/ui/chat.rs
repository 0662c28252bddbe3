//! Chat transcript rendering.
//!
//! Messages are drawn as bubbles: user messages accented, assistant messages
//! neutral, error replies tinted with the error color. Message bodies go
//! through the plain-text formatter so `\n` becomes a line break and bullet
//! runs become grouped lists.

use eframe::egui::{self, RichText};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::{format_message, Segment};
use crate::state::{ChatMessage, ClientState, Role};
use crate::ui::theme::AppTheme;

/// Display name for non-error assistant messages.
pub const ASSISTANT_NAME: &str = "Medical AI Assistant";

/// Render the scrolling transcript area.
pub fn render_transcript(ui: &mut egui::Ui, state: &ClientState, theme: &AppTheme) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for msg in &state.transcript {
                render_message(ui, msg, theme);
                ui.add_space(6.0);
            }
            if state.sending {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.spinner();
                    ui.label(RichText::new("Thinking...").color(theme.text_muted));
                });
            }
            ui.add_space(8.0);
        });
}

fn render_message(ui: &mut egui::Ui, msg: &ChatMessage, theme: &AppTheme) {
    let fill = if msg.is_error {
        theme.error_bubble
    } else {
        match msg.role {
            Role::User => theme.user_bubble,
            Role::Bot => theme.bot_bubble,
        }
    };

    let bubble = egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .outer_margin(egui::Margin::symmetric(16, 0));

    bubble.show(ui, |ui| {
        ui.set_max_width(ui.available_width() - 32.0);

        match msg.role {
            Role::Bot if !msg.is_error => {
                ui.label(
                    RichText::new(ASSISTANT_NAME)
                        .strong()
                        .color(theme.accent),
                );
            }
            Role::User => {
                ui.label(RichText::new("You").strong().color(theme.text_secondary));
            }
            _ => {}
        }

        let text_color = if msg.is_error {
            theme.error
        } else {
            theme.text_primary
        };

        for segment in format_message(&msg.content) {
            match segment {
                Segment::Line(line) => render_line(ui, &line, text_color, theme),
                Segment::List(items) => {
                    for item in items {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            ui.add_space(12.0);
                            ui.label(RichText::new("• ").color(text_color));
                            render_line_inline(ui, &item, text_color, theme);
                        });
                    }
                }
            }
        }

        ui.label(
            RichText::new(&msg.timestamp)
                .size(11.0)
                .color(theme.text_muted),
        );
    });
}

/// Render one plain line, hyperlinking anything that looks like a URL.
fn render_line(ui: &mut egui::Ui, line: &str, color: egui::Color32, theme: &AppTheme) {
    if line.is_empty() {
        ui.add_space(6.0);
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        render_line_inline(ui, line, color, theme);
    });
}

fn render_line_inline(ui: &mut egui::Ui, line: &str, color: egui::Color32, theme: &AppTheme) {
    static URL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(https?://[^\s]+)").expect("URL regex pattern is valid"));

    for word in line.split_inclusive(char::is_whitespace) {
        if URL_RE.is_match(word.trim()) {
            let url = word.trim();
            ui.hyperlink_to(RichText::new(url).color(theme.info), url);
            if word.ends_with(char::is_whitespace) {
                ui.label(" ");
            }
        } else {
            ui.label(RichText::new(word).color(color));
        }
    }
}
