//! Disease predictor dialog.
//!
//! A modal window owning its own input, in-flight flag, and results view.
//! The predict control is disabled while a request is in flight; every
//! failure path re-enables it. Results render as numbered prediction cards
//! with a confidence bar, severity badge, description, and precautions.

use crossbeam_channel::Sender;
use eframe::egui::{self, RichText};

use crate::api::PredictionReport;
use crate::protocol::BackendAction;
use crate::ui::theme::AppTheme;
use crate::validation;

/// What the results panel is currently showing.
#[derive(Debug, Clone, Default)]
enum ResultsView {
    /// Nothing requested yet
    #[default]
    Empty,
    /// A request is in flight
    Loading,
    /// The request failed with this message
    Error(String),
    /// The request completed
    Report(PredictionReport),
}

/// State of the known-symptoms reference list.
#[derive(Debug, Clone, Default)]
enum SymptomCatalog {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

/// Self-contained disease predictor dialog.
#[derive(Default)]
pub struct PredictorDialog {
    /// Whether the dialog is visible
    pub open: bool,
    /// Comma-separated symptom input
    pub symptoms_input: String,
    /// A prediction request is in flight
    pub predicting: bool,
    /// Inline hint shown for invalid input (blank symptom list)
    input_hint: Option<String>,
    results: ResultsView,
    catalog: SymptomCatalog,
    show_catalog: bool,
}

impl PredictorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog, fetching the symptom catalog on first use.
    pub fn show(&mut self, action_tx: &Sender<BackendAction>) {
        self.open = true;
        if matches!(self.catalog, SymptomCatalog::NotLoaded) {
            self.catalog = SymptomCatalog::Loading;
            let _ = action_tx.send(BackendAction::FetchSymptoms);
        }
    }

    /// A prediction request completed.
    pub fn prediction_ready(&mut self, report: PredictionReport) {
        self.predicting = false;
        self.results = ResultsView::Report(report);
    }

    /// A prediction request failed; the predict control is re-enabled.
    pub fn prediction_failed(&mut self, message: String) {
        self.predicting = false;
        self.results = ResultsView::Error(message);
    }

    pub fn symptoms_loaded(&mut self, symptoms: Vec<String>) {
        self.catalog = SymptomCatalog::Loaded(symptoms);
    }

    pub fn symptoms_failed(&mut self, message: String) {
        self.catalog = SymptomCatalog::Failed(message);
    }

    /// Render the dialog. Returns true if it is still open.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        theme: &AppTheme,
        action_tx: &Sender<BackendAction>,
    ) -> bool {
        if !self.open {
            return false;
        }

        let mut still_open = true;
        egui::Window::new("Disease Predictor")
            .open(&mut still_open)
            .resizable(true)
            .default_width(480.0)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Enter your symptoms separated by commas:")
                        .color(theme.text_secondary),
                );

                ui.add(
                    egui::TextEdit::multiline(&mut self.symptoms_input)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY)
                        .hint_text("e.g. fever, headache, joint pain"),
                );

                if let Some(hint) = &self.input_hint {
                    ui.colored_label(theme.warning, hint);
                }

                ui.horizontal(|ui| {
                    let predict_clicked = ui
                        .add_enabled(!self.predicting, egui::Button::new("Predict"))
                        .clicked();
                    if self.predicting {
                        ui.spinner();
                    }

                    if predict_clicked {
                        let symptoms = validation::parse_symptoms(&self.symptoms_input);
                        if symptoms.is_empty() {
                            self.input_hint = Some("Please enter symptoms".to_string());
                        } else {
                            self.input_hint = None;
                            self.predicting = true;
                            self.results = ResultsView::Loading;
                            let _ = action_tx.send(BackendAction::Predict(symptoms));
                        }
                    }
                });

                self.render_catalog(ui, theme);

                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(400.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        self.render_results(ui, theme);
                    });
            });

        if !still_open {
            self.open = false;
        }
        self.open
    }

    fn render_catalog(&mut self, ui: &mut egui::Ui, theme: &AppTheme) {
        match &self.catalog {
            SymptomCatalog::Loaded(symptoms) => {
                ui.checkbox(&mut self.show_catalog, "Show known symptoms");
                if self.show_catalog {
                    egui::ScrollArea::vertical()
                        .id_salt("symptom_catalog")
                        .max_height(100.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(symptoms.join(", "))
                                    .size(12.0)
                                    .color(theme.text_muted),
                            );
                        });
                }
            }
            SymptomCatalog::Failed(msg) => {
                ui.label(
                    RichText::new(format!("Symptom list unavailable: {}", msg))
                        .size(12.0)
                        .color(theme.text_muted),
                );
            }
            _ => {}
        }
    }

    fn render_results(&self, ui: &mut egui::Ui, theme: &AppTheme) {
        match &self.results {
            ResultsView::Empty => {}
            ResultsView::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.spinner();
                });
            }
            ResultsView::Error(message) => {
                render_error_panel(ui, theme, message);
            }
            ResultsView::Report(report) => {
                if report.predictions.is_empty() {
                    render_error_panel(
                        ui,
                        theme,
                        "No predictions found. Please check your symptoms and try again.",
                    );
                    return;
                }

                if !report.matched_symptoms.is_empty() {
                    egui::Frame::new()
                        .fill(theme.success.linear_multiply(0.15))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new("Matched Symptoms:").strong());
                                ui.label(report.matched_symptoms.join(", "));
                            });
                        });
                    ui.add_space(6.0);
                }

                for (index, pred) in report.predictions.iter().enumerate() {
                    egui::Frame::new()
                        .fill(theme.panel_bg)
                        .stroke(egui::Stroke::new(1.0, theme.border_medium))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.heading(format!("{}. {}", index + 1, pred.disease));

                            ui.label(RichText::new("Confidence:").strong());
                            ui.add(
                                egui::ProgressBar::new((pred.confidence / 100.0) as f32)
                                    .text(format!("{:.1}%", pred.confidence)),
                            );

                            ui.horizontal(|ui| {
                                ui.label(RichText::new("Severity:").strong());
                                ui.label(
                                    RichText::new(format!(
                                        "{} ({})",
                                        pred.severity_level, pred.severity_score
                                    ))
                                    .color(theme.severity_color(&pred.severity_level))
                                    .strong(),
                                );
                            });

                            ui.label(RichText::new("Description:").strong());
                            ui.label(&pred.description);

                            if !pred.precautions.is_empty() {
                                ui.label(RichText::new("Recommended Precautions:").strong());
                                for (i, precaution) in pred.precautions.iter().enumerate() {
                                    ui.horizontal_wrapped(|ui| {
                                        ui.add_space(8.0);
                                        ui.label(format!("{}. {}", i + 1, precaution));
                                    });
                                }
                            }
                        });
                    ui.add_space(8.0);
                }

                egui::Frame::new()
                    .fill(theme.warning.linear_multiply(0.15))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("⚠ Important:").strong());
                            ui.label(
                                "This prediction is for informational purposes only. \
                                 Please consult a qualified healthcare professional for \
                                 proper diagnosis and treatment.",
                            );
                        });
                    });
            }
        }
    }
}

fn render_error_panel(ui: &mut egui::Ui, theme: &AppTheme, message: &str) {
    egui::Frame::new()
        .fill(theme.error_bubble)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Error:").strong().color(theme.error));
                ui.label(RichText::new(message).color(theme.error));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PredictionResult;

    fn sample_report() -> PredictionReport {
        PredictionReport {
            matched_symptoms: vec!["fever".into()],
            predictions: vec![PredictionResult {
                disease: "Flu".into(),
                confidence: 80.0,
                severity_level: "Moderate".into(),
                severity_score: 2.5,
                description: "Influenza.".into(),
                precautions: vec!["rest".into()],
            }],
        }
    }

    #[test]
    fn test_dialog_starts_closed_and_idle() {
        let dialog = PredictorDialog::new();
        assert!(!dialog.open);
        assert!(!dialog.predicting);
        assert!(matches!(dialog.results, ResultsView::Empty));
    }

    #[test]
    fn test_prediction_ready_re_enables_predict() {
        let mut dialog = PredictorDialog::new();
        dialog.predicting = true;
        dialog.results = ResultsView::Loading;

        dialog.prediction_ready(sample_report());
        assert!(!dialog.predicting);
        assert!(matches!(dialog.results, ResultsView::Report(_)));
    }

    #[test]
    fn test_prediction_failed_re_enables_predict_and_keeps_message() {
        let mut dialog = PredictorDialog::new();
        dialog.predicting = true;
        dialog.results = ResultsView::Loading;

        dialog.prediction_failed("connection refused".into());
        assert!(!dialog.predicting);
        match &dialog.results {
            ResultsView::Error(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("Expected Error view, got {:?}", other),
        }
    }

    #[test]
    fn test_symptom_catalog_transitions() {
        let mut dialog = PredictorDialog::new();
        assert!(matches!(dialog.catalog, SymptomCatalog::NotLoaded));

        dialog.symptoms_loaded(vec!["fever".into(), "chills".into()]);
        match &dialog.catalog {
            SymptomCatalog::Loaded(list) => assert_eq!(list.len(), 2),
            other => panic!("Expected Loaded, got {:?}", other),
        }

        dialog.symptoms_failed("boom".into());
        assert!(matches!(dialog.catalog, SymptomCatalog::Failed(_)));
    }
}
