//! MedAssist Client - a desktop client for a medical chat assistant and
//! symptom-based disease predictor backend.
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for HTTP I/O
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use medassist_client::app::MedAssistApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MedAssist - Medical AI Assistant",
        options,
        Box::new(|cc| Ok(Box::new(MedAssistApp::new(cc)))),
    )
}
