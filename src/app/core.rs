//! Core MedAssistApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::config::{load_settings, Settings};
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::ui::predictor::PredictorDialog;
use crate::ui::theme::{self, AppTheme};

pub struct MedAssistApp {
    // Core state (transcript, in-flight flags, toasts)
    pub state: ClientState,

    // Persisted settings (server URL, theme)
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Form inputs
    pub message_input: String,
    pub server_input: String,

    // Dialogs
    pub predictor: PredictorDialog,
    pub confirm_clear: bool,
}

impl MedAssistApp {
    /// Get the current theme based on the settings theme string.
    pub(super) fn get_theme(&self) -> AppTheme {
        match self.settings.theme.as_str() {
            "light" => AppTheme::light(),
            _ => AppTheme::dark(),
        }
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();

        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        let server_url = settings.server_url.clone();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, server_url);
        });

        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }
        theme::apply_app_style(&cc.egui_ctx);

        // Load the stored transcript on startup (page-load behavior).
        let _ = action_tx.send(BackendAction::LoadHistory);

        let server_input = settings.server_url.clone();

        Self {
            state: ClientState::new(),
            settings,
            action_tx,
            event_rx,
            message_input: String::new(),
            server_input,
            predictor: PredictorDialog::new(),
            confirm_clear: false,
        }
    }
}
