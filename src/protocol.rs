use crate::api::{HistoryEntry, PredictionReport};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Send a chat message to the assistant
    SendChat(String),
    /// Load the stored transcript for this session
    LoadHistory,
    /// Delete the stored transcript
    ClearHistory,
    /// Run the disease predictor over symptom names
    Predict(Vec<String>),
    /// Fetch the symptom catalog for the predictor dialog
    FetchSymptoms,
    /// Point the backend at a different server URL
    SetServer(String),
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The assistant replied to a chat message
    ChatReply(String),
    /// A chat request failed (transport or backend error)
    ChatFailed(String),
    /// The stored transcript was loaded
    HistoryLoaded(Vec<HistoryEntry>),
    /// History could not be loaded (logged, not shown inline)
    HistoryFailed(String),
    /// The stored transcript was deleted
    HistoryCleared,
    /// The clear request failed
    ClearFailed(String),
    /// A prediction request completed
    PredictionReady(PredictionReport),
    /// A prediction request failed
    PredictionFailed(String),
    /// The symptom catalog was loaded
    SymptomsLoaded(Vec<String>),
    /// The symptom catalog could not be loaded
    SymptomsFailed(String),
}
