//! Backend event processing (chat replies, history, predictions).

use crate::protocol::GuiEvent;
use crate::state::{ChatMessage, ClientState};
use crate::ui::predictor::PredictorDialog;

use super::MedAssistApp;

impl MedAssistApp {
    /// Drain all pending events from the backend into application state.
    pub(super) fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            apply_event(event, &mut self.state, &mut self.predictor);
        }
    }
}

/// Apply one backend event to client state and the predictor dialog.
///
/// Every failure path leaves the UI interactive: the in-flight flag of the
/// affected control is cleared before the error is surfaced.
pub fn apply_event(event: GuiEvent, state: &mut ClientState, predictor: &mut PredictorDialog) {
    match event {
        GuiEvent::ChatReply(text) => {
            state.sending = false;
            state.push_message(ChatMessage::bot(text));
        }

        GuiEvent::ChatFailed(msg) => {
            state.sending = false;
            state.push_message(ChatMessage::error(format!("Error: {}", msg)));
        }

        GuiEvent::HistoryLoaded(history) => {
            if history.is_empty() {
                return;
            }
            // Replace everything but the welcome message. Replayed entries
            // bypass push_message so they are not re-logged.
            state.reset_transcript();
            for entry in history {
                let msg = if entry.role == "user" {
                    ChatMessage::user(entry.content)
                } else {
                    ChatMessage::bot(entry.content)
                };
                state.transcript.push(msg);
            }
        }

        GuiEvent::HistoryFailed(msg) => {
            state.log_system(format!("Failed to load chat history: {}", msg));
        }

        GuiEvent::HistoryCleared => {
            state.clearing = false;
            state.reset_transcript();
            state.push_status("Chat history cleared");
        }

        GuiEvent::ClearFailed(msg) => {
            state.clearing = false;
            state.push_error_status(format!("Failed to clear history: {}", msg));
            state.log_system(format!("Failed to clear history: {}", msg));
        }

        GuiEvent::PredictionReady(report) => {
            predictor.prediction_ready(report);
        }

        GuiEvent::PredictionFailed(msg) => {
            predictor.prediction_failed(msg);
        }

        GuiEvent::SymptomsLoaded(symptoms) => {
            predictor.symptoms_loaded(symptoms);
        }

        GuiEvent::SymptomsFailed(msg) => {
            predictor.symptoms_failed(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HistoryEntry;
    use crate::state::{Role, StatusKind};

    fn fixtures() -> (ClientState, PredictorDialog) {
        let mut state = ClientState::new();
        state.logger = None;
        (state, PredictorDialog::new())
    }

    #[test]
    fn test_chat_failed_re_enables_send_and_marks_error() {
        let (mut state, mut predictor) = fixtures();
        state.sending = true;

        apply_event(
            GuiEvent::ChatFailed("connection refused".into()),
            &mut state,
            &mut predictor,
        );

        assert!(!state.sending);
        let last = state.transcript.last().unwrap();
        assert_eq!(last.role, Role::Bot);
        assert!(last.is_error);
        assert!(last.content.contains("connection refused"));
    }

    #[test]
    fn test_chat_reply_re_enables_send() {
        let (mut state, mut predictor) = fixtures();
        state.sending = true;

        apply_event(
            GuiEvent::ChatReply("Take plenty of rest.".into()),
            &mut state,
            &mut predictor,
        );

        assert!(!state.sending);
        let last = state.transcript.last().unwrap();
        assert_eq!(last.content, "Take plenty of rest.");
        assert!(!last.is_error);
    }

    #[test]
    fn test_history_loaded_replaces_transcript() {
        let (mut state, mut predictor) = fixtures();
        state.push_message(ChatMessage::user("old"));

        apply_event(
            GuiEvent::HistoryLoaded(vec![
                HistoryEntry {
                    role: "user".into(),
                    content: "hi".into(),
                },
                HistoryEntry {
                    role: "assistant".into(),
                    content: "hello".into(),
                },
            ]),
            &mut state,
            &mut predictor,
        );

        // Welcome message plus the two replayed entries
        assert_eq!(state.transcript.len(), 3);
        assert_eq!(state.transcript[1].role, Role::User);
        assert_eq!(state.transcript[2].role, Role::Bot);
    }

    #[test]
    fn test_clear_failed_re_enables_clear_with_error_toast() {
        let (mut state, mut predictor) = fixtures();
        state.clearing = true;

        apply_event(
            GuiEvent::ClearFailed("boom".into()),
            &mut state,
            &mut predictor,
        );

        assert!(!state.clearing);
        let (text, kind, _) = state.status_messages.last().unwrap();
        assert!(text.contains("boom"));
        assert_eq!(*kind, StatusKind::Error);
    }

    #[test]
    fn test_prediction_failed_reaches_dialog() {
        let (mut state, mut predictor) = fixtures();
        predictor.predicting = true;

        apply_event(
            GuiEvent::PredictionFailed("no route to host".into()),
            &mut state,
            &mut predictor,
        );

        assert!(!predictor.predicting);
    }
}
