//! Backend thread: async HTTP I/O against the assistant server.
//!
//! Runs a tokio runtime on a dedicated thread. Actions arrive over a
//! crossbeam channel from the UI; each action performs exactly one HTTP
//! request to completion (no cancellation, no retry) and emits exactly one
//! terminal event back to the UI. The UI enforces that at most one request
//! per action type is in flight by disabling the triggering control.

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::api::ApiClient;
use crate::protocol::{BackendAction, GuiEvent};

/// Run the backend loop until the action channel disconnects.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    server_url: String,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::ChatFailed(format!(
                "Failed to start network runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut client = ApiClient::new(server_url);

        // Blocking recv is fine here: every request runs to completion
        // before the next action is picked up.
        while let Ok(action) = action_rx.recv() {
            handle_action(&mut client, action, &event_tx).await;
        }
    });
}

async fn handle_action(
    client: &mut ApiClient,
    action: BackendAction,
    event_tx: &Sender<GuiEvent>,
) {
    match action {
        BackendAction::SendChat(message) => {
            let event = match client.send_chat(&message).await {
                Ok(text) => GuiEvent::ChatReply(text),
                Err(e) => GuiEvent::ChatFailed(e.to_string()),
            };
            let _ = event_tx.send(event);
        }

        BackendAction::LoadHistory => {
            let event = match client.history().await {
                Ok(history) => GuiEvent::HistoryLoaded(history),
                Err(e) => GuiEvent::HistoryFailed(e.to_string()),
            };
            let _ = event_tx.send(event);
        }

        BackendAction::ClearHistory => {
            let event = match client.clear_history().await {
                Ok(()) => GuiEvent::HistoryCleared,
                Err(e) => GuiEvent::ClearFailed(e.to_string()),
            };
            let _ = event_tx.send(event);
        }

        BackendAction::Predict(symptoms) => {
            let event = match client.predict(&symptoms).await {
                Ok(report) => GuiEvent::PredictionReady(report),
                Err(e) => GuiEvent::PredictionFailed(e.to_string()),
            };
            let _ = event_tx.send(event);
        }

        BackendAction::FetchSymptoms => {
            let event = match client.symptoms().await {
                Ok(symptoms) => GuiEvent::SymptomsLoaded(symptoms),
                Err(e) => GuiEvent::SymptomsFailed(e.to_string()),
            };
            let _ = event_tx.send(event);
        }

        BackendAction::SetServer(url) => {
            client.set_base_url(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    // Nothing listens on this port; requests fail fast with a transport
    // error, which is exactly the failure path under test.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn spawn_backend() -> (Sender<BackendAction>, Receiver<GuiEvent>) {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();
        std::thread::spawn(move || {
            run_backend(action_rx, event_tx, UNREACHABLE.into());
        });
        (action_tx, event_rx)
    }

    #[test]
    fn test_backend_thread_exits_when_channel_drops() {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, _event_rx) = unbounded::<GuiEvent>();

        let handle = std::thread::spawn(move || {
            run_backend(action_rx, event_tx, UNREACHABLE.into());
        });

        drop(action_tx);
        // recv() errors once the sender is gone and the loop ends.
        handle.join().expect("backend thread should exit cleanly");
    }

    #[test]
    fn test_failed_chat_emits_chat_failed() {
        let (action_tx, event_rx) = spawn_backend();
        action_tx
            .send(BackendAction::SendChat("hello".into()))
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(10)) {
            Ok(GuiEvent::ChatFailed(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected ChatFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_prediction_emits_prediction_failed() {
        let (action_tx, event_rx) = spawn_backend();
        action_tx
            .send(BackendAction::Predict(vec!["fever".into()]))
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(10)) {
            Ok(GuiEvent::PredictionFailed(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected PredictionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_clear_emits_clear_failed() {
        let (action_tx, event_rx) = spawn_backend();
        action_tx.send(BackendAction::ClearHistory).unwrap();

        match event_rx.recv_timeout(Duration::from_secs(10)) {
            Ok(GuiEvent::ClearFailed(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected ClearFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_actions_are_processed_in_order() {
        let (action_tx, event_rx) = spawn_backend();
        action_tx.send(BackendAction::LoadHistory).unwrap();
        action_tx
            .send(BackendAction::Predict(vec!["cough".into()]))
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(10)) {
            Ok(GuiEvent::HistoryFailed(_)) => {}
            other => panic!("Expected HistoryFailed first, got {:?}", other),
        }
        match event_rx.recv_timeout(Duration::from_secs(10)) {
            Ok(GuiEvent::PredictionFailed(_)) => {}
            other => panic!("Expected PredictionFailed second, got {:?}", other),
        }
    }
}
