//! Core application state, separated from UI logic.
//!
//! `ClientState` holds all data that represents the chat session:
//! the transcript, in-flight request flags, system log, status toasts.
//! UI components receive state as a parameter rather than owning it.

use std::time::Instant;

use chrono::Local;

use crate::logging::{LogEntry, Logger};

/// Maximum messages to keep in the transcript before trimming
const MAX_TRANSCRIPT_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const TRANSCRIPT_TRIM_COUNT: usize = 500;

/// Greeting shown at the start of every session and after a clear.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Medical AI Assistant. \
Describe your symptoms or ask a health question, and I'll do my best to \
help. For a structured symptom check, open the Disease Predictor.";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A rendered chat message. Created on send/receive, never mutated after.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Local display time, e.g. "14:03:27".
    pub timestamp: String,
    /// Error replies get error styling instead of the assistant header.
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: display_time(),
            is_error: false,
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            timestamp: display_time(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            timestamp: display_time(),
            is_error: true,
        }
    }
}

fn display_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Kind of a status toast, used to pick its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Core application state for the assistant client.
pub struct ClientState {
    /// Append-only transcript of the current session (index 0 is the
    /// welcome message).
    pub transcript: Vec<ChatMessage>,

    /// A chat request is in flight; the send control is disabled.
    pub sending: bool,

    /// A clear request is in flight; the clear control is disabled.
    pub clearing: bool,

    /// Diagnostic log lines (history load failures and the like).
    pub system_log: Vec<String>,

    /// Status toast messages with kind and creation time (auto-expire).
    pub status_messages: Vec<(String, StatusKind, Instant)>,

    /// Transcript logger for persisting messages to disk.
    pub logger: Option<Logger>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            sending: false,
            clearing: false,
            system_log: Vec::new(),
            status_messages: Vec::new(),
            logger: Logger::new().ok(),
        }
    }

    /// Append a message to the transcript, log it, and trim if needed.
    pub fn push_message(&mut self, msg: ChatMessage) {
        if let Some(logger) = &self.logger {
            logger.log(LogEntry {
                timestamp: msg.timestamp.clone(),
                role: match msg.role {
                    Role::User => "user".into(),
                    Role::Bot => "assistant".into(),
                },
                content: msg.content.clone(),
            });
        }
        self.transcript.push(msg);

        if self.transcript.len() > MAX_TRANSCRIPT_MESSAGES {
            self.transcript.drain(1..1 + TRANSCRIPT_TRIM_COUNT);
        }
    }

    /// Reset the transcript to just the welcome message.
    pub fn reset_transcript(&mut self) {
        self.transcript.truncate(1);
    }

    /// Log a diagnostic line with a timestamp.
    pub fn log_system(&mut self, line: impl Into<String>) {
        self.system_log
            .push(format!("[{}] {}", display_time(), line.into()));
        if self.system_log.len() > 500 {
            self.system_log.remove(0);
        }
    }

    /// Show a short-lived status toast.
    pub fn push_status(&mut self, text: impl Into<String>) {
        self.status_messages
            .push((text.into(), StatusKind::Info, Instant::now()));
    }

    /// Show a short-lived error toast.
    pub fn push_error_status(&mut self, text: impl Into<String>) {
        self.status_messages
            .push((text.into(), StatusKind::Error, Instant::now()));
    }

    /// Drop status toasts older than `max_age_secs`.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, _, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_with_welcome() {
        let state = ClientState::new();
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].role, Role::Bot);
        assert!(!state.transcript[0].is_error);
        assert!(!state.sending);
    }

    #[test]
    fn test_reset_transcript_keeps_welcome() {
        let mut state = ClientState::new();
        state.push_message(ChatMessage::user("hi"));
        state.push_message(ChatMessage::bot("hello"));
        assert_eq!(state.transcript.len(), 3);

        state.reset_transcript();
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_transcript_trim_preserves_welcome() {
        let mut state = ClientState::new();
        state.logger = None;
        for i in 0..(MAX_TRANSCRIPT_MESSAGES + 10) {
            state.push_message(ChatMessage::user(format!("msg{}", i)));
        }
        assert!(state.transcript.len() <= MAX_TRANSCRIPT_MESSAGES + 1);
        assert_eq!(state.transcript[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_status_messages_expire() {
        let mut state = ClientState::new();
        state.push_status("Chat history cleared");
        assert_eq!(state.status_messages.len(), 1);
        // Not yet expired
        state.purge_old_status_messages(4);
        assert_eq!(state.status_messages.len(), 1);
        // Everything younger than 0 seconds is gone
        state.purge_old_status_messages(0);
        assert!(state.status_messages.is_empty());
    }

    #[test]
    fn test_status_kinds() {
        let mut state = ClientState::new();
        state.push_status("Server URL updated");
        state.push_error_status("Failed to clear history: boom");
        assert_eq!(state.status_messages[0].1, StatusKind::Info);
        assert_eq!(state.status_messages[1].1, StatusKind::Error);
    }
}
