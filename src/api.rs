//! Typed HTTP client for the assistant backend.
//!
//! Wraps the four chat/predictor endpoints plus the symptom catalog in a
//! small `reqwest`-based client. Every endpoint returns either its typed
//! success body or an [`ApiError`] carrying the backend's `error` text when
//! the response is non-2xx.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default backend address (the Flask development server).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, malformed body, etc.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status and an error message.
    #[error("{0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// A past chat message as stored by the backend. The backend also stores a
/// timestamp per entry, but replayed messages are stamped with local display
/// time, so it is not carried here.
#[derive(Deserialize, Clone, Debug)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
struct HistoryResponse {
    history: Vec<HistoryEntry>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    symptoms: &'a [String],
}

/// One disease prediction with its supporting detail.
#[derive(Deserialize, Clone, Debug)]
pub struct PredictionResult {
    pub disease: String,
    /// Percentage in 0..=100, rounded by the backend to two decimals.
    pub confidence: f64,
    /// "Mild", "Moderate", "Severe", or "Critical".
    pub severity_level: String,
    pub severity_score: f64,
    pub description: String,
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// Full response of a prediction request.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct PredictionReport {
    #[serde(default)]
    pub matched_symptoms: Vec<String>,
    #[serde(default)]
    pub predictions: Vec<PredictionResult>,
}

#[derive(Deserialize)]
struct SymptomsResponse {
    symptoms: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Client for the assistant backend API.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a different backend.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = normalize_base_url(base_url.into());
    }

    /// Send one chat message and wait for the assistant's reply text.
    pub async fn send_chat(&self, message: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let response = check_status(response, "Failed to get response").await?;
        let body = response.json::<ChatResponse>().await?;
        Ok(body.response)
    }

    /// Fetch the stored transcript for the current session.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        let url = format!("{}/api/history", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, "Failed to load history").await?;
        let body = response.json::<HistoryResponse>().await?;
        Ok(body.history)
    }

    /// Delete the stored transcript.
    pub async fn clear_history(&self) -> Result<()> {
        let url = format!("{}/api/clear", self.base_url);
        let response = self.http.post(&url).send().await?;
        check_status(response, "Failed to clear history").await?;
        Ok(())
    }

    /// Run the disease predictor over a list of symptom names.
    pub async fn predict(&self, symptoms: &[String]) -> Result<PredictionReport> {
        let url = format!("{}/api/predict-disease", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { symptoms })
            .send()
            .await?;

        let response = check_status(response, "Failed to predict disease").await?;
        let report = response.json::<PredictionReport>().await?;
        Ok(report)
    }

    /// Fetch the symptom names the prediction model knows about.
    pub async fn symptoms(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/symptoms", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, "Failed to load symptoms").await?;
        let body = response.json::<SymptomsResponse>().await?;
        Ok(body.symptoms)
    }
}

/// Turn a non-2xx response into `ApiError::Backend` using the `error` field
/// of the body when present, or `fallback` when the body is unusable.
async fn check_status(
    response: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse { error: Some(text) }) => text,
        _ => fallback.to_string(),
    };
    Err(ApiError::Backend(message))
}

/// Strip a trailing slash so endpoint paths join cleanly.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
