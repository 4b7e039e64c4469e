//! Telegram Bot API client.
//!
//! Thin HTTP wrapper over `getUpdates` long polling and `sendMessage`.
//! Pure parsing in `parse_updates`/`check_envelope` for testability.

use std::time::Duration;

use serde::Deserialize;

use crate::types::{BotError, Update};

#[cfg(test)]
#[path = "telegram_test.rs"]
mod tests;

const API_BASE: &str = "https://api.telegram.org";
/// Server-side hold on an empty `getUpdates` call.
const LONG_POLL_TIMEOUT_SECS: u64 = 30;
/// Client-side request timeout; must outlast the long poll.
const REQUEST_TIMEOUT_SECS: u64 = 40;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CLIENT
// =============================================================================

pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Result<Self, BotError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BotError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, token })
    }

    /// Long-poll for updates past `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        let body = GetUpdatesRequest { offset, timeout: LONG_POLL_TIMEOUT_SECS };
        let text = self.call("getUpdates", &body).await?;
        parse_updates(&text)
    }

    /// Send one plain-text reply into a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let body = SendMessageRequest { chat_id, text };
        let response = self.call("sendMessage", &body).await?;
        check_envelope(&response)
    }

    async fn call<T: serde::Serialize>(&self, method: &str, body: &T) -> Result<String, BotError> {
        let url = format!("{API_BASE}/bot{}/{method}", self.token);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| BotError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BotError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(BotError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

/// Offset to request next: one past the highest update seen, or the current
/// offset when the poll came back empty.
#[must_use]
pub fn next_offset(updates: &[Update], current: i64) -> i64 {
    updates
        .iter()
        .map(|u| u.update_id + 1)
        .max()
        .unwrap_or(current)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
}

#[derive(serde::Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Every Bot API response wraps its payload in this envelope.
#[derive(Deserialize)]
struct Envelope<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_updates(json: &str) -> Result<Vec<Update>, BotError> {
    let envelope: Envelope<Vec<Update>> =
        serde_json::from_str(json).map_err(|e| BotError::ApiParse(e.to_string()))?;

    if !envelope.ok {
        return Err(BotError::Rejected(
            envelope.description.unwrap_or_else(|| "no description".to_owned()),
        ));
    }
    Ok(envelope.result.unwrap_or_default())
}

fn check_envelope(json: &str) -> Result<(), BotError> {
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| BotError::ApiParse(e.to_string()))?;

    if !envelope.ok {
        return Err(BotError::Rejected(
            envelope.description.unwrap_or_else(|| "no description".to_owned()),
        ));
    }
    Ok(())
}
