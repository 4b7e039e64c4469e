//! Telegram wire types and bot errors.
//!
//! Only the fields the dispatcher consumes are modeled; everything else in
//! an update is ignored during deserialization.

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Telegram API operations.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The HTTP request to the Bot API failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The Bot API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The Bot API answered 200 but flagged the call as failed.
    #[error("API rejected call: {0}")]
    Rejected(String),

    /// The Bot API response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One entry from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    /// Absent for non-message updates (edits, channel posts, ...).
    #[serde(default)]
    pub message: Option<Incoming>,
}

/// An inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Incoming {
    pub chat: Chat,
    /// Absent for media-only messages.
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Chat {
    pub id: i64,
}
