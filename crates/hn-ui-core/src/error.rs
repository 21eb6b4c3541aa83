// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by every interaction.

use thiserror::Error;

/// Failures surfaced by the interaction layer.
///
/// The page itself has no error UI; these propagate to the caller (a rejected
/// promise on the JS side) or get logged by the adapter.
#[derive(Debug, Error)]
pub enum UiError {
    /// A response URL could not be parsed as an absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A response body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// A DOM element the handler relies on is not on the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// Configuration was rejected.
    #[error("config error: {0}")]
    Config(String),
}
