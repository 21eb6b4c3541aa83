// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port traits between the interaction rules and the page.
//!
//! Adapters are expected to be thin: each method forwards to one DOM or
//! browser call. Tests implement them over plain collections.

use crate::error::UiError;

/// Class list of one element (`Element.classList`).
pub trait ClassList {
    /// Whether the class is present.
    fn contains(&self, class: &str) -> bool;
    /// Add a class. Adding a present class is a no-op.
    fn add(&mut self, class: &str);
    /// Remove a class. Removing an absent class is a no-op.
    fn remove(&mut self, class: &str);
}

/// Full-page navigation (`window.location.replace`).
pub trait Navigator {
    /// Replace the current location with `url`, without a history entry.
    fn replace(&self, url: &str) -> Result<(), UiError>;
}

/// Completed response of a `GET`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final URL after redirects were followed.
    pub url: String,
    /// Body text.
    pub body: String,
}

/// Single-shot `GET` transport (`fetch`).
///
/// No retry, no timeout. Redirects are followed by the transport and the
/// final URL is reported in [`HttpResponse::url`].
#[allow(async_fn_in_trait)]
pub trait HttpPort {
    /// Fetch `path` relative to the page origin and read its body.
    async fn get(&self, path: &str) -> Result<HttpResponse, UiError>;

    /// Fetch `path` and report only the final URL, leaving the body unread.
    ///
    /// A failure while streaming the body must not surface here.
    async fn final_url(&self, path: &str) -> Result<String, UiError>;
}

/// Elements touched by the comment refresh.
pub trait RefreshPage {
    /// Whether the loading indicator is currently shown.
    fn indicator_visible(&self) -> Result<bool, UiError>;
    /// Show or hide the loading indicator.
    fn set_indicator_visible(&self, visible: bool) -> Result<(), UiError>;
    /// Write the elapsed time text and reveal its enclosing block.
    fn show_elapsed(&self, text: &str) -> Result<(), UiError>;
}
