// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! "Refresh comments" control.
//!
//! One linear sequence: show the spinner, wait for the server to refetch
//! comments, print how long it took, hide the spinner. A failed step ends the
//! sequence where it stands, so the spinner stays up on error.

use serde::Deserialize;
use tracing::info;

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::ports::{HttpPort, RefreshPage};

/// Body of the comment refresh endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CommentsRefreshed {
    /// Seconds the server spent refetching.
    pub time_taken: f64,
}

/// Text shown for an elapsed time, as a browser prints the number.
///
/// Shortest round-trip digits without a trailing `.0`. Magnitudes from
/// `1e21` up and below `1e-6` use exponent form with a signed exponent
/// (`1e+21`, `1e-7`); negative zero prints as `0`.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds.is_nan() {
        return "NaN".to_owned();
    }
    if seconds.is_infinite() {
        return if seconds > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if seconds == 0.0 {
        return "0".to_owned();
    }
    let magnitude = seconds.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{seconds}");
    }
    let exp = format!("{seconds:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Flip the loading indicator. Returns the new visibility.
pub fn toggle_indicator<P: RefreshPage + ?Sized>(page: &P) -> Result<bool, UiError> {
    let visible = !page.indicator_visible()?;
    page.set_indicator_visible(visible)?;
    Ok(visible)
}

/// Run the refresh sequence and return the reported elapsed time.
#[allow(clippy::future_not_send)]
pub async fn refresh_comments<P, H>(
    page: &P,
    http: &H,
    config: &SiteConfig,
) -> Result<f64, UiError>
where
    P: RefreshPage + ?Sized,
    H: HttpPort,
{
    page.set_indicator_visible(true)?;
    let response = http.get(&config.update_comments_path).await?;
    let refreshed: CommentsRefreshed = serde_json::from_str(&response.body)?;
    page.show_elapsed(&format_elapsed(refreshed.time_taken))?;
    page.set_indicator_visible(false)?;
    info!(time_taken = refreshed.time_taken, "comments refreshed");
    Ok(refreshed.time_taken)
}
