// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen handlers for the story pages.
//!
//! The server-rendered templates call these from inline event attributes:
//!
//! ```html
//! <i id="like" class="bi bi-caret-up"
//!    onclick="toggle_like(this, '8863')"
//!    onmouseover="hover_like(this)" onmouseout="unhover_like(this)"></i>
//! <tr onclick="click_story('8863')">...</tr>
//! <button onclick="update_comments()">Refresh</button>
//! ```
//!
//! All rules live in `hn-ui-core`; this crate only binds its ports to the
//! DOM, `window.location` and `fetch`.
#![deny(missing_docs)]

mod dom;

use std::sync::OnceLock;

use hn_ui_core::{Reaction, SiteConfig, UiError};
use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::dom::{sibling, BrowserNavigator, BrowserPage, Classes, FetchClient};

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn config() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Override route prefixes or element ids.
///
/// Takes a plain object with any subset of the `SiteConfig` fields. Must run
/// before any other export; once the layout is in use it is fixed and later
/// calls are rejected.
#[wasm_bindgen]
pub fn configure(overrides: JsValue) -> Result<(), JsError> {
    let parsed: SiteConfig = serde_wasm_bindgen::from_value(overrides)
        .map_err(|e| UiError::Config(e.to_string()))?;
    CONFIG
        .set(parsed)
        .map_err(|_| UiError::Config("site layout already in use".into()))?;
    Ok(())
}

/// Open a story page in place of the current one.
#[wasm_bindgen]
pub fn click_story(story_id: &str) -> Result<(), JsError> {
    hn_ui_core::click_story(&BrowserNavigator, config(), story_id)?;
    Ok(())
}

fn toggle_reaction(reaction: Reaction, element: &Element, story_id: &str) -> Result<(), UiError> {
    let config = config();
    let opposite = sibling(element, reaction.opposite().button_id(config))?;
    let toggled = hn_ui_core::toggle(
        reaction,
        &mut Classes::of(element),
        &mut Classes::of(&opposite),
        story_id,
    );

    for request in toggled.requests {
        wasm_bindgen_futures::spawn_local(async move {
            let sent =
                hn_ui_core::send_reaction(&FetchClient, &BrowserNavigator, config, &request).await;
            if let Err(err) = sent {
                console::error_1(&JsValue::from_str(&format!(
                    "{} {} for story {} failed: {err}",
                    request.reaction,
                    request.action.as_str(),
                    request.story_id
                )));
            }
        });
    }
    Ok(())
}

/// Toggle the like on a story, clearing a dislike first.
#[wasm_bindgen]
pub fn toggle_like(element: &Element, story_id: &str) -> Result<(), JsError> {
    toggle_reaction(Reaction::Like, element, story_id)?;
    Ok(())
}

/// Toggle the dislike on a story, clearing a like first.
#[wasm_bindgen]
pub fn toggle_dislike(element: &Element, story_id: &str) -> Result<(), JsError> {
    toggle_reaction(Reaction::Dislike, element, story_id)?;
    Ok(())
}

/// Fill the like icon under the pointer.
#[wasm_bindgen]
pub fn hover_like(element: &Element) {
    hn_ui_core::hover(Reaction::Like, &mut Classes::of(element));
}

/// Restore the like icon unless the story is liked.
#[wasm_bindgen]
pub fn unhover_like(element: &Element) {
    hn_ui_core::unhover(Reaction::Like, &mut Classes::of(element));
}

/// Fill the dislike icon under the pointer.
#[wasm_bindgen]
pub fn hover_dislike(element: &Element) {
    hn_ui_core::hover(Reaction::Dislike, &mut Classes::of(element));
}

/// Restore the dislike icon unless the story is disliked.
#[wasm_bindgen]
pub fn unhover_dislike(element: &Element) {
    hn_ui_core::unhover(Reaction::Dislike, &mut Classes::of(element));
}

/// Show or hide the refresh spinner, whichever it is not.
#[wasm_bindgen]
pub fn toggle_refresh() -> Result<(), JsError> {
    let page = BrowserPage::new(config())?;
    hn_ui_core::toggle_indicator(&page)?;
    Ok(())
}

/// Print how long the last comment refresh took.
#[wasm_bindgen]
pub fn display_update_comments_time(time: f64) -> Result<(), JsError> {
    use hn_ui_core::RefreshPage;

    let page = BrowserPage::new(config())?;
    page.show_elapsed(&hn_ui_core::format_elapsed(time))?;
    Ok(())
}

/// Ask the server to refetch comments, with the spinner up meanwhile.
///
/// Rejects if the request or its JSON body fails; the spinner then stays up.
#[wasm_bindgen]
#[allow(clippy::future_not_send)]
pub async fn update_comments() -> Result<(), JsError> {
    let config = config();
    let page = BrowserPage::new(config)?;
    hn_ui_core::refresh_comments(&page, &FetchClient, config).await?;
    Ok(())
}
