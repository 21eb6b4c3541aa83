// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Story row click-through.

use tracing::debug;

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::ports::Navigator;

/// Replace the current page with the story's page.
pub fn click_story<N: Navigator + ?Sized>(
    navigator: &N,
    config: &SiteConfig,
    story_id: &str,
) -> Result<(), UiError> {
    let url = config.story_url(story_id);
    debug!(%url, "opening story");
    navigator.replace(&url)
}
