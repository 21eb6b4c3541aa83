// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Route prefixes and DOM ids used by the handlers.

use serde::{Deserialize, Serialize};

/// Site layout the handlers are bound to.
///
/// Defaults match the markup the server renders. Every field is optional when
/// deserializing, so a page only has to name what it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix of story pages and story reaction routes.
    pub story_prefix: String,
    /// Endpoint that refetches comments and reports the elapsed time.
    pub update_comments_path: String,
    /// Id of the like button (looked up under the dislike button's parent).
    pub like_button_id: String,
    /// Id of the dislike button (looked up under the like button's parent).
    pub dislike_button_id: String,
    /// Id of the loading indicator shown during a refresh.
    pub refresh_icon_id: String,
    /// Id of the element receiving the elapsed time text.
    pub update_time_id: String,
    /// Id of the block wrapping the elapsed time, hidden until first refresh.
    pub update_time_block_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            story_prefix: "/story".to_owned(),
            update_comments_path: "/update/comments".to_owned(),
            like_button_id: "like".to_owned(),
            dislike_button_id: "dislike".to_owned(),
            refresh_icon_id: "refresh_icon".to_owned(),
            update_time_id: "update_comments_time".to_owned(),
            update_time_block_id: "update_comments_time_block".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Page URL of a story.
    pub fn story_url(&self, story_id: &str) -> String {
        format!("{}/{story_id}", self.story_prefix.trim_end_matches('/'))
    }
}
