// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Like/dislike buttons.
//!
//! A button is "active" when it carries its reaction's marker class. The icon
//! follows: outline while inactive, filled while active (or hovered).
//! [`toggle`] only touches classes and reports the server calls it implies;
//! [`send_reaction`] performs one of those calls.

use std::fmt;

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::login::login_redirect;
use crate::ports::{ClassList, HttpPort, Navigator};

/// One of the two mutually exclusive reactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// Upvote.
    Like,
    /// Downvote.
    Dislike,
}

impl Reaction {
    /// The reaction that gets cleared when this one is activated.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Marker class present while the reaction is active.
    pub const fn active_class(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Dislike => "disliked",
        }
    }

    /// Icon class shown while inactive.
    pub const fn outline_icon(self) -> &'static str {
        match self {
            Self::Like => "bi-caret-up",
            Self::Dislike => "bi-caret-down",
        }
    }

    /// Icon class shown while active or hovered.
    pub const fn filled_icon(self) -> &'static str {
        match self {
            Self::Like => "bi-caret-up-fill",
            Self::Dislike => "bi-caret-down-fill",
        }
    }

    /// Route segment (`/story/{id}/{segment}/...`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Element id of this reaction's button.
    pub fn button_id(self, config: &SiteConfig) -> &str {
        match self {
            Self::Like => &config.like_button_id,
            Self::Dislike => &config.dislike_button_id,
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Whether a request records or withdraws a reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReactionAction {
    /// Record the reaction.
    Add,
    /// Withdraw the reaction.
    Remove,
}

impl ReactionAction {
    /// Route segment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// One server call implied by a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionRequest {
    /// Story the reaction applies to.
    pub story_id: String,
    /// Which reaction.
    pub reaction: Reaction,
    /// Add or remove.
    pub action: ReactionAction,
}

impl ReactionRequest {
    /// Request path, e.g. `/story/42/like/add`.
    pub fn path(&self, config: &SiteConfig) -> String {
        format!(
            "{}/{}/{}",
            config.story_url(&self.story_id),
            self.reaction.path_segment(),
            self.action.as_str()
        )
    }
}

/// Result of [`toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggled {
    /// Whether the toggled reaction is active afterwards.
    pub active: bool,
    /// Server calls to issue, in order.
    pub requests: Vec<ReactionRequest>,
}

fn set_active<C: ClassList + ?Sized>(reaction: Reaction, element: &mut C, active: bool) {
    if active {
        element.add(reaction.active_class());
        element.remove(reaction.outline_icon());
        element.add(reaction.filled_icon());
    } else {
        element.remove(reaction.active_class());
        element.remove(reaction.filled_icon());
        element.add(reaction.outline_icon());
    }
}

/// Flip `reaction` on `element`, clearing the opposite button first.
///
/// `opposite` is the sibling button of the other reaction. If it is active it
/// is deactivated and a `remove` request for it leads the returned list.
pub fn toggle<A, B>(
    reaction: Reaction,
    element: &mut A,
    opposite: &mut B,
    story_id: &str,
) -> Toggled
where
    A: ClassList + ?Sized,
    B: ClassList + ?Sized,
{
    let mut requests = Vec::with_capacity(2);

    let other = reaction.opposite();
    if opposite.contains(other.active_class()) {
        set_active(other, opposite, false);
        requests.push(ReactionRequest {
            story_id: story_id.to_owned(),
            reaction: other,
            action: ReactionAction::Remove,
        });
    }

    let active = !element.contains(reaction.active_class());
    set_active(reaction, element, active);
    requests.push(ReactionRequest {
        story_id: story_id.to_owned(),
        reaction,
        action: if active {
            ReactionAction::Add
        } else {
            ReactionAction::Remove
        },
    });

    debug!(story_id, %reaction, active, requests = requests.len(), "reaction toggled");
    Toggled { active, requests }
}

/// Preview the filled icon under the pointer.
pub fn hover<C: ClassList + ?Sized>(reaction: Reaction, element: &mut C) {
    element.remove(reaction.outline_icon());
    element.add(reaction.filled_icon());
}

/// Undo [`hover`] unless the reaction is active.
pub fn unhover<C: ClassList + ?Sized>(reaction: Reaction, element: &mut C) {
    if !element.contains(reaction.active_class()) {
        element.remove(reaction.filled_icon());
        element.add(reaction.outline_icon());
    }
}

/// Issue one reaction request and follow the login wall if the server put
/// one up.
///
/// Returns `true` when the page was sent to the login URL.
#[allow(clippy::future_not_send)]
pub async fn send_reaction<H, N>(
    http: &H,
    navigator: &N,
    config: &SiteConfig,
    request: &ReactionRequest,
) -> Result<bool, UiError>
where
    H: HttpPort,
    N: Navigator + ?Sized,
{
    let path = request.path(config);
    debug!(%path, "sending reaction");
    let final_url = http.final_url(&path).await?;
    match login_redirect(&final_url)? {
        Some(target) => {
            info!(%target, "login required, redirecting");
            navigator.replace(target)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
