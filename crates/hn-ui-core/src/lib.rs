// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interaction logic for the story pages of the news reader.
//!
//! The page renders like/dislike buttons, clickable story rows and a
//! "refresh comments" control. This crate owns the rules behind them and
//! reaches the page only through the traits in [`ports`], so every rule runs
//! natively under `cargo test`. `hn-ui-wasm` implements the ports over
//! `web-sys` and exports the handlers the HTML calls.
//!
//! State model:
//!
//! - Reaction state is the presence of the `liked` / `disliked` classes on the
//!   two buttons; nothing else is stored.
//! - The two reactions are mutually exclusive: activating one clears the other
//!   (and tells the server so) first.
//! - When the server answers through its login wall, the final response URL
//!   carries `login_required` and the page navigates there.

pub mod config;
pub mod error;
pub mod login;
pub mod navigation;
pub mod ports;
pub mod reaction;
pub mod refresh;

pub use config::SiteConfig;
pub use error::UiError;
pub use login::{login_redirect, LOGIN_REQUIRED_PARAM};
pub use navigation::click_story;
pub use ports::{ClassList, HttpPort, HttpResponse, Navigator, RefreshPage};
pub use reaction::{
    hover, send_reaction, toggle, unhover, Reaction, ReactionAction, ReactionRequest, Toggled,
};
pub use refresh::{format_elapsed, refresh_comments, toggle_indicator, CommentsRefreshed};
