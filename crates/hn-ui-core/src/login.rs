// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Login wall detection.
//!
//! Protected routes answer anonymous users with a redirect to the login page
//! whose URL carries `login_required`. The browser follows that redirect, so
//! the signal shows up on the final response URL.

use url::Url;

use crate::error::UiError;

/// Query parameter set by the server's login wall.
pub const LOGIN_REQUIRED_PARAM: &str = "login_required";

/// Returns `final_url` when it asks for a login.
///
/// The parameter counts as set when it has a non-empty value; a bare
/// `?login_required` or `?login_required=` does not redirect.
pub fn login_redirect(final_url: &str) -> Result<Option<&str>, UiError> {
    let url = Url::parse(final_url)?;
    let required = url
        .query_pairs()
        .find(|(key, _)| key == LOGIN_REQUIRED_PARAM)
        .is_some_and(|(_, value)| !value.is_empty());
    Ok(required.then_some(final_url))
}
