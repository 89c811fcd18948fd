// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::user_register::REGISTRATION_ENDPOINT;
use std::time::Duration;

/// Settings for the registration flow. Provided to pages through context.
#[derive(Clone, Debug)]
pub struct RegistrationConfig {
	/// Account creation endpoint. An absolute path (the default) is taken from the site root; a relative path is
	/// resolved against the current page.
	pub endpoint_path: String,
	/// Sign-in view to send users to once they have an account
	pub sign_in_path: String,
	/// Where the sign-in view should send the user when no callback URL was provided
	pub default_callback_url: String,
	/// Message handed to the sign-in view after a successful registration
	pub success_message: String,
	/// How long an error notification stays on screen
	pub notification_lifetime: Duration,
	/// Abort the registration request after this long. `None` waits for the browser to settle the request.
	pub request_timeout: Option<Duration>,
}

impl Default for RegistrationConfig {
	fn default() -> Self {
		Self {
			endpoint_path: String::from(REGISTRATION_ENDPOINT),
			sign_in_path: String::from("/signin"),
			default_callback_url: String::from("/"),
			success_message: String::from("Account has been created"),
			notification_lifetime: Duration::from_secs(4),
			request_timeout: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_endpoint_is_rooted_at_the_site() {
		let config = RegistrationConfig::default();
		assert_eq!(config.endpoint_path, "/api/auth/register");
		assert!(config.endpoint_path.starts_with('/'));
		assert_eq!(config.request_timeout, None);
	}
}
