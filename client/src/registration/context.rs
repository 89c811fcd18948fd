// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::RegistrationConfig;

/// Query parameter carrying the post-authentication redirect target
pub const CALLBACK_URL_PARAM: &str = "callbackUrl";

/// Navigation state the registration page was opened with.
///
/// The page reads this from its query string and hands it to the controller; nothing below the page reaches into
/// the browser location on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationContext {
	callback_url: String,
	sign_in_path: String,
}

impl RegistrationContext {
	/// Creates the context from the `callbackUrl` query value, if any. A missing or empty value falls back to the
	/// configured default.
	pub fn new(callback_url: Option<String>, config: &RegistrationConfig) -> Self {
		let callback_url = callback_url
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| config.default_callback_url.clone());
		Self {
			callback_url,
			sign_in_path: config.sign_in_path.clone(),
		}
	}

	pub fn callback_url(&self) -> &str {
		&self.callback_url
	}

	/// Sign-in link shown for users who already have an account
	pub fn sign_in_link(&self) -> String {
		format!("{}?{}={}", self.sign_in_path, CALLBACK_URL_PARAM, self.callback_url)
	}

	/// Where to go once the account exists. The sign-in view shows `message` and continues on to the callback URL.
	pub fn success_redirect(&self, message: &str) -> String {
		format!("{}&success={}", self.sign_in_link(), message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_callback_defaults_to_root() {
		let context = RegistrationContext::new(None, &RegistrationConfig::default());
		assert_eq!(context.callback_url(), "/");
		assert_eq!(context.sign_in_link(), "/signin?callbackUrl=/");
	}

	#[test]
	fn empty_callback_defaults_to_root() {
		let context = RegistrationContext::new(Some(String::new()), &RegistrationConfig::default());
		assert_eq!(context.callback_url(), "/");
	}

	#[test]
	fn callback_is_carried_into_both_urls() {
		let config = RegistrationConfig::default();
		let context = RegistrationContext::new(Some(String::from("/dashboard")), &config);
		assert_eq!(context.sign_in_link(), "/signin?callbackUrl=/dashboard");
		assert_eq!(
			context.success_redirect(&config.success_message),
			"/signin?callbackUrl=/dashboard&success=Account has been created"
		);
	}

	#[test]
	fn sign_in_path_comes_from_config() {
		let config = RegistrationConfig {
			sign_in_path: String::from("/auth/login"),
			..RegistrationConfig::default()
		};
		let context = RegistrationContext::new(Some(String::from("/next")), &config);
		assert_eq!(context.sign_in_link(), "/auth/login?callbackUrl=/next");
	}
}
