// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Path of the account creation endpoint, relative to the application root
pub const REGISTRATION_ENDPOINT: &str = "/api/auth/register";

/// Prefix the backend's storage driver puts on uniqueness violations (a second account with the same email)
pub const DUPLICATE_KEY_MARKER: &str = "E11000";

/// Data from the client when trying to create an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationRequest {
	pub name: String,
	pub email: String,
	pub password: String,
}

/// Error body sent by the server along with a non-success status.
///
/// Both fields are read leniently: a field of an unexpected type never makes the whole body unreadable.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationErrorResponse {
	#[serde(
		default,
		deserialize_with = "deserialize_loose_message",
		skip_serializing_if = "Option::is_none"
	)]
	pub message: Option<String>,
	#[serde(
		default,
		deserialize_with = "deserialize_loose_code",
		skip_serializing_if = "Option::is_none"
	)]
	pub code: Option<RegistrationErrorCode>,
}

impl RegistrationErrorResponse {
	/// Whether the server rejected the registration because the email already belongs to an account.
	///
	/// Servers that send a structured code are trusted over the message. Older servers only forward the storage
	/// driver's error text, which is recognized by its prefix.
	pub fn is_duplicate_email(&self) -> bool {
		if matches!(self.code, Some(RegistrationErrorCode::DuplicateEmail)) {
			return true;
		}
		self.message
			.as_deref()
			.is_some_and(|message| message.starts_with(DUPLICATE_KEY_MARKER))
	}
}

/// Machine-readable registration failure reasons
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationErrorCode {
	DuplicateEmail,
	#[serde(other)]
	Unknown,
}

/// Message value as the server may actually send it. Scalars are shown as text; anything else counts as no message.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseMessage {
	Text(String),
	Signed(i64),
	Unsigned(u64),
	Float(f64),
	Flag(bool),
	Other(IgnoredAny),
}

fn deserialize_loose_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	let message = match LooseMessage::deserialize(deserializer)? {
		LooseMessage::Text(text) => Some(text),
		LooseMessage::Signed(number) => Some(number.to_string()),
		LooseMessage::Unsigned(number) => Some(number.to_string()),
		LooseMessage::Float(number) => Some(number.to_string()),
		LooseMessage::Flag(flag) => Some(flag.to_string()),
		LooseMessage::Other(_) => None,
	};
	Ok(message)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseCode {
	Known(RegistrationErrorCode),
	Other(IgnoredAny),
}

fn deserialize_loose_code<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<Option<RegistrationErrorCode>, D::Error> {
	match LooseCode::deserialize(deserializer)? {
		LooseCode::Known(code) => Ok(Some(code)),
		LooseCode::Other(_) => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_only_submitted_fields() {
		let request = RegistrationRequest {
			name: String::from("Bob"),
			email: String::from("bob@example.com"),
			password: String::from("hunter2"),
		};
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "name": "Bob", "email": "bob@example.com", "password": "hunter2" })
		);
	}

	#[test]
	fn error_body_with_only_a_message() {
		let body: RegistrationErrorResponse = serde_json::from_str(r#"{"message": "Server exploded"}"#).unwrap();
		assert_eq!(body.message.as_deref(), Some("Server exploded"));
		assert_eq!(body.code, None);
		assert!(!body.is_duplicate_email());
	}

	#[test]
	fn error_body_may_be_empty() {
		let body: RegistrationErrorResponse = serde_json::from_str("{}").unwrap();
		assert_eq!(body, RegistrationErrorResponse::default());
	}

	#[test]
	fn duplicate_key_marker_must_lead_the_message() {
		let duplicate = RegistrationErrorResponse {
			message: Some(String::from("E11000 duplicate key error collection: users")),
			code: None,
		};
		assert!(duplicate.is_duplicate_email());

		let embedded = RegistrationErrorResponse {
			message: Some(String::from("write failed: E11000")),
			code: None,
		};
		assert!(!embedded.is_duplicate_email());
	}

	#[test]
	fn structured_codes() {
		let body: RegistrationErrorResponse =
			serde_json::from_str(r#"{"message": "whatever", "code": "DUPLICATE_EMAIL"}"#).unwrap();
		assert_eq!(body.code, Some(RegistrationErrorCode::DuplicateEmail));
		assert!(body.is_duplicate_email());

		let body: RegistrationErrorResponse = serde_json::from_str(r#"{"code": "RATE_LIMITED"}"#).unwrap();
		assert_eq!(body.code, Some(RegistrationErrorCode::Unknown));
		assert!(!body.is_duplicate_email());
	}

	#[test]
	fn numeric_code_does_not_hide_the_message() {
		let body: RegistrationErrorResponse =
			serde_json::from_str(r#"{"message": "Server exploded", "code": 500}"#).unwrap();
		assert_eq!(body.message.as_deref(), Some("Server exploded"));
		assert_eq!(body.code, None);
	}

	#[test]
	fn scalar_messages_are_shown_as_text() {
		let body: RegistrationErrorResponse = serde_json::from_str(r#"{"message": 42}"#).unwrap();
		assert_eq!(body.message.as_deref(), Some("42"));

		let body: RegistrationErrorResponse = serde_json::from_str(r#"{"message": true}"#).unwrap();
		assert_eq!(body.message.as_deref(), Some("true"));
	}

	#[test]
	fn null_or_structured_message_counts_as_missing() {
		let body: RegistrationErrorResponse = serde_json::from_str(r#"{"message": null, "code": null}"#).unwrap();
		assert_eq!(body, RegistrationErrorResponse::default());

		let body: RegistrationErrorResponse =
			serde_json::from_str(r#"{"message": {"detail": "nope"}, "code": ["DUPLICATE_EMAIL"]}"#).unwrap();
		assert_eq!(body, RegistrationErrorResponse::default());
	}
}
