// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::user_register::RegistrationErrorResponse;
use std::fmt;

/// Shown in place of the server's message when the email already has an account
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email is duplicate";

/// Shown when a failure carries no usable description
pub const FALLBACK_ERROR_MESSAGE: &str = "error";

/// Errors that can occur getting a response from the server at all
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransportError {
	Network(String),
	TimedOut,
	Aborted,
}

impl TransportError {
	/// Classifies an exception thrown by the browser. Only the exception's message is kept, so users see
	/// "Failed to fetch" rather than "TypeError: Failed to fetch".
	pub fn from_js_error(name: &str, message: &str) -> Self {
		if name == "AbortError" {
			Self::Aborted
		} else {
			Self::Network(String::from(message))
		}
	}
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::TimedOut => write!(f, "Request timed out"),
			Self::Aborted => write!(f, "Request was cancelled"),
		}
	}
}

/// Reasons a registration attempt did not create an account
#[derive(Debug)]
pub enum SubmitError {
	/// The server answered with a non-success status and an error body
	Rejected {
		status: u16,
		response: RegistrationErrorResponse,
	},
	/// The server answered with a non-success status and a body that isn't an error body
	MalformedResponse { status: u16, error: serde_json::Error },
	Transport(TransportError),
}

impl SubmitError {
	/// Text for the notification shown to the user
	pub fn notification_message(&self) -> String {
		let message = match self {
			Self::Rejected { response, .. } => {
				if response.is_duplicate_email() {
					return String::from(DUPLICATE_EMAIL_MESSAGE);
				}
				response.message.clone().unwrap_or_default()
			}
			Self::MalformedResponse { error, .. } => error.to_string(),
			Self::Transport(error) => error.to_string(),
		};
		if message.is_empty() {
			String::from(FALLBACK_ERROR_MESSAGE)
		} else {
			message
		}
	}
}

impl From<TransportError> for SubmitError {
	fn from(error: TransportError) -> Self {
		Self::Transport(error)
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rejected { status, response } => write!(
				f,
				"The server rejected the registration ({}): {}",
				status,
				response.message.as_deref().unwrap_or("no message")
			),
			Self::MalformedResponse { status, error } => {
				write!(f, "An invalid error response was received ({}): {}", status, error)
			}
			Self::Transport(error) => write!(f, "Failed to reach the server: {}", error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use signup_shared::messages::user_register::RegistrationErrorCode;

	fn rejected(message: Option<&str>) -> SubmitError {
		SubmitError::Rejected {
			status: 400,
			response: RegistrationErrorResponse {
				message: message.map(String::from),
				code: None,
			},
		}
	}

	#[test]
	fn duplicate_key_message_is_remapped() {
		assert_eq!(
			rejected(Some("E11000 duplicate key")).notification_message(),
			"Email is duplicate"
		);
	}

	#[test]
	fn other_messages_are_shown_as_is() {
		assert_eq!(rejected(Some("Server exploded")).notification_message(), "Server exploded");
	}

	#[test]
	fn missing_or_empty_message_falls_back() {
		assert_eq!(rejected(None).notification_message(), "error");
		assert_eq!(rejected(Some("")).notification_message(), "error");
	}

	#[test]
	fn duplicate_code_wins_over_message() {
		let error = SubmitError::Rejected {
			status: 409,
			response: RegistrationErrorResponse {
				message: Some(String::from("conflict")),
				code: Some(RegistrationErrorCode::DuplicateEmail),
			},
		};
		assert_eq!(error.notification_message(), "Email is duplicate");
	}

	#[test]
	fn transport_errors_describe_themselves() {
		let error = SubmitError::from(TransportError::Network(String::from("Failed to fetch")));
		assert_eq!(error.notification_message(), "Failed to fetch");
		assert_eq!(
			SubmitError::from(TransportError::TimedOut).notification_message(),
			"Request timed out"
		);
		assert_eq!(
			SubmitError::from(TransportError::Network(String::new())).notification_message(),
			"error"
		);
	}

	#[test]
	fn browser_exceptions_keep_only_their_message() {
		let error = TransportError::from_js_error("TypeError", "Failed to fetch");
		assert_eq!(error, TransportError::Network(String::from("Failed to fetch")));
		assert_eq!(SubmitError::from(error).notification_message(), "Failed to fetch");

		assert_eq!(
			TransportError::from_js_error("AbortError", "The user aborted a request."),
			TransportError::Aborted
		);
	}

	#[test]
	fn malformed_body_shows_the_parse_error() {
		let parse_error = serde_json::from_str::<RegistrationErrorResponse>("<html>").unwrap_err();
		let expected = parse_error.to_string();
		let error = SubmitError::MalformedResponse {
			status: 502,
			error: parse_error,
		};
		assert_eq!(error.notification_message(), expected);
	}
}
