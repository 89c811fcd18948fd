// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::context::RegistrationContext;
use super::form::FormInputs;
use super::validation::{validate_form, FieldErrors};
use crate::error::{SubmitError, TransportError};
use signup_shared::messages::user_register::{RegistrationErrorResponse, RegistrationRequest};
use sycamore::reactive::{create_rc_signal, RcSignal};

/// Status and body of whatever the server answered
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends registration requests to the server
#[allow(async_fn_in_trait)]
pub trait RegistrationTransport {
	async fn post_registration(&self, request: &RegistrationRequest) -> Result<TransportResponse, TransportError>;
}

/// Moves the user to another page
pub trait Navigator {
	fn navigate(&self, url: &str);
}

/// Tells the user about failures that don't belong to a single field
pub trait Notifier {
	fn notify_error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionState {
	Idle,
	Submitting,
	/// The account exists and the page is being left; nothing more is sent from here
	NavigatingAway,
}

/// What a call to [`RegistrationController::submit`] ended up doing
#[derive(Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The form failed validation and nothing was sent
	Invalid(FieldErrors),
	/// Another submission is in flight or already succeeded, so this one was dropped
	Busy,
	Registered { redirect: String },
	Failed { notification: String },
}

pub struct RegistrationController<T, N, M> {
	transport: T,
	navigator: N,
	notifier: M,
	context: RegistrationContext,
	success_message: String,
	state: RcSignal<SubmissionState>,
}

impl<T, N, M> RegistrationController<T, N, M>
where
	T: RegistrationTransport,
	N: Navigator,
	M: Notifier,
{
	pub fn new(
		transport: T,
		navigator: N,
		notifier: M,
		context: RegistrationContext,
		success_message: impl Into<String>,
	) -> Self {
		Self {
			transport,
			navigator,
			notifier,
			context,
			success_message: success_message.into(),
			state: create_rc_signal(SubmissionState::Idle),
		}
	}

	pub fn context(&self) -> &RegistrationContext {
		&self.context
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Reactive submission state, for disabling the submit button while a request is out
	pub fn state(&self) -> RcSignal<SubmissionState> {
		self.state.clone()
	}

	pub fn is_submitting(&self) -> bool {
		*self.state.get() == SubmissionState::Submitting
	}

	/// Validates the form and, if it's valid, tries to create the account.
	///
	/// On success the user is sent to the sign-in view and the controller stays in
	/// [`SubmissionState::NavigatingAway`]. On failure a single notification is raised and the form can be
	/// submitted again.
	pub async fn submit(&self, inputs: &FormInputs) -> SubmitOutcome {
		let errors = validate_form(inputs);
		if !errors.is_empty() {
			return SubmitOutcome::Invalid(errors);
		}

		if *self.state.get() != SubmissionState::Idle {
			log::debug!("Ignoring registration submission while another is in progress");
			return SubmitOutcome::Busy;
		}
		self.state.set(SubmissionState::Submitting);

		let request = inputs.to_request();
		let result = self.transport.post_registration(&request).await;

		match check_response(result) {
			Ok(()) => {
				let redirect = self.context.success_redirect(&self.success_message);
				log::debug!("Account created; redirecting to {}", redirect);
				self.state.set(SubmissionState::NavigatingAway);
				self.navigator.navigate(&redirect);
				SubmitOutcome::Registered { redirect }
			}
			Err(error) => {
				log::warn!("Registration failed: {}", error);
				let notification = error.notification_message();
				self.notifier.notify_error(&notification);
				self.state.set(SubmissionState::Idle);
				SubmitOutcome::Failed { notification }
			}
		}
	}
}

fn check_response(result: Result<TransportResponse, TransportError>) -> Result<(), SubmitError> {
	let response = result?;
	if response.is_success() {
		return Ok(());
	}
	match serde_json::from_str::<RegistrationErrorResponse>(&response.body) {
		Ok(body) => Err(SubmitError::Rejected {
			status: response.status,
			response: body,
		}),
		Err(error) => Err(SubmitError::MalformedResponse {
			status: response.status,
			error,
		}),
	}
}
