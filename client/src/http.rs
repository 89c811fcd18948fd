// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::TransportError;
use crate::registration::submission::{RegistrationTransport, TransportResponse};
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use signup_shared::messages::user_register::RegistrationRequest;
use std::cell::RefCell;
use std::time::Duration;
use web_sys::{AbortController, Url};

impl From<gloo_net::Error> for TransportError {
	fn from(error: gloo_net::Error) -> Self {
		match error {
			gloo_net::Error::JsError(js_error) => Self::from_js_error(&js_error.name, &js_error.message),
			error => Self::Network(error.to_string()),
		}
	}
}

/// Gets the URL of an HTTP endpoint in a way that adapts to any URL structure at which the application could be
/// hosted. Absolute paths are taken from the site root; relative paths are resolved against the current page.
///
/// Returns `None` when the browser context (window, location, URL) is inaccessible.
pub fn http_endpoint(path: &str) -> Option<String> {
	let js_location = web_sys::window()?.location();
	let web_endpoint = js_location.href().ok()?;
	let url = Url::new_with_base(path, &web_endpoint).ok()?;
	Some(url.href())
}

/// Sends registration requests with the browser's fetch API.
///
/// Each request gets its own abort controller so a torn-down page can cancel whatever is still in flight.
pub struct FetchTransport {
	endpoint: String,
	timeout: Option<Duration>,
	in_flight: RefCell<Option<AbortController>>,
}

impl FetchTransport {
	pub fn new(endpoint: String, timeout: Option<Duration>) -> Self {
		Self {
			endpoint,
			timeout,
			in_flight: RefCell::new(None),
		}
	}

	/// Cancels the outstanding request, if there is one
	pub fn abort_in_flight(&self) {
		if let Some(controller) = self.in_flight.borrow_mut().take() {
			log::debug!("Aborting in-flight registration request");
			controller.abort();
		}
	}

	async fn send(
		&self,
		request: &RegistrationRequest,
		controller: &AbortController,
	) -> Result<TransportResponse, TransportError> {
		let signal = controller.signal();
		let response = Request::post(&self.endpoint)
			.abort_signal(Some(&signal))
			.json(request)?
			.send()
			.await?;
		let status = response.status();
		let body = response.text().await?;
		Ok(TransportResponse { status, body })
	}
}

impl RegistrationTransport for FetchTransport {
	async fn post_registration(&self, request: &RegistrationRequest) -> Result<TransportResponse, TransportError> {
		let controller = AbortController::new().map_err(|error| {
			TransportError::Network(format!("Failed to set up request cancellation: {:?}", error))
		})?;
		*self.in_flight.borrow_mut() = Some(controller.clone());

		let result = match self.timeout {
			Some(timeout) => {
				let send = self.send(request, &controller);
				let expire = TimeoutFuture::new(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX));
				pin_mut!(send, expire);
				match select(send, expire).await {
					Either::Left((result, _)) => result,
					Either::Right(_) => {
						controller.abort();
						Err(TransportError::TimedOut)
					}
				}
			}
			None => self.send(request, &controller).await,
		};

		self.in_flight.borrow_mut().take();
		result
	}
}
