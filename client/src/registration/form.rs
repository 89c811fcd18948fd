// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::user_register::RegistrationRequest;

/// Current contents of the registration form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormInputs {
	pub name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormInputs {
	/// Builds the request body. The confirmation stays on the client.
	pub fn to_request(&self) -> RegistrationRequest {
		RegistrationRequest {
			name: self.name.clone(),
			email: self.email.clone(),
			password: self.password.clone(),
		}
	}
}
