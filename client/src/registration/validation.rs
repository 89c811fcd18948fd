// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form::FormInputs;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Not anchored: a match anywhere in the value is accepted.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+@[a-z]+\.[a-z]{2,3}").unwrap());

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
	Name,
	Email,
	Password,
	ConfirmPassword,
}

/// A single failed rule for a form field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
	NameRequired,
	EmailRequired,
	EmailInvalid,
	PasswordRequired,
	ConfirmPasswordRequired,
	PasswordMismatch,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NameRequired => write!(f, "Name is required"),
			Self::EmailRequired => write!(f, "Email is required"),
			Self::EmailInvalid => write!(f, "Email is invalid"),
			Self::PasswordRequired => write!(f, "Password is required"),
			Self::ConfirmPasswordRequired => write!(f, "Confirm Password is required"),
			Self::PasswordMismatch => write!(f, "Passwords should match!"),
		}
	}
}

/// Result of validating every field of the form. Each field reports at most one error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	pub name: Option<FieldError>,
	pub email: Option<FieldError>,
	pub password: Option<FieldError>,
	pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
	pub fn get(&self, field: Field) -> Option<FieldError> {
		match field {
			Field::Name => self.name,
			Field::Email => self.email,
			Field::Password => self.password,
			Field::ConfirmPassword => self.confirm_password,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.iter().next().is_none()
	}

	/// Iterates over the errors present, in form order
	pub fn iter(&self) -> impl Iterator<Item = FieldError> {
		[self.name, self.email, self.password, self.confirm_password]
			.into_iter()
			.flatten()
	}
}

pub fn validate_field(field: Field, inputs: &FormInputs) -> Option<FieldError> {
	match field {
		Field::Name => inputs.name.is_empty().then_some(FieldError::NameRequired),
		Field::Email => {
			if inputs.email.is_empty() {
				Some(FieldError::EmailRequired)
			} else if !EMAIL_PATTERN.is_match(&inputs.email) {
				Some(FieldError::EmailInvalid)
			} else {
				None
			}
		}
		Field::Password => inputs.password.is_empty().then_some(FieldError::PasswordRequired),
		Field::ConfirmPassword => {
			if inputs.confirm_password.is_empty() {
				Some(FieldError::ConfirmPasswordRequired)
			} else if inputs.confirm_password != inputs.password {
				Some(FieldError::PasswordMismatch)
			} else {
				None
			}
		}
	}
}

/// Runs every field rule. The confirmation is always compared against the current password, so changing either
/// field is enough to clear or raise a mismatch.
pub fn validate_form(inputs: &FormInputs) -> FieldErrors {
	FieldErrors {
		name: validate_field(Field::Name, inputs),
		email: validate_field(Field::Email, inputs),
		password: validate_field(Field::Password, inputs),
		confirm_password: validate_field(Field::ConfirmPassword, inputs),
	}
}
