// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::form_field::FormField;
use crate::components::notifications::Notifications;
use crate::components::submit_button::SubmitButton;
use crate::config::RegistrationConfig;
use crate::dom::{query_param, PageNavigator};
use crate::http::{http_endpoint, FetchTransport};
use crate::page_utils::set_page_title;
use crate::registration::context::{RegistrationContext, CALLBACK_URL_PARAM};
use crate::registration::form::FormInputs;
use crate::registration::submission::{RegistrationController, SubmissionState};
use crate::registration::validation::{validate_form, Field, FieldErrors};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Register");

	let config: &RegistrationConfig = use_context(ctx);
	let notifications: &Notifications = use_context(ctx);

	let context = RegistrationContext::new(query_param(CALLBACK_URL_PARAM), config);
	let endpoint = http_endpoint(&config.endpoint_path).unwrap_or_else(|| {
		log::error!("Failed to resolve the registration endpoint against the page address");
		config.endpoint_path.clone()
	});
	let controller = create_ref(
		ctx,
		RegistrationController::new(
			FetchTransport::new(endpoint, config.request_timeout),
			PageNavigator,
			notifications.clone(),
			context,
			config.success_message.clone(),
		),
	);
	log::debug!("Registration will continue to {}", controller.context().callback_url());
	// Nothing should keep running for a page that's gone
	on_cleanup(ctx, move || controller.transport().abort_in_flight());

	let name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let confirm_password_signal = create_signal(ctx, String::new());

	let form_inputs = create_memo(ctx, || FormInputs {
		name: (*name_signal.get()).clone(),
		email: (*email_signal.get()).clone(),
		password: (*password_signal.get()).clone(),
		confirm_password: (*confirm_password_signal.get()).clone(),
	});

	// Errors stay hidden until the first submission attempt, then follow every change
	let submit_attempted_signal = create_signal(ctx, false);
	let field_errors = create_memo(ctx, || {
		if *submit_attempted_signal.get() {
			validate_form(&form_inputs.get())
		} else {
			FieldErrors::default()
		}
	});
	let name_error = create_memo(ctx, || field_errors.get().get(Field::Name));
	let email_error = create_memo(ctx, || field_errors.get().get(Field::Email));
	let password_error = create_memo(ctx, || field_errors.get().get(Field::Password));
	let confirm_password_error = create_memo(ctx, || field_errors.get().get(Field::ConfirmPassword));

	let submission_state = controller.state();
	let submitting_signal = create_memo(ctx, move || *submission_state.get() == SubmissionState::Submitting);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		submit_attempted_signal.set(true);
		if controller.is_submitting() {
			return;
		}

		let inputs = (*form_inputs.get()).clone();
		spawn_local_scoped(ctx, async move {
			controller.submit(&inputs).await;
		});
	};

	let sign_in_link = controller.context().sign_in_link();

	view! {
		ctx,
		div(id="register_page") {
			h1(id="register_heading") { "User Registration" }
			div(class="card") {
				div(class="card_body") {
					h2(class="card_title") { "Register" }
					form(id="register_user", on:submit=form_submission_handler) {
						FormField(id="name", label="Name", input_type="text", value=name_signal, error=name_error)
						FormField(id="email", label="Email", input_type="text", value=email_signal, error=email_error)
						FormField(id="password", label="Password", input_type="password", value=password_signal, error=password_error)
						FormField(
							id="confirmPassword",
							label="Confirm Password",
							input_type="password",
							value=confirm_password_signal,
							error=confirm_password_error
						)
						div(class="form_field") {
							SubmitButton(label="Register", submitting=submitting_signal)
						}
					}
					div(class="divider") {}
					div(id="register_sign_in") {
						"Already have an account? "
						a(class="link", href=sign_in_link, rel="external") { "Login" }
					}
				}
			}
		}
	}
}
