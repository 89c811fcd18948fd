// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod dom;
mod error;
mod http;
mod page_utils;
mod pages;
mod registration;
use app::App;
use components::notifications::Notifications;
use config::RegistrationConfig;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = RegistrationConfig::default();
	log::debug!("Starting client with registration endpoint {}", config.endpoint_path);

	sycamore::render(|ctx| {
		provide_context(ctx, Notifications::new(config.notification_lifetime));
		provide_context(ctx, config);

		view! { ctx, App {} }
	});
}
