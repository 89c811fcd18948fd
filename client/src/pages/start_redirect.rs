// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

/// Path of the registration page, where the site root sends visitors
pub const REGISTER_PATH: &str = "/register";

#[component]
pub fn StartRedirectView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating start page redirect view");

	spawn_local_scoped(ctx, async move {
		// Keep the query string so a callback URL given to the root still reaches the form
		let search = web_sys::window()
			.and_then(|window| window.location().search().ok())
			.unwrap_or_default();
		log::debug!("Redirecting to register");
		navigate(&format!("{}{}", REGISTER_PATH, search));
	});

	view! { ctx, }
}
