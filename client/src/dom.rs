// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::registration::submission::Navigator;
use web_sys::UrlSearchParams;

/// Reads a parameter from the current page's query string
pub fn query_param(name: &str) -> Option<String> {
	let search = web_sys::window()?.location().search().ok()?;
	let params = UrlSearchParams::new_with_str(&search).ok()?;
	params.get(name)
}

/// Navigates by loading a new document. Used for views this client doesn't render itself.
#[derive(Clone, Copy, Default)]
pub struct PageNavigator;

impl Navigator for PageNavigator {
	fn navigate(&self, url: &str) {
		let Some(window) = web_sys::window() else {
			log::error!("Failed to get browser window context to navigate to {}", url);
			return;
		};
		if let Err(error) = window.location().assign(url) {
			log::error!("Failed to navigate to {}: {:?}", url, error);
		}
	}
}
